// Color scheme defaults and the table of recognised scheme names

use crate::data::FieldType;

/// Default scheme for nominal color fields
pub const CATEGORY_SCHEME: &str = "tableau10";
/// Default scheme for ordinal color fields
pub const ORDINAL_SCHEME: &str = "blues";
/// Default scheme for quantitative and temporal color fields
pub const RAMP_SCHEME: &str = "goldgreen";

/// Vega color schemes grouped by family
pub const SCHEMES: &[(&str, &[&str])] = &[
    (
        "categorical",
        &[
            "accent", "category10", "category20", "category20b", "category20c", "dark2", "paired",
            "pastel1", "pastel2", "set1", "set2", "set3", "tableau10", "tableau20",
        ],
    ),
    (
        "sequential-single-hue",
        &[
            "blues", "tealblues", "teals", "greens", "browns", "oranges", "reds", "purples",
            "warmgreys", "greys",
        ],
    ),
    (
        "sequential-multi-hue",
        &[
            "viridis", "magma", "inferno", "plasma", "cividis", "turbo", "bluegreen", "bluepurple",
            "goldgreen", "goldorange", "goldred", "greenblue", "orangered", "purplebluegreen",
            "purpleblue", "purplered", "redpurple", "yellowgreenblue", "yellowgreen",
            "yelloworangebrown", "yelloworangered", "darkblue", "darkgold", "darkgreen",
            "darkmulti", "darkred", "lightgreyred", "lightgreyteal", "lightmulti", "lightorange",
            "lighttealblue",
        ],
    ),
    (
        "diverging",
        &[
            "blueorange", "brownbluegreen", "purplegreen", "pinkyellowgreen", "purpleorange",
            "redblue", "redgrey", "redyellowblue", "redyellowgreen", "spectral",
        ],
    ),
    ("cyclical", &["rainbow", "sinebow"]),
];

/// Default scheme for a color channel of the given type
pub fn default_scheme(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Nominal => CATEGORY_SCHEME,
        FieldType::Ordinal => ORDINAL_SCHEME,
        FieldType::Quantitative | FieldType::Temporal => RAMP_SCHEME,
    }
}

/// Whether `name` is a known scheme, allowing a `-N` step-count suffix
/// such as `brownbluegreen-10`.
pub fn is_known_scheme(name: &str) -> bool {
    let base = match name.rsplit_once('-') {
        Some((base, steps)) if !steps.is_empty() && steps.chars().all(|c| c.is_ascii_digit()) => base,
        _ => name,
    };
    let base = base.to_ascii_lowercase();
    SCHEMES
        .iter()
        .any(|(_, names)| names.contains(&base.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_by_type() {
        assert_eq!(default_scheme(FieldType::Nominal), CATEGORY_SCHEME);
        assert_eq!(default_scheme(FieldType::Ordinal), ORDINAL_SCHEME);
        assert_eq!(default_scheme(FieldType::Quantitative), RAMP_SCHEME);
        assert_eq!(default_scheme(FieldType::Temporal), RAMP_SCHEME);
    }

    #[test]
    fn test_known_schemes() {
        assert!(is_known_scheme("tableau20"));
        assert!(is_known_scheme("brownbluegreen-10"));
        assert!(!is_known_scheme("brownbluegreen-"));
        assert!(!is_known_scheme("not-a-scheme"));
        assert!(!is_known_scheme("fuchsia"));
    }
}
