// Raw chart options and configuration

use crate::error::Result;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_FACET_COLUMNS: u32 = 3;
pub const DEFAULT_FACET_SPACING: u32 = 20;
pub const DEFAULT_LEGEND_ORIENTATION: &str = "right";

/// Options as collected from the command line, one set per chart.
///
/// Channel options hold shorthand strings; `colorvar` is bound to the
/// chart type's color channel (fill or stroke).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub xvar: Option<String>,
    pub yvar: Option<String>,
    pub colorvar: Option<String>,
    pub sizevar: Option<String>,
    pub facetvar: Option<String>,
    pub facet_columns: Option<u32>,
    pub facet_sort: Option<String>,
    pub color_list: Option<String>,
    pub color_scheme: Option<String>,
    pub no_legend: bool,
    pub xlim: Option<String>,
    pub ylim: Option<String>,
    pub title: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub is_interactive: bool,

    // chart-type specific
    pub is_horizontal: bool,
    pub sortx_var: Option<String>,
    pub normalized: bool,
    pub color_sort: Option<String>,
    pub bincount: Option<u32>,
    pub binstepsize: Option<f64>,
}

/// Options that only some chart types understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOption {
    Horizontal,
    SortX,
    Normalized,
    ColorSort,
    BinCount,
    BinStepSize,
}

impl fmt::Display for ChartOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartOption::Horizontal => "is_horizontal",
            ChartOption::SortX => "sortx_var",
            ChartOption::Normalized => "normalized",
            ChartOption::ColorSort => "color_sort",
            ChartOption::BinCount => "bincount",
            ChartOption::BinStepSize => "binstepsize",
        };
        f.write_str(name)
    }
}

impl ChartOptions {
    /// Chart-specific options that carry a value
    pub fn specific_options(&self) -> Vec<ChartOption> {
        let mut set = Vec::new();
        if self.is_horizontal {
            set.push(ChartOption::Horizontal);
        }
        if self.sortx_var.is_some() {
            set.push(ChartOption::SortX);
        }
        if self.normalized {
            set.push(ChartOption::Normalized);
        }
        if self.color_sort.is_some() {
            set.push(ChartOption::ColorSort);
        }
        if self.bincount.is_some() {
            set.push(ChartOption::BinCount);
        }
        if self.binstepsize.is_some() {
            set.push(ChartOption::BinStepSize);
        }
        set
    }

    /// Clear a chart-specific option
    pub fn clear(&mut self, option: ChartOption) {
        match option {
            ChartOption::Horizontal => self.is_horizontal = false,
            ChartOption::SortX => self.sortx_var = None,
            ChartOption::Normalized => self.normalized = false,
            ChartOption::ColorSort => self.color_sort = None,
            ChartOption::BinCount => self.bincount = None,
            ChartOption::BinStepSize => self.binstepsize = None,
        }
    }

    /// The color shorthand, unless it is missing or empty
    pub fn colorvar(&self) -> Option<&str> {
        self.colorvar.as_deref().filter(|c| !c.is_empty())
    }

    pub fn has_colorvar(&self) -> bool {
        self.colorvar().is_some()
    }

    /// Trimmed, non-empty entries of `color_list`
    pub fn color_list_items(&self) -> Vec<String> {
        self.color_list
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_bin_options(&self) -> bool {
        self.bincount.is_some() || self.binstepsize.is_some()
    }
}

/// Default chart sizes for one chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefaults {
    pub chart_width: u32,
    pub chart_height: u32,
    pub faceted_width: u32,
    pub faceted_height: u32,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            chart_width: 600,
            chart_height: 400,
            faceted_width: 250,
            faceted_height: 150,
        }
    }
}

/// User configuration, loaded from a JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart_width: Option<u32>,
    #[serde(default)]
    pub chart_height: Option<u32>,
    #[serde(default)]
    pub faceted_width: Option<u32>,
    #[serde(default)]
    pub faceted_height: Option<u32>,
    #[serde(default = "default_facet_columns")]
    pub facet_columns: u32,
    #[serde(default = "default_facet_spacing")]
    pub facet_spacing: u32,
    #[serde(default = "default_legend_orient")]
    pub legend_orient: String,
}

fn default_facet_columns() -> u32 { DEFAULT_FACET_COLUMNS }
fn default_facet_spacing() -> u32 { DEFAULT_FACET_SPACING }
fn default_legend_orient() -> String { DEFAULT_LEGEND_ORIENTATION.to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_width: None,
            chart_height: None,
            faceted_width: None,
            faceted_height: None,
            facet_columns: DEFAULT_FACET_COLUMNS,
            facet_spacing: DEFAULT_FACET_SPACING,
            legend_orient: DEFAULT_LEGEND_ORIENTATION.to_string(),
        }
    }
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Apply the configured size overrides on top of a chart type's defaults
    pub fn style_defaults(&self, base: StyleDefaults) -> StyleDefaults {
        StyleDefaults {
            chart_width: self.chart_width.unwrap_or(base.chart_width),
            chart_height: self.chart_height.unwrap_or(base.chart_height),
            faceted_width: self.faceted_width.unwrap_or(base.faceted_width),
            faceted_height: self.faceted_height.unwrap_or(base.faceted_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_list_items() {
        let opts = ChartOptions {
            color_list: Some(" red, #555 ,,".to_string()),
            ..Default::default()
        };
        assert_eq!(opts.color_list_items(), vec!["red", "#555"]);
        assert!(ChartOptions::default().color_list_items().is_empty());
    }

    #[test]
    fn test_empty_colorvar_is_absent() {
        let opts = ChartOptions {
            colorvar: Some(String::new()),
            ..Default::default()
        };
        assert!(!opts.has_colorvar());
        assert_eq!(opts.colorvar(), None);

        let opts = ChartOptions {
            colorvar: Some("kind:O".to_string()),
            ..Default::default()
        };
        assert_eq!(opts.colorvar(), Some("kind:O"));
    }

    #[test]
    fn test_specific_options() {
        let mut opts = ChartOptions {
            normalized: true,
            bincount: Some(5),
            ..Default::default()
        };
        assert_eq!(
            opts.specific_options(),
            vec![ChartOption::Normalized, ChartOption::BinCount]
        );
        opts.clear(ChartOption::BinCount);
        assert_eq!(opts.specific_options(), vec![ChartOption::Normalized]);
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.facet_columns, DEFAULT_FACET_COLUMNS);
        assert_eq!(config.legend_orient, "right");
        assert_eq!(config.style_defaults(StyleDefaults::default()), StyleDefaults::default());
    }

    #[test]
    fn test_config_overrides() {
        let config: Config =
            serde_json::from_str(r#"{"chart_width": 800, "legend_orient": "bottom"}"#).unwrap();
        let defaults = config.style_defaults(StyleDefaults::default());
        assert_eq!(defaults.chart_width, 800);
        assert_eq!(defaults.chart_height, 400);
        assert_eq!(config.legend_orient, "bottom");
    }

    #[test]
    fn test_options_deserialize() {
        let opts: ChartOptions =
            serde_json::from_str(r#"{"xvar": "name", "no_legend": true}"#).unwrap();
        assert_eq!(opts.xvar.as_deref(), Some("name"));
        assert!(opts.no_legend);
    }
}
