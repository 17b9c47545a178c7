// Reference listings for `vizkit info`

use crate::data::FieldType;
use crate::parser::shorthand::{AGGREGATES, TIME_UNITS};
use crate::scheme::SCHEMES;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InfoTopic {
    Aggregates,
    Colorschemes,
    Timeunits,
    Typecodes,
}

pub fn render(topic: InfoTopic) -> String {
    match topic {
        InfoTopic::Aggregates => lines(AGGREGATES),
        InfoTopic::Timeunits => lines(TIME_UNITS),
        InfoTopic::Colorschemes => SCHEMES
            .iter()
            .map(|(family, names)| {
                let entries: String = names.iter().map(|name| format!("  {}\n", name)).collect();
                format!("{}:\n{}", family, entries)
            })
            .collect(),
        InfoTopic::Typecodes => [
            FieldType::Nominal,
            FieldType::Ordinal,
            FieldType::Quantitative,
            FieldType::Temporal,
        ]
        .iter()
        .map(|t| format!("{}  {}\n", t.code(), t))
        .collect(),
    }
}

fn lines(items: &[&str]) -> String {
    items.iter().map(|s| format!("{}\n", s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typecodes() {
        assert_eq!(
            render(InfoTopic::Typecodes),
            "N  nominal\nO  ordinal\nQ  quantitative\nT  temporal\n"
        );
    }

    #[test]
    fn test_colorschemes_grouped() {
        let text = render(InfoTopic::Colorschemes);
        assert!(text.starts_with("categorical:\n  accent\n"));
        assert!(text.contains("cyclical:\n  rainbow\n  sinebow\n"));
    }

    #[test]
    fn test_aggregates() {
        assert!(render(InfoTopic::Aggregates).lines().any(|l| l == "median"));
    }
}
