// Bar charts

use super::{color_order, normalize, validate_color_sort, validate_normalized, ChartKit, VizKind};
use crate::channel::{ChannelKind, Sort};
use crate::channel_group::ChannelGroup;
use crate::document::{ChartDocument, Style};
use crate::error::{Result, VizError};
use crate::options::{ChartOption, ChartOptions};

pub static KIT: ChartKit = ChartKit {
    kind: VizKind::Bar,
    color_channel: ChannelKind::Fill,
    options: &[
        ChartOption::Horizontal,
        ChartOption::SortX,
        ChartOption::Normalized,
        ChartOption::ColorSort,
    ],
    style_defaults: super::STANDARD_STYLE,
    validate,
    finalize_channels,
    finalize_chart,
};

/// Channels the x axis may be sorted by
const SORT_CHANNELS: [&str; 3] = ["x", "y", "color"];

fn validate(options: &ChartOptions) -> Result<()> {
    validate_normalized(options)?;
    if let Some(term) = options.sortx_var.as_deref() {
        if !SORT_CHANNELS.contains(&term.trim_start_matches('-')) {
            return Err(VizError::InvalidDataReference(format!(
                "'{}' is not a valid channel to sort by",
                term
            )));
        }
    }
    validate_color_sort(options)
}

fn finalize_channels(channels: ChannelGroup, options: &ChartOptions) -> Result<ChannelGroup> {
    let channels = shape(channels, options)?;
    Ok(transpose(channels, options))
}

/// Stacking, x sort and color order for a vertical bar layout
pub(crate) fn shape(channels: ChannelGroup, options: &ChartOptions) -> Result<ChannelGroup> {
    let mut channels = normalize(channels, options);

    if let Some(term) = options.sortx_var.as_deref() {
        let color = channels.color_channel();
        let target = match term.strip_prefix('-') {
            Some("color") => format!("-{}", color),
            None if term == "color" => color.to_string(),
            _ => term.to_string(),
        };
        if let Some(x) = channels.get_mut(ChannelKind::X) {
            x.sort = Some(Sort::ByChannel(target));
        }
    }

    color_order(channels, options)
}

/// Horizontal bars are the vertical layout with x and y exchanged
pub(crate) fn transpose(mut channels: ChannelGroup, options: &ChartOptions) -> ChannelGroup {
    if options.is_horizontal {
        channels.swap_xy();
        // the sorted axis now lives on y, so a sort by y means a sort by x
        if let Some(y) = channels.get_mut(ChannelKind::Y) {
            if let Some(Sort::ByChannel(target)) = y.sort.as_mut() {
                *target = swap_axis_name(target);
            }
        }
    }
    channels
}

fn swap_axis_name(target: &str) -> String {
    let (prefix, name) = match target.strip_prefix('-') {
        Some(name) => ("-", name),
        None => ("", target),
    };
    let name = match name {
        "x" => "y",
        "y" => "x",
        other => other,
    };
    format!("{}{}", prefix, name)
}

pub(crate) fn finalize_chart(mut document: ChartDocument, options: &ChartOptions) -> ChartDocument {
    if options.is_horizontal {
        let style = document.style();
        let swapped = Style {
            width: style.height,
            height: style.width,
            ..style.clone()
        };
        document.set_style(swapped);
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Stack;
    use crate::data::Dataset;
    use crate::options::Config;
    use serde_json::json;

    fn group(options: &ChartOptions) -> ChannelGroup {
        let ds = Dataset::from_csv_reader("name,amount,kind\nAlice,20,a\nBob,30,b\n".as_bytes())
            .unwrap();
        ChannelGroup::resolve(options, &ds, ChannelKind::Fill, &Config::default()).unwrap()
    }

    #[test]
    fn test_normalized_requires_colorvar() {
        let options = ChartOptions {
            normalized: true,
            ..Default::default()
        };
        let err = validate(&options).unwrap_err();
        assert!(matches!(err, VizError::ConflictingArgs(ref m) if m.contains("normalized")));

        let options = ChartOptions {
            colorvar: Some(String::new()),
            normalized: true,
            ..Default::default()
        };
        assert!(matches!(validate(&options), Err(VizError::ConflictingArgs(_))));
    }

    #[test]
    fn test_sort_whitelist() {
        for term in ["x", "-y", "color", "-color"] {
            let options = ChartOptions {
                sortx_var: Some(term.to_string()),
                ..Default::default()
            };
            assert!(validate(&options).is_ok(), "{} rejected", term);
        }
        let options = ChartOptions {
            sortx_var: Some("size".to_string()),
            ..Default::default()
        };
        assert!(matches!(validate(&options), Err(VizError::InvalidDataReference(_))));
    }

    #[test]
    fn test_color_sort_requires_colorvar() {
        let options = ChartOptions {
            color_sort: Some("asc".to_string()),
            ..Default::default()
        };
        assert!(matches!(validate(&options), Err(VizError::MissingDataReference(_))));

        let options = ChartOptions {
            colorvar: Some("kind".to_string()),
            color_sort: Some("up".to_string()),
            ..Default::default()
        };
        assert!(matches!(validate(&options), Err(VizError::InvalidValue(_))));
    }

    #[test]
    fn test_sort_by_color_channel() {
        let options = ChartOptions {
            colorvar: Some("kind".to_string()),
            sortx_var: Some("-color".to_string()),
            ..Default::default()
        };
        let channels = finalize_channels(group(&options), &options).unwrap();
        assert_eq!(
            channels.get(ChannelKind::X).unwrap().sort,
            Some(Sort::ByChannel("-fill".to_string()))
        );
    }

    #[test]
    fn test_color_sort_adds_order() {
        let options = ChartOptions {
            colorvar: Some("kind".to_string()),
            color_sort: Some("desc".to_string()),
            ..Default::default()
        };
        let channels = finalize_channels(group(&options), &options).unwrap();
        assert_eq!(
            serde_json::to_value(channels.get(ChannelKind::Order).unwrap()).unwrap(),
            json!({"field": "kind", "type": "nominal", "sort": "descending"})
        );
    }

    #[test]
    fn test_horizontal_sort_follows_swap() {
        let options = ChartOptions {
            sortx_var: Some("-y".to_string()),
            is_horizontal: true,
            ..Default::default()
        };
        let channels = finalize_channels(group(&options), &options).unwrap();
        let y = channels.get(ChannelKind::Y).unwrap();
        assert_eq!(y.field.as_deref(), Some("name"));
        assert_eq!(y.sort, Some(Sort::ByChannel("-x".to_string())));
        assert_eq!(channels.get(ChannelKind::X).unwrap().sort, None);

        let options = ChartOptions {
            colorvar: Some("kind".to_string()),
            sortx_var: Some("color".to_string()),
            is_horizontal: true,
            ..Default::default()
        };
        let channels = finalize_channels(group(&options), &options).unwrap();
        assert_eq!(
            channels.get(ChannelKind::Y).unwrap().sort,
            Some(Sort::ByChannel("fill".to_string()))
        );
    }

    #[test]
    fn test_horizontal_normalized() {
        let options = ChartOptions {
            colorvar: Some("kind".to_string()),
            normalized: true,
            is_horizontal: true,
            ..Default::default()
        };
        let channels = finalize_channels(group(&options), &options).unwrap();
        let x = channels.get(ChannelKind::X).unwrap();
        assert_eq!(x.field.as_deref(), Some("amount"));
        assert_eq!(x.stack, Some(Stack::Normalize));
        assert_eq!(channels.get_data_field(ChannelKind::Y), Some("name"));
    }
}
