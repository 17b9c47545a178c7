// Chart-type strategies
//
// Each chart type is a `ChartKit` record of plain functions. Shared behavior
// is composed by calling another kit's functions directly.

pub mod area;
pub mod bar;
pub mod heatmap;
pub mod hist;
pub mod line;
pub mod scatter;
pub mod stream;

use crate::channel::{Axis, Channel, ChannelKind, Setting, Sort, Stack};
use crate::channel_group::ChannelGroup;
use crate::document::{ChartDocument, MarkKind};
use crate::error::{Result, VizError};
use crate::options::{ChartOption, ChartOptions, StyleDefaults};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VizKind {
    Area,
    Bar,
    Heatmap,
    Histogram,
    Line,
    Scatter,
    Stream,
}

impl VizKind {
    pub const ALL: [VizKind; 7] = [
        VizKind::Area,
        VizKind::Bar,
        VizKind::Heatmap,
        VizKind::Histogram,
        VizKind::Line,
        VizKind::Scatter,
        VizKind::Stream,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VizKind::Area => "area",
            VizKind::Bar => "bar",
            VizKind::Heatmap => "heatmap",
            VizKind::Histogram => "hist",
            VizKind::Line => "line",
            VizKind::Scatter => "scatter",
            VizKind::Stream => "stream",
        }
    }

    pub fn mark(self) -> MarkKind {
        match self {
            VizKind::Area | VizKind::Stream => MarkKind::Area,
            VizKind::Bar | VizKind::Histogram => MarkKind::Bar,
            VizKind::Heatmap => MarkKind::Rect,
            VizKind::Line => MarkKind::Line,
            VizKind::Scatter => MarkKind::Point,
        }
    }

    pub fn kit(self) -> &'static ChartKit {
        match self {
            VizKind::Area => &area::KIT,
            VizKind::Bar => &bar::KIT,
            VizKind::Heatmap => &heatmap::KIT,
            VizKind::Histogram => &hist::KIT,
            VizKind::Line => &line::KIT,
            VizKind::Scatter => &scatter::KIT,
            VizKind::Stream => &stream::KIT,
        }
    }
}

impl fmt::Display for VizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type ValidateFn = fn(&ChartOptions) -> Result<()>;
pub type FinalizeChannelsFn = fn(ChannelGroup, &ChartOptions) -> Result<ChannelGroup>;
pub type FinalizeChartFn = fn(ChartDocument, &ChartOptions) -> ChartDocument;

/// The hooks and settings that make up one chart type
pub struct ChartKit {
    pub kind: VizKind,
    pub color_channel: ChannelKind,
    /// Chart-specific options this type understands
    pub options: &'static [ChartOption],
    pub style_defaults: StyleDefaults,
    pub validate: ValidateFn,
    pub finalize_channels: FinalizeChannelsFn,
    pub finalize_chart: FinalizeChartFn,
}

impl fmt::Debug for ChartKit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartKit")
            .field("kind", &self.kind)
            .field("color_channel", &self.color_channel)
            .field("options", &self.options)
            .finish()
    }
}

impl ChartKit {
    /// Drop chart-specific options this type does not declare, with a warning
    /// for each one that was set.
    pub fn accept_options(&self, options: &ChartOptions) -> (ChartOptions, Vec<String>) {
        let mut accepted = options.clone();
        let mut warnings = Vec::new();
        for option in options.specific_options() {
            if !self.options.contains(&option) {
                warnings.push(format!("'{}' is not used by {} charts", option, self.kind));
                accepted.clear(option);
            }
        }
        (accepted, warnings)
    }

    /// Rules shared by every chart type, then the type's own rules
    pub fn validate_options(&self, options: &ChartOptions) -> Result<()> {
        if options.color_list.is_some() && options.color_scheme.is_some() {
            return Err(VizError::ConflictingArgs(
                "--color-list and --color-scheme cannot both be specified.".to_string(),
            ));
        }
        (self.validate)(options)
    }
}

pub(crate) const STANDARD_STYLE: StyleDefaults = StyleDefaults {
    chart_width: 600,
    chart_height: 400,
    faceted_width: 250,
    faceted_height: 150,
};

pub(crate) fn no_validation(_options: &ChartOptions) -> Result<()> {
    Ok(())
}

pub(crate) fn keep_channels(channels: ChannelGroup, _options: &ChartOptions) -> Result<ChannelGroup> {
    Ok(channels)
}

pub(crate) fn keep_chart(document: ChartDocument, _options: &ChartOptions) -> ChartDocument {
    document
}

/// Stacked-to-100% charts need a color channel to stack on
pub(crate) fn validate_normalized(options: &ChartOptions) -> Result<()> {
    if options.normalized && !options.has_colorvar() {
        return Err(VizError::ConflictingArgs(
            "-c/--colorvar needs to be specified when creating a normalized (i.e. stacked) chart"
                .to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_color_sort(options: &ChartOptions) -> Result<()> {
    if let Some(term) = options.color_sort.as_deref() {
        if !options.has_colorvar() {
            return Err(VizError::MissingDataReference(format!(
                "--color-sort '{}' was specified, but no --colorvar value was provided",
                term
            )));
        }
        Sort::from_term(term)?;
    }
    Ok(())
}

pub(crate) fn normalize(mut channels: ChannelGroup, options: &ChartOptions) -> ChannelGroup {
    if options.normalized {
        if let Some(y) = channels.get_mut(ChannelKind::Y) {
            y.stack = Some(Stack::Normalize);
            y.axis = Setting::Value(Axis {
                format: Some("%".to_string()),
            });
        }
    }
    channels
}

/// Order stacked marks by the color channel's field
pub(crate) fn color_order(mut channels: ChannelGroup, options: &ChartOptions) -> Result<ChannelGroup> {
    let Some(term) = options.color_sort.as_deref() else {
        return Ok(channels);
    };

    let color = channels.color_channel();
    let (field, field_type) = match channels.get(color) {
        Some(Channel {
            field: Some(field),
            field_type,
            ..
        }) => (field.clone(), *field_type),
        _ => {
            return Err(VizError::MissingDataReference(format!(
                "--color-sort '{}' needs a --colorvar bound to a column",
                term
            )))
        }
    };

    let mut order = Channel::field(field, field_type);
    order.sort = Some(Sort::from_term(term)?);
    channels.insert(ChannelKind::Order, order);
    Ok(channels)
}
