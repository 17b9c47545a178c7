// Area charts

use super::{color_order, keep_chart, normalize, validate_color_sort, validate_normalized, ChartKit, VizKind};
use crate::channel::ChannelKind;
use crate::channel_group::ChannelGroup;
use crate::error::Result;
use crate::options::{ChartOption, ChartOptions};

pub static KIT: ChartKit = ChartKit {
    kind: VizKind::Area,
    color_channel: ChannelKind::Fill,
    options: &[ChartOption::Normalized, ChartOption::ColorSort],
    style_defaults: super::STANDARD_STYLE,
    validate,
    finalize_channels,
    finalize_chart: keep_chart,
};

fn validate(options: &ChartOptions) -> Result<()> {
    validate_normalized(options)?;
    validate_color_sort(options)
}

fn finalize_channels(channels: ChannelGroup, options: &ChartOptions) -> Result<ChannelGroup> {
    color_order(normalize(channels, options), options)
}
