// Scatterplots

use super::{keep_channels, keep_chart, no_validation, ChartKit, VizKind};
use crate::channel::ChannelKind;

pub static KIT: ChartKit = ChartKit {
    kind: VizKind::Scatter,
    color_channel: ChannelKind::Fill,
    options: &[],
    style_defaults: super::STANDARD_STYLE,
    validate: no_validation,
    finalize_channels: keep_channels,
    finalize_chart: keep_chart,
};
