// Streamgraphs

use super::{keep_chart, no_validation, ChartKit, VizKind};
use crate::channel::{ChannelKind, Setting, Stack};
use crate::channel_group::ChannelGroup;
use crate::error::Result;
use crate::options::ChartOptions;

pub static KIT: ChartKit = ChartKit {
    kind: VizKind::Stream,
    color_channel: ChannelKind::Fill,
    options: &[],
    style_defaults: super::STANDARD_STYLE,
    validate: no_validation,
    finalize_channels,
    finalize_chart: keep_chart,
};

/// Center the stack around a zero baseline and drop the y axis
fn finalize_channels(mut channels: ChannelGroup, _options: &ChartOptions) -> Result<ChannelGroup> {
    if let Some(y) = channels.get_mut(ChannelKind::Y) {
        y.stack = Some(Stack::Center);
        y.axis = Setting::Null;
    }
    Ok(channels)
}
