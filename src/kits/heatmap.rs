// Heatmaps

use super::{keep_channels, keep_chart, ChartKit, VizKind};
use crate::channel::ChannelKind;
use crate::error::{Result, VizError};
use crate::options::{ChartOptions, StyleDefaults};

pub static KIT: ChartKit = ChartKit {
    kind: VizKind::Heatmap,
    color_channel: ChannelKind::Fill,
    options: &[],
    style_defaults: StyleDefaults {
        chart_width: 500,
        chart_height: 500,
        faceted_width: 250,
        faceted_height: 150,
    },
    validate,
    finalize_channels: keep_channels,
    finalize_chart: keep_chart,
};

fn validate(options: &ChartOptions) -> Result<()> {
    if !options.has_colorvar() {
        return Err(VizError::MissingDataReference(
            "-c/--colorvar needs to be specified for heatmap charts".to_string(),
        ));
    }
    Ok(())
}
