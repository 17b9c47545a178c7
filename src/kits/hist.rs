// Histograms: frequency counts over a binned (or nominal) x axis

use super::{bar, no_validation, ChartKit, VizKind};
use crate::channel::{Bin, Channel, ChannelKind};
use crate::channel_group::ChannelGroup;
use crate::data::FieldType;
use crate::error::Result;
use crate::options::{ChartOption, ChartOptions};
use log::debug;

pub static KIT: ChartKit = ChartKit {
    kind: VizKind::Histogram,
    color_channel: ChannelKind::Fill,
    options: &[
        ChartOption::BinCount,
        ChartOption::BinStepSize,
        ChartOption::Horizontal,
    ],
    style_defaults: super::STANDARD_STYLE,
    validate: no_validation,
    finalize_channels,
    finalize_chart: bar::finalize_chart,
};

fn finalize_channels(channels: ChannelGroup, options: &ChartOptions) -> Result<ChannelGroup> {
    let mut channels = bar::shape(channels, options)?;

    let x_type = channels.get(ChannelKind::X).map(|x| x.field_type);
    if x_type == Some(FieldType::Nominal) {
        let field = channels.get_data_field(ChannelKind::X).map(str::to_string);
        if options.has_bin_options() {
            channels.warn(format!(
                "Since '{}' consists of nominal values, vizkit will ignore bin-specific settings, e.g. -n/--bins and -s/--bin-size",
                field.as_deref().unwrap_or_default()
            ));
        }
        channels.insert(ChannelKind::Y, Channel::count(field));
    } else {
        channels.insert(ChannelKind::Y, Channel::count(None));
        if let Some(x) = channels.get_mut(ChannelKind::X) {
            x.bin = Some(bin_params(options));
            debug!("hist bins: {:?}", x.bin);
        }
    }

    Ok(bar::transpose(channels, options))
}

/// A bin step overrides any max bin count
fn bin_params(options: &ChartOptions) -> Bin {
    match (options.bincount, options.binstepsize) {
        (_, Some(step)) => Bin::Params {
            maxbins: None,
            step: Some(step),
        },
        (Some(maxbins), None) => Bin::Params {
            maxbins: Some(maxbins),
            step: None,
        },
        (None, None) => Bin::Enabled,
    }
}
