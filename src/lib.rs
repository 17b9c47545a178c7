// Library exports for vizkit

pub mod channel;
pub mod channel_group;
pub mod data;
pub mod document;
pub mod error;
pub mod info;
pub mod kits;
pub mod options;
pub mod parser;
pub mod scheme;

pub use channel::{Channel, ChannelKind, Setting};
pub use channel_group::ChannelGroup;
pub use data::{Dataset, FieldType};
pub use document::ChartDocument;
pub use error::{Result, VizError};
pub use kits::{ChartKit, VizKind};
pub use options::{ChartOptions, Config};

use log::{debug, info};

/// A finished chart plus the warnings collected while building it
#[derive(Debug)]
pub struct ChartBuild {
    pub document: ChartDocument,
    pub warnings: Vec<String>,
}

/// Build a chart of `kind` from `dataset`.
///
/// Runs option validation, channel resolution, the chart type's channel
/// hook, document assembly and the chart type's document hook, in that order.
/// Any failure aborts the build; warnings never do.
pub fn build_chart(
    kind: VizKind,
    dataset: &Dataset,
    options: &ChartOptions,
    config: &Config,
) -> Result<ChartBuild> {
    let kit = kind.kit();
    info!("building {} chart over {} columns", kind, dataset.columns().len());

    let (options, mut warnings) = kit.accept_options(options);
    kit.validate_options(&options)?;

    let channels = ChannelGroup::resolve(&options, dataset, kit.color_channel, config)?;
    let mut channels = (kit.finalize_channels)(channels, &options)?;
    warnings.extend(channels.take_warnings());
    debug!(
        "finalized channels: {:?}",
        channels.channels().keys().map(|k| k.name()).collect::<Vec<_>>()
    );

    let defaults = config.style_defaults(kit.style_defaults);
    let document = ChartDocument::build(kind, dataset, channels, defaults, &options);
    let document = (kit.finalize_chart)(document, &options);

    info!("built {} chart with {} warning(s)", kind, warnings.len());
    Ok(ChartBuild { document, warnings })
}
