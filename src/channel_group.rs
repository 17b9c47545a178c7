// Channel resolution pipeline
//
// scaffold -> colorize -> facetize -> legendize -> limitize
//
// Each stage takes the group by value and hands it to the next, so no stage
// can observe a channel that a later stage has touched.

use crate::channel::{Channel, ChannelKind, Legend, Scale, Setting, Sort};
use crate::data::Dataset;
use crate::error::Result;
use crate::options::{ChartOptions, Config};
use crate::parser::{parse_limits, parse_shorthand};
use crate::scheme;
use log::{debug, trace};
use std::collections::BTreeMap;

/// The resolved set of encoding channels for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGroup {
    channels: BTreeMap<ChannelKind, Channel>,
    color_channel: ChannelKind,
    warnings: Vec<String>,
}

impl ChannelGroup {
    /// Resolve every channel named by `options` against `dataset`.
    ///
    /// `color_channel` is the chart type's color slot; `colorvar` binds to it.
    pub fn resolve(
        options: &ChartOptions,
        dataset: &Dataset,
        color_channel: ChannelKind,
        config: &Config,
    ) -> Result<Self> {
        Self::scaffold(options, dataset, color_channel)?
            .colorize(options)
            .facetize(options, config)?
            .legendize(options, config)
            .limitize(options)
    }

    fn scaffold(options: &ChartOptions, dataset: &Dataset, color_channel: ChannelKind) -> Result<Self> {
        let mut group = Self {
            channels: BTreeMap::new(),
            color_channel,
            warnings: Vec::new(),
        };

        for kind in ChannelKind::ALL {
            let arg = match kind {
                ChannelKind::X => options.xvar.as_deref(),
                ChannelKind::Y => options.yvar.as_deref(),
                ChannelKind::Size => options.sizevar.as_deref(),
                ChannelKind::Facet => options.facetvar.as_deref(),
                k if k == color_channel => options.colorvar(),
                _ => None,
            };

            let channel = match arg.filter(|a| !a.is_empty()) {
                Some(arg) => Some(Channel::from_shorthand(&parse_shorthand(arg), dataset)?),
                None => positional_default(kind, dataset),
            };

            if let Some(channel) = channel {
                trace!("scaffold {}: {:?}", kind, channel);
                group.channels.insert(kind, channel);
            }
        }

        debug!(
            "scaffolded channels: {:?}",
            group.channels.keys().map(|k| k.name()).collect::<Vec<_>>()
        );
        Ok(group)
    }

    fn colorize(mut self, options: &ChartOptions) -> Self {
        let color_kind = self.color_channel;
        let Some(field_type) = self.channels.get(&color_kind).map(|c| c.field_type) else {
            // a color list without a color channel colors the mark itself
            if options.color_scheme.is_some() {
                self.warn("--colorvar was not specified, so --color-scheme is ignored.");
            }
            return self;
        };

        let default = scheme::default_scheme(field_type);
        let colors = options.color_list_items();
        let scale = if !colors.is_empty() {
            let mut colors = colors;
            if colors.len() == 1 && field_type.is_continuous() {
                colors.push(colors[0].clone());
            }
            Scale::range(colors)
        } else {
            match options.color_scheme.as_deref() {
                Some(name) if scheme::is_known_scheme(name) => Scale::scheme(name),
                Some(name) => {
                    self.warn(format!(
                        "Using default color scheme because --color-scheme argument '{}' does not seem to be a valid color scheme. Run `vizkit info colorschemes` to get a list of valid color schemes.",
                        name
                    ));
                    Scale::scheme(default)
                }
                None => Scale::scheme(default),
            }
        };

        debug!("colorize {}: {:?}", color_kind, scale);
        if let Some(channel) = self.channels.get_mut(&color_kind) {
            channel.scale = Some(scale);
        }
        self
    }

    fn facetize(mut self, options: &ChartOptions, config: &Config) -> Result<Self> {
        if let Some(facet) = self.channels.get_mut(&ChannelKind::Facet) {
            facet.spacing = Some(config.facet_spacing);
            // 0 leaves the column count unbounded
            facet.columns = match options.facet_columns {
                Some(0) => None,
                Some(n) => Some(n),
                None => Some(config.facet_columns),
            };
            if let Some(term) = options.facet_sort.as_deref() {
                facet.sort = Some(Sort::from_term(term)?);
            }
            debug!("facetize: columns={:?} sort={:?}", facet.columns, facet.sort);
        }
        Ok(self)
    }

    fn legendize(mut self, options: &ChartOptions, config: &Config) -> Self {
        for (kind, channel) in self.channels.iter_mut() {
            if !kind.has_legend() {
                continue;
            }
            channel.legend = if options.no_legend {
                Setting::Null
            } else {
                Setting::Value(Legend {
                    orient: config.legend_orient.clone(),
                })
            };
        }
        self
    }

    fn limitize(mut self, options: &ChartOptions) -> Result<Self> {
        for (kind, limits) in [
            (ChannelKind::X, options.xlim.as_deref()),
            (ChannelKind::Y, options.ylim.as_deref()),
        ] {
            let Some(limits) = limits else { continue };
            let domain = parse_limits(limits)?;
            if let Some(channel) = self.channels.get_mut(&kind) {
                debug!("limitize {}: {:?}", kind, domain);
                channel.scale.get_or_insert_with(Scale::default).domain = Some(domain);
            }
        }
        Ok(self)
    }

    pub fn get(&self, kind: ChannelKind) -> Option<&Channel> {
        self.channels.get(&kind)
    }

    pub fn get_mut(&mut self, kind: ChannelKind) -> Option<&mut Channel> {
        self.channels.get_mut(&kind)
    }

    pub fn insert(&mut self, kind: ChannelKind, channel: Channel) {
        self.channels.insert(kind, channel);
    }

    pub fn remove(&mut self, kind: ChannelKind) -> Option<Channel> {
        self.channels.remove(&kind)
    }

    pub fn contains(&self, kind: ChannelKind) -> bool {
        self.channels.contains_key(&kind)
    }

    /// The bound column of a channel, ignoring aggregate and title
    pub fn get_data_field(&self, kind: ChannelKind) -> Option<&str> {
        self.channels.get(&kind).and_then(|c| c.field.as_deref())
    }

    /// Exchange the x and y channels
    pub fn swap_xy(&mut self) {
        let x = self.channels.remove(&ChannelKind::X);
        let y = self.channels.remove(&ChannelKind::Y);
        if let Some(y) = y {
            self.channels.insert(ChannelKind::X, y);
        }
        if let Some(x) = x {
            self.channels.insert(ChannelKind::Y, x);
        }
    }

    pub fn channels(&self) -> &BTreeMap<ChannelKind, Channel> {
        &self.channels
    }

    pub fn color_channel(&self) -> ChannelKind {
        self.color_channel
    }

    pub fn is_faceted(&self) -> bool {
        self.channels.contains_key(&ChannelKind::Facet)
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}

fn positional_default(kind: ChannelKind, dataset: &Dataset) -> Option<Channel> {
    let index = match kind {
        ChannelKind::X => 0,
        ChannelKind::Y => 1,
        _ => return None,
    };
    let name = dataset.column_at(index)?;
    let field_type = dataset.column_type(name)?;
    Some(Channel::field(name, field_type))
}
