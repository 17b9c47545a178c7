// Chart document assembly and serialization

use crate::channel::{Channel, ChannelKind};
use crate::channel_group::ChannelGroup;
use crate::data::Dataset;
use crate::error::Result;
use crate::kits::VizKind;
use crate::options::{ChartOptions, StyleDefaults};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v4.17.0.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Area,
    Bar,
    Line,
    Point,
    Rect,
}

/// Marks are always clipped at the plot boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
    pub clip: bool,
    /// Fixed mark color, used when no channel carries color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self {
            kind,
            clip: true,
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Autosize {
    #[serde(rename = "type")]
    pub kind: String,
    pub contains: String,
}

impl Default for Autosize {
    fn default() -> Self {
        Self {
            kind: "pad".to_string(),
            contains: "padding".to_string(),
        }
    }
}

/// Chart-wide style properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub autosize: Autosize,
}

/// Pan/zoom interval selection bound to the x and y scales
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pan_zoom: IntervalSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct IntervalSelection {
    #[serde(rename = "type")]
    kind: &'static str,
    bind: &'static str,
    encodings: [ChannelKind; 2],
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            pan_zoom: IntervalSelection {
                kind: "interval",
                bind: "scales",
                encodings: [ChannelKind::X, ChannelKind::Y],
            },
        }
    }
}

/// An assembled chart, ready for serialization
#[derive(Debug, Clone)]
pub struct ChartDocument {
    mark: Mark,
    channels: ChannelGroup,
    values: Vec<Map<String, Value>>,
    style: Style,
    selection: Option<Selection>,
}

impl ChartDocument {
    pub fn build(
        kind: VizKind,
        dataset: &Dataset,
        channels: ChannelGroup,
        defaults: StyleDefaults,
        options: &ChartOptions,
    ) -> Self {
        let (default_width, default_height) = if channels.is_faceted() {
            (defaults.faceted_width, defaults.faceted_height)
        } else {
            (defaults.chart_width, defaults.chart_height)
        };

        let style = Style {
            title: options.title.clone().filter(|t| !t.is_empty()),
            width: options.width.unwrap_or(default_width),
            height: options.height.unwrap_or(default_height),
            autosize: Autosize::default(),
        };

        let mut mark = Mark::new(kind.mark());
        if !channels.contains(channels.color_channel()) {
            mark.color = options.color_list_items().into_iter().next();
        }

        Self {
            mark,
            channels,
            values: dataset.records().to_vec(),
            style,
            selection: options.is_interactive.then(Selection::default),
        }
    }

    pub fn mark(&self) -> &Mark {
        &self.mark
    }

    pub fn channels(&self) -> &ChannelGroup {
        &self.channels
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the chart-wide style as a whole
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn is_faceted(&self) -> bool {
        self.channels.is_faceted()
    }

    pub fn is_interactive(&self) -> bool {
        self.selection.is_some()
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.repr())?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.repr())?)
    }

    fn repr(&self) -> DocumentRepr<'_> {
        DocumentRepr {
            schema: SCHEMA_URL,
            data: DataRepr { values: &self.values },
            mark: &self.mark,
            encoding: self.channels.channels(),
            resolve: self.is_faceted().then_some(ResolveRepr {
                axis: AxisResolveRepr { x: "independent" },
            }),
            selection: self.selection.as_ref(),
            title: self.style.title.as_deref(),
            width: self.style.width,
            height: self.style.height,
            autosize: &self.style.autosize,
        }
    }
}

#[derive(Serialize)]
struct DocumentRepr<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    data: DataRepr<'a>,
    mark: &'a Mark,
    encoding: &'a BTreeMap<ChannelKind, Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolve: Option<ResolveRepr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<&'a Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    width: u32,
    height: u32,
    autosize: &'a Autosize,
}

#[derive(Serialize)]
struct DataRepr<'a> {
    values: &'a [Map<String, Value>],
}

#[derive(Serialize)]
struct ResolveRepr {
    axis: AxisResolveRepr,
}

#[derive(Serialize)]
struct AxisResolveRepr {
    x: &'static str,
}
