// Encoding channel descriptors

use crate::data::{Dataset, FieldType};
use crate::error::{Result, VizError};
use crate::parser::{Shorthand, Wrapper};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Named encoding slots. Ordering is the scaffold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    X,
    Y,
    Fill,
    Stroke,
    Size,
    Facet,
    Order,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 7] = [
        ChannelKind::X,
        ChannelKind::Y,
        ChannelKind::Fill,
        ChannelKind::Stroke,
        ChannelKind::Size,
        ChannelKind::Facet,
        ChannelKind::Order,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChannelKind::X => "x",
            ChannelKind::Y => "y",
            ChannelKind::Fill => "fill",
            ChannelKind::Stroke => "stroke",
            ChannelKind::Size => "size",
            ChannelKind::Facet => "facet",
            ChannelKind::Order => "order",
        }
    }

    /// Channels that carry a legend
    pub fn has_legend(self) -> bool {
        matches!(self, ChannelKind::Fill | ChannelKind::Stroke | ChannelKind::Size)
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A property that can be left out of the document, written as `null`, or
/// written with a value. The rendering grammar treats a missing key and a
/// `null` key differently (grammar default vs. suppressed).
#[derive(Debug, Clone, PartialEq)]
pub enum Setting<T> {
    NotSet,
    Null,
    Value(T),
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Setting::NotSet
    }
}

impl<T> Setting<T> {
    pub fn is_not_set(&self) -> bool {
        matches!(self, Setting::NotSet)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Setting::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Setting::Value(v) => v.serialize(serializer),
            Setting::NotSet | Setting::Null => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[Value; 2]>,
}

impl Scale {
    pub fn scheme(name: impl Into<String>) -> Self {
        Self {
            scheme: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn range(colors: Vec<String>) -> Self {
        Self {
            range: Some(colors),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orient: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sort {
    Ascending,
    Descending,
    /// Sort by another encoding channel, e.g. `y` or `-y`
    ByChannel(String),
}

impl Sort {
    /// Parse an `asc`/`desc` sort term
    pub fn from_term(term: &str) -> Result<Self> {
        match term.to_ascii_lowercase().as_str() {
            "asc" => Ok(Sort::Ascending),
            "desc" => Ok(Sort::Descending),
            _ => Err(VizError::InvalidValue(format!("Invalid sort order term: {}", term))),
        }
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Sort::Ascending => serializer.serialize_str("ascending"),
            Sort::Descending => serializer.serialize_str("descending"),
            Sort::ByChannel(c) => serializer.serialize_str(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Zero,
    Normalize,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Bin {
    /// `bin: true`, i.e. grammar defaults
    Enabled,
    Params { maxbins: Option<u32>, step: Option<f64> },
}

impl Serialize for Bin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Bin::Enabled => serializer.serialize_bool(true),
            Bin::Params { maxbins, step } => {
                let mut map = serializer.serialize_map(None)?;
                if let Some(n) = maxbins {
                    map.serialize_entry("maxbins", n)?;
                }
                if let Some(s) = step {
                    map.serialize_entry("step", s)?;
                }
                map.end()
            }
        }
    }
}

/// One resolved encoding channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(rename = "timeUnit", skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Setting::is_not_set")]
    pub legend: Setting<Legend>,
    #[serde(skip_serializing_if = "Setting::is_not_set")]
    pub axis: Setting<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Bin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,
}

impl Channel {
    /// A plain field channel
    pub fn field(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::with_field(Some(name.into()), field_type)
    }

    /// A `count` aggregate, optionally over a field
    pub fn count(field: Option<String>) -> Self {
        Self {
            aggregate: Some("count".to_string()),
            ..Self::with_field(field, FieldType::Quantitative)
        }
    }

    fn with_field(field: Option<String>, field_type: FieldType) -> Self {
        Self {
            field,
            field_type,
            aggregate: None,
            time_unit: None,
            title: None,
            scale: None,
            legend: Setting::NotSet,
            axis: Setting::NotSet,
            sort: None,
            stack: None,
            bin: None,
            columns: None,
            spacing: None,
        }
    }

    /// Resolve a parsed shorthand against the dataset's columns.
    ///
    /// Type precedence: explicit code, then `count` (quantitative), then a
    /// time unit (temporal), then the column's inferred type.
    pub fn from_shorthand(shorthand: &Shorthand, dataset: &Dataset) -> Result<Self> {
        let invalid = || {
            VizError::InvalidDataReference(format!(
                "'{}' is either an invalid column name, or invalid shorthand",
                shorthand.text
            ))
        };

        let column_type = match &shorthand.field {
            Some(field) => Some(dataset.column_type(field).ok_or_else(invalid)?),
            None if shorthand.wrapper.as_ref().is_some_and(Wrapper::is_count) => None,
            None => return Err(invalid()),
        };

        let field_type = shorthand
            .type_code
            .or_else(|| match &shorthand.wrapper {
                Some(w) if w.is_count() => Some(FieldType::Quantitative),
                Some(Wrapper::TimeUnit(_)) => Some(FieldType::Temporal),
                _ => None,
            })
            .or(column_type)
            .unwrap_or(FieldType::Quantitative);

        let mut channel = Self::with_field(shorthand.field.clone(), field_type);
        match &shorthand.wrapper {
            Some(Wrapper::Aggregate(func)) => channel.aggregate = Some(func.clone()),
            Some(Wrapper::TimeUnit(unit)) => channel.time_unit = Some(unit.clone()),
            None => {}
        }
        channel.title = shorthand.title.clone();

        Ok(channel)
    }
}
