// Read-only tabular dataset with per-column semantic types

use crate::error::{Result, VizError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Semantic type of a column or channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Ordinal,
    Quantitative,
    Temporal,
}

impl FieldType {
    /// Map a shorthand type code (N, O, Q, T) to its type
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(FieldType::Nominal),
            'O' => Some(FieldType::Ordinal),
            'Q' => Some(FieldType::Quantitative),
            'T' => Some(FieldType::Temporal),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            FieldType::Nominal => 'N',
            FieldType::Ordinal => 'O',
            FieldType::Quantitative => 'Q',
            FieldType::Temporal => 'T',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::Nominal => "nominal",
            FieldType::Ordinal => "ordinal",
            FieldType::Quantitative => "quantitative",
            FieldType::Temporal => "temporal",
        }
    }

    /// Quantitative and temporal fields get continuous scales
    pub fn is_continuous(self) -> bool {
        matches!(self, FieldType::Quantitative | FieldType::Temporal)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    records: Vec<Map<String, Value>>,
}

impl Dataset {
    /// Build a dataset from a header row and string cells, inferring each
    /// column's type from its non-empty cells.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(VizError::Data(
                "Input must contain at least one data row".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for h in &headers {
            if !seen.insert(h.as_str()) {
                return Err(VizError::Data(format!("Duplicate column name '{}'", h)));
            }
        }

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| Column {
                name: name.clone(),
                field_type: infer_type(rows.iter().filter_map(|r| r.get(idx)).map(String::as_str)),
            })
            .collect();

        let records = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(idx, col)| {
                        let cell = row.get(idx).map(String::as_str).unwrap_or("");
                        (col.name.clone(), cell_value(cell, col.field_type))
                    })
                    .collect()
            })
            .collect();

        for col in &columns {
            debug!("column '{}' inferred as {}", col.name, col.field_type);
        }

        Ok(Self { columns, records })
    }

    /// Parse CSV text (with a header row) from any reader
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Self::from_rows(headers, rows)
    }

    /// Load CSV from a file path, or from standard input when the path is `-`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == "-" {
            Self::from_csv_reader(io::stdin().lock())
        } else {
            Self::from_csv_reader(File::open(path)?)
        }
    }

    /// Create a dataset from a JSON array of flat objects
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value.as_array().ok_or_else(|| {
            VizError::Data("Input data must be a JSON array of objects".to_string())
        })?;

        let first_obj = array
            .first()
            .and_then(Value::as_object)
            .ok_or_else(|| VizError::Data("Input data must contain at least one object".to_string()))?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::new();
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| VizError::Data("Items in array must be objects".to_string()))?;

            let mut row = Vec::new();
            for header in &headers {
                let val_str = match obj.get(header) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Null) | None => String::new(),
                    _ => {
                        return Err(VizError::Data(format!(
                            "Unsupported value type for field '{}'",
                            header
                        )))
                    }
                };
                row.push(val_str);
            }
            rows.push(row);
        }

        Self::from_rows(headers, rows)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_type(&self, name: &str) -> Option<FieldType> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.field_type)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Name of the column at a position, used for positional x/y defaults
    pub fn column_at(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.name.as_str())
    }

    pub fn records(&self) -> &[Map<String, Value>] {
        &self.records
    }
}

fn infer_type<'a>(cells: impl Iterator<Item = &'a str>) -> FieldType {
    let values: Vec<&str> = cells.map(str::trim).filter(|s| !s.is_empty()).collect();
    if values.is_empty() {
        FieldType::Nominal
    } else if values.iter().all(|s| parse_number(s).is_some()) {
        FieldType::Quantitative
    } else if values.iter().all(|s| is_temporal(s)) {
        FieldType::Temporal
    } else {
        FieldType::Nominal
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_temporal(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDate::parse_from_str(s, "%Y/%m/%d").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || DateTime::parse_from_rfc3339(s).is_ok()
}

fn cell_value(cell: &str, field_type: FieldType) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if field_type == FieldType::Quantitative {
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::from(i);
        }
        if let Some(n) = parse_number(trimmed).and_then(serde_json::Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(cell.to_string())
}
