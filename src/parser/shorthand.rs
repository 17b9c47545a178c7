// Channel shorthand parser
//
// Grammar: [func(]field[)][:T][|title]

use super::lexer::identifier;
use crate::data::FieldType;
use nom::{
    bytes::complete::take_while,
    character::complete::{anychar, char},
    combinator::{all_consuming, map_opt},
    sequence::{delimited, pair},
    IResult,
};

/// Vega-Lite aggregate operations, listed by `vizkit info aggregates`.
/// Shorthand wrappers are not checked against this list.
pub const AGGREGATES: &[&str] = &[
    "argmax", "argmin", "average", "ci0", "ci1", "count", "distinct", "max", "mean", "median",
    "min", "missing", "product", "q1", "q3", "stderr", "stdev", "stdevp", "sum", "valid",
    "values", "variance", "variancep",
];

/// Time units that turn a wrapper into a `timeUnit` instead of an aggregate
pub const TIME_UNITS: &[&str] = &[
    "year",
    "quarter",
    "month",
    "week",
    "day",
    "dayofyear",
    "date",
    "hours",
    "minutes",
    "seconds",
    "milliseconds",
    "yearquarter",
    "yearquartermonth",
    "yearmonth",
    "yearmonthdate",
    "yearmonthdatehours",
    "yearmonthdatehoursminutes",
    "yearmonthdatehoursminutesseconds",
    "yearweek",
    "yearweekday",
    "yearweekdayhours",
    "yearweekdayhoursminutes",
    "yearweekdayhoursminutesseconds",
    "yeardayofyear",
    "quartermonth",
    "monthdate",
    "monthdatehours",
    "monthdatehoursminutes",
    "monthdatehoursminutesseconds",
    "weekday",
    "weekdayhours",
    "weekdayhoursminutes",
    "weekdayhoursminutesseconds",
    "dayhours",
    "dayhoursminutes",
    "dayhoursminutesseconds",
    "hoursminutes",
    "hoursminutesseconds",
    "minutesseconds",
    "secondsmilliseconds",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wrapper {
    Aggregate(String),
    TimeUnit(String),
}

impl Wrapper {
    fn from_func(func: &str) -> Self {
        let unit = func.strip_prefix("utc").unwrap_or(func);
        if TIME_UNITS.contains(&unit) {
            Wrapper::TimeUnit(func.to_string())
        } else {
            Wrapper::Aggregate(func.to_string())
        }
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Wrapper::Aggregate(f) if f == "count")
    }
}

/// A parsed channel option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand {
    /// The option text before the title delimiter, verbatim
    pub text: String,
    /// Bound field; `None` only for a bare `count()`
    pub field: Option<String>,
    pub wrapper: Option<Wrapper>,
    pub type_code: Option<FieldType>,
    pub title: Option<String>,
}

/// Split a raw option on the first `|` into (shorthand, title).
/// An empty title is treated as absent.
pub fn parse_channel_arg(arg: &str) -> (&str, Option<String>) {
    match arg.split_once('|') {
        Some((shorthand, title)) if !title.is_empty() => (shorthand, Some(title.to_string())),
        Some((shorthand, _)) => (shorthand, None),
        None => (arg, None),
    }
}

fn type_code_suffix(input: &str) -> IResult<&str, FieldType> {
    all_consuming(map_opt(anychar, FieldType::from_code))(input)
}

fn wrapped(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(pair(
        identifier,
        delimited(char('('), take_while(|c: char| c != '(' && c != ')'), char(')')),
    ))(input)
}

/// Parse a full channel option such as `sum(amount):Q|Total`.
///
/// Malformed type codes are left in place, so `amount:H` parses as the
/// literal field `amount:H` and is rejected later when the field is looked
/// up in the dataset.
pub fn parse_shorthand(arg: &str) -> Shorthand {
    let (text, title) = parse_channel_arg(arg);

    let (body, type_code) = match text.rsplit_once(':') {
        Some((body, code)) => match type_code_suffix(code) {
            Ok((_, t)) => (body, Some(t)),
            Err(_) => (text, None),
        },
        None => (text, None),
    };

    let (field, wrapper) = match wrapped(body) {
        Ok((_, (func, inner))) => {
            let field = if inner.is_empty() { None } else { Some(inner.to_string()) };
            (field, Some(Wrapper::from_func(func)))
        }
        Err(_) => (Some(body.to_string()), None),
    };

    Shorthand {
        text: text.to_string(),
        field,
        wrapper,
        type_code,
        title,
    }
}
