// Axis limit parser
// Format: "min,max", e.g. "-10,50" or "2020-01-01,2021-01-01"

use super::lexer::number_value;
use crate::error::{Result, VizError};
use nom::{
    bytes::complete::is_not,
    character::complete::char,
    combinator::all_consuming,
    sequence::separated_pair,
    IResult,
};
use serde_json::Value;

fn bounds(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(is_not(","), char(','), is_not(",")))(input)
}

fn bound_value(token: &str) -> Value {
    match number_value(token) {
        Ok((_, v)) => v,
        Err(_) => Value::String(token.trim().to_string()),
    }
}

/// Parse a `"min,max"` limit string into a two-element scale domain.
/// Numeric bounds become JSON numbers; anything else (dates) stays a string.
pub fn parse_limits(input: &str) -> Result<[Value; 2]> {
    let (_, (min, max)) = bounds(input).map_err(|_| {
        VizError::InvalidValue(format!(
            "'{}' is not a valid axis limit; expected 'min,max'",
            input
        ))
    })?;

    if min.trim().is_empty() || max.trim().is_empty() {
        return Err(VizError::InvalidValue(format!(
            "'{}' is not a valid axis limit; expected 'min,max'",
            input
        )));
    }

    Ok([bound_value(min), bound_value(max)])
}
