// Shared token parsers

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, i64 as parse_i64, multispace0},
    combinator::{all_consuming, map, recognize, verify},
    multi::many0_count,
    number::complete::double,
    sequence::{delimited, pair},
    IResult,
};
use serde_json::Value;

/// Wrap a parser so that it skips surrounding whitespace
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse an identifier: a letter or underscore followed by letters, digits or underscores
pub fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// Parse a whole token as a JSON number, preferring integers.
/// NaN and infinities have no JSON form and are rejected.
pub fn number_value(input: &str) -> IResult<&str, Value> {
    alt((
        map(all_consuming(ws(parse_i64)), Value::from),
        map(
            all_consuming(ws(verify(double, |v: &f64| v.is_finite()))),
            Value::from,
        ),
    ))(input)
}
