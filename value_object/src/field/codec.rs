//! Fixed storage and public formats for typed fields.
//!
//! Storage formats are strict: dates are `YYYY-MM-DD`, datetimes are
//! `YYYY-MM-DD HH:MM:SS` in UTC with no zone suffix, and decimals are plain
//! fixed-point text. Public formats are ISO-8601.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Utc};

use crate::value::json_kind_name;
use crate::{ExactDecimal, ValueObjectError, ValueObjectResult};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_EXPECTED: &str = "date text (YYYY-MM-DD)";
const DATETIME_EXPECTED: &str = "datetime text (YYYY-MM-DD HH:MM:SS)";
const DECIMAL_EXPECTED: &str = "decimal text or number";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

/// ISO-8601 with an explicit `+00:00` offset; microseconds appear only when
/// the timestamp has a sub-second part.
pub(crate) fn public_datetime(at: &DateTime<Utc>) -> String {
    let precision = if at.nanosecond() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(precision, false)
}

pub(crate) fn public_date(date: NaiveDate) -> String {
    date.to_string()
}

/// Fixed-point rendering; never uses exponent notation.
pub(crate) fn format_decimal(decimal: &ExactDecimal) -> String {
    decimal.to_plain_string()
}

pub(crate) fn parse_date(stored: &serde_json::Value) -> ValueObjectResult<NaiveDate> {
    let text = expect_text(stored, DATE_EXPECTED)?;
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ValueObjectError::malformed(DATE_EXPECTED, format!("{text:?}")))
}

pub(crate) fn parse_datetime(stored: &serde_json::Value) -> ValueObjectResult<DateTime<Utc>> {
    let text = expect_text(stored, DATETIME_EXPECTED)?;
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ValueObjectError::malformed(DATETIME_EXPECTED, format!("{text:?}")))
}

/// Parses decimal text or a JSON number, accepting exponent notation such as
/// `2.6E-2`.
pub(crate) fn parse_decimal(stored: &serde_json::Value) -> ValueObjectResult<ExactDecimal> {
    let text = match stored {
        serde_json::Value::String(text) => text.trim().to_owned(),
        serde_json::Value::Number(number) => number.to_string(),
        other => {
            return Err(ValueObjectError::malformed(
                DECIMAL_EXPECTED,
                json_kind_name(other),
            ));
        }
    };
    text.parse().map_err(|_| ValueObjectError::malformed(DECIMAL_EXPECTED, format!("{text:?}")))
}

fn expect_text<'a>(
    stored: &'a serde_json::Value,
    expected: &'static str,
) -> ValueObjectResult<&'a str> {
    stored
        .as_str()
        .ok_or_else(|| ValueObjectError::malformed(expected, json_kind_name(stored)))
}
