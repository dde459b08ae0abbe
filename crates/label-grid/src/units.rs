//! Unit-aware numeric parsing
//!
//! Page and label dimensions are written by people as physical measurements
//! ("210mm", "2.5 in"). These helpers split such values into a magnitude that
//! can be used for arithmetic and the unit suffix that was attached to it.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::*;

static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+(?:\.\d+)?").expect("valid number pattern")
});

const I64_LOWER: f64 = i64::MIN as f64;
const I64_UPPER: f64 = -(i64::MIN as f64);

/// A parsed magnitude with the unit suffix it was written with
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValue {
    pub magnitude: f64,
    pub unit: Option<String>,
}

impl NumericValue {
    pub fn new(magnitude: f64, unit: Option<&str>) -> Self {
        Self {
            magnitude,
            unit: unit.map(str::to_string),
        }
    }
}

/// Parse a raw value into a magnitude and an optional unit.
///
/// Numbers pass through with no unit. Strings are trimmed and must start with
/// `[+-]?digits(.digits)?`; whatever follows the number (trimmed) is the unit.
pub fn parse_numeric(raw: Option<&RawValue>) -> Result<NumericValue> {
    match raw {
        None => Err(LabelError::Parse("null is not numeric".to_string())),
        Some(RawValue::Integer(n)) => Ok(NumericValue::new(*n as f64, None)),
        Some(RawValue::Float(n)) => Ok(NumericValue::new(*n, None)),
        Some(RawValue::Text(text)) => parse_str(text),
    }
}

fn parse_str(text: &str) -> Result<NumericValue> {
    let trimmed = text.trim();
    let prefix = NUMBER_PREFIX
        .find(trimmed)
        .ok_or_else(|| LabelError::Parse(format!("'{}' does not start with a number", text)))?;

    let number = prefix.as_str();
    let magnitude: f64 = number
        .parse()
        .map_err(|e| LabelError::Parse(format!("'{}': {}", number, e)))?;

    let unit = trimmed[prefix.end()..].trim();
    Ok(NumericValue::new(
        magnitude,
        (!unit.is_empty()).then_some(unit),
    ))
}

/// Parse a value that must be a whole number.
///
/// Fractional magnitudes are rejected rather than rounded, and so are
/// magnitudes that do not fit in an `i64`.
pub fn to_int(raw: Option<&RawValue>) -> Result<(i64, Option<String>)> {
    let value = parse_numeric(raw)?;
    let text = || raw.map(ToString::to_string).unwrap_or_default();
    if value.magnitude.fract() != 0.0 {
        return Err(LabelError::NonIntegral(text()));
    }
    // i64::MAX is not representable as f64; 2^63 is the first value past it
    if !(I64_LOWER..I64_UPPER).contains(&value.magnitude) {
        return Err(LabelError::IntegerRange(text()));
    }
    Ok((value.magnitude as i64, value.unit))
}

/// Parse a value as a float, keeping its unit
pub fn to_float(raw: Option<&RawValue>) -> Result<(f64, Option<String>)> {
    let value = parse_numeric(raw)?;
    Ok((value.magnitude, value.unit))
}
