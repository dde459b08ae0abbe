use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Non-integral value '{0}' cannot be used as a whole number")]
    NonIntegral(String),
    #[error("Value '{0}' is too large for a whole number")]
    IntegerRange(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Mixed units in configuration: {}", format_units(.0))]
    MixedUnits(BTreeSet<String>),
    #[error("Missing required value for {0}")]
    MissingField(&'static str),
    #[error("Index {index} is outside the grid (1..={cells})")]
    IndexOutOfRange { index: usize, cells: usize },
    #[error("{0}")]
    Overflow(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabelError>;

fn format_units(units: &BTreeSet<String>) -> String {
    units.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// A raw configuration value as supplied by a defaults table or a request.
///
/// Values that are already numeric skip string parsing entirely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// True for text values that contain nothing but whitespace
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(n) => write!(f, "{}", n),
            RawValue::Float(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

/// Order in which sequential indices are assigned to grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillOrder {
    /// Fill a whole row left-to-right before moving down
    #[default]
    ByRow,
    /// Fill a whole column top-to-bottom before moving right
    ByColumn,
}

/// Page axis, used to report which direction overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}
