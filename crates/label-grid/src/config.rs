//! Layered print configuration
//!
//! Each field is resolved from a low-priority default and a high-priority
//! override, then parsed once into a magnitude and unit.

use std::collections::{BTreeMap, BTreeSet};

use crate::constants::*;
use crate::types::*;
use crate::units::{NumericValue, to_float, to_int};

/// Raw settings keyed by field name
pub type ConfigMap = BTreeMap<String, RawValue>;

/// Declared type of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

/// A single configuration field with its resolved value.
///
/// The parsed number is a snapshot taken at construction; build a new field
/// to pick up a different default or override.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigField {
    name: String,
    kind: FieldKind,
    default: Option<RawValue>,
    preferred: Option<RawValue>,
    parsed: Option<NumericValue>,
}

impl ConfigField {
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        default: Option<RawValue>,
        preferred: Option<RawValue>,
    ) -> Result<Self> {
        let name = name.into();

        let parsed = match (kind, resolve(default.as_ref(), preferred.as_ref())) {
            (FieldKind::Integer, Some(raw)) => {
                let (number, unit) = to_int(Some(raw)).map_err(|e| with_field(&name, e))?;
                Some(NumericValue {
                    magnitude: number as f64,
                    unit,
                })
            }
            (FieldKind::Float, Some(raw)) => {
                let (magnitude, unit) = to_float(Some(raw)).map_err(|e| with_field(&name, e))?;
                Some(NumericValue { magnitude, unit })
            }
            _ => None,
        };

        Ok(Self {
            name,
            kind,
            default,
            preferred,
            parsed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Effective raw value: the override when present, otherwise the default
    pub fn value(&self) -> Option<&RawValue> {
        resolve(self.default.as_ref(), self.preferred.as_ref())
    }

    /// Parsed magnitude, for numeric fields with a value
    pub fn number(&self) -> Option<f64> {
        self.parsed.as_ref().map(|v| v.magnitude)
    }

    /// Unit suffix the value was written with, if any
    pub fn unit(&self) -> Option<&str> {
        self.parsed.as_ref().and_then(|v| v.unit.as_deref())
    }

    /// Parsed magnitude for integer fields
    pub fn integer(&self) -> Option<i64> {
        match self.kind {
            FieldKind::Integer => self.number().map(|n| n as i64),
            _ => None,
        }
    }
}

fn with_field(name: &str, err: LabelError) -> LabelError {
    match err {
        LabelError::Parse(msg) => LabelError::Parse(format!("{}: {}", name, msg)),
        LabelError::NonIntegral(value) => LabelError::NonIntegral(format!("{}={}", name, value)),
        LabelError::IntegerRange(value) => LabelError::IntegerRange(format!("{}={}", name, value)),
        other => other,
    }
}

/// Two-slot resolution: the override wins whenever it is present.
pub fn resolve<'a>(
    default: Option<&'a RawValue>,
    preferred: Option<&'a RawValue>,
) -> Option<&'a RawValue> {
    preferred.or(default)
}

/// The fixed set of print layout fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrintField {
    PageRows,
    PageColumns,
    LabelHeight,
    LabelWidth,
    PageWidth,
    PageHeight,
    PageTopMargin,
    PageBottomMargin,
    PageLeftMargin,
    PageRightMargin,
}

impl PrintField {
    pub const ALL: [PrintField; 10] = [
        PrintField::PageRows,
        PrintField::PageColumns,
        PrintField::LabelHeight,
        PrintField::LabelWidth,
        PrintField::PageWidth,
        PrintField::PageHeight,
        PrintField::PageTopMargin,
        PrintField::PageBottomMargin,
        PrintField::PageLeftMargin,
        PrintField::PageRightMargin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrintField::PageRows => "page_rows",
            PrintField::PageColumns => "page_columns",
            PrintField::LabelHeight => "label_height",
            PrintField::LabelWidth => "label_width",
            PrintField::PageWidth => "page_width",
            PrintField::PageHeight => "page_height",
            PrintField::PageTopMargin => "page_top_margin",
            PrintField::PageBottomMargin => "page_bottom_margin",
            PrintField::PageLeftMargin => "page_left_margin",
            PrintField::PageRightMargin => "page_right_margin",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            PrintField::PageRows | PrintField::PageColumns => FieldKind::Integer,
            _ => FieldKind::Float,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Print settings resolved from plugin defaults and request overrides
#[derive(Debug, Clone, PartialEq)]
pub struct PrintConfig {
    pub page_rows: ConfigField,
    pub page_columns: ConfigField,
    pub label_height: ConfigField,
    pub label_width: ConfigField,
    pub page_width: ConfigField,
    pub page_height: ConfigField,
    pub page_top_margin: ConfigField,
    pub page_bottom_margin: ConfigField,
    pub page_left_margin: ConfigField,
    pub page_right_margin: ConfigField,
}

impl PrintConfig {
    /// Resolve every print field from the two layers.
    ///
    /// Fails on the first field whose effective value does not parse.
    pub fn new(defaults: &ConfigMap, overrides: &ConfigMap) -> Result<Self> {
        let build = |field: PrintField| {
            ConfigField::new(
                field.name(),
                field.kind(),
                defaults.get(field.name()).cloned(),
                overrides.get(field.name()).cloned(),
            )
        };

        Ok(Self {
            page_rows: build(PrintField::PageRows)?,
            page_columns: build(PrintField::PageColumns)?,
            label_height: build(PrintField::LabelHeight)?,
            label_width: build(PrintField::LabelWidth)?,
            page_width: build(PrintField::PageWidth)?,
            page_height: build(PrintField::PageHeight)?,
            page_top_margin: build(PrintField::PageTopMargin)?,
            page_bottom_margin: build(PrintField::PageBottomMargin)?,
            page_left_margin: build(PrintField::PageLeftMargin)?,
            page_right_margin: build(PrintField::PageRightMargin)?,
        })
    }

    /// Built-in defaults layered under `overrides`
    pub fn with_overrides(overrides: &ConfigMap) -> Result<Self> {
        Self::new(&plugin_defaults(), overrides)
    }

    pub fn get(&self, field: PrintField) -> &ConfigField {
        match field {
            PrintField::PageRows => &self.page_rows,
            PrintField::PageColumns => &self.page_columns,
            PrintField::LabelHeight => &self.label_height,
            PrintField::LabelWidth => &self.label_width,
            PrintField::PageWidth => &self.page_width,
            PrintField::PageHeight => &self.page_height,
            PrintField::PageTopMargin => &self.page_top_margin,
            PrintField::PageBottomMargin => &self.page_bottom_margin,
            PrintField::PageLeftMargin => &self.page_left_margin,
            PrintField::PageRightMargin => &self.page_right_margin,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &ConfigField> {
        PrintField::ALL.into_iter().map(|field| self.get(field))
    }

    /// All units observed across the fields
    pub fn distinct_units(&self) -> BTreeSet<String> {
        self.fields()
            .filter_map(ConfigField::unit)
            .map(str::to_string)
            .collect()
    }

    /// Check that at most one unit is in use and return it.
    ///
    /// A configuration where no field carries a unit yields an empty string.
    pub fn shared_unit(&self) -> Result<String> {
        let units = self.distinct_units();
        if units.len() > 1 {
            return Err(LabelError::MixedUnits(units));
        }
        Ok(units.into_iter().next().unwrap_or_default())
    }

    /// Effective raw value of every field, e.g. to pre-fill a settings form
    pub fn effective_values(&self) -> BTreeMap<&'static str, Option<RawValue>> {
        PrintField::ALL
            .into_iter()
            .map(|field| (field.name(), self.get(field).value().cloned()))
            .collect()
    }

    /// Effective values as a `ConfigMap`, dropping unset fields
    pub fn to_config_map(&self) -> ConfigMap {
        self.effective_values()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
            .collect()
    }

    /// Number of a dimension that must be present for layout
    pub fn required_number(&self, field: PrintField) -> Result<f64> {
        self.get(field)
            .number()
            .ok_or(LabelError::MissingField(field.name()))
    }

    /// Number of an optional dimension, treating unset as zero
    pub fn number_or_zero(&self, field: PrintField) -> f64 {
        self.get(field).number().unwrap_or(0.0)
    }

    /// Row or column count, if configured
    pub fn count(&self, field: PrintField) -> Result<Option<usize>> {
        match self.get(field).integer() {
            None => Ok(None),
            Some(n) if n > 0 => usize::try_from(n).map(Some).map_err(|_| {
                LabelError::InvalidArguments(format!("{} is too large: {}", field.name(), n))
            }),
            Some(n) => Err(LabelError::InvalidArguments(format!(
                "{} must be positive, got {}",
                field.name(),
                n
            ))),
        }
    }
}

/// Default print settings for A4 label sheets
pub fn plugin_defaults() -> ConfigMap {
    [
        (PrintField::PageWidth, RawValue::from(DEFAULT_PAGE_WIDTH)),
        (PrintField::PageHeight, RawValue::from(DEFAULT_PAGE_HEIGHT)),
        (PrintField::PageTopMargin, RawValue::from(DEFAULT_TOP_MARGIN)),
        (PrintField::PageBottomMargin, RawValue::from(DEFAULT_BOTTOM_MARGIN)),
        (PrintField::PageLeftMargin, RawValue::from(DEFAULT_LEFT_MARGIN)),
        (PrintField::PageRightMargin, RawValue::from(DEFAULT_RIGHT_MARGIN)),
        (PrintField::PageColumns, RawValue::Integer(DEFAULT_PAGE_COLUMNS)),
        (PrintField::PageRows, RawValue::Integer(DEFAULT_PAGE_ROWS)),
        (PrintField::LabelWidth, RawValue::from(DEFAULT_LABEL_WIDTH)),
        (PrintField::LabelHeight, RawValue::from(DEFAULT_LABEL_HEIGHT)),
    ]
    .into_iter()
    .map(|(field, value)| (field.name().to_string(), value))
    .collect()
}

/// Parse a `key=value` override.
///
/// An empty value means the field was left blank and yields `None`.
pub fn parse_override(pair: &str) -> Result<Option<(String, RawValue)>> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| LabelError::Config(format!("Expected key=value, got '{}'", pair)))?;

    let key = key.trim();
    let field = PrintField::from_name(key)
        .ok_or_else(|| LabelError::Config(format!("Unknown print setting '{}'", key)))?;

    let value = RawValue::from(value.trim());
    if value.is_blank() {
        return Ok(None);
    }
    Ok(Some((field.name().to_string(), value)))
}

/// Collect `key=value` overrides into a map; later pairs win
pub fn overrides_from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Result<ConfigMap> {
    let mut map = ConfigMap::new();
    for pair in pairs {
        if let Some((key, value)) = parse_override(pair)? {
            map.insert(key, value);
        }
    }
    Ok(map)
}
