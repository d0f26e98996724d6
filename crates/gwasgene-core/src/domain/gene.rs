//! Gene-level association records.
//!
//! A [`GeneRecord`] is one row of a gene-based summary statistics file.
//! Sumstat producers disagree on column names, so each field accepts a
//! small set of aliases (see [`Field::aliases`]). Validation collects every
//! field error of a row instead of stopping at the first one.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Fields
// ============================================================================

/// A field of a [`GeneRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Gene name
    Name,
    /// Chromosome name
    Chromosome,
    /// Base pair position
    Position,
    /// p-value of the association
    PValue,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Chromosome, Self::Position, Self::PValue];

    /// Column names accepted for this field, in order of preference.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["Name", "gene_name", "name"],
            Self::Chromosome => &["chromosome"],
            Self::Position => &["base_pair_location", "position"],
            Self::PValue => &["p_value", "pValue"],
        }
    }

    /// Canonical (serialized) name of the field.
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Chromosome => "chromosome",
            Self::Position => "position",
            Self::PValue => "pValue",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

// ============================================================================
// Validation errors
// ============================================================================

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is absent from the row.
    Missing,
    /// The value is not a valid integer.
    InvalidInteger,
    /// The value is not a valid number.
    InvalidFloat,
    /// The value must be greater than 0.
    NotPositive,
    /// The value must be less than or equal to 1.
    GreaterThanOne,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Missing => "field required",
            Self::InvalidInteger => "input should be a valid integer",
            Self::InvalidFloat => "input should be a valid number",
            Self::NotPositive => "input should be greater than 0",
            Self::GreaterThanOne => "input should be less than or equal to 1",
        };
        f.write_str(msg)
    }
}

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The field that failed.
    pub field: Field,
    /// The failure reason.
    pub kind: FieldErrorKind,
    /// The offending input, if any was present.
    pub input: Option<String>,
}

impl FieldError {
    fn new(field: Field, kind: FieldErrorKind, input: Option<&str>) -> Self {
        Self {
            field,
            kind,
            input: input.map(str::to_string),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.input {
            Some(input) => write!(f, "{}: {} (input: {input:?})", self.field, self.kind),
            None => write!(f, "{}: {}", self.field, self.kind),
        }
    }
}

/// All field errors of a rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Individual field failures, in field order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Whether a given field is among the failures.
    pub fn has_field(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{count} validation {noun} for GeneRecord")?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Field parsers
// ============================================================================

/// Parse a base pair position: an integer strictly greater than zero.
///
/// Integer-valued decimals such as `"1200.0"` are accepted.
pub fn parse_position(input: &str) -> Result<u64, FieldErrorKind> {
    let trimmed = input.trim();
    let value: i128 = match trimmed.parse::<i128>() {
        Ok(v) => v,
        Err(_) => integral_decimal(trimmed).ok_or(FieldErrorKind::InvalidInteger)?,
    };

    if value <= 0 {
        return Err(FieldErrorKind::NotPositive);
    }
    u64::try_from(value).map_err(|_| FieldErrorKind::InvalidInteger)
}

/// Accept `"<digits>.<zeros>"`, the only decimal form that is still an integer.
fn integral_decimal(input: &str) -> Option<i128> {
    let (whole, frac) = input.split_once('.')?;
    if frac.is_empty() || !frac.bytes().all(|b| b == b'0') {
        return None;
    }
    whole.parse::<i128>().ok()
}

/// Parse a p-value: a number in `(0, 1]`.
pub fn parse_p_value(input: &str) -> Result<f64, FieldErrorKind> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| FieldErrorKind::InvalidFloat)?;
    check_p_value(value)
}

fn check_p_value(value: f64) -> Result<f64, FieldErrorKind> {
    if value.is_nan() {
        Err(FieldErrorKind::InvalidFloat)
    } else if value <= 0.0 {
        Err(FieldErrorKind::NotPositive)
    } else if value > 1.0 {
        Err(FieldErrorKind::GreaterThanOne)
    } else {
        Ok(value)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Raw, unvalidated cell values for one row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFields<'a> {
    pub name: Option<&'a str>,
    pub chromosome: Option<&'a str>,
    pub position: Option<&'a str>,
    pub p_value: Option<&'a str>,
}

/// A row in a gene-based sumstat file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneRecord")]
pub struct GeneRecord {
    /// Gene name
    pub name: String,
    /// Chromosome name
    pub chromosome: String,
    /// Base pair position
    pub position: u64,
    /// p-value of GWAS association
    #[serde(rename = "pValue")]
    pub p_value: f64,
}

impl GeneRecord {
    /// Validate raw cell values and build a record.
    pub fn from_fields(fields: RecordFields<'_>) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let name = required(Field::Name, fields.name, &mut errors);
        let chromosome = required(Field::Chromosome, fields.chromosome, &mut errors);
        let position = required(Field::Position, fields.position, &mut errors).and_then(|raw| {
            parse_position(raw)
                .map_err(|kind| errors.push(FieldError::new(Field::Position, kind, Some(raw))))
                .ok()
        });
        let p_value = required(Field::PValue, fields.p_value, &mut errors).and_then(|raw| {
            parse_p_value(raw)
                .map_err(|kind| errors.push(FieldError::new(Field::PValue, kind, Some(raw))))
                .ok()
        });

        match (name, chromosome, position, p_value) {
            (Some(name), Some(chromosome), Some(position), Some(p_value)) if errors.is_empty() => {
                Ok(Self {
                    name: name.to_string(),
                    chromosome: chromosome.to_string(),
                    position,
                    p_value,
                })
            }
            _ => Err(ValidationError { errors }),
        }
    }
}

fn required<'a>(
    field: Field,
    value: Option<&'a str>,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    if value.is_none() {
        errors.push(FieldError::new(field, FieldErrorKind::Missing, None));
    }
    value
}

// ============================================================================
// Serde input form
// ============================================================================

/// Input map of a record; keys are matched against [`Field::aliases`].
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawGeneRecord(HashMap<String, Value>);

impl RawGeneRecord {
    /// Text of the first alias present for `field`. `null` counts as absent.
    fn cell(&self, field: Field) -> Option<String> {
        let value = field
            .aliases()
            .iter()
            .find_map(|alias| self.0.get(*alias))?;
        match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl TryFrom<RawGeneRecord> for GeneRecord {
    type Error = ValidationError;

    fn try_from(raw: RawGeneRecord) -> Result<Self, Self::Error> {
        let [name, chromosome, position, p_value] = Field::ALL.map(|field| raw.cell(field));

        Self::from_fields(RecordFields {
            name: name.as_deref(),
            chromosome: chromosome.as_deref(),
            position: position.as_deref(),
            p_value: p_value.as_deref(),
        })
    }
}
