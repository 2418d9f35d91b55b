use std::collections::BTreeMap;
use std::str::FromStr;

use bedside_core::numeric::NumericInput;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CalculatorError;

/// How a field is entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Free decimal entry.
    Number,
    /// One value out of a fixed option list.
    Choice,
    /// Checkbox.
    Toggle,
}

/// Plausible range for a numeric field. Only used for advisory validation;
/// formulas accept any finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One input on a calculator form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub id: String,
    pub label: String,
    pub unit: Option<String>,
    pub kind: FieldKind,
    /// Raw text used when the snapshot carries no value for this field.
    pub default: String,
    pub range: Option<FieldRange>,
    pub options: Vec<FieldOption>,
    pub description: Option<String>,
}

impl Field {
    pub fn number(id: &str, label: &str, unit: Option<&str>, default: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            unit: unit.map(str::to_string),
            kind: FieldKind::Number,
            default: default.to_string(),
            range: None,
            options: Vec::new(),
            description: None,
        }
    }

    pub fn choice(id: &str, label: &str, default: &str, options: Vec<FieldOption>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            unit: None,
            kind: FieldKind::Choice,
            default: default.to_string(),
            range: None,
            options,
            description: None,
        }
    }

    pub fn toggle(id: &str, label: &str, default: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            unit: None,
            kind: FieldKind::Toggle,
            default: default.to_string(),
            range: None,
            options: Vec::new(),
            description: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(FieldRange::new(min, max));
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        if let Some(range) = self.range.as_mut() {
            range.step = Some(step);
        }
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn option(&self, raw: &str) -> Option<&FieldOption> {
        let raw = raw.trim();
        self.options
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(raw))
    }
}

/// A single `field=value` pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldEntry {
    pub field_id: String,
    pub value: String,
}

impl FromStr for FieldEntry {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field_id, value) = s
            .split_once('=')
            .ok_or_else(|| CalculatorError::MalformedEntry(s.to_string()))?;
        let field_id = field_id.trim();
        if field_id.is_empty() {
            return Err(CalculatorError::MalformedEntry(s.to_string()));
        }
        Ok(Self {
            field_id: field_id.to_string(),
            value: value.to_string(),
        })
    }
}

/// Immutable snapshot of the raw form values for one calculator.
///
/// The presentation layer owns mutation; each recomputation receives a
/// fresh snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldValues {
    pub values: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[FieldEntry]) -> Self {
        let values = entries
            .iter()
            .map(|e| (e.field_id.clone(), e.value.clone()))
            .collect();
        Self { values }
    }

    pub fn with(mut self, field_id: &str, value: impl ToString) -> Self {
        self.values.insert(field_id.to_string(), value.to_string());
        self
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read access to a snapshot, resolved against a calculator's field list.
///
/// Fields missing from the snapshot take their declared default. A field
/// that is present but unparsable reads as NaN ("not computable"), which
/// the formulas turn into a zero result.
pub struct Inputs<'a> {
    calculator_id: &'a str,
    fields: &'a [Field],
    values: &'a FieldValues,
}

impl<'a> Inputs<'a> {
    /// Bind a snapshot to a field list, rejecting ids the calculator does
    /// not declare.
    pub fn new(
        calculator_id: &'a str,
        fields: &'a [Field],
        values: &'a FieldValues,
    ) -> Result<Self, CalculatorError> {
        if let Some(unknown) = values
            .values
            .keys()
            .find(|id| !fields.iter().any(|f| &f.id == *id))
        {
            return Err(CalculatorError::UnknownField {
                calculator_id: calculator_id.to_string(),
                field_id: unknown.clone(),
            });
        }
        Ok(Self {
            calculator_id,
            fields,
            values,
        })
    }

    fn field(&self, field_id: &str) -> Result<&'a Field, CalculatorError> {
        self.fields
            .iter()
            .find(|f| f.id == field_id)
            .ok_or_else(|| CalculatorError::UnknownField {
                calculator_id: self.calculator_id.to_string(),
                field_id: field_id.to_string(),
            })
    }

    fn raw(&self, field: &'a Field) -> &'a str {
        self.values.get(&field.id).unwrap_or(field.default.as_str())
    }

    pub fn input(&self, field_id: &str) -> Result<NumericInput, CalculatorError> {
        let field = self.field(field_id)?;
        Ok(NumericInput::parse(self.raw(field)))
    }

    pub fn number(&self, field_id: &str) -> Result<f64, CalculatorError> {
        Ok(self.input(field_id)?.or_nan())
    }

    /// The canonical option value selected for a choice field.
    pub fn choice(&self, field_id: &str) -> Result<&'a str, CalculatorError> {
        let field = self.field(field_id)?;
        let raw = self.raw(field);
        field
            .option(raw)
            .map(|o| o.value.as_str())
            .ok_or_else(|| CalculatorError::InvalidChoice {
                field_id: field_id.to_string(),
                value: raw.to_string(),
            })
    }

    pub fn flag(&self, field_id: &str) -> Result<bool, CalculatorError> {
        let field = self.field(field_id)?;
        let raw = self.raw(field);
        parse_flag(raw).ok_or_else(|| CalculatorError::InvalidChoice {
            field_id: field_id.to_string(),
            value: raw.to_string(),
        })
    }
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field_id: String,
    pub value: String,
    pub expected_range: Option<FieldRange>,
    pub message: String,
}

/// Advisory checks for a snapshot. Never blocks computation.
pub(crate) fn validate(
    calculator_name: &str,
    fields: &[Field],
    values: &FieldValues,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (field_id, value) in &values.values {
        let Some(field) = fields.iter().find(|f| &f.id == field_id) else {
            errors.push(ValidationError {
                field_id: field_id.clone(),
                value: value.clone(),
                expected_range: None,
                message: format!("{calculator_name}: unknown field '{field_id}'"),
            });
            continue;
        };

        let problem = match field.kind {
            FieldKind::Number => match NumericInput::parse(value).value() {
                None => Some(format!("{} is not a number", field.label)),
                Some(n) => field.range.filter(|r| !r.contains(n)).map(|r| {
                    format!(
                        "{} {} is outside range [{}, {}]",
                        field.label, n, r.min, r.max
                    )
                }),
            },
            FieldKind::Choice => field.option(value).is_none().then(|| {
                let allowed: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
                format!(
                    "{} must be one of {}",
                    field.label,
                    allowed.join(", ")
                )
            }),
            FieldKind::Toggle => parse_flag(value)
                .is_none()
                .then(|| format!("{} must be true or false", field.label)),
        };

        if let Some(problem) = problem {
            errors.push(ValidationError {
                field_id: field_id.clone(),
                value: value.clone(),
                expected_range: field.range,
                message: format!("{calculator_name}: {problem}"),
            });
        }
    }
    errors
}
