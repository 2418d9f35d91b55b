//! bedside-calculators
//!
//! Bedside clinical arithmetic: dose volumes, infusion and drip rates,
//! Glasgow Coma Scale, NEWS2, Cockcroft–Gault, BMI and blood-gas
//! interpretation, plus the built-in self-test. Pure functions, no I/O.
//! Every formula is total: invalid input degrades to a conventional
//! fallback (0 or an indeterminate classification) instead of failing.

pub mod calculators;
pub mod error;
pub mod fields;
pub mod outcome;
pub mod selftest;

use calculators::blood_gas::AlveolarConditions;
use error::CalculatorError;
use fields::{Field, FieldValues, Inputs, ValidationError};
use outcome::Outcome;

/// Trait implemented by each calculator.
pub trait Calculator: Send + Sync {
    /// Unique identifier (e.g., "news2", "blood_gas").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "NEWS2 (adults)").
    fn name(&self) -> &str;

    /// One-line description shown under the name.
    fn subtitle(&self) -> &str;

    /// The form fields this calculator reads.
    fn fields(&self) -> &[Field];

    /// Reminder printed under the result, if any.
    fn footnote(&self) -> Option<&str> {
        None
    }

    /// Compute the result from resolved inputs.
    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError>;

    /// Compute the result from a raw snapshot of form values.
    ///
    /// Only structural problems fail (unknown field, value outside an option
    /// list). Numeric problems degrade the result instead.
    fn evaluate(&self, values: &FieldValues) -> Result<Outcome, CalculatorError> {
        let inputs = Inputs::new(self.id(), self.fields(), values)?;
        let outcome = self.compute(&inputs)?;
        Ok(match self.footnote() {
            Some(note) if outcome.footnote.is_none() => outcome.with_footnote(note),
            _ => outcome,
        })
    }

    /// Advisory checks of a snapshot against this calculator's fields.
    fn validate_entries(&self, values: &FieldValues) -> Vec<ValidationError> {
        fields::validate(self.name(), self.fields(), values)
    }
}

/// Return all registered calculators, with standard sea-level conditions
/// for the alveolar gas equation.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    all_calculators_with(AlveolarConditions::default())
}

/// Return all registered calculators, using `conditions` for blood gases.
pub fn all_calculators_with(conditions: AlveolarConditions) -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::dose::DoseCalculator),
        Box::new(calculators::infusion::InfusionRate),
        Box::new(calculators::drip::DripRate),
        Box::new(calculators::gcs::Glasgow),
        Box::new(calculators::news2::News2),
        Box::new(calculators::crcl::CreatinineClearance),
        Box::new(calculators::bmi::BodyMassIndex),
        Box::new(calculators::blood_gas::BloodGas { conditions }),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<Box<dyn Calculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}

/// Look up a calculator by ID, failing with [`CalculatorError::UnknownCalculator`].
pub fn require_calculator(
    id: &str,
    conditions: AlveolarConditions,
) -> Result<Box<dyn Calculator>, CalculatorError> {
    all_calculators_with(conditions)
        .into_iter()
        .find(|c| c.id() == id)
        .ok_or_else(|| CalculatorError::UnknownCalculator(id.to_string()))
}
