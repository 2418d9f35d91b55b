use bedside_core::numeric::{display, safe_div};
use bedside_core::tone::Tone;

use crate::error::CalculatorError;
use crate::fields::{Field, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

/// Infusion rate in mL/h over a duration given as hours plus minutes.
/// A zero or negative duration yields 0.
pub fn infusion_rate(volume_ml: f64, hours: f64, minutes: f64) -> f64 {
    safe_div(volume_ml, hours + minutes / 60.0)
}

/// Pump rate in mL/h.
pub struct InfusionRate;

impl Calculator for InfusionRate {
    fn id(&self) -> &str {
        "infusion_rate"
    }

    fn name(&self) -> &str {
        "Infusion rate"
    }

    fn subtitle(&self) -> &str {
        "mL/h from volume and duration"
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::number("volume", "Volume to infuse", Some("mL"), 500.0),
                Field::number("hours", "Hours", Some("h"), 2.0),
                Field::number("minutes", "Minutes", Some("min"), 0.0)
                    .with_range(0.0, 59.0)
                    .with_step(1.0),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let rate = infusion_rate(
            inputs.number("volume")?,
            inputs.number("hours")?,
            inputs.number("minutes")?,
        );
        Ok(Outcome::new(self.id(), format!("{} mL/h", display(rate)), Tone::Ok)
            .with_value(rate, "mL/h"))
    }
}
