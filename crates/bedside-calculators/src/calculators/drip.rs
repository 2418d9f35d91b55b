use bedside_core::numeric::{display, round_whole, safe_div};
use bedside_core::tone::Tone;

use crate::error::CalculatorError;
use crate::fields::{Field, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

/// Unrounded drip rate: (volume × drop factor) ÷ minutes.
pub fn drip_rate_exact(volume_ml: f64, duration_min: f64, drop_factor: f64) -> f64 {
    safe_div(volume_ml * drop_factor, duration_min)
}

/// Drip rate in drops per minute, rounded to a whole drop.
pub fn drip_rate(volume_ml: f64, duration_min: f64, drop_factor: f64) -> f64 {
    round_whole(drip_rate_exact(volume_ml, duration_min, drop_factor))
}

/// Gravity drip rate in gtt/min.
pub struct DripRate;

impl Calculator for DripRate {
    fn id(&self) -> &str {
        "drip_rate"
    }

    fn name(&self) -> &str {
        "Drops per minute"
    }

    fn subtitle(&self) -> &str {
        "(Volume × drop factor) ÷ time"
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::number("volume", "Volume", Some("mL"), 100.0),
                Field::number("minutes", "Time", Some("min"), 30.0),
                Field::number("drop_factor", "Drop factor", Some("gtt/mL"), 20.0)
                    .with_description("Usually 20 gtt/mL for standard sets, 60 for micro-drip"),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let volume = inputs.number("volume")?;
        let minutes = inputs.number("minutes")?;
        let factor = inputs.number("drop_factor")?;

        let gtt = drip_rate(volume, minutes, factor);
        Ok(Outcome::new(self.id(), format!("{gtt} gtt/min"), Tone::Ok)
            .with_value(gtt, "gtt/min")
            .with_detail(
                "Exact rate",
                format!("{} gtt/min", display(drip_rate_exact(volume, minutes, factor))),
            ))
    }
}
