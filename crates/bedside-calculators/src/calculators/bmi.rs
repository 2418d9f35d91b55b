use bedside_core::numeric::{display, safe_div};
use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;
use crate::fields::{Field, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

/// Body-mass index in kg/m². A height of zero or less gives 0.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm.is_nan() || height_cm <= 0.0 {
        return 0.0;
    }
    let metres = height_cm / 100.0;
    safe_div(weight_kg, metres * metres)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi < 25.0 {
            BmiBand::Normal
        } else if bmi < 30.0 {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal weight",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obese",
        }
    }
}

/// Body-mass index.
pub struct BodyMassIndex;

impl Calculator for BodyMassIndex {
    fn id(&self) -> &str {
        "bmi"
    }

    fn name(&self) -> &str {
        "BMI"
    }

    fn subtitle(&self) -> &str {
        "Body-mass index"
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::number("height", "Height", Some("cm"), 170.0).with_range(30.0, 250.0),
                Field::number("weight", "Weight", Some("kg"), 60.0).with_range(0.0, 400.0),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let bmi = body_mass_index(inputs.number("height")?, inputs.number("weight")?);
        let band = BmiBand::from_bmi(bmi);
        Ok(Outcome::new(
            self.id(),
            format!("BMI = {} — {}", display(bmi), band.label()),
            Tone::Ok,
        )
        .with_value(bmi, "kg/m²")
        .with_band(band.label()))
    }
}
