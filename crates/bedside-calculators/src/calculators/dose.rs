use bedside_core::numeric::{display, safe_div};
use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;
use crate::fields::{Field, FieldOption, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

/// Volume to draw for a weight-based prescription.
pub fn weight_based_volume(
    weight_kg: f64,
    dose_mg_per_kg: f64,
    concentration_mg_per_ml: f64,
) -> f64 {
    safe_div(weight_kg * dose_mg_per_kg, concentration_mg_per_ml)
}

/// Rule of three: desired amount over available concentration.
pub fn rule_of_three_volume(desired_mg: f64, available_mg_per_ml: f64) -> f64 {
    safe_div(desired_mg, available_mg_per_ml)
}

/// Volume to draw from an ampoule holding `content_mg` in `volume_ml`.
pub fn dilution_draw_volume(content_mg: f64, volume_ml: f64, desired_mg: f64) -> f64 {
    safe_div(desired_mg, content_mg) * volume_ml
}

/// The three mutually exclusive ways of working out a dose volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[ts(export)]
pub enum DoseMode {
    MgPerKg {
        weight_kg: f64,
        dose_mg_per_kg: f64,
        concentration_mg_per_ml: f64,
    },
    RuleOfThree {
        desired_mg: f64,
        available_mg_per_ml: f64,
    },
    Dilution {
        ampoule_content_mg: f64,
        ampoule_volume_ml: f64,
        desired_dose_mg: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseResult {
    /// Total prescribed amount, only known in mg/kg mode.
    pub total_mg: Option<f64>,
    pub volume_ml: f64,
}

impl DoseMode {
    pub fn evaluate(&self) -> DoseResult {
        match *self {
            DoseMode::MgPerKg {
                weight_kg,
                dose_mg_per_kg,
                concentration_mg_per_ml,
            } => DoseResult {
                total_mg: Some(weight_kg * dose_mg_per_kg),
                volume_ml: weight_based_volume(weight_kg, dose_mg_per_kg, concentration_mg_per_ml),
            },
            DoseMode::RuleOfThree {
                desired_mg,
                available_mg_per_ml,
            } => DoseResult {
                total_mg: None,
                volume_ml: rule_of_three_volume(desired_mg, available_mg_per_ml),
            },
            DoseMode::Dilution {
                ampoule_content_mg,
                ampoule_volume_ml,
                desired_dose_mg,
            } => DoseResult {
                total_mg: None,
                volume_ml: dilution_draw_volume(
                    ampoule_content_mg,
                    ampoule_volume_ml,
                    desired_dose_mg,
                ),
            },
        }
    }
}

/// Dose volume: mg/kg, rule of three, or dilution from an ampoule.
pub struct DoseCalculator;

impl DoseCalculator {
    fn mode(inputs: &Inputs<'_>) -> Result<DoseMode, CalculatorError> {
        Ok(match inputs.choice("mode")? {
            "rule_of_three" => DoseMode::RuleOfThree {
                desired_mg: inputs.number("desired_amount")?,
                available_mg_per_ml: inputs.number("available_concentration")?,
            },
            "dilution" => DoseMode::Dilution {
                ampoule_content_mg: inputs.number("ampoule_content")?,
                ampoule_volume_ml: inputs.number("ampoule_volume")?,
                desired_dose_mg: inputs.number("desired_dose")?,
            },
            _ => DoseMode::MgPerKg {
                weight_kg: inputs.number("weight")?,
                dose_mg_per_kg: inputs.number("dose_per_kg")?,
                concentration_mg_per_ml: inputs.number("concentration")?,
            },
        })
    }
}

impl Calculator for DoseCalculator {
    fn id(&self) -> &str {
        "dose"
    }

    fn name(&self) -> &str {
        "Dose calculation"
    }

    fn subtitle(&self) -> &str {
        "Rule of three, mg/kg, dilution"
    }

    fn footnote(&self) -> Option<&str> {
        Some("Always perform a double check according to local procedures.")
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::choice(
                    "mode",
                    "Mode",
                    "mg_per_kg",
                    vec![
                        FieldOption::new("mg_per_kg", "mg/kg"),
                        FieldOption::new("rule_of_three", "Rule of three"),
                        FieldOption::new("dilution", "Dilution"),
                    ],
                ),
                Field::number("weight", "Patient weight", Some("kg"), 70.0)
                    .with_range(0.0, 400.0)
                    .with_description("mg/kg mode"),
                Field::number("dose_per_kg", "Prescribed dose", Some("mg/kg"), 1.0)
                    .with_description("mg/kg mode"),
                Field::number("concentration", "Available concentration", Some("mg/mL"), 10.0)
                    .with_description("mg/kg mode"),
                Field::number("desired_amount", "Desired dose", Some("mg"), 100.0)
                    .with_description("rule of three mode"),
                Field::number(
                    "available_concentration",
                    "Concentration on hand",
                    Some("mg/mL"),
                    250.0,
                )
                .with_description("rule of three mode"),
                Field::number("ampoule_content", "Ampoule content", Some("mg"), 1000.0)
                    .with_description("dilution mode"),
                Field::number("ampoule_volume", "Ampoule volume", Some("mL"), 10.0)
                    .with_description("dilution mode"),
                Field::number("desired_dose", "Desired dose", Some("mg"), 250.0)
                    .with_description("dilution mode"),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let mode = Self::mode(inputs)?;
        let result = mode.evaluate();
        let volume = display(result.volume_ml);

        let outcome = match mode {
            DoseMode::MgPerKg { .. } => {
                let total = display(result.total_mg.unwrap_or_default());
                Outcome::new(
                    self.id(),
                    format!("{total} mg total → {volume} mL to draw."),
                    Tone::Ok,
                )
                .with_detail("Total dose", format!("{total} mg"))
            }
            DoseMode::RuleOfThree { .. } => {
                Outcome::new(self.id(), format!("{volume} mL to draw."), Tone::Ok)
            }
            DoseMode::Dilution { .. } => Outcome::new(
                self.id(),
                format!(
                    "{volume} mL to draw from the ampoule. Top up with diluent per protocol."
                ),
                Tone::Info,
            ),
        };
        Ok(outcome.with_value(result.volume_ml, "mL"))
    }
}
