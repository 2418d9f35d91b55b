use bedside_core::numeric::{display, safe_div};
use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;
use crate::fields::{Field, FieldOption, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

/// µmol/L per mg/dL of serum creatinine.
pub const UMOL_PER_MG_DL: f64 = 88.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn factor(self) -> f64 {
        match self {
            Sex::Female => 0.85,
            Sex::Male => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CreatinineUnit {
    MicromolPerLitre,
    MgPerDecilitre,
}

impl CreatinineUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            CreatinineUnit::MicromolPerLitre => "µmol/L",
            CreatinineUnit::MgPerDecilitre => "mg/dL",
        }
    }
}

/// Serum creatinine in mg/dL.
pub fn creatinine_mg_dl(value: f64, unit: CreatinineUnit) -> f64 {
    match unit {
        CreatinineUnit::MicromolPerLitre => safe_div(value, UMOL_PER_MG_DL),
        CreatinineUnit::MgPerDecilitre => value,
    }
}

/// Cockcroft–Gault creatinine clearance in mL/min.
///
/// `((140 − age) × weight × sex factor) ÷ (72 × creatinine mg/dL)`; a
/// creatinine of zero or less gives 0.
pub fn cockcroft_gault(
    age_years: f64,
    weight_kg: f64,
    sex: Sex,
    creatinine: f64,
    unit: CreatinineUnit,
) -> f64 {
    let mg_dl = creatinine_mg_dl(creatinine, unit);
    safe_div((140.0 - age_years) * weight_kg * sex.factor(), 72.0 * mg_dl)
}

/// Creatinine clearance (Cockcroft–Gault, adults).
pub struct CreatinineClearance;

impl Calculator for CreatinineClearance {
    fn id(&self) -> &str {
        "creatinine_clearance"
    }

    fn name(&self) -> &str {
        "Creatinine clearance"
    }

    fn subtitle(&self) -> &str {
        "Cockcroft–Gault equation (adult)"
    }

    fn footnote(&self) -> Option<&str> {
        Some("Check dosing against local protocol.")
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::number("age", "Age", Some("years"), 30.0).with_range(18.0, 120.0),
                Field::number("weight", "Weight", Some("kg"), 60.0).with_range(0.0, 400.0),
                Field::choice(
                    "sex",
                    "Sex",
                    "F",
                    vec![FieldOption::new("F", "Female"), FieldOption::new("M", "Male")],
                ),
                Field::choice(
                    "unit",
                    "Creatinine unit",
                    "umol",
                    vec![
                        FieldOption::new("umol", "µmol/L"),
                        FieldOption::new("mgdl", "mg/dL"),
                    ],
                ),
                Field::number("creatinine", "Serum creatinine", None, 70.0)
                    .with_description("In the selected unit"),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let sex = match inputs.choice("sex")? {
            "M" => Sex::Male,
            _ => Sex::Female,
        };
        let unit = match inputs.choice("unit")? {
            "mgdl" => CreatinineUnit::MgPerDecilitre,
            _ => CreatinineUnit::MicromolPerLitre,
        };
        let creatinine = inputs.number("creatinine")?;

        let clearance = cockcroft_gault(
            inputs.number("age")?,
            inputs.number("weight")?,
            sex,
            creatinine,
            unit,
        );
        Ok(Outcome::new(
            self.id(),
            format!("CrCl ≈ {} mL/min", display(clearance)),
            Tone::Info,
        )
        .with_value(clearance, "mL/min")
        .with_detail(
            "Creatinine",
            format!("{} {}", display(creatinine), unit.symbol()),
        ))
    }
}
