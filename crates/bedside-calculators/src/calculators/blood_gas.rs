//! Arterial blood-gas interpretation: oxygenation (P/F ratio, alveolar gas
//! equation, A–a gradient), anion gap with albumin correction, and the
//! primary acid-base disorder.

use bedside_core::numeric::{display, safe_div};
use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;
use crate::fields::{Field, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

/// Lower bound of normal arterial pH.
pub const PH_LOW: f64 = 7.35;
/// Upper bound of normal arterial pH.
pub const PH_HIGH: f64 = 7.45;
/// Albumin reference for the corrected anion gap, g/dL.
pub const REFERENCE_ALBUMIN: f64 = 4.0;

/// Ambient terms of the alveolar gas equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlveolarConditions {
    pub atmospheric_pressure_mmhg: f64,
    pub water_vapour_pressure_mmhg: f64,
    pub respiratory_quotient: f64,
}

impl Default for AlveolarConditions {
    /// Sea level, body temperature, mixed diet.
    fn default() -> Self {
        Self {
            atmospheric_pressure_mmhg: 760.0,
            water_vapour_pressure_mmhg: 47.0,
            respiratory_quotient: 0.8,
        }
    }
}

/// PaO₂ ÷ FiO₂ (FiO₂ as a fraction). FiO₂ of zero or less gives 0.
pub fn pf_ratio(pao2: f64, fio2: f64) -> f64 {
    safe_div(pao2, fio2)
}

/// PAO₂ = FiO₂ × (Patm − PH₂O) − PaCO₂ ÷ R. Unguarded: the caller supplies
/// finite conditions.
pub fn alveolar_oxygen(fio2: f64, paco2: f64, conditions: &AlveolarConditions) -> f64 {
    fio2 * (conditions.atmospheric_pressure_mmhg - conditions.water_vapour_pressure_mmhg)
        - paco2 / conditions.respiratory_quotient
}

/// Alveolar–arterial oxygen gradient, clamped at zero.
pub fn aa_gradient(pao2: f64, paco2: f64, fio2: f64, conditions: &AlveolarConditions) -> f64 {
    (alveolar_oxygen(fio2, paco2, conditions) - pao2).max(0.0)
}

/// Na⁺ − Cl⁻ − HCO₃⁻.
pub fn anion_gap(sodium: f64, chloride: f64, bicarbonate: f64) -> f64 {
    sodium - chloride - bicarbonate
}

/// Anion gap corrected for albumin: +2.5 per g/dL below 4.
pub fn corrected_anion_gap(anion_gap: f64, albumin_g_dl: f64) -> f64 {
    anion_gap + 2.5 * (REFERENCE_ALBUMIN - albumin_g_dl)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AcidBaseDisorder {
    /// pH within 7.35–7.45.
    NormalOrMixed,
    RespiratoryAcidosis,
    MetabolicAcidosis,
    MixedAcidosis,
    RespiratoryAlkalosis,
    MetabolicAlkalosis,
    MixedAlkalosis,
    /// An input was not a finite number.
    Indeterminate,
}

impl AcidBaseDisorder {
    pub fn label(self) -> &'static str {
        match self {
            AcidBaseDisorder::NormalOrMixed => "Normal or mixed",
            AcidBaseDisorder::RespiratoryAcidosis => "Respiratory acidosis",
            AcidBaseDisorder::MetabolicAcidosis => "Metabolic acidosis",
            AcidBaseDisorder::MixedAcidosis => "Mixed/indeterminate acidosis",
            AcidBaseDisorder::RespiratoryAlkalosis => "Respiratory alkalosis",
            AcidBaseDisorder::MetabolicAlkalosis => "Metabolic alkalosis",
            AcidBaseDisorder::MixedAlkalosis => "Mixed/indeterminate alkalosis",
            AcidBaseDisorder::Indeterminate => "Indeterminate",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AcidBaseDisorder::NormalOrMixed => Tone::Ok,
            AcidBaseDisorder::Indeterminate
            | AcidBaseDisorder::MixedAcidosis
            | AcidBaseDisorder::MixedAlkalosis => Tone::Info,
            _ => Tone::Warn,
        }
    }
}

/// Primary acid-base disorder from pH, PaCO₂ (mmHg) and HCO₃⁻ (mmol/L).
pub fn classify_acid_base(ph: f64, paco2: f64, bicarbonate: f64) -> AcidBaseDisorder {
    if !(ph.is_finite() && paco2.is_finite() && bicarbonate.is_finite()) {
        return AcidBaseDisorder::Indeterminate;
    }

    if ph < PH_LOW {
        if paco2 > 45.0 && bicarbonate <= 24.0 {
            AcidBaseDisorder::RespiratoryAcidosis
        } else if bicarbonate < 22.0 {
            AcidBaseDisorder::MetabolicAcidosis
        } else {
            AcidBaseDisorder::MixedAcidosis
        }
    } else if ph > PH_HIGH {
        if paco2 < 35.0 && bicarbonate >= 24.0 {
            AcidBaseDisorder::RespiratoryAlkalosis
        } else if bicarbonate > 26.0 {
            AcidBaseDisorder::MetabolicAlkalosis
        } else {
            AcidBaseDisorder::MixedAlkalosis
        }
    } else {
        AcidBaseDisorder::NormalOrMixed
    }
}

/// One arterial sample with its electrolytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodGasPanel {
    pub ph: f64,
    pub pao2: f64,
    pub paco2: f64,
    /// Fraction, 0–1.
    pub fio2: f64,
    pub bicarbonate: f64,
    pub sodium: f64,
    pub chloride: f64,
    pub albumin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodGasResult {
    pub panel: BloodGasPanel,
    pub pf_ratio: f64,
    pub alveolar_oxygen: f64,
    pub aa_gradient: f64,
    pub anion_gap: f64,
    pub corrected_anion_gap: f64,
    pub disorder: AcidBaseDisorder,
}

impl BloodGasPanel {
    pub fn interpret(&self, conditions: &AlveolarConditions) -> BloodGasResult {
        let gap = anion_gap(self.sodium, self.chloride, self.bicarbonate);
        BloodGasResult {
            panel: *self,
            pf_ratio: pf_ratio(self.pao2, self.fio2),
            alveolar_oxygen: alveolar_oxygen(self.fio2, self.paco2, conditions),
            aa_gradient: aa_gradient(self.pao2, self.paco2, self.fio2, conditions),
            anion_gap: gap,
            corrected_anion_gap: corrected_anion_gap(gap, self.albumin),
            disorder: classify_acid_base(self.ph, self.paco2, self.bicarbonate),
        }
    }
}

/// Blood-gas interpretation.
#[derive(Debug, Default)]
pub struct BloodGas {
    pub conditions: AlveolarConditions,
}

impl BloodGas {
    pub fn panel(inputs: &Inputs<'_>) -> Result<BloodGasPanel, CalculatorError> {
        Ok(BloodGasPanel {
            ph: inputs.number("ph")?,
            pao2: inputs.number("pao2")?,
            paco2: inputs.number("paco2")?,
            fio2: inputs.number("fio2")?,
            bicarbonate: inputs.number("hco3")?,
            sodium: inputs.number("sodium")?,
            chloride: inputs.number("chloride")?,
            albumin: inputs.number("albumin")?,
        })
    }
}

impl Calculator for BloodGas {
    fn id(&self) -> &str {
        "blood_gas"
    }

    fn name(&self) -> &str {
        "Blood gas"
    }

    fn subtitle(&self) -> &str {
        "P/F ratio, A–a gradient, anion gap, acid-base disorder"
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::number("ph", "pH", None, 7.4).with_range(6.5, 8.0),
                Field::number("pao2", "PaO₂", Some("mmHg"), 95.0).with_range(0.0, 700.0),
                Field::number("paco2", "PaCO₂", Some("mmHg"), 40.0).with_range(0.0, 200.0),
                Field::number("fio2", "FiO₂", None, 0.21)
                    .with_range(0.21, 1.0)
                    .with_description("Fraction, 0.21 on room air"),
                Field::number("hco3", "HCO₃⁻", Some("mmol/L"), 24.0).with_range(0.0, 60.0),
                Field::number("sodium", "Na⁺", Some("mmol/L"), 140.0).with_range(90.0, 200.0),
                Field::number("chloride", "Cl⁻", Some("mmol/L"), 104.0).with_range(50.0, 160.0),
                Field::number("albumin", "Albumin", Some("g/dL"), 4.0).with_range(0.0, 7.0),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let result = Self::panel(inputs)?.interpret(&self.conditions);
        let disorder = result.disorder;

        Ok(Outcome::new(self.id(), disorder.label(), disorder.tone())
            .with_value(result.pf_ratio, "mmHg")
            .with_band(disorder.label())
            .with_detail("P/F ratio", display(result.pf_ratio))
            .with_detail("PAO₂", format!("{} mmHg", display(result.alveolar_oxygen)))
            .with_detail("A–a gradient", format!("{} mmHg", display(result.aa_gradient)))
            .with_detail("Anion gap", format!("{} mmol/L", display(result.anion_gap)))
            .with_detail(
                "Corrected anion gap",
                format!("{} mmol/L", display(result.corrected_anion_gap)),
            ))
    }
}
