//! National Early Warning Score 2.
//!
//! Each vital sign is banded through a [`BandTable`] whose upper bounds are
//! inclusive; the total is the plain sum of the seven sub-scores.

use bedside_core::band::{BandTable, ScoreBand};
use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;
use crate::fields::{Field, FieldOption, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

const RESPIRATORY_RATE_BANDS: &[ScoreBand] = &[
    ScoreBand::up_to(8.0, 3),
    ScoreBand::up_to(11.0, 1),
    ScoreBand::up_to(20.0, 0),
    ScoreBand::up_to(24.0, 2),
    ScoreBand::above(3),
];

const SPO2_BANDS: &[ScoreBand] = &[
    ScoreBand::up_to(91.0, 3),
    ScoreBand::up_to(93.0, 2),
    ScoreBand::up_to(95.0, 1),
    ScoreBand::above(0),
];

const SYSTOLIC_BP_BANDS: &[ScoreBand] = &[
    ScoreBand::up_to(90.0, 3),
    ScoreBand::up_to(100.0, 2),
    ScoreBand::up_to(110.0, 1),
    ScoreBand::up_to(219.0, 0),
    ScoreBand::above(3),
];

const HEART_RATE_BANDS: &[ScoreBand] = &[
    ScoreBand::up_to(40.0, 3),
    ScoreBand::up_to(50.0, 1),
    ScoreBand::up_to(90.0, 0),
    ScoreBand::up_to(110.0, 1),
    ScoreBand::up_to(130.0, 2),
    ScoreBand::above(3),
];

const TEMPERATURE_BANDS: &[ScoreBand] = &[
    ScoreBand::up_to(35.0, 3),
    ScoreBand::up_to(36.0, 1),
    ScoreBand::up_to(38.0, 0),
    ScoreBand::up_to(39.0, 1),
    ScoreBand::above(2),
];

pub static RESPIRATORY_RATE: BandTable = BandTable::new("respiratory_rate", RESPIRATORY_RATE_BANDS);
pub static SPO2: BandTable = BandTable::new("spo2", SPO2_BANDS);
pub static SYSTOLIC_BP: BandTable = BandTable::new("systolic_bp", SYSTOLIC_BP_BANDS);
pub static HEART_RATE: BandTable = BandTable::new("heart_rate", HEART_RATE_BANDS);
pub static TEMPERATURE: BandTable = BandTable::new("temperature", TEMPERATURE_BANDS);

/// All banded vital-sign tables, for inspection and validation.
pub fn band_tables() -> [&'static BandTable; 5] {
    [
        &RESPIRATORY_RATE,
        &SPO2,
        &SYSTOLIC_BP,
        &HEART_RATE,
        &TEMPERATURE,
    ]
}

/// AVPU level of consciousness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Consciousness {
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

impl Consciousness {
    pub fn code(self) -> &'static str {
        match self {
            Consciousness::Alert => "A",
            Consciousness::Voice => "V",
            Consciousness::Pain => "P",
            Consciousness::Unresponsive => "U",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Consciousness::Alert),
            "V" => Some(Consciousness::Voice),
            "P" => Some(Consciousness::Pain),
            "U" => Some(Consciousness::Unresponsive),
            _ => None,
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Consciousness::Alert => 0,
            _ => 3,
        }
    }
}

/// One set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    pub respiratory_rate: f64,
    pub spo2: f64,
    pub supplemental_oxygen: bool,
    pub systolic_bp: f64,
    pub heart_rate: f64,
    pub temperature: f64,
    pub consciousness: Consciousness,
}

/// Per-parameter points. `None` means the vital sign was not a finite
/// number and could not be banded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubScores {
    pub respiratory_rate: Option<u8>,
    pub spo2: Option<u8>,
    pub supplemental_oxygen: Option<u8>,
    pub systolic_bp: Option<u8>,
    pub heart_rate: Option<u8>,
    pub temperature: Option<u8>,
    pub consciousness: Option<u8>,
}

impl SubScores {
    /// `(identifier, badge label, points)` in display order.
    pub fn entries(&self) -> [(&'static str, &'static str, Option<u8>); 7] {
        [
            ("respiratory_rate", "RR", self.respiratory_rate),
            ("spo2", "SpO₂", self.spo2),
            ("supplemental_oxygen", "O₂", self.supplemental_oxygen),
            ("systolic_bp", "SBP", self.systolic_bp),
            ("heart_rate", "HR", self.heart_rate),
            ("temperature", "Temp", self.temperature),
            ("consciousness", "AVPU", self.consciousness),
        ]
    }

    pub fn total(&self) -> u8 {
        self.entries().iter().filter_map(|(_, _, p)| *p).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.entries().iter().all(|(_, _, p)| p.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    /// Total 0.
    None,
    /// Total 1–4.
    Low,
    /// Total 5–6.
    Intermediate,
    /// Total 7 or more.
    High,
}

impl RiskTier {
    pub fn from_total(total: u8) -> Self {
        match total {
            0 => RiskTier::None,
            1..=4 => RiskTier::Low,
            5..=6 => RiskTier::Intermediate,
            _ => RiskTier::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::None => "No risk",
            RiskTier::Low => "Low",
            RiskTier::Intermediate => "Intermediate risk",
            RiskTier::High => "High risk",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RiskTier::None => Tone::Ok,
            RiskTier::Low => Tone::Info,
            RiskTier::Intermediate => Tone::Warn,
            RiskTier::High => Tone::Danger,
        }
    }
}

/// The full composite: sub-scores, their sum and the risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct News2Score {
    pub sub_scores: SubScores,
    pub total: u8,
    pub tier: RiskTier,
    pub complete: bool,
}

pub fn sub_scores(vitals: &Vitals) -> SubScores {
    SubScores {
        respiratory_rate: RESPIRATORY_RATE.points(vitals.respiratory_rate),
        spo2: SPO2.points(vitals.spo2),
        supplemental_oxygen: Some(if vitals.supplemental_oxygen { 2 } else { 0 }),
        systolic_bp: SYSTOLIC_BP.points(vitals.systolic_bp),
        heart_rate: HEART_RATE.points(vitals.heart_rate),
        temperature: TEMPERATURE.points(vitals.temperature),
        consciousness: Some(vitals.consciousness.points()),
    }
}

/// Score a full set of observations. Always recomputed from scratch.
pub fn score(vitals: &Vitals) -> News2Score {
    let sub_scores = sub_scores(vitals);
    let total = sub_scores.total();
    News2Score {
        sub_scores,
        total,
        tier: RiskTier::from_total(total),
        complete: sub_scores.is_complete(),
    }
}

/// Badge text for a sub-score: the points, or "-" when unknown.
pub fn badge_text(points: Option<u8>) -> String {
    points.map_or_else(|| "-".to_string(), |p| p.to_string())
}

/// NEWS2 early-warning score for adults.
pub struct News2;

impl Calculator for News2 {
    fn id(&self) -> &str {
        "news2"
    }

    fn name(&self) -> &str {
        "NEWS2 (adults)"
    }

    fn subtitle(&self) -> &str {
        "Early warning score"
    }

    fn footnote(&self) -> Option<&str> {
        Some("Reference: NEWS2 (Royal College of Physicians). Use according to local protocol.")
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::number("respiratory_rate", "Respiratory rate", Some("/min"), 16.0)
                    .with_range(0.0, 80.0),
                Field::number("spo2", "SpO₂", Some("%"), 98.0).with_range(0.0, 100.0),
                Field::toggle("oxygen", "Supplemental oxygen", false),
                Field::number("systolic_bp", "Systolic blood pressure", Some("mmHg"), 120.0)
                    .with_range(0.0, 300.0),
                Field::number("heart_rate", "Heart rate", Some("/min"), 80.0)
                    .with_range(0.0, 300.0),
                Field::number("temperature", "Temperature", Some("°C"), 37.0)
                    .with_range(25.0, 45.0),
                Field::choice(
                    "avpu",
                    "Consciousness (AVPU)",
                    "A",
                    vec![
                        FieldOption::new("A", "Alert (A)"),
                        FieldOption::new("V", "Voice (V)"),
                        FieldOption::new("P", "Pain (P)"),
                        FieldOption::new("U", "Unresponsive (U)"),
                    ],
                ),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let avpu = inputs.choice("avpu")?;
        let consciousness =
            Consciousness::from_code(avpu).ok_or_else(|| CalculatorError::InvalidChoice {
                field_id: "avpu".to_string(),
                value: avpu.to_string(),
            })?;

        let vitals = Vitals {
            respiratory_rate: inputs.number("respiratory_rate")?,
            spo2: inputs.number("spo2")?,
            supplemental_oxygen: inputs.flag("oxygen")?,
            systolic_bp: inputs.number("systolic_bp")?,
            heart_rate: inputs.number("heart_rate")?,
            temperature: inputs.number("temperature")?,
            consciousness,
        };
        let news2 = score(&vitals);

        let mut outcome = Outcome::new(
            self.id(),
            format!("Total score: {} — {}", news2.total, news2.tier.label()),
            news2.tier.tone(),
        )
        .with_value(f64::from(news2.total), "points")
        .with_band(news2.tier.label());
        for (_, label, points) in news2.sub_scores.entries() {
            outcome = outcome.with_detail(label, badge_text(points));
        }
        if !news2.complete {
            outcome = outcome.incomplete();
        }
        Ok(outcome)
    }
}
