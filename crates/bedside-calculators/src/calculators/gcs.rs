use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;
use crate::fields::{Field, FieldOption, Inputs};
use crate::outcome::Outcome;
use crate::Calculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EyeOpening {
    Spontaneous,
    ToVoice,
    ToPain,
    NoResponse,
}

impl EyeOpening {
    pub const ALL: [EyeOpening; 4] = [
        EyeOpening::Spontaneous,
        EyeOpening::ToVoice,
        EyeOpening::ToPain,
        EyeOpening::NoResponse,
    ];

    pub fn score(self) -> u8 {
        match self {
            EyeOpening::Spontaneous => 4,
            EyeOpening::ToVoice => 3,
            EyeOpening::ToPain => 2,
            EyeOpening::NoResponse => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EyeOpening::Spontaneous => "Spontaneous",
            EyeOpening::ToVoice => "To voice",
            EyeOpening::ToPain => "To pain",
            EyeOpening::NoResponse => "None",
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.score() == score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VerbalResponse {
    Oriented,
    Confused,
    InappropriateWords,
    IncomprehensibleSounds,
    NoResponse,
}

impl VerbalResponse {
    pub const ALL: [VerbalResponse; 5] = [
        VerbalResponse::Oriented,
        VerbalResponse::Confused,
        VerbalResponse::InappropriateWords,
        VerbalResponse::IncomprehensibleSounds,
        VerbalResponse::NoResponse,
    ];

    pub fn score(self) -> u8 {
        match self {
            VerbalResponse::Oriented => 5,
            VerbalResponse::Confused => 4,
            VerbalResponse::InappropriateWords => 3,
            VerbalResponse::IncomprehensibleSounds => 2,
            VerbalResponse::NoResponse => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VerbalResponse::Oriented => "Oriented",
            VerbalResponse::Confused => "Confused",
            VerbalResponse::InappropriateWords => "Inappropriate words",
            VerbalResponse::IncomprehensibleSounds => "Incomprehensible sounds",
            VerbalResponse::NoResponse => "None",
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.score() == score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MotorResponse {
    Obeys,
    LocalisesPain,
    Withdrawal,
    AbnormalFlexion,
    Extension,
    NoResponse,
}

impl MotorResponse {
    pub const ALL: [MotorResponse; 6] = [
        MotorResponse::Obeys,
        MotorResponse::LocalisesPain,
        MotorResponse::Withdrawal,
        MotorResponse::AbnormalFlexion,
        MotorResponse::Extension,
        MotorResponse::NoResponse,
    ];

    pub fn score(self) -> u8 {
        match self {
            MotorResponse::Obeys => 6,
            MotorResponse::LocalisesPain => 5,
            MotorResponse::Withdrawal => 4,
            MotorResponse::AbnormalFlexion => 3,
            MotorResponse::Extension => 2,
            MotorResponse::NoResponse => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MotorResponse::Obeys => "Obeys commands",
            MotorResponse::LocalisesPain => "Localises pain",
            MotorResponse::Withdrawal => "Withdrawal",
            MotorResponse::AbnormalFlexion => "Abnormal flexion",
            MotorResponse::Extension => "Extension",
            MotorResponse::NoResponse => "None",
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.score() == score)
    }
}

/// Head-injury severity band for a Glasgow total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GcsSeverity {
    /// 3–8
    Severe,
    /// 9–12
    Moderate,
    /// 13–15
    Mild,
}

impl GcsSeverity {
    pub fn from_total(total: u8) -> Self {
        match total {
            t if t >= 13 => GcsSeverity::Mild,
            t if t >= 9 => GcsSeverity::Moderate,
            _ => GcsSeverity::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GcsSeverity::Mild => "Mild injury (13–15)",
            GcsSeverity::Moderate => "Moderate (9–12)",
            GcsSeverity::Severe => "Severe (≤8)",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            GcsSeverity::Mild => Tone::Ok,
            GcsSeverity::Moderate => Tone::Warn,
            GcsSeverity::Severe => Tone::Danger,
        }
    }
}

/// A complete E/V/M assessment. The total is always in 3..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlasgowScore {
    pub eye: EyeOpening,
    pub verbal: VerbalResponse,
    pub motor: MotorResponse,
}

impl GlasgowScore {
    pub fn total(&self) -> u8 {
        self.eye.score() + self.verbal.score() + self.motor.score()
    }

    pub fn severity(&self) -> GcsSeverity {
        GcsSeverity::from_total(self.total())
    }

    /// Clinical shorthand, e.g. "E4 V5 M6".
    pub fn shorthand(&self) -> String {
        format!(
            "E{} V{} M{}",
            self.eye.score(),
            self.verbal.score(),
            self.motor.score()
        )
    }
}

fn options<T: Copy>(
    all: &[T],
    score: fn(T) -> u8,
    label: fn(T) -> &'static str,
) -> Vec<FieldOption> {
    all.iter()
        .map(|&item| {
            FieldOption::new(
                score(item).to_string(),
                format!("{} ({})", label(item), score(item)),
            )
        })
        .collect()
}

fn parse_score<T>(
    inputs: &Inputs<'_>,
    field_id: &str,
    from_score: fn(u8) -> Option<T>,
) -> Result<T, CalculatorError> {
    let raw = inputs.choice(field_id)?;
    raw.parse::<u8>()
        .ok()
        .and_then(from_score)
        .ok_or_else(|| CalculatorError::InvalidChoice {
            field_id: field_id.to_string(),
            value: raw.to_string(),
        })
}

/// Glasgow Coma Scale.
pub struct Glasgow;

impl Calculator for Glasgow {
    fn id(&self) -> &str {
        "gcs"
    }

    fn name(&self) -> &str {
        "Glasgow Coma Scale (GCS)"
    }

    fn subtitle(&self) -> &str {
        "Eye (4) + Verbal (5) + Motor (6)"
    }

    fn footnote(&self) -> Option<&str> {
        Some("Reference: E4 V5 M6, Glasgow scale.")
    }

    fn fields(&self) -> &[Field] {
        static FIELDS: std::sync::LazyLock<Vec<Field>> = std::sync::LazyLock::new(|| {
            vec![
                Field::choice(
                    "eye",
                    "Eye opening",
                    "4",
                    options(&EyeOpening::ALL, EyeOpening::score, EyeOpening::label),
                ),
                Field::choice(
                    "verbal",
                    "Verbal response",
                    "5",
                    options(&VerbalResponse::ALL, VerbalResponse::score, VerbalResponse::label),
                ),
                Field::choice(
                    "motor",
                    "Motor response",
                    "6",
                    options(&MotorResponse::ALL, MotorResponse::score, MotorResponse::label),
                ),
            ]
        });
        &FIELDS
    }

    fn compute(&self, inputs: &Inputs<'_>) -> Result<Outcome, CalculatorError> {
        let score = GlasgowScore {
            eye: parse_score(inputs, "eye", EyeOpening::from_score)?,
            verbal: parse_score(inputs, "verbal", VerbalResponse::from_score)?,
            motor: parse_score(inputs, "motor", MotorResponse::from_score)?,
        };
        let total = score.total();
        let severity = score.severity();

        Ok(Outcome::new(
            self.id(),
            format!("Total score: {total} — {}", severity.label()),
            severity.tone(),
        )
        .with_value(f64::from(total), "points")
        .with_band(severity.label())
        .with_detail("Components", score.shorthand()))
    }
}
