use bedside_core::numeric::round2;
use bedside_core::tone::Tone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A labelled secondary value shown under the headline (sub-scores,
/// intermediate quantities).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

/// What a calculator hands back to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Outcome {
    pub calculator_id: String,
    /// The sentence shown in the result panel.
    pub headline: String,
    /// Primary value, already rounded for display.
    pub value: Option<f64>,
    pub unit: Option<String>,
    /// Qualitative band or tier, e.g. "Overweight" or "High risk".
    pub band: Option<String>,
    pub tone: Tone,
    pub details: Vec<Detail>,
    pub footnote: Option<String>,
    /// False when some input could not be used (e.g. a NEWS2 vital sign
    /// that is not a number).
    pub complete: bool,
}

impl Outcome {
    pub fn new(calculator_id: &str, headline: impl Into<String>, tone: Tone) -> Self {
        Self {
            calculator_id: calculator_id.to_string(),
            headline: headline.into(),
            value: None,
            unit: None,
            band: None,
            tone,
            details: Vec::new(),
            footnote: None,
            complete: true,
        }
    }

    pub fn with_value(mut self, value: f64, unit: &str) -> Self {
        self.value = Some(round2(value));
        self.unit = Some(unit.to_string());
        self
    }

    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.band = Some(band.into());
        self
    }

    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push(Detail {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    pub fn incomplete(mut self) -> Self {
        self.complete = false;
        self
    }

    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}
