use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One row of a banded score: every value above the previous band's upper
/// bound and up to `upper` (inclusive) earns `points`. `upper: None`
/// closes the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub upper: Option<f64>,
    pub points: u8,
}

impl ScoreBand {
    pub const fn up_to(upper: f64, points: u8) -> Self {
        Self {
            upper: Some(upper),
            points,
        }
    }

    pub const fn above(points: u8) -> Self {
        Self {
            upper: None,
            points,
        }
    }
}

/// An ordered, contiguous partition of the real line for one vital sign.
///
/// Bands are checked in order and the first one whose inclusive upper bound
/// is not exceeded wins, so exactly one band matches any finite value.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub name: &'static str,
    pub bands: &'static [ScoreBand],
}

impl BandTable {
    pub const fn new(name: &'static str, bands: &'static [ScoreBand]) -> Self {
        Self { name, bands }
    }

    /// Points for `value`, or `None` when the value is not finite.
    pub fn points(&self, value: f64) -> Option<u8> {
        if !value.is_finite() {
            return None;
        }
        self.bands
            .iter()
            .find(|band| band.upper.is_none_or(|upper| value <= upper))
            .map(|band| band.points)
    }

    /// Check that bounds ascend strictly and the last band is open-ended.
    pub fn validate(&self) -> Result<(), CoreError> {
        let Some(last) = self.bands.last() else {
            return Err(CoreError::EmptyBandTable(self.name.to_string()));
        };
        if last.upper.is_some() {
            return Err(CoreError::UnboundedTail(self.name.to_string()));
        }

        let mut previous: Option<f64> = None;
        for (index, band) in self.bands.iter().enumerate() {
            match (previous, band.upper) {
                (Some(prev), Some(upper)) if upper <= prev => {
                    return Err(CoreError::UnorderedBands {
                        table: self.name.to_string(),
                        index,
                    });
                }
                (_, None) if index + 1 != self.bands.len() => {
                    return Err(CoreError::UnorderedBands {
                        table: self.name.to_string(),
                        index,
                    });
                }
                _ => {}
            }
            previous = band.upper;
        }
        Ok(())
    }
}
