//! bedside-core
//!
//! Shared vocabulary for the bedside calculators: tolerant numeric
//! coercion, display rounding, guarded division, score bands and result
//! tones. Pure functions only, no I/O.

pub mod band;
pub mod error;
pub mod numeric;
pub mod tone;
