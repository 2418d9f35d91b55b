use serde::{Deserialize, Serialize};

/// What an outcome rendering includes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Prefix the headline with the tone, e.g. "[danger]".
    pub tone_marker: bool,

    /// List detail lines (sub-scores, intermediate values).
    pub show_details: bool,

    /// Print the calculator's reminder under the result.
    pub show_footnote: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tone_marker: true,
            show_details: true,
            show_footnote: true,
        }
    }
}
