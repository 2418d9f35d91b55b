//! bedside-export
//!
//! Plain-text rendering of calculator outcomes, the copy-ready blood-gas
//! summary and the self-test panel, through Tera templates.

pub mod error;
pub mod render;
pub mod styles;
pub mod summary;
pub mod templates;
