//! ANSI color codes for dump and trace output.
//!
//! - Blue: state ids
//! - Green: accepting states and match results
//! - Yellow: input code units
//! - Dim: transition ids, metadata

/// ANSI color palette for CLI output.
///
/// Only standard 16-color codes, so output reads on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub state: &'static str,
    pub accept: &'static str,
    pub unit: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        state: "\x1b[34m",
        accept: "\x1b[32m",
        unit: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// All codes empty; output is plain text.
    pub const OFF: Self = Self {
        state: "",
        accept: "",
        unit: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
