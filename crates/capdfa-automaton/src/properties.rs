//! Scalar properties compiled alongside the state table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scan direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much capture-group information the executor tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// Only the end position of the match.
    #[default]
    None,
    /// Exactly one NFA configuration is alive at a time; boundaries are
    /// written straight into a single result row.
    Simple,
    /// Several NFA configurations may be alive; rows are addressed through
    /// the result-order permutation.
    Generic,
}

impl CaptureMode {
    pub fn tracks_captures(self) -> bool {
        self != Self::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executor configuration produced by the automaton compiler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorProperties {
    pub direction: Direction,
    /// Search for the first match at or after `from_index` instead of
    /// anchoring at it.
    pub searching: bool,
    pub capture_mode: CaptureMode,
    /// Shortest input span that can possibly match.
    pub min_result_length: u32,
    /// Simple mode only: results must be copied out of the live row when an
    /// accepting state is reached, because later transitions may still
    /// overwrite it.
    pub simple_cg_must_copy: bool,
}

impl ExecutorProperties {
    pub fn forward() -> Self {
        Self::default()
    }

    pub fn backward() -> Self {
        Self {
            direction: Direction::Backward,
            ..Self::default()
        }
    }

    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    pub fn capture_mode(mut self, mode: CaptureMode) -> Self {
        self.capture_mode = mode;
        self
    }

    pub fn min_result_length(mut self, len: u32) -> Self {
        self.min_result_length = len;
        self
    }

    pub fn simple_cg_must_copy(mut self, yes: bool) -> Self {
        self.simple_cg_must_copy = yes;
        self
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        self.direction == Direction::Forward
    }

    #[inline]
    pub fn is_backward(&self) -> bool {
        self.direction == Direction::Backward
    }

    #[inline]
    pub fn is_simple_cg(&self) -> bool {
        self.capture_mode == CaptureMode::Simple
    }

    #[inline]
    pub fn is_generic_cg(&self) -> bool {
        self.capture_mode == CaptureMode::Generic
    }
}
