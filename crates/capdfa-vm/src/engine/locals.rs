//! Per-call executor state.

use capdfa_automaton::TransitionId;

use super::input::Input;
use super::tracking::CaptureGroupTrackingData;

/// `result_int` of an attempt that has not accepted.
pub(crate) const NO_MATCH: i32 = -1;

/// Cursor, bounds and capture buffers of one execution.
///
/// Indices are signed: a backward scan ends with its cursor at `-1`.
pub struct Locals<'i, I: Input + ?Sized> {
    pub(crate) input: &'i I,
    pub(crate) from_index: i32,
    pub(crate) index: i32,
    pub(crate) max_index: i32,
    pub(crate) cur_max_index: i32,
    pub(crate) successor_index: Option<usize>,
    pub(crate) last_transition: Option<TransitionId>,
    /// `0` once a result was stored.
    pub(crate) result_int: i32,
    pub(crate) match_end: i32,
    pub(crate) tracking: Option<CaptureGroupTrackingData>,
}

impl<'i, I: Input + ?Sized> Locals<'i, I> {
    pub(crate) fn new(
        input: &'i I,
        from_index: i32,
        index: i32,
        max_index: i32,
        tracking: Option<CaptureGroupTrackingData>,
    ) -> Self {
        Self {
            input,
            from_index,
            index,
            max_index,
            cur_max_index: max_index,
            successor_index: None,
            last_transition: None,
            result_int: NO_MATCH,
            match_end: -1,
            tracking,
        }
    }

    /// Rearm for another attempt on the same input, keeping the buffers.
    pub fn reset(&mut self, from_index: i32, index: i32, max_index: i32) {
        self.from_index = from_index;
        self.index = index;
        self.max_index = max_index;
        self.cur_max_index = max_index;
        self.successor_index = None;
        self.last_transition = None;
        self.result_int = NO_MATCH;
        self.match_end = -1;
    }

    pub fn input(&self) -> &'i I {
        self.input
    }

    pub fn from_index(&self) -> i32 {
        self.from_index
    }

    /// Cursor: the next unit to read.
    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn max_index(&self) -> i32 {
        self.max_index
    }

    /// Effective scan bound of the last run.
    pub fn cur_max_index(&self) -> i32 {
        self.cur_max_index
    }

    /// Slot picked by the last dispatched state; `None` if nothing matched.
    pub fn successor_index(&self) -> Option<usize> {
        self.successor_index
    }

    pub fn last_transition(&self) -> Option<TransitionId> {
        self.last_transition
    }

    pub fn result_int(&self) -> i32 {
        self.result_int
    }

    pub fn tracking(&self) -> Option<&CaptureGroupTrackingData> {
        self.tracking.as_ref()
    }
}
