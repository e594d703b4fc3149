//! Capture-group transition programs.
//!
//! A DFA state stands for a set of NFA states. Each of them carries its own
//! capture row, and each row lives in a logical slot. Taking a DFA edge moves
//! the rows the way every member NFA state would have moved them on its own.
//! The moves are precompiled as array copies between logical slots plus a
//! permutation of the slot order, so they do not depend on which physical
//! row currently backs a slot.
//!
//! The program for an edge is only known once the next edge out of the
//! target is chosen, so each [`LazyCaptureGroupTransition`] holds one
//! [`PartialTransition`] per successor slot of its target state.

use serde::{Deserialize, Serialize};

/// Index into the automaton's capture transition table.
pub type TransitionId = u16;

/// Copy of a whole capture row from one logical slot to another.
///
/// The copied length is always the row width (`2 × capture groups`); the
/// physical offsets are resolved through the current result order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayCopy {
    pub source: u8,
    pub target: u8,
}

/// Boundary writes into one logical slot's row.
///
/// Each entry of `boundaries` is an offset within the row: `2 × group` for a
/// group start, `2 × group + 1` for a group end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexOp {
    pub slot: u8,
    pub boundaries: Vec<u8>,
}

impl IndexOp {
    pub fn new(slot: u8, boundaries: impl Into<Vec<u8>>) -> Self {
        Self {
            slot,
            boundaries: boundaries.into(),
        }
    }
}

/// Capture update applied when one successor slot is taken.
///
/// Application order: array copies, reorder, index updates, index clears.
/// Updates and clears address logical slots after the reorder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialTransition {
    #[serde(default)]
    pub array_copies: Vec<ArrayCopy>,
    /// New slot order: after the transition, logical slot `i` is backed by
    /// the row that backed logical slot `reorder[i]`. Empty keeps the order.
    #[serde(default)]
    pub reorder: Vec<u8>,
    /// Boundaries set to the current index.
    #[serde(default)]
    pub index_updates: Vec<IndexOp>,
    /// Boundaries reset to `-1`.
    #[serde(default)]
    pub index_clears: Vec<IndexOp>,
}

impl PartialTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(mut self, source: u8, target: u8) -> Self {
        self.array_copies.push(ArrayCopy { source, target });
        self
    }

    pub fn reordered(mut self, order: impl Into<Vec<u8>>) -> Self {
        self.reorder = order.into();
        self
    }

    pub fn update(mut self, slot: u8, boundaries: impl Into<Vec<u8>>) -> Self {
        self.index_updates.push(IndexOp::new(slot, boundaries));
        self
    }

    pub fn clear(mut self, slot: u8, boundaries: impl Into<Vec<u8>>) -> Self {
        self.index_clears.push(IndexOp::new(slot, boundaries));
        self
    }

    #[inline]
    pub fn reorders_results(&self) -> bool {
        !self.reorder.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.array_copies.is_empty()
            && self.reorder.is_empty()
            && self.index_updates.is_empty()
            && self.index_clears.is_empty()
    }

    /// Every logical slot the program touches.
    pub(crate) fn slots(&self) -> impl Iterator<Item = u8> + '_ {
        self.array_copies
            .iter()
            .flat_map(|c| [c.source, c.target])
            .chain(self.reorder.iter().copied())
            .chain(self.index_updates.iter().map(|op| op.slot))
            .chain(self.index_clears.iter().map(|op| op.slot))
    }

    pub(crate) fn boundaries(&self) -> impl Iterator<Item = u8> + '_ {
        self.index_updates
            .iter()
            .chain(&self.index_clears)
            .flat_map(|op| op.boundaries.iter().copied())
    }
}

/// Extraction of the final result row when an accepting state is confirmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinalTransition {
    /// Logical slot holding the accepting NFA configuration. Generic mode only.
    #[serde(default)]
    pub result_slot: u8,
    #[serde(default)]
    pub index_updates: Vec<u8>,
    #[serde(default)]
    pub index_clears: Vec<u8>,
}

impl FinalTransition {
    pub fn new(result_slot: u8) -> Self {
        Self {
            result_slot,
            ..Self::default()
        }
    }

    pub fn update(mut self, boundaries: impl Into<Vec<u8>>) -> Self {
        self.index_updates.extend(boundaries.into());
        self
    }

    pub fn clear(mut self, boundaries: impl Into<Vec<u8>>) -> Self {
        self.index_clears.extend(boundaries.into());
        self
    }
}

/// Capture programs attached to one DFA edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LazyCaptureGroupTransition {
    pub id: TransitionId,
    /// One program per successor slot of the edge's target state.
    #[serde(default)]
    pub partial_transitions: Vec<PartialTransition>,
    /// Used when the target accepts at the end of input.
    #[serde(default)]
    pub anchored_final: Option<FinalTransition>,
    /// Used when the target accepts anywhere.
    #[serde(default)]
    pub unanchored_final: Option<FinalTransition>,
}

impl LazyCaptureGroupTransition {
    pub fn new(id: TransitionId, partial_transitions: Vec<PartialTransition>) -> Self {
        Self {
            id,
            partial_transitions,
            anchored_final: None,
            unanchored_final: None,
        }
    }

    pub fn with_anchored_final(mut self, t: FinalTransition) -> Self {
        self.anchored_final = Some(t);
        self
    }

    pub fn with_unanchored_final(mut self, t: FinalTransition) -> Self {
        self.unanchored_final = Some(t);
        self
    }

    pub fn final_transition(&self, anchored: bool) -> Option<&FinalTransition> {
        if anchored {
            self.anchored_final.as_ref()
        } else {
            self.unanchored_final.as_ref()
        }
    }
}
