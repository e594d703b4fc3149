//! Capture-group tracking buffers.
//!
//! `results` holds one row of `2 × groups` boundaries per tracked NFA state.
//! Rows are addressed through `current_result_order`, which maps a logical
//! slot to the physical offset of its row; reordering the slots permutes
//! that map instead of moving rows.

use capdfa_automaton::{FinalTransition, IndexOp, PartialTransition};

/// Boundary value of a group that did not participate.
const UNSET: i32 = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureGroupTrackingData {
    results: Vec<i32>,
    current_result_order: Vec<usize>,
    current_result: Vec<i32>,
    scratch: Vec<usize>,
    width: usize,
}

impl CaptureGroupTrackingData {
    pub fn new(max_nfa_states: usize, capture_groups: usize) -> Self {
        let width = 2 * capture_groups;
        let mut data = Self {
            results: vec![UNSET; max_nfa_states * width],
            current_result_order: vec![0; max_nfa_states],
            current_result: vec![UNSET; width],
            scratch: Vec::with_capacity(max_nfa_states),
            width,
        };
        data.init_result_order();
        data
    }

    /// Boundaries per row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn max_nfa_states(&self) -> usize {
        self.current_result_order.len()
    }

    pub fn results(&self) -> &[i32] {
        &self.results
    }

    pub fn current_result_order(&self) -> &[usize] {
        &self.current_result_order
    }

    pub fn current_result(&self) -> &[i32] {
        &self.current_result
    }

    /// The row currently backing logical `slot`.
    pub fn row(&self, slot: usize) -> &[i32] {
        let base = self.current_result_order[slot];
        &self.results[base..base + self.width]
    }

    pub(crate) fn fits(&self, max_nfa_states: usize, capture_groups: usize) -> bool {
        self.max_nfa_states() == max_nfa_states && self.width == 2 * capture_groups
    }

    /// Logical slot `i` backed by physical row `i`.
    pub(crate) fn init_result_order(&mut self) {
        for (i, offset) in self.current_result_order.iter_mut().enumerate() {
            *offset = i * self.width;
        }
    }

    pub(crate) fn clear_results(&mut self) {
        self.results.fill(UNSET);
    }

    pub(crate) fn clear_current_result(&mut self) {
        self.current_result.fill(UNSET);
    }

    /// Apply one edge's capture program at boundary `index`.
    pub(crate) fn apply_partial(&mut self, pt: &PartialTransition, index: i32) {
        let width = self.width;
        for copy in &pt.array_copies {
            let src = self.current_result_order[copy.source as usize];
            let dst = self.current_result_order[copy.target as usize];
            self.results.copy_within(src..src + width, dst);
        }

        if pt.reorders_results() {
            let order = &self.current_result_order;
            self.scratch.clear();
            self.scratch
                .extend(pt.reorder.iter().map(|&slot| order[slot as usize]));
            std::mem::swap(&mut self.current_result_order, &mut self.scratch);
        }

        for op in &pt.index_updates {
            self.write_row(op, index);
        }
        for op in &pt.index_clears {
            self.write_row(op, UNSET);
        }
    }

    fn write_row(&mut self, op: &IndexOp, value: i32) {
        let base = self.current_result_order[op.slot as usize];
        for &b in &op.boundaries {
            self.results[base + b as usize] = value;
        }
    }

    /// Extract the accepting slot's row into `current_result`.
    pub(crate) fn apply_final_generic(&mut self, ft: &FinalTransition, index: i32) {
        let base = self.current_result_order[ft.result_slot as usize];
        self.current_result
            .copy_from_slice(&self.results[base..base + self.width]);
        update_row(&mut self.current_result, ft, index);
    }

    /// Finish the single simple-mode row, either in place or in a copy.
    pub(crate) fn apply_final_simple(&mut self, ft: &FinalTransition, index: i32, must_copy: bool) {
        if must_copy {
            self.current_result
                .copy_from_slice(&self.results[..self.width]);
            update_row(&mut self.current_result, ft, index);
        } else {
            update_row(&mut self.results[..self.width], ft, index);
        }
    }
}

fn update_row(row: &mut [i32], ft: &FinalTransition, index: i32) {
    for &b in &ft.index_updates {
        row[b as usize] = index;
    }
    for &b in &ft.index_clears {
        row[b as usize] = UNSET;
    }
}
