//! Per-state dispatch and capture bookkeeping on edges.

use capdfa_automaton::{
    CaptureMode, CharState, FinalTransition, InitialState, StateId, TransitionId,
};

use super::error::ExecError;
use super::executor::Executor;
use super::input::Input;
use super::locals::Locals;
use super::trace::Tracer;

/// Stands in for a lazy transition without a final program.
static EMPTY_FINAL: FinalTransition = FinalTransition {
    result_slot: 0,
    index_updates: Vec::new(),
    index_clears: Vec::new(),
};

impl Executor {
    /// Pick the entry point. Consumes no input.
    pub(crate) fn dispatch_initial<I: Input + ?Sized>(
        &self,
        locals: &mut Locals<'_, I>,
        state: &InitialState,
    ) -> Result<Option<usize>, ExecError> {
        let prefix = state.prefix_length();
        let mut k = if self.is_searching() {
            self.rewind_up_to(locals, prefix)?
        } else if self.is_forward() {
            let behind = i64::from(locals.from_index) - i64::from(locals.index);
            behind.clamp(0, prefix as i64) as usize
        } else {
            0
        };
        if !self.at_begin(locals) {
            k += prefix + 1;
        }

        match self.props().capture_mode {
            CaptureMode::None => {}
            CaptureMode::Simple => {
                let boundary = self.boundary(locals);
                self.apply_simple(locals, state.cg_transitions[k], boundary);
            }
            // The entry edge's program depends on the slot taken out of its
            // target, so it is applied one state later.
            CaptureMode::Generic => locals.last_transition = Some(state.cg_transitions[k]),
        }
        Ok(Some(k))
    }

    /// Classify the next unit in an ordinary state.
    pub(crate) fn dispatch_char<I: Input + ?Sized, T: Tracer>(
        &self,
        locals: &mut Locals<'_, I>,
        state: &CharState,
        cg_transitions: &[TransitionId],
        ip: StateId,
        compact: bool,
        tracer: &mut T,
    ) -> Option<usize> {
        if state.final_state {
            self.store_result(locals, false, tracer);
        }
        if state.successors.is_empty() {
            if state.anchored_final && self.at_end(locals) {
                self.store_result(locals, true, tracer);
            }
            return None;
        }

        if let Some(loop_slot) = state.loop_to_self {
            let loop_slot = loop_slot as usize;
            while self.has_next(locals) {
                let position = locals.index;
                let c = locals.input.code_unit_at(position as usize);
                if !state.loops_on(c, compact) {
                    break;
                }
                let boundary = self.boundary(locals);
                self.advance(locals);
                tracer.trace_transition(position, ip, loop_slot, c);
                self.take_edge(locals, cg_transitions, loop_slot, boundary);
                if state.final_state {
                    self.store_result(locals, false, tracer);
                }
            }
        }

        if !self.has_next(locals) {
            if state.anchored_final && self.at_end(locals) {
                self.store_result(locals, true, tracer);
            }
            return None;
        }

        let position = locals.index;
        let c = locals.input.code_unit_at(position as usize);
        let boundary = self.boundary(locals);
        self.advance(locals);
        let slot = state.classify(c, compact)?;
        tracer.trace_transition(position, ip, slot, c);
        self.take_edge(locals, cg_transitions, slot, boundary);
        Some(slot)
    }

    /// Capture bookkeeping for leaving the current state through `slot`.
    fn take_edge<I: Input + ?Sized>(
        &self,
        locals: &mut Locals<'_, I>,
        cg_transitions: &[TransitionId],
        slot: usize,
        boundary: i32,
    ) {
        match self.props().capture_mode {
            CaptureMode::None => {}
            CaptureMode::Simple => self.apply_simple(locals, cg_transitions[slot], boundary),
            CaptureMode::Generic => {
                if let Some(last) = locals.last_transition
                    && let Some(tracking) = locals.tracking.as_mut()
                {
                    let pt = &self.automaton.cg_transition(last).partial_transitions[slot];
                    tracking.apply_partial(pt, boundary);
                }
                locals.last_transition = Some(cg_transitions[slot]);
            }
        }
    }

    /// Simple mode writes the edge's boundaries straight into row 0.
    fn apply_simple<I: Input + ?Sized>(
        &self,
        locals: &mut Locals<'_, I>,
        id: TransitionId,
        boundary: i32,
    ) {
        if let Some(pt) = self.automaton.cg_transition(id).partial_transitions.first()
            && let Some(tracking) = locals.tracking.as_mut()
        {
            tracking.apply_partial(pt, boundary);
        }
        locals.last_transition = Some(id);
    }

    /// Record an accepting configuration at the cursor's boundary.
    fn store_result<I: Input + ?Sized, T: Tracer>(
        &self,
        locals: &mut Locals<'_, I>,
        anchored: bool,
        tracer: &mut T,
    ) {
        let boundary = self.boundary(locals);
        let props = self.props();
        if props.capture_mode.tracks_captures() {
            let ft = locals
                .last_transition
                .and_then(|id| self.automaton.cg_transition(id).final_transition(anchored))
                .unwrap_or(&EMPTY_FINAL);
            if let Some(tracking) = locals.tracking.as_mut() {
                if props.is_generic_cg() {
                    tracking.apply_final_generic(ft, boundary);
                } else {
                    tracking.apply_final_simple(ft, boundary, props.simple_cg_must_copy);
                }
            }
        } else {
            locals.match_end = boundary;
        }
        locals.result_int = 0;
        tracer.trace_accept(boundary, anchored);
    }
}
