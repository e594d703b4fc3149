//! The executor: argument checks, the main dispatch loop and cursor helpers.

use std::fmt;
use std::sync::Arc;

use capdfa_automaton::{Automaton, AutomatonState, CaptureMode, ExecutorProperties, StateId};
use log::{debug, trace};
use serde::Serialize;

use super::error::ExecError;
use super::input::Input;
use super::interrupt::Interrupt;
use super::locals::{Locals, NO_MATCH};
use super::trace::{NoopTracer, Tracer};
use super::tracking::CaptureGroupTrackingData;

/// Inputs at least this long are rejected; cursor arithmetic stays in `i32`.
const MAX_INPUT_LEN: usize = (i32::MAX - 20) as usize;

/// Outcome of one execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MatchResult {
    NoMatch,
    /// End boundary of the match, without captures.
    Position(usize),
    /// `2 × groups` boundaries; `-1` for groups that did not participate.
    SimpleCaptures(Vec<i32>),
    GenericCaptures(Vec<i32>),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    pub fn captures(&self) -> Option<&[i32]> {
        match self {
            Self::SimpleCaptures(c) | Self::GenericCaptures(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no match"),
            Self::Position(end) => write!(f, "match end={end}"),
            Self::SimpleCaptures(c) | Self::GenericCaptures(c) => write!(f, "captures {c:?}"),
        }
    }
}

/// Builder for [`Executor`] instances.
pub struct ExecutorBuilder {
    automaton: Arc<Automaton>,
    interrupt: Option<Interrupt>,
}

impl ExecutorBuilder {
    pub fn new(automaton: impl Into<Arc<Automaton>>) -> Self {
        Self {
            automaton: automaton.into(),
            interrupt: None,
        }
    }

    /// Poll `interrupt` once per step and stop when it is raised.
    pub fn interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    pub fn build(self) -> Executor {
        let p = self.automaton.properties();
        debug!(
            "executor: {} {}, {} capture mode, prefix {}, min length {}",
            p.direction,
            if p.searching { "searching" } else { "anchored" },
            p.capture_mode,
            self.automaton.prefix_length(),
            p.min_result_length,
        );
        Executor {
            automaton: self.automaton,
            interrupt: self.interrupt,
        }
    }
}

/// Runs one automaton. Cheap to clone and share across threads; all
/// mutable state lives in [`Locals`].
#[derive(Clone)]
pub struct Executor {
    pub(crate) automaton: Arc<Automaton>,
    interrupt: Option<Interrupt>,
}

impl Executor {
    pub fn new(automaton: impl Into<Arc<Automaton>>) -> Self {
        Self::builder(automaton).build()
    }

    pub fn builder(automaton: impl Into<Arc<Automaton>>) -> ExecutorBuilder {
        ExecutorBuilder::new(automaton)
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    #[inline]
    pub(crate) fn props(&self) -> &ExecutorProperties {
        self.automaton.properties()
    }

    /// Fresh locals sized for this automaton's capture tracking.
    pub fn create_locals<'i, I: Input + ?Sized>(
        &self,
        input: &'i I,
        from_index: i32,
        index: i32,
        max_index: i32,
    ) -> Locals<'i, I> {
        Locals::new(input, from_index, index, max_index, self.new_tracking())
    }

    fn new_tracking(&self) -> Option<CaptureGroupTrackingData> {
        self.props().capture_mode.tracks_captures().then(|| {
            CaptureGroupTrackingData::new(
                self.automaton.max_nfa_states(),
                self.automaton.capture_groups(),
            )
        })
    }

    /// Find the first match of the whole input starting at `from`.
    ///
    /// Forward scans `from..len`; backward scans from the last unit down to
    /// `from`.
    pub fn find<I: Input + ?Sized>(
        &self,
        input: &I,
        from: usize,
    ) -> Result<MatchResult, ExecError> {
        self.find_with(input, from, &mut NoopTracer)
    }

    /// [`Executor::find`] with a tracer.
    pub fn find_with<I: Input + ?Sized, T: Tracer>(
        &self,
        input: &I,
        from: usize,
        tracer: &mut T,
    ) -> Result<MatchResult, ExecError> {
        let len = i32::try_from(input.len()).unwrap_or(i32::MAX);
        let from = i32::try_from(from).unwrap_or(i32::MAX);
        let mut locals = if self.is_forward() {
            self.create_locals(input, from, from, len)
        } else {
            self.create_locals(input, from, len - 1, -1)
        };
        self.execute_with(&mut locals, input.is_compact(), tracer)
    }

    /// Execute the automaton.
    ///
    /// `compact` declares that every input unit is at most `0xFF`.
    pub fn execute<I: Input + ?Sized>(
        &self,
        locals: &mut Locals<'_, I>,
        compact: bool,
    ) -> Result<MatchResult, ExecError> {
        self.execute_with(locals, compact, &mut NoopTracer)
    }

    /// Execute with a tracer for debugging.
    pub fn execute_with<I: Input + ?Sized, T: Tracer>(
        &self,
        locals: &mut Locals<'_, I>,
        compact: bool,
        tracer: &mut T,
    ) -> Result<MatchResult, ExecError> {
        self.check_arguments(locals)?;
        self.prepare(locals);

        let min = i64::from(self.props().min_result_length);
        let remaining = if self.is_forward() {
            i64::from(locals.max_index) - i64::from(locals.index)
        } else {
            i64::from(locals.index) - i64::from(locals.max_index)
        };
        if remaining < min {
            trace!("{remaining} units left, shorter than {min}: no match");
            return Ok(MatchResult::NoMatch);
        }

        trace!(
            "execute from={} index={} max={}",
            locals.from_index, locals.index, locals.max_index
        );
        tracer.trace_start(locals.index);

        // A backward scan stops short of `from_index`.
        locals.cur_max_index = if self.is_backward() && locals.from_index - 1 > locals.max_index {
            locals.from_index - 1
        } else {
            locals.max_index
        };

        let mut ip: StateId = 0;
        loop {
            if let Some(interrupt) = &self.interrupt
                && interrupt.is_requested()
            {
                debug!("interrupted at index {} in state {ip}", locals.index);
                return Err(ExecError::Interrupted);
            }

            tracer.trace_state(ip, locals.index);
            let state = self.automaton.state(ip);
            let slot = match state {
                AutomatonState::Initial(s) => self.dispatch_initial(locals, s)?,
                AutomatonState::Plain(s) => {
                    self.dispatch_char(locals, s, &[], ip, compact, tracer)
                }
                AutomatonState::SimpleCapture(s) | AutomatonState::GenericCapture(s) => {
                    self.dispatch_char(locals, &s.state, &s.cg_transitions, ip, compact, tracer)
                }
            };
            locals.successor_index = slot;

            let Some(slot) = slot else {
                break;
            };
            let Some(&next) = state.successors().get(slot) else {
                panic!("corrupt automaton: state {ip} has no successor slot {slot}");
            };
            match next {
                Some(next) => ip = next,
                None => break,
            }
        }

        let result = self.extract_result(locals);
        trace!("finished at index {}: {result}", locals.index);
        tracer.trace_finish(&result);
        Ok(result)
    }

    fn check_arguments<I: Input + ?Sized>(
        &self,
        locals: &Locals<'_, I>,
    ) -> Result<(), ExecError> {
        let input_len = locals.input.len();
        let (from, index, max) = (locals.from_index, locals.index, locals.max_index);
        let ok = input_len < MAX_INPUT_LEN && {
            let len = input_len as i32;
            let bounds = if self.is_forward() {
                (0..=len).contains(&index) && (0..=len).contains(&max) && index <= max
            } else {
                (-1..len).contains(&index) && (-1..len).contains(&max) && index >= max
            };
            (0..=len).contains(&from) && bounds
        };
        if ok {
            return Ok(());
        }
        let err = ExecError::InvalidArguments {
            from_index: from,
            index,
            max_index: max,
            input_len,
        };
        debug!("{err}");
        Err(err)
    }

    /// Reset per-run state and capture buffers.
    fn prepare<I: Input + ?Sized>(&self, locals: &mut Locals<'_, I>) {
        locals.successor_index = None;
        locals.last_transition = None;
        locals.result_int = NO_MATCH;
        locals.match_end = -1;

        let mode = self.props().capture_mode;
        if !mode.tracks_captures() {
            return;
        }
        let (max_nfa_states, groups) = (
            self.automaton.max_nfa_states(),
            self.automaton.capture_groups(),
        );
        if !locals
            .tracking
            .as_ref()
            .is_some_and(|t| t.fits(max_nfa_states, groups))
        {
            locals.tracking = self.new_tracking();
        }
        if let Some(tracking) = locals.tracking.as_mut() {
            if mode == CaptureMode::Generic {
                tracking.init_result_order();
            }
            tracking.clear_results();
            tracking.clear_current_result();
        }
    }

    fn extract_result<I: Input + ?Sized>(&self, locals: &Locals<'_, I>) -> MatchResult {
        if locals.result_int != 0 {
            return MatchResult::NoMatch;
        }
        let Some(tracking) = locals.tracking.as_ref() else {
            return MatchResult::Position(locals.match_end as usize);
        };
        match self.props().capture_mode {
            CaptureMode::None => MatchResult::Position(locals.match_end as usize),
            CaptureMode::Simple if self.props().simple_cg_must_copy => {
                MatchResult::SimpleCaptures(tracking.current_result().to_vec())
            }
            CaptureMode::Simple => {
                MatchResult::SimpleCaptures(tracking.results()[..tracking.width()].to_vec())
            }
            CaptureMode::Generic => {
                MatchResult::GenericCaptures(tracking.current_result().to_vec())
            }
        }
    }

    // Cursor helpers. Forward reads `index` then increments; backward reads
    // `index` then decrements.

    #[inline]
    pub fn advance<I: Input + ?Sized>(&self, locals: &mut Locals<'_, I>) {
        if self.is_forward() {
            locals.index += 1;
        } else {
            locals.index -= 1;
        }
    }

    /// Whether another unit may be read before `cur_max_index`.
    #[inline]
    pub fn has_next<I: Input + ?Sized>(&self, locals: &Locals<'_, I>) -> bool {
        if self.is_forward() {
            // Unsigned, so a negative cursor counts as exhausted.
            (locals.index as u32) < (locals.cur_max_index as u32)
        } else {
            locals.index > locals.cur_max_index
        }
    }

    pub fn at_begin<I: Input + ?Sized>(&self, locals: &Locals<'_, I>) -> bool {
        if self.is_forward() {
            locals.index == 0
        } else {
            locals.index as i64 == locals.input.len() as i64 - 1
        }
    }

    pub fn at_end<I: Input + ?Sized>(&self, locals: &Locals<'_, I>) -> bool {
        if self.is_forward() {
            locals.index as i64 == locals.input.len() as i64
        } else {
            locals.index < 0
        }
    }

    /// Move back by up to `n` units and return how far it moved.
    ///
    /// Backward execution never re-reads, so only `n == 0` is accepted there.
    pub fn rewind_up_to<I: Input + ?Sized>(
        &self,
        locals: &mut Locals<'_, I>,
        n: usize,
    ) -> Result<usize, ExecError> {
        if self.is_backward() {
            if n == 0 {
                return Ok(0);
            }
            return Err(ExecError::RewindUnsupported);
        }
        let k = (locals.index.max(0) as usize).min(n);
        locals.index -= k as i32;
        Ok(k)
    }

    /// Boundary between units at the cursor, as reported in results.
    #[inline]
    pub(crate) fn boundary<I: Input + ?Sized>(&self, locals: &Locals<'_, I>) -> i32 {
        if self.is_forward() {
            locals.index
        } else {
            locals.index + 1
        }
    }

    pub fn prefix_length(&self) -> usize {
        self.automaton.prefix_length()
    }

    pub fn is_anchored(&self) -> bool {
        self.automaton.is_anchored()
    }

    pub fn is_forward(&self) -> bool {
        self.props().is_forward()
    }

    pub fn is_backward(&self) -> bool {
        self.props().is_backward()
    }

    pub fn is_searching(&self) -> bool {
        self.props().searching
    }

    pub fn is_simple_cg(&self) -> bool {
        self.props().is_simple_cg()
    }

    pub fn is_generic_cg(&self) -> bool {
        self.props().is_generic_cg()
    }

    pub fn cg_reorder_ratio(&self) -> f64 {
        self.automaton.cg_reorder_ratio()
    }

    pub fn cg_array_copy_ratio(&self) -> f64 {
        self.automaton.cg_array_copy_ratio()
    }
}
