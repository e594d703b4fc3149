//! Execution tracing.
//!
//! The executor is generic over its [`Tracer`], so [`NoopTracer`] calls
//! compile away entirely. [`DebugRecorder`] keeps the raw transition log;
//! [`PrintTracer`] renders a readable trace for the CLI.

use capdfa_automaton::StateId;
use capdfa_core::{CodeUnit, Colors, fmt_code_unit};

use super::executor::MatchResult;

/// Instrumentation hooks called by the executor.
///
/// - `trace_start` - after argument checks, before the first state
/// - `trace_state` - before dispatching a state
/// - `trace_transition` - for every unit consumed by an ordinary state
/// - `trace_accept` - when a result is stored
/// - `trace_finish` - once the result is known
pub trait Tracer {
    fn trace_start(&mut self, index: i32);

    fn trace_state(&mut self, state: StateId, index: i32);

    /// `position` is the index of the unit `unit` that selected `transition`.
    fn trace_transition(
        &mut self,
        position: i32,
        state: StateId,
        transition: usize,
        unit: CodeUnit,
    );

    fn trace_accept(&mut self, boundary: i32, anchored: bool);

    fn trace_finish(&mut self, result: &MatchResult);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _index: i32) {}

    #[inline(always)]
    fn trace_state(&mut self, _state: StateId, _index: i32) {}

    #[inline(always)]
    fn trace_transition(
        &mut self,
        _position: i32,
        _state: StateId,
        _transition: usize,
        _unit: CodeUnit,
    ) {
    }

    #[inline(always)]
    fn trace_accept(&mut self, _boundary: i32, _anchored: bool) {}

    #[inline(always)]
    fn trace_finish(&mut self, _result: &MatchResult) {}
}

/// One consumed unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    pub position: i32,
    pub state: StateId,
    /// Successor slot taken.
    pub transition: usize,
}

/// Append-only log of transitions. Never influences the result.
#[derive(Clone, Debug, Default)]
pub struct DebugRecorder {
    records: Vec<TransitionRecord>,
}

impl DebugRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Tracer for DebugRecorder {
    fn trace_start(&mut self, _index: i32) {}

    fn trace_state(&mut self, _state: StateId, _index: i32) {}

    fn trace_transition(
        &mut self,
        position: i32,
        state: StateId,
        transition: usize,
        _unit: CodeUnit,
    ) {
        self.records.push(TransitionRecord {
            position,
            state,
            transition,
        });
    }

    fn trace_accept(&mut self, _boundary: i32, _anchored: bool) {}

    fn trace_finish(&mut self, _result: &MatchResult) {}
}

/// Tracer that collects human-readable trace lines.
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, index: i32) {
        let c = self.colors;
        self.lines
            .push(format!("{}start @{index}{}", c.dim, c.reset));
    }

    fn trace_state(&mut self, state: StateId, index: i32) {
        let c = self.colors;
        self.lines
            .push(format!("{}S{state}{} @{index}", c.state, c.reset));
    }

    fn trace_transition(
        &mut self,
        position: i32,
        _state: StateId,
        transition: usize,
        unit: CodeUnit,
    ) {
        let c = self.colors;
        self.lines.push(format!(
            "  @{position} {}'{}'{} -> {}{transition}{}",
            c.unit,
            fmt_code_unit(unit),
            c.reset,
            c.dim,
            c.reset
        ));
    }

    fn trace_accept(&mut self, boundary: i32, anchored: bool) {
        let c = self.colors;
        let what = if anchored { "accept at end" } else { "accept" };
        self.lines
            .push(format!("  {}{what}{} @{boundary}", c.accept, c.reset));
    }

    fn trace_finish(&mut self, result: &MatchResult) {
        let c = self.colors;
        let color = match result {
            MatchResult::NoMatch => c.dim,
            _ => c.accept,
        };
        self.lines.push(format!("{color}{result}{}", c.reset));
    }
}
