//! Executor for compiled capdfa automata.
//!
//! This crate runs an [`capdfa_automaton::Automaton`] over an input sequence
//! of code units, producing a match end position or capture-group offsets.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    CaptureGroupTrackingData, DebugRecorder, ExecError, Executor, ExecutorBuilder, Input,
    Interrupt, Locals, Masked, MatchResult, NoopTracer, PrintTracer, Tracer, TransitionRecord,
};
