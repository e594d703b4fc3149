//! Compiled automaton format for capdfa.
//!
//! This crate contains:
//! - Executor properties (direction, search mode, capture mode)
//! - The state table (initial state plus ordinary character states)
//! - Lazy capture-group transition programs
//! - Validation, binary/JSON loading, statistics and a human-readable dump
//!
//! Nothing here executes anything; the table is consumed by `capdfa-vm`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;
mod dump;
mod error;
mod format;
mod properties;
mod state;
mod stats;
mod transition;

#[cfg(test)]
mod format_tests;
#[cfg(test)]
mod state_tests;
#[cfg(test)]
mod test_utils;

pub use automaton::{Automaton, AutomatonParts};
pub use dump::dump;
pub use error::AutomatonError;
pub use format::{HEADER_SIZE, Header, MAGIC, VERSION};
pub use properties::{CaptureMode, Direction, ExecutorProperties};
pub use state::{AutomatonState, CaptureState, CharState, InitialState, StateId};
pub use stats::TransitionStats;
pub use transition::{
    ArrayCopy, FinalTransition, IndexOp, LazyCaptureGroupTransition, PartialTransition,
    TransitionId,
};
