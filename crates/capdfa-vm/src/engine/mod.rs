//! Execution engine.
//!
//! The executor walks the state table with a plain instruction pointer,
//! keeping all mutable state in caller-owned [`Locals`].

mod dispatch;
mod error;
mod executor;
mod input;
mod interrupt;
mod locals;
mod trace;
mod tracking;

#[cfg(test)]
mod capture_tests;
#[cfg(test)]
mod fixtures;

pub use error::ExecError;
pub use executor::{Executor, ExecutorBuilder, MatchResult};
pub use input::{Input, Masked};
pub use interrupt::Interrupt;
pub use locals::Locals;
pub use trace::{DebugRecorder, NoopTracer, PrintTracer, Tracer, TransitionRecord};
pub use tracking::CaptureGroupTrackingData;
