#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the capdfa crates.
//!
//! - [`CharClass`]: sorted code-unit ranges used by automaton states to
//!   classify the next input unit.
//! - [`Colors`]: ANSI palette for dump and trace output.

mod char_class;
mod colors;

#[cfg(test)]
mod char_class_tests;

pub use char_class::{CharClass, CodeUnit, LATIN1_MAX, fmt_code_unit};
pub use colors::Colors;
