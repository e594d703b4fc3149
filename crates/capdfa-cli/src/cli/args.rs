//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition is reused
//! by every command that takes it.

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, value_parser};
use log::LevelFilter;

/// Compiled automaton, binary or JSON (positional).
pub fn automaton_path_arg() -> Arg {
    Arg::new("automaton_path")
        .value_name("AUTOMATON")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Compiled automaton (binary or JSON)")
}

/// Input file to run against (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Input file to match (- for stdin)")
}

/// Inline input text (-s/--input).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('s')
        .long("input")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline input text")
}

/// How input text becomes code units (--encoding).
pub fn encoding_arg() -> Arg {
    Arg::new("encoding")
        .long("encoding")
        .value_name("ENCODING")
        .default_value("utf16")
        .value_parser(["latin1", "utf8", "utf16"])
        .help("Code units the automaton reads")
}

/// Start position (--from).
pub fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .value_name("INDEX")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Index where matching starts (forward) or stops (backward)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log level (--log-level), applies to every command.
pub fn log_level_arg() -> Arg {
    Arg::new("log_level")
        .long("log-level")
        .value_name("LEVEL")
        .global(true)
        .value_parser(
            PossibleValuesParser::new(["off", "error", "warn", "info", "debug", "trace"])
                .try_map(|s| s.parse::<LevelFilter>()),
        )
        .help("Log to stderr at this level (overrides RUST_LOG)")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Skip the result after a trace (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Print only the trace, not the result")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("File to write")
}
