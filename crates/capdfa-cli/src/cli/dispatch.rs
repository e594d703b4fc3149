//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` pulls the fields each command uses
//! - `Into<*Args>` bridges dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use log::LevelFilter;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::pack::PackArgs;
use crate::commands::run_common::Encoding;
use crate::commands::stats::StatsArgs;
use crate::commands::trace::TraceArgs;

pub struct ExecParams {
    pub automaton_path: PathBuf,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub encoding: Encoding,
    pub from: usize,
    pub json: bool,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: automaton_path(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            encoding: parse_encoding(m),
            from: m.get_one::<usize>("from").copied().unwrap_or(0),
            json: m.get_flag("json"),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            input_path: p.input_path,
            input_text: p.input_text,
            encoding: p.encoding,
            from: p.from,
            json: p.json,
        }
    }
}

pub struct TraceParams {
    pub automaton_path: PathBuf,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub encoding: Encoding,
    pub from: usize,
    pub no_result: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: automaton_path(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            encoding: parse_encoding(m),
            from: m.get_one::<usize>("from").copied().unwrap_or(0),
            no_result: m.get_flag("no_result"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            input_path: p.input_path,
            input_text: p.input_text,
            encoding: p.encoding,
            from: p.from,
            no_result: p.no_result,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub automaton_path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: automaton_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatsParams {
    pub automaton_path: PathBuf,
    pub json: bool,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: automaton_path(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            json: p.json,
        }
    }
}

pub struct PackParams {
    pub automaton_path: PathBuf,
    pub output: PathBuf,
    pub json: bool,
}

impl PackParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: automaton_path(m),
            output: m.get_one::<PathBuf>("output").cloned().unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<PackParams> for PackArgs {
    fn from(p: PackParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            output: p.output,
            json: p.json,
        }
    }
}

/// Level given with `--log-level`, if any.
pub fn log_level(m: &ArgMatches) -> Option<LevelFilter> {
    m.get_one::<LevelFilter>("log_level").copied()
}

/// Required by clap, so the default is never observed.
fn automaton_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("automaton_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_encoding(m: &ArgMatches) -> Encoding {
    match m.get_one::<String>("encoding").map(|s| s.as_str()) {
        Some("latin1") => Encoding::Latin1,
        Some("utf8") => Encoding::Utf8,
        _ => Encoding::Utf16,
    }
}
