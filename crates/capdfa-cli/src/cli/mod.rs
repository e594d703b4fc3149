mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{DumpParams, ExecParams, PackParams, StatsParams, TraceParams, log_level};

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Piping either stream (`capdfa trace ... | less`) disables colors.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}

/// Stderr logger configured from `RUST_LOG`; an explicit `--log-level` wins.
pub fn logger_builder(level: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::from_env(Env::default());
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
}
