mod cli;
mod commands;

use cli::{DumpParams, ExecParams, PackParams, StatsParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    // Global args are propagated into the subcommand's matches.
    let log_level = matches
        .subcommand()
        .and_then(|(_, m)| cli::log_level(m));
    cli::logger_builder(log_level).init();

    match matches.subcommand() {
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        Some(("pack", m)) => {
            let params = PackParams::from_matches(m);
            commands::pack::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
