//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("capdfa")
        .about("Run and inspect compiled capture-group DFAs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_level_arg())
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
        .subcommand(stats_command())
        .subcommand(pack_command())
}

/// Add the input arguments shared by exec and trace.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(automaton_path_arg())
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(encoding_arg())
        .arg(from_arg())
}

/// Run an automaton over an input and print the result.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Run an automaton over an input")
        .override_usage(
            "\
  capdfa exec <AUTOMATON> <INPUT>
  capdfa exec <AUTOMATON> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  capdfa exec find_b.json -s 'xxbZZ'             # match end or captures
  capdfa exec words.cdfa notes.txt --json        # JSON result
  capdfa exec re.cdfa -s 'abc' --encoding latin1 # one byte per unit
  capdfa exec re.cdfa -s 'xxabc' --from 2        # start matching at 2

Exits with 1 when there is no match."#,
        );

    with_input_args(cmd).arg(json_arg())
}

/// Trace execution step by step.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace execution for debugging")
        .override_usage(
            "\
  capdfa trace <AUTOMATON> <INPUT>
  capdfa trace <AUTOMATON> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  capdfa trace find_b.json -s 'xxbZZ'             # states, edges, result
  capdfa trace re.cdfa -s 'abbc' --no-result      # trace only"#,
        );

    with_input_args(cmd)
        .arg(no_result_arg())
        .arg(color_arg())
}

/// Show the state table and capture transitions.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the state table and capture transitions")
        .override_usage("  capdfa dump <AUTOMATON>")
        .after_help(
            r#"EXAMPLES:
  capdfa dump find_b.json                 # human-readable tables
  capdfa dump re.cdfa --color always | less -R"#,
        )
        .arg(automaton_path_arg())
        .arg(color_arg())
}

/// Show capture-tracking cost statistics.
pub fn stats_command() -> Command {
    Command::new("stats")
        .about("Show capture-tracking statistics")
        .override_usage("  capdfa stats <AUTOMATON>")
        .after_help(
            r#"EXAMPLES:
  capdfa stats re.cdfa           # counts and ratios
  capdfa stats re.cdfa --json    # same, as JSON"#,
        )
        .arg(automaton_path_arg())
        .arg(json_arg())
}

/// Validate an automaton and write it in the binary (or JSON) format.
pub fn pack_command() -> Command {
    Command::new("pack")
        .about("Validate an automaton and write it in binary form")
        .override_usage("  capdfa pack <AUTOMATON> -o <FILE>")
        .after_help(
            r#"EXAMPLES:
  capdfa pack re.json -o re.cdfa          # JSON to binary
  capdfa pack re.cdfa -o re.json --json   # binary back to JSON"#,
        )
        .arg(automaton_path_arg())
        .arg(output_arg())
        .arg(json_arg().help("Write pretty JSON instead of the binary format"))
}
