//! Validate an automaton and write it back out.

use std::fs;
use std::path::PathBuf;

use log::info;

use super::run_common;

pub struct PackArgs {
    pub automaton_path: PathBuf,
    pub output: PathBuf,
    pub json: bool,
}

pub fn run(args: PackArgs) {
    let automaton = run_common::load_automaton(&args.automaton_path);

    let bytes = if args.json {
        automaton.to_json_pretty().map(|mut json| {
            json.push('\n');
            json.into_bytes()
        })
    } else {
        automaton.to_bytes()
    };
    let bytes = bytes.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = fs::write(&args.output, &bytes) {
        eprintln!("error: failed to write '{}': {}", args.output.display(), e);
        std::process::exit(1);
    }
    info!(
        "wrote {} bytes ({}) to {}",
        bytes.len(),
        if args.json { "json" } else { "binary" },
        args.output.display()
    );
}
