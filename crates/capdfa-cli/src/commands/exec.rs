//! Run an automaton and print the match.

use std::path::PathBuf;

use capdfa_vm::{Executor, NoopTracer};

use super::run_common::{self, Encoding};

pub struct ExecArgs {
    pub automaton_path: PathBuf,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub encoding: Encoding,
    pub from: usize,
    pub json: bool,
}

pub fn run(args: ExecArgs) {
    let automaton = run_common::load_automaton(&args.automaton_path);
    let subject = run_common::load_subject(
        args.input_text.as_deref(),
        args.input_path.as_deref(),
        args.encoding,
    );

    let executor = Executor::new(automaton);
    let result = match subject.find_with(&executor, args.from, &mut NoopTracer) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    if args.json {
        match serde_json::to_string(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", result);
        if let Some(captures) = result.captures() {
            for line in run_common::format_groups(captures) {
                println!("  {}", line);
            }
        }
    }

    if !result.is_match() {
        std::process::exit(1);
    }
}
