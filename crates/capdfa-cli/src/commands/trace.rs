//! Trace execution for debugging.

use std::path::PathBuf;

use capdfa_core::Colors;
use capdfa_vm::{Executor, PrintTracer};

use super::run_common::{self, Encoding};

pub struct TraceArgs {
    pub automaton_path: PathBuf,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub encoding: Encoding,
    pub from: usize,
    pub no_result: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let automaton = run_common::load_automaton(&args.automaton_path);
    let subject = run_common::load_subject(
        args.input_text.as_deref(),
        args.input_path.as_deref(),
        args.encoding,
    );

    let executor = Executor::new(automaton);
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(colors);

    let result = match subject.find_with(&executor, args.from, &mut tracer) {
        Ok(result) => {
            tracer.print();
            result
        }
        Err(e) => {
            tracer.print();
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    if !result.is_match() {
        std::process::exit(1);
    }

    if args.no_result {
        return;
    }

    println!("{}---{}", colors.dim, colors.reset);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}
