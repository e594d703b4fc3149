use std::path::PathBuf;

use capdfa_automaton::dump;
use capdfa_core::Colors;

use super::run_common;

pub struct DumpArgs {
    pub automaton_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let automaton = run_common::load_automaton(&args.automaton_path);
    let colors = Colors::new(args.color);
    print!("{}", dump(&automaton, colors));
}
