//! Capture-tracking cost of an automaton.

use std::path::PathBuf;

use capdfa_automaton::Automaton;
use serde::Serialize;

use super::run_common;

pub struct StatsArgs {
    pub automaton_path: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub states: usize,
    pub capture_mode: &'static str,
    pub capture_groups: usize,
    pub max_nfa_states: usize,
    pub lazy_transitions: usize,
    pub partial_transitions: usize,
    pub reordering: usize,
    pub array_copies: usize,
    pub reorder_ratio: f64,
    pub array_copy_ratio: f64,
}

impl StatsReport {
    pub fn collect(automaton: &Automaton) -> Self {
        let stats = automaton.transition_stats();
        Self {
            states: automaton.num_states(),
            capture_mode: automaton.properties().capture_mode.as_str(),
            capture_groups: automaton.capture_groups(),
            max_nfa_states: automaton.max_nfa_states(),
            lazy_transitions: stats.lazy_transitions,
            partial_transitions: stats.partial_transitions,
            reordering: stats.reordering,
            array_copies: stats.array_copies,
            reorder_ratio: automaton.cg_reorder_ratio(),
            array_copy_ratio: automaton.cg_array_copy_ratio(),
        }
    }

    pub fn render(&self) -> String {
        let rows: [(&str, String); 10] = [
            ("states", self.states.to_string()),
            ("capture mode", self.capture_mode.to_owned()),
            ("capture groups", self.capture_groups.to_string()),
            ("max nfa states", self.max_nfa_states.to_string()),
            ("lazy transitions", self.lazy_transitions.to_string()),
            ("partial transitions", self.partial_transitions.to_string()),
            ("reordering", self.reordering.to_string()),
            ("array copies", self.array_copies.to_string()),
            ("reorder ratio", format!("{:.3}", self.reorder_ratio)),
            ("array copy ratio", format!("{:.3}", self.array_copy_ratio)),
        ];
        rows.iter()
            .map(|(name, value)| format!("{:<20} {}\n", name, value))
            .collect()
    }
}

pub fn run(args: StatsArgs) {
    let automaton = run_common::load_automaton(&args.automaton_path);
    let report = StatsReport::collect(&automaton);

    if !args.json {
        print!("{}", report.render());
        return;
    }
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}
