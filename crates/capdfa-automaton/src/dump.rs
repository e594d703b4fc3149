//! Human-readable automaton dump for debugging.
//!
//! Three sections: scalar properties, the state table and, when captures
//! are tracked, the capture transition table.

use std::fmt::Write as _;

use capdfa_core::Colors;

use crate::automaton::Automaton;
use crate::state::{AutomatonState, CharState, InitialState, StateId};
use crate::transition::{
    FinalTransition, IndexOp, LazyCaptureGroupTransition, PartialTransition, TransitionId,
};

/// Generate a human-readable dump of the automaton.
pub fn dump(automaton: &Automaton, colors: Colors) -> String {
    let mut out = String::new();
    dump_properties(&mut out, automaton);
    dump_states(&mut out, automaton, colors);
    if !automaton.cg_transitions().is_empty() {
        dump_transitions(&mut out, automaton, colors);
    }
    out
}

fn dump_properties(out: &mut String, automaton: &Automaton) {
    let p = automaton.properties();
    writeln!(out, "[properties]").unwrap();
    writeln!(out, "direction = {}", p.direction).unwrap();
    writeln!(out, "searching = {}", p.searching).unwrap();
    writeln!(out, "capture_mode = {}", p.capture_mode).unwrap();
    if p.capture_mode.tracks_captures() {
        writeln!(out, "capture_groups = {}", automaton.capture_groups()).unwrap();
        writeln!(out, "max_nfa_states = {}", automaton.max_nfa_states()).unwrap();
    }
    writeln!(out, "min_result_length = {}", p.min_result_length).unwrap();
    if p.is_simple_cg() {
        writeln!(out, "simple_cg_must_copy = {}", p.simple_cg_must_copy).unwrap();
    }
}

fn dump_states(out: &mut String, automaton: &Automaton, c: Colors) {
    writeln!(out).unwrap();
    writeln!(out, "[states]").unwrap();
    for state in automaton.states() {
        match state {
            AutomatonState::Initial(s) => dump_initial(out, s, c),
            _ => {
                // Validated: every non-initial state has a char part.
                let Some(cs) = state.char_state() else {
                    continue;
                };
                dump_char_state(out, cs, state.cg_transitions(), c);
            }
        }
    }
}

fn dump_initial(out: &mut String, s: &InitialState, c: Colors) {
    writeln!(
        out,
        "{}S0{} initial prefix={}",
        c.state,
        c.reset,
        s.prefix_length()
    )
    .unwrap();
    let half = s.half_len();
    for (i, succ) in s.successors.iter().enumerate() {
        let (label, k) = if i < half {
            ("begin", i)
        } else {
            ("inside", i - half)
        };
        write!(out, "  {label} {k} -> {}", fmt_successor(*succ, c)).unwrap();
        if let Some(t) = s.cg_transitions.get(i) {
            write!(out, " {}T{t}{}", c.dim, c.reset).unwrap();
        }
        writeln!(out).unwrap();
    }
}

fn dump_char_state(out: &mut String, s: &CharState, transitions: &[TransitionId], c: Colors) {
    write!(out, "{}S{}{}", c.state, s.id, c.reset).unwrap();
    if s.final_state {
        write!(out, " {}final{}", c.accept, c.reset).unwrap();
    }
    if s.anchored_final {
        write!(out, " {}final_at_end{}", c.accept, c.reset).unwrap();
    }
    writeln!(out).unwrap();

    for (slot, (class, succ)) in s.matchers.iter().zip(&s.successors).enumerate() {
        write!(
            out,
            "  {}{class}{} -> {}",
            c.unit,
            c.reset,
            fmt_successor(*succ, c)
        )
        .unwrap();
        if let Some(t) = transitions.get(slot) {
            write!(out, " {}T{t}{}", c.dim, c.reset).unwrap();
        }
        if s.loop_to_self == Some(slot as u16) {
            write!(out, " (loop)").unwrap();
        }
        writeln!(out).unwrap();
    }
}

fn fmt_successor(succ: Option<StateId>, c: Colors) -> String {
    match succ {
        Some(id) => format!("{}S{id}{}", c.state, c.reset),
        None => "-".to_string(),
    }
}

fn dump_transitions(out: &mut String, automaton: &Automaton, c: Colors) {
    writeln!(out).unwrap();
    writeln!(out, "[transitions]").unwrap();
    for t in automaton.cg_transitions() {
        dump_transition(out, t, c);
    }
}

fn dump_transition(out: &mut String, t: &LazyCaptureGroupTransition, c: Colors) {
    writeln!(out, "{}T{}{}", c.dim, t.id, c.reset).unwrap();
    for (slot, pt) in t.partial_transitions.iter().enumerate() {
        writeln!(out, "  {slot}: {}", fmt_partial(pt)).unwrap();
    }
    if let Some(ft) = &t.anchored_final {
        writeln!(out, "  final_at_end: {}", fmt_final(ft)).unwrap();
    }
    if let Some(ft) = &t.unanchored_final {
        writeln!(out, "  final: {}", fmt_final(ft)).unwrap();
    }
}

fn fmt_partial(pt: &PartialTransition) -> String {
    if pt.is_empty() {
        return "-".to_string();
    }
    let mut parts = Vec::new();
    for copy in &pt.array_copies {
        parts.push(format!("copy {}->{}", copy.source, copy.target));
    }
    if pt.reorders_results() {
        parts.push(format!("reorder {:?}", pt.reorder));
    }
    for op in &pt.index_updates {
        parts.push(format!("set {}", fmt_op(op)));
    }
    for op in &pt.index_clears {
        parts.push(format!("clear {}", fmt_op(op)));
    }
    parts.join("; ")
}

fn fmt_op(op: &IndexOp) -> String {
    format!("{}:{:?}", op.slot, op.boundaries)
}

fn fmt_final(ft: &FinalTransition) -> String {
    let mut s = format!("slot {}", ft.result_slot);
    if !ft.index_updates.is_empty() {
        write!(s, "; set {:?}", ft.index_updates).unwrap();
    }
    if !ft.index_clears.is_empty() {
        write!(s, "; clear {:?}", ft.index_clears).unwrap();
    }
    s
}
