//! Hand-built automata for executor tests.

use capdfa_automaton::{
    Automaton, AutomatonParts, AutomatonState, CaptureMode, CaptureState, CharState,
    ExecutorProperties, FinalTransition, InitialState, LazyCaptureGroupTransition,
    PartialTransition,
};
use capdfa_core::CharClass;

pub fn unit(c: char) -> CharClass {
    CharClass::single(c as u16)
}

fn plain(state: CharState) -> AutomatonState {
    AutomatonState::Plain(state)
}

/// Searching forward for `b`: `S1` skips anything else, `S2` accepts.
pub fn find_b_with(properties: ExecutorProperties) -> Automaton {
    AutomatonParts::new(
        properties,
        vec![
            AutomatonState::Initial(InitialState::unanchored(1)),
            plain(
                CharState::new(1)
                    .on(unit('b'), Some(2))
                    .on(CharClass::any(), Some(1)),
            ),
            plain(CharState::new(2).accepting()),
        ],
    )
    .build()
    .unwrap()
}

pub fn find_b() -> Automaton {
    find_b_with(ExecutorProperties::forward().searching(true))
}

/// Two-unit literal read in scan order, enterable anywhere.
pub fn literal(properties: ExecutorProperties, first: char, second: char) -> Automaton {
    AutomatonParts::new(
        properties,
        vec![
            AutomatonState::Initial(InitialState::unanchored(1)),
            plain(CharState::new(1).on(unit(first), Some(2))),
            plain(CharState::new(2).on(unit(second), Some(3))),
            plain(CharState::new(3).accepting()),
        ],
    )
    .build()
    .unwrap()
}

/// `a` followed by a run of `a`, accepting after each one.
pub fn a_plus() -> Automaton {
    AutomatonParts::new(
        ExecutorProperties::forward(),
        vec![
            AutomatonState::Initial(InitialState::anchored(1)),
            plain(CharState::new(1).on(unit('a'), Some(2))),
            plain(CharState::new(2).looping(unit('a')).accepting()),
        ],
    )
    .build()
    .unwrap()
}

/// `ab` that must end the input.
pub fn ab_at_end() -> Automaton {
    AutomatonParts::new(
        ExecutorProperties::forward(),
        vec![
            AutomatonState::Initial(InitialState::anchored(1)),
            plain(CharState::new(1).on(unit('a'), Some(2))),
            plain(CharState::new(2).on(unit('b'), Some(3))),
            plain(
                CharState::new(3)
                    .on(CharClass::any(), None)
                    .accepting_at_end(),
            ),
        ],
    )
    .build()
    .unwrap()
}

/// `b` preceded by `x`, with a one-unit prefix re-reading the `x`.
///
/// Every entry expects the prefix unit, so only entries `k = 1` lead
/// anywhere. `S1` hunts for `x`, `S2` expects `b`.
pub fn x_then_b(searching: bool) -> Automaton {
    AutomatonParts::new(
        ExecutorProperties::forward().searching(searching),
        vec![
            AutomatonState::Initial(InitialState::new(
                vec![None, Some(1)],
                vec![None, Some(1)],
            )),
            plain(
                CharState::new(1)
                    .on(unit('x'), Some(2))
                    .on(CharClass::any(), Some(1)),
            ),
            plain(
                CharState::new(2)
                    .on(unit('b'), Some(3))
                    .on(unit('x'), Some(2))
                    .on(CharClass::any(), Some(1)),
            ),
            plain(CharState::new(3).accepting()),
        ],
    )
    .build()
    .unwrap()
}

/// Anchored `a(b*)c`. Edges: `T0` S0→S1, `T1` S1→S2, `T2` S2→S3,
/// `T3` S2→S4, `T4` S3→S3 (loop), `T5` S3→S4.
fn abc_states(mode: CaptureMode) -> Vec<AutomatonState> {
    let wrap = |state: CharState, cg: Vec<u16>| match mode {
        CaptureMode::Simple => AutomatonState::SimpleCapture(CaptureState::new(state, cg)),
        _ => AutomatonState::GenericCapture(CaptureState::new(state, cg)),
    };
    vec![
        AutomatonState::Initial(InitialState::anchored(1).with_cg_transitions(vec![0, 0])),
        wrap(CharState::new(1).on(unit('a'), Some(2)), vec![1]),
        wrap(
            CharState::new(2).on(unit('b'), Some(3)).on(unit('c'), Some(4)),
            vec![2, 3],
        ),
        wrap(
            CharState::new(3).looping(unit('b')).on(unit('c'), Some(4)),
            vec![4, 5],
        ),
        wrap(CharState::new(4).accepting(), vec![]),
    ]
}

pub fn abc_simple(must_copy: bool) -> Automaton {
    let end = || FinalTransition::new(0).update([1]);
    let transitions = vec![
        LazyCaptureGroupTransition::new(0, vec![PartialTransition::new()]),
        LazyCaptureGroupTransition::new(1, vec![PartialTransition::new().update(0, [0])]),
        LazyCaptureGroupTransition::new(2, vec![PartialTransition::new().update(0, [2])]),
        LazyCaptureGroupTransition::new(3, vec![PartialTransition::new().update(0, [2, 3])])
            .with_unanchored_final(end()),
        LazyCaptureGroupTransition::new(4, vec![PartialTransition::new()]),
        LazyCaptureGroupTransition::new(5, vec![PartialTransition::new().update(0, [3])])
            .with_unanchored_final(end()),
    ];
    AutomatonParts::new(
        ExecutorProperties::forward()
            .capture_mode(CaptureMode::Simple)
            .simple_cg_must_copy(must_copy),
        abc_states(CaptureMode::Simple),
    )
    .captures(2, 1, transitions)
    .build()
    .unwrap()
}

pub fn abc_generic() -> Automaton {
    let end = || FinalTransition::new(0).update([1]);
    let branch = || {
        vec![
            PartialTransition::new(),
            PartialTransition::new().update(0, [3]),
        ]
    };
    let transitions = vec![
        LazyCaptureGroupTransition::new(0, vec![PartialTransition::new().update(0, [0])]),
        LazyCaptureGroupTransition::new(
            1,
            vec![
                PartialTransition::new()
                    .copy(0, 1)
                    .reordered([1, 0])
                    .update(0, [2]),
                PartialTransition::new().update(0, [2, 3]),
            ],
        ),
        LazyCaptureGroupTransition::new(2, branch()),
        LazyCaptureGroupTransition::new(3, vec![]).with_unanchored_final(end()),
        LazyCaptureGroupTransition::new(4, branch()),
        LazyCaptureGroupTransition::new(5, vec![]).with_unanchored_final(end()),
    ];
    AutomatonParts::new(
        ExecutorProperties::forward().capture_mode(CaptureMode::Generic),
        abc_states(CaptureMode::Generic),
    )
    .captures(2, 2, transitions)
    .build()
    .unwrap()
}

/// `(ab)` read in scan order. Forward scans `a` then `b`; backward scans
/// `b` then `a`, so the entry and final programs swap ends.
pub fn ab_group(properties: ExecutorProperties) -> Automaton {
    let forward = properties.is_forward();
    let (first, second) = if forward { ('a', 'b') } else { ('b', 'a') };
    let (entry, exit): ([u8; 2], [u8; 2]) =
        if forward { ([0, 2], [1, 3]) } else { ([1, 3], [0, 2]) };
    let transitions = vec![
        LazyCaptureGroupTransition::new(0, vec![PartialTransition::new().update(0, entry)]),
        LazyCaptureGroupTransition::new(1, vec![PartialTransition::new()]),
        LazyCaptureGroupTransition::new(2, vec![PartialTransition::new()])
            .with_unanchored_final(FinalTransition::new(0).update(exit)),
    ];
    simple_pair(properties, first, second, transitions)
}

/// Backward `(a)b`: group 1 closes on the `b` edge and opens at the end.
pub fn a_group_then_b_backward() -> Automaton {
    let transitions = vec![
        LazyCaptureGroupTransition::new(0, vec![PartialTransition::new().update(0, [1])]),
        LazyCaptureGroupTransition::new(1, vec![PartialTransition::new()]),
        LazyCaptureGroupTransition::new(2, vec![PartialTransition::new().update(0, [3])])
            .with_unanchored_final(FinalTransition::new(0).update([0, 2])),
    ];
    simple_pair(ExecutorProperties::backward(), 'b', 'a', transitions)
}

fn simple_pair(
    properties: ExecutorProperties,
    first: char,
    second: char,
    transitions: Vec<LazyCaptureGroupTransition>,
) -> Automaton {
    let wrap = |state: CharState, cg: Vec<u16>| {
        AutomatonState::SimpleCapture(CaptureState::new(state, cg))
    };
    AutomatonParts::new(
        properties.capture_mode(CaptureMode::Simple),
        vec![
            AutomatonState::Initial(InitialState::unanchored(1).with_cg_transitions(vec![0, 0])),
            wrap(CharState::new(1).on(unit(first), Some(2)), vec![1]),
            wrap(CharState::new(2).on(unit(second), Some(3)), vec![2]),
            wrap(CharState::new(3).accepting(), vec![]),
        ],
    )
    .captures(2, 1, transitions)
    .build()
    .unwrap()
}

/// Generic `a$`: the only result comes from the end-anchored final program.
pub fn a_at_end_generic() -> Automaton {
    let transitions = vec![
        LazyCaptureGroupTransition::new(0, vec![PartialTransition::new().update(0, [0])]),
        LazyCaptureGroupTransition::new(1, vec![])
            .with_anchored_final(FinalTransition::new(0).update([1])),
    ];
    AutomatonParts::new(
        ExecutorProperties::forward().capture_mode(CaptureMode::Generic),
        vec![
            AutomatonState::Initial(InitialState::anchored(1).with_cg_transitions(vec![0, 0])),
            AutomatonState::GenericCapture(CaptureState::new(
                CharState::new(1).on(unit('a'), Some(2)),
                vec![1],
            )),
            AutomatonState::GenericCapture(CaptureState::new(
                CharState::new(2).accepting_at_end(),
                vec![],
            )),
        ],
    )
    .captures(1, 1, transitions)
    .build()
    .unwrap()
}
