//! Hand-built automata shared by the tests in this crate.

use capdfa_core::CharClass;

use crate::automaton::{Automaton, AutomatonParts};
use crate::properties::{CaptureMode, ExecutorProperties};
use crate::state::{AutomatonState, CaptureState, CharState, InitialState};
use crate::transition::{FinalTransition, LazyCaptureGroupTransition, PartialTransition};

/// Searching forward for `b`: `S1` skips anything else, `S2` accepts.
pub fn find_b_parts() -> AutomatonParts {
    AutomatonParts::new(
        ExecutorProperties::forward().searching(true),
        vec![
            AutomatonState::Initial(InitialState::unanchored(1)),
            AutomatonState::Plain(
                CharState::new(1)
                    .on(CharClass::single(b'b'.into()), Some(2))
                    .on(CharClass::any(), Some(1)),
            ),
            AutomatonState::Plain(CharState::new(2).accepting()),
        ],
    )
}

pub fn find_b() -> Automaton {
    Automaton::new(find_b_parts()).unwrap()
}

/// State graph of anchored `a(b*)c` in the given capture mode.
///
/// `S2` and `S3` both branch on `b` (slot 0) and `c` (slot 1); `S3` loops on
/// `b`. Edges: `T0` S0→S1, `T1` S1→S2, `T2` S2→S3, `T3` S2→S4, `T4` S3→S3,
/// `T5` S3→S4.
fn abc_states(mode: CaptureMode) -> Vec<AutomatonState> {
    let b = || CharClass::single(b'b'.into());
    let c = || CharClass::single(b'c'.into());
    let wrap = |state: CharState, cg: Vec<u16>| match mode {
        CaptureMode::Simple => AutomatonState::SimpleCapture(CaptureState::new(state, cg)),
        _ => AutomatonState::GenericCapture(CaptureState::new(state, cg)),
    };
    vec![
        AutomatonState::Initial(InitialState::anchored(1).with_cg_transitions(vec![0, 0])),
        wrap(
            CharState::new(1).on(CharClass::single(b'a'.into()), Some(2)),
            vec![1],
        ),
        wrap(CharState::new(2).on(b(), Some(3)).on(c(), Some(4)), vec![2, 3]),
        wrap(CharState::new(3).looping(b()).on(c(), Some(4)), vec![4, 5]),
        wrap(CharState::new(4).accepting(), vec![]),
    ]
}

/// `a(b*)c` with simple captures: every edge writes row 0 directly.
pub fn abc_simple_parts() -> AutomatonParts {
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
        ExecutorProperties::forward().capture_mode(CaptureMode::Simple),
        abc_states(CaptureMode::Simple),
    )
    .captures(2, 1, transitions)
}

/// `a(b*)c` with generic captures over two NFA slots.
///
/// Leaving `S2` through `b` forks slot 0 into slot 1 and swaps them, so the
/// group-1 start lands in a freshly copied row.
pub fn abc_generic_parts() -> AutomatonParts {
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
}
