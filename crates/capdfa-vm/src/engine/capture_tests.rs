use std::thread;

use super::fixtures::{a_at_end_generic, a_group_then_b_backward, abc_generic, abc_simple};
use super::{Executor, MatchResult};

fn captures(exec: &Executor, input: &str) -> Option<Vec<i32>> {
    exec.find(input, 0).unwrap().captures().map(<[i32]>::to_vec)
}

#[test]
fn simple_captures() {
    let exec = Executor::new(abc_simple(false));
    assert_eq!(
        exec.find("abbc", 0).unwrap(),
        MatchResult::SimpleCaptures(vec![0, 4, 1, 3])
    );
    assert_eq!(
        exec.find("ac", 0).unwrap(),
        MatchResult::SimpleCaptures(vec![0, 2, 1, 1])
    );
    assert_eq!(exec.find("ab", 0).unwrap(), MatchResult::NoMatch);
}

#[test]
fn simple_captures_copied_out() {
    let exec = Executor::new(abc_simple(true));
    let mut locals = exec.create_locals("abbc", 0, 0, 4);

    let result = exec.execute(&mut locals, true).unwrap();

    assert_eq!(result, MatchResult::SimpleCaptures(vec![0, 4, 1, 3]));
    // The working row never receives the final boundary.
    let tracking = locals.tracking().unwrap();
    assert_eq!(tracking.results(), &[0, -1, 1, 3]);
    assert_eq!(tracking.current_result(), &[0, 4, 1, 3]);
}

#[test]
fn generic_captures() {
    let exec = Executor::new(abc_generic());
    assert_eq!(
        exec.find("abbc", 0).unwrap(),
        MatchResult::GenericCaptures(vec![0, 4, 1, 3])
    );
    assert_eq!(
        exec.find("ac", 0).unwrap(),
        MatchResult::GenericCaptures(vec![0, 2, 1, 1])
    );
    assert_eq!(exec.find("ab", 0).unwrap(), MatchResult::NoMatch);
}

#[test]
fn generic_rows_move_through_the_order() {
    let exec = Executor::new(abc_generic());
    let mut locals = exec.create_locals("abbc", 0, 0, 4);

    exec.execute(&mut locals, true).unwrap();

    let tracking = locals.tracking().unwrap();
    assert_eq!(tracking.current_result_order(), &[4, 0]);
    assert_eq!(tracking.results(), &[0, -1, -1, -1, 0, -1, 1, 3]);
    assert_eq!(tracking.row(0), &[0, -1, 1, 3]);
    assert_eq!(locals.last_transition(), Some(5));
}

#[test]
fn simple_and_generic_agree() {
    let simple = Executor::new(abc_simple(false));
    let generic = Executor::new(abc_generic());
    for input in ["ac", "abc", "abbc", "abbbbc", "ab", "abd", "xac"] {
        assert_eq!(
            captures(&simple, input),
            captures(&generic, input),
            "{input}"
        );
    }
    assert_eq!(captures(&generic, "abc"), Some(vec![0, 3, 1, 2]));
}

#[test]
fn reused_locals_start_clean() {
    let exec = Executor::new(abc_generic());
    let mut locals = exec.create_locals("abbc", 0, 0, 2);
    assert_eq!(exec.execute(&mut locals, true).unwrap(), MatchResult::NoMatch);

    locals.reset(0, 0, 4);
    assert_eq!(
        exec.execute(&mut locals, true).unwrap(),
        MatchResult::GenericCaptures(vec![0, 4, 1, 3])
    );

    locals.reset(0, 0, 2);
    assert_eq!(exec.execute(&mut locals, true).unwrap(), MatchResult::NoMatch);
    let tracking = locals.tracking().unwrap();
    assert_eq!(tracking.current_result(), &[-1, -1, -1, -1]);
}

#[test]
fn locals_from_another_executor_are_resized() {
    let simple = Executor::new(abc_simple(false));
    let generic = Executor::new(abc_generic());
    let mut locals = simple.create_locals("abbc", 0, 0, 4);
    assert_eq!(locals.tracking().unwrap().max_nfa_states(), 1);

    let result = generic.execute(&mut locals, true).unwrap();

    assert_eq!(result, MatchResult::GenericCaptures(vec![0, 4, 1, 3]));
    assert_eq!(locals.tracking().unwrap().max_nfa_states(), 2);
}

#[test]
fn ratios() {
    let generic = Executor::new(abc_generic());
    assert_eq!(generic.cg_reorder_ratio(), 1.0 / 7.0);
    assert_eq!(generic.cg_array_copy_ratio(), 1.0 / 7.0);
    assert!(generic.is_generic_cg());

    let simple = Executor::new(abc_simple(false));
    assert_eq!(simple.cg_reorder_ratio(), 0.0);
    assert!(simple.is_simple_cg());
}

#[test]
fn backward_captures_shift_boundaries_past_the_cursor() {
    let exec = Executor::new(a_group_then_b_backward());
    assert_eq!(
        exec.find("xab", 0).unwrap(),
        MatchResult::SimpleCaptures(vec![1, 3, 1, 2])
    );
    assert_eq!(exec.find("xaa", 0).unwrap(), MatchResult::NoMatch);
}

#[test]
fn end_anchored_final_program() {
    let exec = Executor::new(a_at_end_generic());
    assert_eq!(
        exec.find("a", 0).unwrap(),
        MatchResult::GenericCaptures(vec![0, 1])
    );
    assert_eq!(exec.find("ab", 0).unwrap(), MatchResult::NoMatch);
}

#[test]
fn executor_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Executor>();
}

#[test]
fn executor_shared_across_threads() {
    let exec = Executor::new(abc_generic());
    let inputs = ["abbc", "ac", "abc", "ab"];
    let results: Vec<MatchResult> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let exec = exec.clone();
                s.spawn(move || exec.find(*input, 0).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(
        results,
        vec![
            MatchResult::GenericCaptures(vec![0, 4, 1, 3]),
            MatchResult::GenericCaptures(vec![0, 2, 1, 1]),
            MatchResult::GenericCaptures(vec![0, 3, 1, 2]),
            MatchResult::NoMatch,
        ]
    );
}
