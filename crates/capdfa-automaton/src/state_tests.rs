use capdfa_core::CharClass;

use crate::state::{AutomatonState, CharState, InitialState};

#[test]
fn initial_state_halves() {
    let s = InitialState::new(vec![Some(1), Some(2), Some(3)], vec![None, Some(4), None]);
    assert_eq!(s.half_len(), 3);
    assert_eq!(s.prefix_length(), 2);
    assert!(s.has_unanchored_entry());

    let anchored = InitialState::anchored(1);
    assert_eq!(anchored.prefix_length(), 0);
    assert!(!anchored.has_unanchored_entry());
}

#[test]
fn first_matching_class_wins() {
    let s = CharState::new(1)
        .on(CharClass::range(u16::from(b'a'), u16::from(b'z')), Some(2))
        .on(CharClass::any(), Some(3));
    assert_eq!(s.classify(u16::from(b'q'), false), Some(0));
    assert_eq!(s.classify(u16::from(b'Q'), false), Some(1));

    let none = CharState::new(1).on(CharClass::single(u16::from(b'x')), Some(2));
    assert_eq!(none.classify(u16::from(b'y'), false), None);
}

#[test]
fn loop_respects_earlier_slots() {
    let s = CharState::new(1)
        .on(CharClass::single(u16::from(b'!')), Some(2))
        .looping(CharClass::any());
    assert_eq!(s.loop_to_self, Some(1));
    assert_eq!(s.successors, vec![Some(2), Some(1)]);
    assert!(s.loops_on(u16::from(b'a'), false));
    assert!(!s.loops_on(u16::from(b'!'), false));

    let no_loop = CharState::new(1).on(CharClass::any(), Some(1));
    assert!(!no_loop.loops_on(u16::from(b'a'), false));
}

#[test]
fn compact_hint_skips_wide_classes() {
    let s = CharState::new(1)
        .on(CharClass::single(0x3B1), Some(2))
        .on(CharClass::any(), Some(3));
    assert_eq!(s.classify(0x3B1, false), Some(0));
    assert_eq!(s.classify(0xB1, true), Some(1));
}

#[test]
fn state_kinds() {
    let initial = AutomatonState::Initial(InitialState::unanchored(1));
    assert!(initial.is_initial());
    assert!(initial.char_state().is_none());
    assert_eq!(initial.successors(), &[Some(1), Some(1)]);
    assert_eq!(initial.kind_name(), "initial");

    let plain = AutomatonState::Plain(CharState::new(2).accepting_at_end());
    assert!(plain.char_state().is_some_and(CharState::is_accepting));
    assert!(plain.cg_transitions().is_empty());
    assert_eq!(plain.kind_name(), "plain");
}
