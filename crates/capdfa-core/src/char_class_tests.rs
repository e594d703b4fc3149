use super::{CharClass, LATIN1_MAX, fmt_code_unit};

#[test]
fn new_merges_overlapping_and_adjacent_ranges() {
    let class = CharClass::new([(120, 122), (97, 99), (100, 102)]);
    assert_eq!(class.ranges(), &[(97, 102), (120, 122)]);
}

#[test]
fn new_drops_inverted_ranges() {
    let class = CharClass::new([(10, 5)]);
    assert!(class.is_empty());
    assert!(!class.matches(7));
}

#[test]
fn matches_checks_every_range() {
    let class = CharClass::of_chars("aeiou");
    for c in "aeiou".bytes() {
        assert!(class.matches(c as u16), "{}", c as char);
    }
    for c in "bcdxyz".bytes() {
        assert!(!class.matches(c as u16), "{}", c as char);
    }
}

#[test]
fn any_and_empty() {
    assert!(CharClass::any().is_any());
    assert!(CharClass::any().matches(0));
    assert!(CharClass::any().matches(u16::MAX));
    assert!(!CharClass::empty().matches(0));
}

#[test]
fn complement_roundtrips() {
    let class = CharClass::new([(0, 9), (20, 30), (u16::MAX, u16::MAX)]);
    let inverted = class.complement();
    assert_eq!(inverted.ranges(), &[(10, 19), (31, u16::MAX - 1)]);
    assert_eq!(inverted.complement(), class);
    assert!(CharClass::empty().complement().is_any());
    assert!(CharClass::any().complement().is_empty());
}

#[test]
fn compact_hint_rejects_wide_classes() {
    let wide = CharClass::range(0x100, 0x1FF);
    assert!(wide.matches_hinted(0x150, false));
    assert!(!wide.matches_hinted(0x150, true));

    let narrow = CharClass::range(0x41, LATIN1_MAX);
    assert!(narrow.matches_hinted(0x41, true));
}

#[test]
fn display() {
    assert_eq!(CharClass::any().to_string(), "ANY");
    assert_eq!(CharClass::single(b'b' as u16).to_string(), "'b'");
    assert_eq!(CharClass::of_chars("abcx").to_string(), "[a-cx]");
    assert_eq!(CharClass::single(b'-' as u16).to_string(), "'\\x2D'");
    assert_eq!(fmt_code_unit(0x263A), "\\u263A");
}

#[test]
fn serde_normalizes_on_load() {
    let class: CharClass = serde_json::from_str("[[100,120],[97,99]]").unwrap();
    assert_eq!(class.ranges(), &[(97, 120)]);
    assert_eq!(serde_json::to_string(&class).unwrap(), "[[97,120]]");
}
