use indoc::indoc;

use crate::test_utils::{abc_generic_parts, find_b};
use crate::{Automaton, AutomatonError, HEADER_SIZE, Header, MAGIC, VERSION};

#[test]
fn header_layout() {
    let header = Header {
        magic: MAGIC,
        version: VERSION,
        payload_len: 0x0102_0304,
        checksum: 0xAABB_CCDD,
    };
    let bytes = header.to_bytes();
    assert_eq!(&bytes[0..4], b"CDFA");
    assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
    assert_eq!(&bytes[8..12], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[12..16], &[0xDD, 0xCC, 0xBB, 0xAA]);
    assert_eq!(Header::from_bytes(&bytes).unwrap(), header);
}

#[test]
fn binary_container() {
    let automaton = Automaton::new(abc_generic_parts()).unwrap();
    let bytes = automaton.to_bytes().unwrap();

    let header = Header::from_bytes(&bytes).unwrap();
    assert!(header.validate_magic());
    assert!(header.validate_version());
    assert_eq!(header.payload_len as usize, bytes.len() - HEADER_SIZE);
    assert_eq!(header.checksum, crc32fast::hash(&bytes[HEADER_SIZE..]));

    assert_eq!(Automaton::from_bytes(&bytes).unwrap(), automaton);
}

#[test]
fn file_too_small() {
    let err = Automaton::from_bytes(b"CDFA").unwrap_err();
    assert!(matches!(err, AutomatonError::FileTooSmall(4)));
    assert_eq!(err.to_string(), "file too small: 4 bytes (minimum 16)");
}

#[test]
fn invalid_magic() {
    let mut bytes = find_b().to_bytes().unwrap();
    bytes[0] = b'X';
    let err = Automaton::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, AutomatonError::InvalidMagic));
}

#[test]
fn unsupported_version() {
    let mut bytes = find_b().to_bytes().unwrap();
    bytes[4] = 9;
    let err = Automaton::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, AutomatonError::UnsupportedVersion(9)));
    assert_eq!(err.to_string(), "unsupported version: 9 (expected 1)");
}

#[test]
fn truncated_payload() {
    let bytes = find_b().to_bytes().unwrap();
    let cut = &bytes[..bytes.len() - 1];
    let err = Automaton::from_bytes(cut).unwrap_err();
    assert!(matches!(err, AutomatonError::SizeMismatch { .. }));
}

#[test]
fn corrupted_payload() {
    let mut bytes = find_b().to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    let err = Automaton::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, AutomatonError::ChecksumMismatch { .. }));
}

#[test]
fn invalid_table_in_valid_container() {
    // A well-formed container whose contents break a table invariant still
    // reports the table error.
    let mut parts = find_b().into_parts();
    parts.states.truncate(2);
    let payload = postcard::to_allocvec(&parts).unwrap();
    let mut bytes = Header::for_payload(&payload).to_bytes().to_vec();
    bytes.extend_from_slice(&payload);

    let err = Automaton::from_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        AutomatonError::DanglingSuccessor {
            state: 1,
            slot: 0,
            target: 2
        }
    ));
}

#[test]
fn json_document() {
    let json = indoc! {r#"
        {
          "properties": { "searching": true },
          "states": [
            { "initial": { "successors": [1, 1] } },
            { "plain": { "id": 1, "matchers": [[[98, 98]], [[0, 65535]]], "successors": [2, 1] } },
            { "plain": { "id": 2, "final_state": true } }
          ]
        }
    "#};
    let automaton = Automaton::from_json(json).unwrap();
    assert_eq!(automaton, find_b());

    let pretty = automaton.to_json_pretty().unwrap();
    assert_eq!(Automaton::from_json(&pretty).unwrap(), automaton);
}

#[test]
fn json_validation_error() {
    let json = indoc! {r#"
        { "states": [{ "plain": { "id": 0 } }] }
    "#};
    let err = Automaton::from_json(json).unwrap_err();
    assert!(matches!(err, AutomatonError::MissingInitialState));
}

#[test]
fn json_syntax_error() {
    let err = Automaton::from_json("{").unwrap_err();
    assert!(matches!(err, AutomatonError::Json(_)));
}
