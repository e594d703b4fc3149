//! Errors raised while loading or validating an automaton.

use std::io;

use crate::format::VERSION;
use crate::properties::CaptureMode;
use crate::state::StateId;
use crate::transition::TransitionId;

#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    #[error("state table is empty")]
    EmptyStateTable,
    #[error("state 0 must be the initial state")]
    MissingInitialState,
    #[error("state {0} is an initial state; only state 0 may be")]
    MisplacedInitialState(usize),
    #[error("state at index {index} declares id {id}")]
    StateIdMismatch { index: usize, id: StateId },
    #[error("initial state needs two equal non-empty successor halves, got {0} successors")]
    InitialSuccessorLayout(usize),
    #[error("backward automata cannot have a prefix (prefix length {0})")]
    BackwardPrefix(usize),
    #[error("state {state} has {matchers} matchers for {successors} successors")]
    MatcherCountMismatch {
        state: usize,
        matchers: usize,
        successors: usize,
    },
    #[error("state {state} slot {slot} points at missing state {target}")]
    DanglingSuccessor {
        state: usize,
        slot: usize,
        target: StateId,
    },
    #[error("state {state} loop slot {slot} does not loop back to the state")]
    InvalidLoopSlot { state: usize, slot: u16 },
    #[error("state {state} is a {kind} state in {mode} capture mode")]
    CaptureModeMismatch {
        state: usize,
        kind: &'static str,
        mode: CaptureMode,
    },
    #[error("state {state} has {transitions} capture transitions for {successors} successors")]
    TransitionCountMismatch {
        state: usize,
        transitions: usize,
        successors: usize,
    },
    #[error("state {state} references missing capture transition {transition}")]
    UnknownTransition {
        state: usize,
        transition: TransitionId,
    },
    #[error("capture transition at index {index} declares id {id}")]
    TransitionIdMismatch { index: usize, id: TransitionId },
    #[error(
        "capture transition {transition} has {actual} partial transitions, its target has {expected} successors"
    )]
    PartialTransitionArity {
        transition: TransitionId,
        expected: usize,
        actual: usize,
    },
    #[error("capture transition {0} is not valid in simple capture mode")]
    SimpleTransition(TransitionId),
    #[error("capture transition {transition} uses slot {slot}, but only {max} NFA states are tracked")]
    SlotOutOfRange {
        transition: TransitionId,
        slot: u8,
        max: u16,
    },
    #[error("capture transition {transition} writes boundary {boundary} of a {width}-wide row")]
    BoundaryOutOfRange {
        transition: TransitionId,
        boundary: u8,
        width: usize,
    },
    #[error("capture transition {0} has a reorder that is not a permutation")]
    InvalidReorder(TransitionId),
    #[error("capture tracking needs at least one NFA state")]
    NoNfaStates,

    #[error("invalid magic: expected CDFA")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u32),
    #[error("file too small: {0} bytes (minimum 16)")]
    FileTooSmall(usize),
    #[error("size mismatch: header says {header} payload bytes, got {actual}")]
    SizeMismatch { header: u32, actual: usize },
    #[error("checksum mismatch: header says {expected:#010x}, payload hashes to {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("binary decode error: {0}")]
    Postcard(#[from] postcard::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
