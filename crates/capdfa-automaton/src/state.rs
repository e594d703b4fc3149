//! Automaton states.
//!
//! States reference each other by index into the automaton's state table.
//! A successor of `None` ends the scan.

use capdfa_core::{CharClass, CodeUnit};
use serde::{Deserialize, Serialize};

use crate::transition::TransitionId;

/// Index into the state table.
pub type StateId = u16;

/// One DFA state.
///
/// The variant fixes how the executor dispatches the state: the initial
/// state only routes to an entry point, the others classify one code unit
/// and differ in how captures are tracked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomatonState {
    Initial(InitialState),
    Plain(CharState),
    SimpleCapture(CaptureState),
    GenericCapture(CaptureState),
}

impl AutomatonState {
    pub fn successors(&self) -> &[Option<StateId>] {
        match self {
            Self::Initial(s) => &s.successors,
            Self::Plain(s) => &s.successors,
            Self::SimpleCapture(s) | Self::GenericCapture(s) => &s.state.successors,
        }
    }

    /// Capture transition ids, one per successor slot. Empty without captures.
    pub fn cg_transitions(&self) -> &[TransitionId] {
        match self {
            Self::Initial(s) => &s.cg_transitions,
            Self::Plain(_) => &[],
            Self::SimpleCapture(s) | Self::GenericCapture(s) => &s.cg_transitions,
        }
    }

    /// The character-classifying part of an ordinary state.
    pub fn char_state(&self) -> Option<&CharState> {
        match self {
            Self::Initial(_) => None,
            Self::Plain(s) => Some(s),
            Self::SimpleCapture(s) | Self::GenericCapture(s) => Some(&s.state),
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Initial(_) => "initial",
            Self::Plain(_) => "plain",
            Self::SimpleCapture(_) => "simple",
            Self::GenericCapture(_) => "generic",
        }
    }
}

/// State 0: picks the entry point without consuming input.
///
/// Successors hold two halves of `prefix_length + 1` entries. The first half
/// is used when the cursor sits at the start of the input, the second half
/// otherwise. Within a half, entry `k` expects `k` prefix units to be
/// re-read before the match proper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialState {
    pub successors: Vec<Option<StateId>>,
    #[serde(default)]
    pub cg_transitions: Vec<TransitionId>,
}

impl InitialState {
    pub fn new(at_begin: Vec<Option<StateId>>, inside: Vec<Option<StateId>>) -> Self {
        let mut successors = at_begin;
        successors.extend(inside);
        Self {
            successors,
            cg_transitions: Vec::new(),
        }
    }

    /// Initial state with no prefix entering `target` from anywhere.
    pub fn unanchored(target: StateId) -> Self {
        Self::new(vec![Some(target)], vec![Some(target)])
    }

    /// Initial state with no prefix that only enters at the start of input.
    pub fn anchored(target: StateId) -> Self {
        Self::new(vec![Some(target)], vec![None])
    }

    pub fn with_cg_transitions(mut self, transitions: Vec<TransitionId>) -> Self {
        self.cg_transitions = transitions;
        self
    }

    /// Number of successor entries per half.
    #[inline]
    pub fn half_len(&self) -> usize {
        self.successors.len() / 2
    }

    pub fn prefix_length(&self) -> usize {
        self.half_len().saturating_sub(1)
    }

    /// Whether the automaton may be entered away from the start of input.
    pub fn has_unanchored_entry(&self) -> bool {
        self.successors[self.half_len()..].iter().any(Option::is_some)
    }
}

/// An ordinary state: classifies one code unit against its matchers.
///
/// `matchers[i]` selects `successors[i]`; the first matching class wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharState {
    pub id: StateId,
    #[serde(default)]
    pub matchers: Vec<CharClass>,
    #[serde(default)]
    pub successors: Vec<Option<StateId>>,
    /// Slot whose successor is this state itself. When set, the executor
    /// consumes runs of that class inside one dispatch.
    #[serde(default)]
    pub loop_to_self: Option<u16>,
    /// Accepts wherever it is dispatched.
    #[serde(default)]
    pub final_state: bool,
    /// Accepts only when dispatched at the end of the input.
    #[serde(default)]
    pub anchored_final: bool,
}

impl CharState {
    pub fn new(id: StateId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Append a `class -> successor` slot.
    pub fn on(mut self, class: CharClass, successor: Option<StateId>) -> Self {
        self.matchers.push(class);
        self.successors.push(successor);
        self
    }

    /// Append a slot looping back to this state and mark it as the loop.
    pub fn looping(mut self, class: CharClass) -> Self {
        self.loop_to_self = Some(self.matchers.len() as u16);
        self.matchers.push(class);
        self.successors.push(Some(self.id));
        self
    }

    pub fn accepting(mut self) -> Self {
        self.final_state = true;
        self
    }

    pub fn accepting_at_end(mut self) -> Self {
        self.anchored_final = true;
        self
    }

    /// Slot of the first matcher accepting `c`.
    #[inline]
    pub fn classify(&self, c: CodeUnit, compact: bool) -> Option<usize> {
        self.matchers
            .iter()
            .position(|m| m.matches_hinted(c, compact))
    }

    /// Whether `c` continues the loop-to-self run.
    ///
    /// Slots before the loop slot keep their priority.
    #[inline]
    pub fn loops_on(&self, c: CodeUnit, compact: bool) -> bool {
        self.loop_to_self
            .is_some_and(|slot| self.classify(c, compact) == Some(slot as usize))
    }

    pub fn is_accepting(&self) -> bool {
        self.final_state || self.anchored_final
    }
}

/// An ordinary state that also carries capture transitions, one per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureState {
    pub state: CharState,
    pub cg_transitions: Vec<TransitionId>,
}

impl CaptureState {
    pub fn new(state: CharState, cg_transitions: Vec<TransitionId>) -> Self {
        Self {
            state,
            cg_transitions,
        }
    }
}
