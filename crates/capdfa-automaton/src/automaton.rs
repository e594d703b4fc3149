//! The compiled automaton: state table, capture transitions, properties.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AutomatonError;
use crate::properties::{CaptureMode, ExecutorProperties};
use crate::state::{AutomatonState, InitialState, StateId};
use crate::stats::TransitionStats;
use crate::transition::{LazyCaptureGroupTransition, TransitionId};

/// Unvalidated automaton contents, as produced by a compiler or a decoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonParts {
    #[serde(default)]
    pub properties: ExecutorProperties,
    #[serde(default)]
    pub capture_groups: u16,
    #[serde(default = "default_max_nfa_states")]
    pub max_nfa_states: u16,
    pub states: Vec<AutomatonState>,
    #[serde(default)]
    pub cg_transitions: Vec<LazyCaptureGroupTransition>,
}

fn default_max_nfa_states() -> u16 {
    1
}

impl AutomatonParts {
    pub fn new(properties: ExecutorProperties, states: Vec<AutomatonState>) -> Self {
        Self {
            properties,
            capture_groups: 0,
            max_nfa_states: 1,
            states,
            cg_transitions: Vec::new(),
        }
    }

    pub fn captures(
        mut self,
        capture_groups: u16,
        max_nfa_states: u16,
        cg_transitions: Vec<LazyCaptureGroupTransition>,
    ) -> Self {
        self.capture_groups = capture_groups;
        self.max_nfa_states = max_nfa_states;
        self.cg_transitions = cg_transitions;
        self
    }

    pub fn build(self) -> Result<Automaton, AutomatonError> {
        Automaton::new(self)
    }
}

/// A validated, immutable automaton.
///
/// Every successor index points into the state table, state 0 is the only
/// initial state, and every capture transition reference resolves. The
/// executor relies on these invariants and does not re-check them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AutomatonParts", into = "AutomatonParts")]
pub struct Automaton {
    properties: ExecutorProperties,
    capture_groups: u16,
    max_nfa_states: u16,
    states: Vec<AutomatonState>,
    cg_transitions: Vec<LazyCaptureGroupTransition>,
}

impl Automaton {
    pub fn new(parts: AutomatonParts) -> Result<Self, AutomatonError> {
        validate(&parts)?;
        debug!(
            "automaton loaded: {} states, {} capture transitions, {:?} {} captures",
            parts.states.len(),
            parts.cg_transitions.len(),
            parts.properties.direction,
            parts.properties.capture_mode,
        );
        let AutomatonParts {
            properties,
            capture_groups,
            max_nfa_states,
            states,
            cg_transitions,
        } = parts;
        Ok(Self {
            properties,
            capture_groups,
            max_nfa_states,
            states,
            cg_transitions,
        })
    }

    pub fn into_parts(self) -> AutomatonParts {
        AutomatonParts {
            properties: self.properties,
            capture_groups: self.capture_groups,
            max_nfa_states: self.max_nfa_states,
            states: self.states,
            cg_transitions: self.cg_transitions,
        }
    }

    pub fn properties(&self) -> &ExecutorProperties {
        &self.properties
    }

    pub fn capture_groups(&self) -> usize {
        self.capture_groups as usize
    }

    pub fn max_nfa_states(&self) -> usize {
        self.max_nfa_states as usize
    }

    pub fn states(&self) -> &[AutomatonState] {
        &self.states
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &AutomatonState {
        &self.states[id as usize]
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn initial(&self) -> &InitialState {
        match &self.states[0] {
            AutomatonState::Initial(s) => s,
            _ => unreachable!("validated automaton starts with its initial state"),
        }
    }

    pub fn prefix_length(&self) -> usize {
        self.initial().prefix_length()
    }

    /// A match can only start at the beginning of the input.
    pub fn is_anchored(&self) -> bool {
        !self.initial().has_unanchored_entry()
    }

    pub fn cg_transitions(&self) -> &[LazyCaptureGroupTransition] {
        &self.cg_transitions
    }

    #[inline]
    pub fn cg_transition(&self, id: TransitionId) -> &LazyCaptureGroupTransition {
        &self.cg_transitions[id as usize]
    }

    pub fn transition_stats(&self) -> TransitionStats {
        TransitionStats::collect(&self.cg_transitions)
    }

    /// Fraction of partial transitions that reorder results; 0 unless the
    /// automaton tracks generic captures.
    pub fn cg_reorder_ratio(&self) -> f64 {
        if !self.properties.is_generic_cg() {
            return 0.0;
        }
        self.transition_stats().reorder_ratio()
    }

    /// Average array copies per partial transition; 0 unless the automaton
    /// tracks generic captures.
    pub fn cg_array_copy_ratio(&self) -> f64 {
        if !self.properties.is_generic_cg() {
            return 0.0;
        }
        self.transition_stats().array_copy_ratio()
    }
}

impl TryFrom<AutomatonParts> for Automaton {
    type Error = AutomatonError;

    fn try_from(parts: AutomatonParts) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

impl From<Automaton> for AutomatonParts {
    fn from(automaton: Automaton) -> Self {
        automaton.into_parts()
    }
}

fn validate(parts: &AutomatonParts) -> Result<(), AutomatonError> {
    let states = &parts.states;
    let initial = match states.first() {
        None => return Err(AutomatonError::EmptyStateTable),
        Some(AutomatonState::Initial(s)) => s,
        Some(_) => return Err(AutomatonError::MissingInitialState),
    };
    let n = initial.successors.len();
    if n == 0 || n % 2 != 0 {
        return Err(AutomatonError::InitialSuccessorLayout(n));
    }
    if parts.properties.is_backward() && initial.prefix_length() > 0 {
        return Err(AutomatonError::BackwardPrefix(initial.prefix_length()));
    }

    let mode = parts.properties.capture_mode;
    if mode.tracks_captures() && parts.max_nfa_states == 0 {
        return Err(AutomatonError::NoNfaStates);
    }

    for (index, state) in states.iter().enumerate() {
        validate_state(parts, index, state)?;
    }

    for (index, transition) in parts.cg_transitions.iter().enumerate() {
        validate_transition(parts, index, transition)?;
    }
    Ok(())
}

fn validate_state(
    parts: &AutomatonParts,
    index: usize,
    state: &AutomatonState,
) -> Result<(), AutomatonError> {
    let mode = parts.properties.capture_mode;
    let kind_matches_mode = match state {
        AutomatonState::Initial(_) if index != 0 => {
            return Err(AutomatonError::MisplacedInitialState(index));
        }
        AutomatonState::Initial(_) => true,
        AutomatonState::Plain(_) => mode == CaptureMode::None,
        AutomatonState::SimpleCapture(_) => mode == CaptureMode::Simple,
        AutomatonState::GenericCapture(_) => mode == CaptureMode::Generic,
    };
    if !kind_matches_mode {
        return Err(AutomatonError::CaptureModeMismatch {
            state: index,
            kind: state.kind_name(),
            mode,
        });
    }

    if let Some(cs) = state.char_state() {
        if cs.id as usize != index {
            return Err(AutomatonError::StateIdMismatch { index, id: cs.id });
        }
        if cs.matchers.len() != cs.successors.len() {
            return Err(AutomatonError::MatcherCountMismatch {
                state: index,
                matchers: cs.matchers.len(),
                successors: cs.successors.len(),
            });
        }
        if let Some(slot) = cs.loop_to_self
            && cs.successors.get(slot as usize) != Some(&Some(cs.id))
        {
            return Err(AutomatonError::InvalidLoopSlot { state: index, slot });
        }
    }

    let successors = state.successors();
    for (slot, target) in successors.iter().enumerate() {
        if let Some(target) = *target
            && target as usize >= parts.states.len()
        {
            return Err(AutomatonError::DanglingSuccessor {
                state: index,
                slot,
                target,
            });
        }
    }

    let transitions = state.cg_transitions();
    let expected = if mode.tracks_captures() {
        successors.len()
    } else {
        0
    };
    if transitions.len() != expected {
        return Err(AutomatonError::TransitionCountMismatch {
            state: index,
            transitions: transitions.len(),
            successors: successors.len(),
        });
    }

    for (&id, target) in transitions.iter().zip(successors) {
        let Some(lazy) = parts.cg_transitions.get(id as usize) else {
            return Err(AutomatonError::UnknownTransition {
                state: index,
                transition: id,
            });
        };
        // Generic programs are picked by the successor slot taken out of the
        // edge's target, so there must be exactly one per slot.
        if mode == CaptureMode::Generic
            && let Some(target) = *target
        {
            let expected = parts.states[target as usize].successors().len();
            if lazy.partial_transitions.len() != expected {
                return Err(AutomatonError::PartialTransitionArity {
                    transition: id,
                    expected,
                    actual: lazy.partial_transitions.len(),
                });
            }
        }
    }
    Ok(())
}

fn validate_transition(
    parts: &AutomatonParts,
    index: usize,
    transition: &LazyCaptureGroupTransition,
) -> Result<(), AutomatonError> {
    let id = transition.id;
    if id as usize != index {
        return Err(AutomatonError::TransitionIdMismatch { index, id });
    }

    let max = parts.max_nfa_states;
    let width = 2 * parts.capture_groups as usize;
    let check_slot = |slot: u8| {
        if u16::from(slot) >= max {
            return Err(AutomatonError::SlotOutOfRange {
                transition: id,
                slot,
                max,
            });
        }
        Ok(())
    };
    let check_boundary = |boundary: u8| {
        if boundary as usize >= width {
            return Err(AutomatonError::BoundaryOutOfRange {
                transition: id,
                boundary,
                width,
            });
        }
        Ok(())
    };

    if parts.properties.is_simple_cg() {
        let simple = transition.partial_transitions.len() <= 1
            && transition.partial_transitions.iter().all(|pt| {
                pt.array_copies.is_empty()
                    && !pt.reorders_results()
                    && pt.slots().all(|slot| slot == 0)
            });
        if !simple {
            return Err(AutomatonError::SimpleTransition(id));
        }
    }

    for pt in &transition.partial_transitions {
        pt.slots().try_for_each(check_slot)?;
        pt.boundaries().try_for_each(check_boundary)?;
        if pt.reorders_results() && !is_permutation(&pt.reorder, max as usize) {
            return Err(AutomatonError::InvalidReorder(id));
        }
    }

    for ft in [&transition.anchored_final, &transition.unanchored_final]
        .into_iter()
        .flatten()
    {
        check_slot(ft.result_slot)?;
        ft.index_updates
            .iter()
            .chain(&ft.index_clears)
            .copied()
            .try_for_each(check_boundary)?;
    }
    Ok(())
}

fn is_permutation(order: &[u8], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        match seen.get_mut(i as usize) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}
