//! Deterministic Finite Automaton with dense integer state ids.

use crate::automaton::{StateId, StateSet, Symbol, SymbolId};
use crate::determinizer::subset::DfaState;
use indexmap::IndexSet;
use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};

/// A renumbered subset-construction result.
///
/// States are `0..num_states()`; state `0` is the start state. Missing
/// transitions go to an implicit, non-accepting dead state.
#[derive(Debug, Clone)]
pub struct Dfa<S, A> {
    /// Final (accepting) states
    final_states: StateSet,
    /// Transitions: (source, symbol) -> destination
    transitions: HashMap<(StateId, SymbolId), StateId>,
    alphabet: IndexSet<A>,
    /// Mapping from DFA states to the NFA states they stand for
    state_mapping: Vec<DfaState<S>>,
}

impl<S, A: Symbol> Dfa<S, A> {
    pub(crate) fn new(
        state_mapping: Vec<DfaState<S>>,
        final_states: StateSet,
        alphabet: IndexSet<A>,
        transitions: HashMap<(StateId, SymbolId), StateId>,
    ) -> Self {
        Self {
            final_states,
            transitions,
            alphabet,
            state_mapping,
        }
    }

    pub fn num_states(&self) -> StateId {
        self.state_mapping.len() as StateId
    }

    pub fn start_state(&self) -> StateId {
        0
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    pub fn alphabet(&self) -> impl Iterator<Item = &A> {
        self.alphabet.iter()
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: StateId, symbol: &A) -> Option<StateId> {
        let symbol = self.alphabet.get_index_of(symbol)? as SymbolId;
        self.transitions.get(&(source, symbol)).copied()
    }

    /// All transitions, sorted by source state then symbol.
    pub fn transitions(&self) -> Vec<(StateId, &A, StateId)> {
        let mut edges: Vec<_> = self
            .transitions
            .iter()
            .map(|(&(source, symbol), &target)| (source, symbol, target))
            .collect();
        edges.sort_unstable();
        edges
            .into_iter()
            .map(|(source, symbol, target)| (source, &self.alphabet[symbol as usize], target))
            .collect()
    }

    /// The NFA states that DFA state `state` stands for.
    pub fn state_mapping(&self, state: StateId) -> Option<&DfaState<S>> {
        self.state_mapping.get(state as usize)
    }

    pub fn accepts<I>(&self, word: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut state = self.start_state();
        for symbol in word {
            match self.transition(state, symbol.borrow()) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// Check if the DFA is empty (accepts no strings).
    pub fn is_empty(&self) -> bool {
        if self.final_states.is_empty() {
            return true;
        }

        // BFS to find if any final state is reachable
        let mut visited = StateSet::with_capacity(self.num_states() as usize);
        let mut queue = VecDeque::new();
        queue.push_back(self.start_state());

        while let Some(state) = queue.pop_front() {
            if !visited.insert(state) {
                continue;
            }

            if self.final_states.contains(state) {
                return false;
            }

            for symbol in 0..self.alphabet.len() as SymbolId {
                if let Some(&next) = self.transitions.get(&(state, symbol)) {
                    if !visited.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -a-> 1 -b-> 2 (final), 2 -a-> 2
    fn sample(final_states: &[StateId]) -> Dfa<u32, char> {
        let alphabet: IndexSet<char> = ['a', 'b'].into_iter().collect();
        let transitions = HashMap::from([((0, 0), 1), ((1, 1), 2), ((2, 0), 2)]);
        Dfa::new(
            vec![
                DfaState::from_iter([0]),
                DfaState::from_iter([1]),
                DfaState::from_iter([2, 3]),
            ],
            final_states.iter().copied().collect(),
            alphabet,
            transitions,
        )
    }

    #[test]
    fn test_dfa_basic() {
        let dfa = sample(&[2]);
        assert_eq!(dfa.num_states(), 3);
        assert_eq!(dfa.start_state(), 0);
        assert_eq!(dfa.transition(0, &'a'), Some(1));
        assert_eq!(dfa.transition(0, &'b'), None);
        assert_eq!(dfa.transition(0, &'z'), None);
        assert_eq!(
            dfa.transitions(),
            vec![(0, &'a', 1), (1, &'b', 2), (2, &'a', 2)]
        );
        assert_eq!(dfa.state_mapping(2), Some(&DfaState::from_iter([2, 3])));
        assert_eq!(dfa.state_mapping(3), None);
        assert!(!dfa.is_empty());
    }

    #[test]
    fn test_dfa_accepts() {
        let dfa = sample(&[2]);
        assert!(dfa.accepts("ab".chars()));
        assert!(dfa.accepts("abaa".chars()));
        assert!(!dfa.accepts("a".chars()));
        assert!(!dfa.accepts("abb".chars()));
    }

    #[test]
    fn test_empty_dfa() {
        assert!(sample(&[]).is_empty());
    }
}
