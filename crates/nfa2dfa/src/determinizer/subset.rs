//! The result of subset construction: a DFA whose states are sets of NFA
//! states.

use crate::automaton::{Automaton, State, StateId, StateSet, Symbol, SymbolId};
use crate::determinizer::dfa::Dfa;
use indexmap::{IndexMap, IndexSet};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A DFA state: a non-empty set of NFA states.
///
/// Two DFA states are the same state exactly when their member sets are
/// equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DfaState<S> {
    states: BTreeSet<S>,
}

impl<S: Ord> DfaState<S> {
    /// The underlying NFA states, sorted.
    pub fn states(&self) -> &BTreeSet<S> {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn into_inner(self) -> BTreeSet<S> {
        self.states
    }
}

impl<S: Ord> From<BTreeSet<S>> for DfaState<S> {
    fn from(states: BTreeSet<S>) -> Self {
        Self { states }
    }
}

impl<S: Ord> FromIterator<S> for DfaState<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl<S: fmt::Display> fmt::Display for DfaState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(state, f)?;
        }
        f.write_str("}")
    }
}

/// Transition table produced by subset construction, together with the
/// discovered DFA states and which of them accept.
///
/// States are kept in discovery order with the start state first. A missing
/// (state, symbol) entry means the implicit dead state.
#[derive(Debug, Clone)]
pub struct SubsetDfa<S, A> {
    states: IndexSet<DfaState<S>>,
    accepting: StateSet,
    alphabet: IndexSet<A>,
    transitions: IndexMap<(StateId, SymbolId), StateId>,
}

impl<S: State, A: Symbol> SubsetDfa<S, A> {
    pub(crate) fn new(
        nfa: &Automaton<S, A>,
        discovered: IndexSet<StateSet>,
        transitions: IndexMap<(StateId, SymbolId), StateId>,
    ) -> Self {
        let mut accepting = StateSet::with_capacity(discovered.len());
        let states = discovered
            .iter()
            .enumerate()
            .map(|(id, set)| {
                if set.intersects(nfa.accepting_set()) {
                    accepting.insert(id as StateId);
                }
                DfaState::from(nfa.to_states(set))
            })
            .collect();

        Self {
            states,
            accepting,
            alphabet: nfa.alphabet().cloned().collect(),
            transitions,
        }
    }

    /// The ε-closure of the NFA's initial state.
    pub fn start(&self) -> &DfaState<S> {
        &self.states[0]
    }

    /// Discovered DFA states, start state first.
    pub fn states(&self) -> impl Iterator<Item = &DfaState<S>> {
        self.states.iter()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn contains(&self, state: &DfaState<S>) -> bool {
        self.states.contains(state)
    }

    pub fn alphabet(&self) -> impl Iterator<Item = &A> {
        self.alphabet.iter()
    }

    /// A DFA state accepts iff it contains an accepting NFA state. Unknown
    /// states never accept.
    pub fn is_accepting(&self, state: &DfaState<S>) -> bool {
        self.states
            .get_index_of(state)
            .is_some_and(|id| self.accepting.contains(id as StateId))
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = &DfaState<S>> {
        self.accepting.iter().map(move |id| &self.states[id as usize])
    }

    pub fn transition(&self, state: &DfaState<S>, symbol: &A) -> Option<&DfaState<S>> {
        let source = self.states.get_index_of(state)? as StateId;
        let symbol = self.alphabet.get_index_of(symbol)? as SymbolId;
        self.transitions
            .get(&(source, symbol))
            .map(|&target| &self.states[target as usize])
    }

    /// Recorded transitions in the order they were discovered.
    pub fn transitions(&self) -> impl Iterator<Item = (&DfaState<S>, &A, &DfaState<S>)> + '_ {
        self.transitions.iter().map(move |(&(source, symbol), &target)| {
            (
                &self.states[source as usize],
                &self.alphabet[symbol as usize],
                &self.states[target as usize],
            )
        })
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// The table as an owned map from (DFA state, symbol) to DFA state.
    pub fn transition_table(&self) -> BTreeMap<(DfaState<S>, A), DfaState<S>> {
        self.transitions()
            .map(|(source, symbol, target)| ((source.clone(), symbol.clone()), target.clone()))
            .collect()
    }

    /// Run the DFA from the start state; a missing entry rejects.
    pub fn accepts<I>(&self, word: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut current: StateId = 0;
        for symbol in word {
            let Some(symbol) = self.alphabet.get_index_of(symbol.borrow()) else {
                return false;
            };
            match self.transitions.get(&(current, symbol as SymbolId)) {
                Some(&next) => current = next,
                None => return false,
            }
        }
        self.accepting.contains(current)
    }

    /// Renumber the DFA states `0..n` in discovery order, start state `0`.
    pub fn renumber(&self) -> Dfa<S, A> {
        Dfa::new(
            self.states.iter().cloned().collect(),
            self.accepting.clone(),
            self.alphabet.clone(),
            self.transitions
                .iter()
                .map(|(&key, &target)| (key, target))
                .collect(),
        )
    }
}

impl<S: State + fmt::Display, A: Symbol + fmt::Display> fmt::Display for SubsetDfa<S, A> {
    /// One `source / symbol -> target` line per recorded transition.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (source, symbol, target) in self.transitions() {
            writeln!(f, "{source} / {symbol} -> {target}")?;
        }
        Ok(())
    }
}
