//! Incremental construction of an [`Automaton`].

use crate::automaton::nfa::Automaton;
use crate::automaton::state::State;
use crate::automaton::symbol::{Label, Symbol};
use crate::error::{Error, Result};

/// Collects states, symbols and edges, then validates them all at once in
/// [`build`](Self::build).
///
/// Nothing is declared implicitly: an edge to a state that was never passed
/// to [`state`](Self::state) makes `build` fail.
#[derive(Debug, Clone)]
pub struct AutomatonBuilder<S, A> {
    states: Vec<S>,
    alphabet: Vec<A>,
    accepting_states: Vec<S>,
    initial_state: Option<S>,
    transitions: Vec<((S, Label<A>), [S; 1])>,
}

impl<S, A> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            accepting_states: Vec::new(),
            initial_state: None,
            transitions: Vec::new(),
        }
    }
}

impl<S: State, A: Symbol> AutomatonBuilder<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state, replacing any earlier one.
    pub fn initial(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn accepting(mut self, state: S) -> Self {
        self.accepting_states.push(state);
        self
    }

    /// Add the edge `from --symbol--> to`.
    pub fn transition(self, from: S, symbol: A, to: S) -> Self {
        self.edge(from, Label::Symbol(symbol), to)
    }

    /// Add the ε-edge `from --ε--> to`.
    pub fn epsilon(self, from: S, to: S) -> Self {
        self.edge(from, Label::Epsilon, to)
    }

    pub fn edge(mut self, from: S, label: Label<A>, to: S) -> Self {
        self.transitions.push(((from, label), [to]));
        self
    }

    pub fn build(self) -> Result<Automaton<S, A>> {
        let initial = self.initial_state.ok_or(Error::MissingInitialState)?;
        Automaton::new(
            self.states,
            self.alphabet,
            self.accepting_states,
            initial,
            self.transitions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_builder_basic() {
        let nfa = Automaton::builder()
            .states(["q0", "q1", "q2"])
            .alphabet(['0', '1'])
            .initial("q0")
            .accepting("q2")
            .transition("q0", '0', "q1")
            .transition("q0", '0', "q2")
            .epsilon("q1", "q2")
            .build()
            .unwrap();

        assert_eq!(nfa.num_states(), 3);
        assert_eq!(*nfa.initial_state(), "q0");
        assert_eq!(
            nfa.move_state(&"q0", &Label::Symbol('0')),
            BTreeSet::from(["q1", "q2"])
        );
        assert_eq!(
            nfa.move_state(&"q1", &Label::Epsilon),
            BTreeSet::from(["q2"])
        );
    }

    #[test]
    fn test_builder_requires_initial_state() {
        let result = AutomatonBuilder::<u8, char>::new().state(0).build();
        assert_eq!(result.unwrap_err(), Error::MissingInitialState);
    }

    #[test]
    fn test_builder_does_not_declare_implicitly() {
        let result = Automaton::builder()
            .state(0u8)
            .symbol('a')
            .initial(0)
            .transition(0, 'a', 1)
            .build();
        assert!(matches!(
            result,
            Err(Error::UndeclaredTransitionState { .. })
        ));

        let result = Automaton::builder()
            .state(0u8)
            .initial(0)
            .transition(0, 'a', 0)
            .build();
        assert!(matches!(result, Err(Error::UndeclaredSymbol { .. })));
    }
}
