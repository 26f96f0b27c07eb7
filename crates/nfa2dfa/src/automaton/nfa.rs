//! The immutable epsilon-NFA description consumed by the determinizer.

use crate::automaton::builder::AutomatonBuilder;
use crate::automaton::state::{State, StateId, StateSet};
use crate::automaton::symbol::{EPSILON, Label, Symbol, SymbolId, is_epsilon};
use crate::config::ClosureStrategy;
use crate::determinizer::closure::epsilon_closure;
use crate::error::{Error, Result, render};
use indexmap::{IndexMap, IndexSet};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// A finite automaton with ε-transitions: (states, alphabet, transitions,
/// initial state, accepting states).
///
/// States and symbols are interned in sorted order, so a [`StateId`] or
/// [`SymbolId`] compares the same way the value it stands for does.
#[derive(Debug, Clone)]
pub struct Automaton<S, A> {
    states: IndexSet<S>,
    alphabet: IndexSet<A>,
    initial_state: StateId,
    accepting_states: StateSet,
    /// (source, symbol) -> destinations, ε stored under `EPSILON`
    transitions: IndexMap<(StateId, SymbolId), StateSet>,
    /// ε-successors of every state, indexed by `StateId`
    epsilon_successors: Vec<StateSet>,
}

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Build an automaton, rejecting any description that breaks its
    /// invariants.
    ///
    /// Entries of `transitions` sharing a (state, label) key are merged.
    pub fn new<T, D>(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = A>,
        accepting_states: impl IntoIterator<Item = S>,
        initial_state: S,
        transitions: T,
    ) -> Result<Self>
    where
        T: IntoIterator<Item = ((S, Label<A>), D)>,
        D: IntoIterator<Item = S>,
    {
        let states: IndexSet<S> = states.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let alphabet: IndexSet<A> = alphabet
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let num_states = states.len();
        let id_of = |state: &S| states.get_index_of(state).map(|i| i as StateId);

        let initial = id_of(&initial_state)
            .ok_or_else(|| Error::UndeclaredInitialState(render(&initial_state)))?;

        let mut accepting = StateSet::with_capacity(num_states);
        for state in accepting_states {
            let id = id_of(&state).ok_or_else(|| Error::UndeclaredAcceptingState(render(&state)))?;
            accepting.insert(id);
        }

        let mut relation: BTreeMap<(StateId, SymbolId), StateSet> = BTreeMap::new();
        for ((from, label), destinations) in transitions {
            let symbol = match &label {
                Label::Epsilon => EPSILON,
                Label::Symbol(symbol) => alphabet
                    .get_index_of(symbol)
                    .map(|i| i as SymbolId)
                    .ok_or_else(|| Error::UndeclaredSymbol {
                        from: render(&from),
                        symbol: render(symbol),
                    })?,
            };
            let source = id_of(&from).ok_or_else(|| undeclared_edge(&from, &label, &from))?;
            let targets = relation
                .entry((source, symbol))
                .or_insert_with(|| StateSet::with_capacity(num_states));
            for to in destinations {
                let target = id_of(&to).ok_or_else(|| undeclared_edge(&from, &label, &to))?;
                targets.insert(target);
            }
        }
        relation.retain(|_, targets| !targets.is_empty());

        let mut epsilon_successors = vec![StateSet::with_capacity(num_states); num_states];
        for (&(source, symbol), targets) in &relation {
            if is_epsilon(symbol) {
                epsilon_successors[source as usize].union_with(targets);
            }
        }

        Ok(Self {
            states,
            alphabet,
            initial_state: initial,
            accepting_states: accepting,
            transitions: relation.into_iter().collect(),
            epsilon_successors,
        })
    }

    /// Start a fluent, validating builder.
    pub fn builder() -> AutomatonBuilder<S, A> {
        AutomatonBuilder::new()
    }

    /// Destinations of `state` on `label`; empty when no transition exists.
    pub fn move_state(&self, state: &S, label: &Label<A>) -> BTreeSet<S> {
        match (self.state_id(state), self.label_id(label)) {
            (Some(id), Some(symbol)) => self
                .successors(id, symbol)
                .map(|targets| self.to_states(targets))
                .unwrap_or_default(),
            _ => BTreeSet::new(),
        }
    }

    /// Union of [`move_state`](Self::move_state) over every member of `states`.
    pub fn move_states<'s, I>(&self, states: I, label: &Label<A>) -> BTreeSet<S>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let Some(symbol) = self.label_id(label) else {
            return BTreeSet::new();
        };
        let sources = self.to_state_set(states);
        self.to_states(&self.move_set(&sources, symbol))
    }

    /// Simulate the automaton on `word` directly, without determinizing.
    ///
    /// Symbols outside the alphabet reject the word.
    pub fn accepts<I>(&self, word: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let start = StateSet::singleton(self.initial_state, self.num_states());
        let mut current = epsilon_closure(self, &start, ClosureStrategy::Adjacency);
        for symbol in word {
            let Some(symbol) = self.symbol_id(symbol.borrow()) else {
                return false;
            };
            let moved = self.move_set(&current, symbol);
            if moved.is_empty() {
                return false;
            }
            current = epsilon_closure(self, &moved, ClosureStrategy::Adjacency);
        }
        current.intersects(&self.accepting_states)
    }

    /// Declared states in ascending order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Declared input symbols in ascending order, ε excluded.
    pub fn alphabet(&self) -> impl Iterator<Item = &A> {
        self.alphabet.iter()
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = &S> {
        self.accepting_states.iter().map(move |id| self.state(id))
    }

    pub fn initial_state(&self) -> &S {
        self.state(self.initial_state)
    }

    /// Every edge of the transition relation as (source, label, destination).
    pub fn transitions(&self) -> impl Iterator<Item = (&S, Label<&A>, &S)> + '_ {
        self.transitions
            .iter()
            .flat_map(move |(&(source, symbol), targets)| {
                let label = if is_epsilon(symbol) {
                    Label::Epsilon
                } else {
                    Label::Symbol(&self.alphabet[symbol as usize])
                };
                targets
                    .iter()
                    .map(move |target| (self.state(source), label, self.state(target)))
            })
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.state_id(state)
            .is_some_and(|id| self.accepting_states.contains(id))
    }

    pub(crate) fn state_id(&self, state: &S) -> Option<StateId> {
        self.states.get_index_of(state).map(|i| i as StateId)
    }

    pub(crate) fn state(&self, id: StateId) -> &S {
        &self.states[id as usize]
    }

    pub(crate) fn symbol_id(&self, symbol: &A) -> Option<SymbolId> {
        self.alphabet.get_index_of(symbol).map(|i| i as SymbolId)
    }

    fn label_id(&self, label: &Label<A>) -> Option<SymbolId> {
        match label {
            Label::Epsilon => Some(EPSILON),
            Label::Symbol(symbol) => self.symbol_id(symbol),
        }
    }

    pub(crate) fn symbol_ids(&self) -> Range<SymbolId> {
        0..self.alphabet.len() as SymbolId
    }

    pub(crate) fn initial_id(&self) -> StateId {
        self.initial_state
    }

    pub(crate) fn accepting_set(&self) -> &StateSet {
        &self.accepting_states
    }

    pub(crate) fn successors(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    pub(crate) fn epsilon_successors(&self, state: StateId) -> &StateSet {
        &self.epsilon_successors[state as usize]
    }

    /// Union of the `symbol` successors of every member of `states`.
    pub(crate) fn move_set(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            if let Some(targets) = self.successors(state, symbol) {
                reached.union_with(targets);
            }
        }
        reached
    }

    /// Intern `states`, dropping any that are not declared.
    pub(crate) fn to_state_set<'s, I>(&self, states: I) -> StateSet
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let mut set = StateSet::with_capacity(self.num_states());
        set.extend(states.into_iter().filter_map(|state| self.state_id(state)));
        set
    }

    pub(crate) fn to_states(&self, set: &StateSet) -> BTreeSet<S> {
        set.iter().map(|id| self.state(id).clone()).collect()
    }
}

fn undeclared_edge<S: State, A: Symbol>(from: &S, label: &Label<A>, state: &S) -> Error {
    Error::UndeclaredTransitionState {
        from: render(from),
        label: render(label),
        state: render(state),
    }
}
