//! Subset construction algorithm for converting ε-NFA to DFA.

pub(crate) mod closure;
mod dfa;
mod subset;

pub use dfa::Dfa;
pub use subset::{DfaState, SubsetDfa};

use crate::automaton::{Automaton, State, StateId, StateSet, Symbol, SymbolId};
use crate::config::{DeterminizeConfig, WorklistOrder};
use crate::error::{Error, Result, render};
use closure::epsilon_closure;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, trace, warn};

/// Convert an epsilon-NFA to a DFA with the default configuration.
///
/// With no state limit configured this cannot fail; the `Result` is kept so
/// every determinization path reports errors the same way.
pub fn subset_construction<S: State, A: Symbol>(nfa: &Automaton<S, A>) -> Result<SubsetDfa<S, A>> {
    Determinizer::new(nfa).determinize()
}

/// Runs epsilon-closure and subset construction over one automaton.
///
/// The automaton is only borrowed; each [`determinize`](Self::determinize)
/// call owns its own worklist and table.
#[derive(Debug, Clone)]
pub struct Determinizer<'a, S, A> {
    nfa: &'a Automaton<S, A>,
    config: DeterminizeConfig,
}

impl<'a, S: State, A: Symbol> Determinizer<'a, S, A> {
    pub fn new(nfa: &'a Automaton<S, A>) -> Self {
        Self {
            nfa,
            config: DeterminizeConfig::default(),
        }
    }

    pub fn with_config(nfa: &'a Automaton<S, A>, config: DeterminizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { nfa, config })
    }

    pub fn automaton(&self) -> &'a Automaton<S, A> {
        self.nfa
    }

    pub fn config(&self) -> &DeterminizeConfig {
        &self.config
    }

    /// States reachable from `state` through ε-transitions alone, `state`
    /// included.
    pub fn epsilon_closure(&self, state: &S) -> Result<BTreeSet<S>> {
        self.epsilon_closure_of([state])
    }

    /// Closure of a set of states: the union of the members' closures.
    pub fn epsilon_closure_of<'s, I>(&self, states: I) -> Result<BTreeSet<S>>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let mut seed = StateSet::with_capacity(self.nfa.num_states());
        for state in states {
            let id = self
                .nfa
                .state_id(state)
                .ok_or_else(|| Error::UndeclaredState(render(state)))?;
            seed.insert(id);
        }
        Ok(self.nfa.to_states(&self.closure(&seed)))
    }

    /// Build the DFA transition table.
    ///
    /// Every recorded target is non-empty: a symbol with no NFA move from a
    /// DFA state gets no entry at all.
    pub fn determinize(&self) -> Result<SubsetDfa<S, A>> {
        let nfa = self.nfa;
        debug!(
            nfa_states = nfa.num_states(),
            symbols = nfa.symbol_ids().len(),
            order = ?self.config.order(),
            closure = ?self.config.closure(),
            "starting subset construction"
        );

        let start = self.closure(&StateSet::singleton(nfa.initial_id(), nfa.num_states()));
        let mut discovered: IndexSet<StateSet> = IndexSet::new();
        discovered.insert(start);
        let mut unmarked: VecDeque<StateId> = VecDeque::from([0]);
        let mut transitions: IndexMap<(StateId, SymbolId), StateId> = IndexMap::new();

        while let Some(current) = self.next_unmarked(&mut unmarked) {
            let sources = discovered[current as usize].clone();
            for symbol in nfa.symbol_ids() {
                let moved = nfa.move_set(&sources, symbol);
                if moved.is_empty() {
                    continue;
                }

                let (target, is_new) = discovered.insert_full(self.closure(&moved));
                let target = target as StateId;
                if is_new {
                    self.check_limit(discovered.len())?;
                    trace!(
                        dfa_state = target,
                        nfa_states = ?discovered[target as usize],
                        "discovered DFA state"
                    );
                    unmarked.push_back(target);
                }
                transitions.insert((current, symbol), target);
            }
        }

        let dfa = SubsetDfa::new(nfa, discovered, transitions);
        debug!(
            dfa_states = dfa.num_states(),
            transitions = dfa.num_transitions(),
            "finished subset construction"
        );
        Ok(dfa)
    }

    fn closure(&self, seed: &StateSet) -> StateSet {
        epsilon_closure(self.nfa, seed, self.config.closure())
    }

    fn next_unmarked(&self, unmarked: &mut VecDeque<StateId>) -> Option<StateId> {
        match self.config.order() {
            WorklistOrder::Fifo => unmarked.pop_front(),
            WorklistOrder::Lifo => unmarked.pop_back(),
        }
    }

    fn check_limit(&self, discovered: usize) -> Result<()> {
        match self.config.max_states() {
            Some(limit) if discovered > limit => {
                warn!(limit, "subset construction aborted at the DFA state limit");
                Err(Error::StateLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
