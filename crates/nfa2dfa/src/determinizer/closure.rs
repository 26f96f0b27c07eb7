//! Epsilon-closure of a set of interned states.

use crate::automaton::{Automaton, EPSILON, State, StateId, StateSet, Symbol};
use crate::config::ClosureStrategy;

/// The smallest superset of `seed` closed under ε-transitions.
///
/// Worklist traversal: every state enters the result at most once, so the
/// loop ends after at most `nfa.num_states()` pushes.
pub(crate) fn epsilon_closure<S: State, A: Symbol>(
    nfa: &Automaton<S, A>,
    seed: &StateSet,
    strategy: ClosureStrategy,
) -> StateSet {
    let mut closure = seed.clone();
    let mut stack: Vec<StateId> = seed.iter().collect();

    while let Some(top) = stack.pop() {
        match strategy {
            ClosureStrategy::Adjacency => {
                for next in nfa.epsilon_successors(top).iter() {
                    if closure.insert(next) {
                        stack.push(next);
                    }
                }
            }
            ClosureStrategy::Scan => {
                let Some(successors) = nfa.successors(top, EPSILON) else {
                    continue;
                };
                for candidate in 0..nfa.num_states() as StateId {
                    if successors.contains(candidate) && closure.insert(candidate) {
                        stack.push(candidate);
                    }
                }
            }
        }
    }

    closure
}
