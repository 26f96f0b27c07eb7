//! Finite automata with epsilon transitions.
//!
//! An [`Automaton`] is validated once on construction and never mutated
//! afterwards, so it can be handed to any number of determinizations.

mod builder;
mod nfa;
mod state;
mod symbol;

pub use builder::AutomatonBuilder;
pub use nfa::Automaton;
pub use state::{State, StateId, StateSet};
pub use symbol::{Label, Symbol};

pub(crate) use symbol::{EPSILON, SymbolId};
