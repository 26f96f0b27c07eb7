//! Error types for automaton construction and determinization

use thiserror::Error;

/// Error type for all crate operations
///
/// States and symbols are rendered with their `Debug` form so the error does
/// not carry the automaton's type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The initial state is not among the declared states
    #[error("initial state {0} is not a declared state")]
    UndeclaredInitialState(String),

    /// An accepting state is not among the declared states
    #[error("accepting state {0} is not a declared state")]
    UndeclaredAcceptingState(String),

    /// A transition starts or ends in an undeclared state
    #[error("transition from {from} on {label} references undeclared state {state}")]
    UndeclaredTransitionState {
        from: String,
        label: String,
        state: String,
    },

    /// A transition is labelled with a symbol outside the alphabet
    #[error("transition from {from} uses symbol {symbol} which is not in the alphabet")]
    UndeclaredSymbol { from: String, symbol: String },

    /// The builder was finished without an initial state
    #[error("no initial state was given")]
    MissingInitialState,

    /// A query named a state the automaton does not declare
    #[error("state {0} is not a declared state")]
    UndeclaredState(String),

    /// Determinization discovered more DFA states than allowed
    #[error("subset construction exceeded the limit of {limit} DFA states")]
    StateLimitExceeded { limit: usize },

    /// Invalid determinization options
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn render<T: std::fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}
