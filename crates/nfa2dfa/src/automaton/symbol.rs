//! Symbol types for automata transitions.

use std::fmt;
use std::hash::Hash;

/// A user-facing alphabet element.
pub trait Symbol: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> Symbol for T {}

/// The label on a transition: either a real input symbol or ε.
///
/// ε is not a value of the symbol type, so it can never end up in a declared
/// alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label<A> {
    Epsilon,
    Symbol(A),
}

impl<A> Label<A> {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    pub fn symbol(&self) -> Option<&A> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(symbol) => Some(symbol),
        }
    }
}

impl<A> From<A> for Label<A> {
    fn from(symbol: A) -> Self {
        Label::Symbol(symbol)
    }
}

impl<A: fmt::Display> fmt::Display for Label<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => f.write_str("ε"),
            Label::Symbol(symbol) => fmt::Display::fmt(symbol, f),
        }
    }
}

/// Dense index of an alphabet symbol, in sorted alphabet order.
pub(crate) type SymbolId = u32;

/// Reserved symbol id for epsilon transitions.
pub(crate) const EPSILON: SymbolId = SymbolId::MAX;

#[inline]
pub(crate) fn is_epsilon(symbol: SymbolId) -> bool {
    symbol == EPSILON
}
