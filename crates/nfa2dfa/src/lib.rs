//! Epsilon-NFA to DFA conversion by subset construction.
//!
//! Build a validated [`Automaton`], hand it to a [`Determinizer`] (or call
//! [`subset_construction`]) and read back a [`SubsetDfa`] whose states are
//! sets of the automaton's states.
//!
//! ```
//! use nfa2dfa::{Automaton, DfaState, subset_construction};
//!
//! let nfa = Automaton::builder()
//!     .states([0, 1, 2])
//!     .alphabet(['a', 'b'])
//!     .initial(0)
//!     .accepting(2)
//!     .transition(0, 'a', 0)
//!     .transition(0, 'a', 1)
//!     .epsilon(1, 2)
//!     .build()?;
//!
//! let dfa = subset_construction(&nfa)?;
//! let start: DfaState<i32> = [0].into_iter().collect();
//! assert_eq!(dfa.start(), &start);
//! assert!(dfa.accepts("aa".chars()));
//! assert!(!dfa.accepts("ab".chars()));
//! # Ok::<(), nfa2dfa::Error>(())
//! ```

pub mod automaton;
pub mod config;
pub mod determinizer;
pub mod error;

pub use automaton::{Automaton, AutomatonBuilder, Label};
pub use config::{ClosureStrategy, DeterminizeConfig, DeterminizeConfigBuilder, WorklistOrder};
pub use determinizer::{Determinizer, Dfa, DfaState, SubsetDfa, subset_construction};
pub use error::{Error, Result};
