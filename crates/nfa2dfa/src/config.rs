//! Options for subset construction

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    use super::{ClosureStrategy, WorklistOrder};

    /// Unmarked DFA states are processed in discovery order
    pub const ORDER: WorklistOrder = WorklistOrder::Fifo;

    /// Closures walk the precomputed ε-successor lists
    pub const CLOSURE: ClosureStrategy = ClosureStrategy::Adjacency;

    /// No cap on the number of DFA states
    pub const MAX_STATES: Option<usize> = None;
}

/// Which unmarked DFA state is processed next.
///
/// The resulting automaton is the same either way; only the numbering of
/// [`SubsetDfa`](crate::SubsetDfa) states differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorklistOrder {
    /// Oldest discovered state first
    #[default]
    Fifo,
    /// Most recently discovered state first
    Lifo,
}

/// How ε-closures find the ε-successors of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosureStrategy {
    /// Use the successor lists built once per automaton
    #[default]
    Adjacency,
    /// Test every automaton state against each popped state, quadratic
    Scan,
}

/// Determinization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeterminizeConfig {
    pub(crate) order: WorklistOrder,
    pub(crate) closure: ClosureStrategy,
    pub(crate) max_states: Option<usize>,
}

impl Default for DeterminizeConfig {
    fn default() -> Self {
        Self {
            order: defaults::ORDER,
            closure: defaults::CLOSURE,
            max_states: defaults::MAX_STATES,
        }
    }
}

impl DeterminizeConfig {
    /// Create a configuration builder
    pub fn builder() -> DeterminizeConfigBuilder {
        DeterminizeConfigBuilder::default()
    }

    pub fn order(&self) -> WorklistOrder {
        self.order
    }

    pub fn closure(&self) -> ClosureStrategy {
        self.closure
    }

    pub fn max_states(&self) -> Option<usize> {
        self.max_states
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_states == Some(0) {
            return Err(Error::Configuration(
                "max_states must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct DeterminizeConfigBuilder {
    order: Option<WorklistOrder>,
    closure: Option<ClosureStrategy>,
    max_states: Option<usize>,
}

impl DeterminizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: WorklistOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn closure(mut self, closure: ClosureStrategy) -> Self {
        self.closure = Some(closure);
        self
    }

    /// Abort once more than `limit` DFA states have been discovered
    pub fn max_states(mut self, limit: usize) -> Self {
        self.max_states = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DeterminizeConfig> {
        let mut config = DeterminizeConfig::default();

        if let Some(order) = self.order {
            config.order = order;
        }

        if let Some(closure) = self.closure {
            config.closure = closure;
        }

        if self.max_states.is_some() {
            config.max_states = self.max_states;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeterminizeConfig::default();
        assert_eq!(config.order(), WorklistOrder::Fifo);
        assert_eq!(config.closure(), ClosureStrategy::Adjacency);
        assert_eq!(config.max_states(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DeterminizeConfig::builder()
            .order(WorklistOrder::Lifo)
            .closure(ClosureStrategy::Scan)
            .max_states(16)
            .build()
            .unwrap();
        assert_eq!(config.order(), WorklistOrder::Lifo);
        assert_eq!(config.closure(), ClosureStrategy::Scan);
        assert_eq!(config.max_states(), Some(16));
    }

    #[test]
    fn test_zero_state_limit_rejected() {
        let result = DeterminizeConfig::builder().max_states(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DeterminizeConfig =
            serde_json::from_str(r#"{ "order": "lifo", "max_states": 8 }"#).unwrap();
        assert_eq!(config.order(), WorklistOrder::Lifo);
        assert_eq!(config.closure(), ClosureStrategy::Adjacency);
        assert_eq!(config.max_states(), Some(8));
    }
}
