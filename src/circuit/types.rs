//! Core types for circuit representation.

use std::fmt;

/// Index of a node in the circuit arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Index of a connection in the circuit's connection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub usize);

impl ConnectionId {
    /// Raw index into the connection set.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// How to treat an input slot fed by more than one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverPolicy {
    /// Accept the wiring; the connection processed last wins.
    #[default]
    LastWins,
    /// Fail construction with [`MultiplyDrivenSlot`](crate::BitItError::MultiplyDrivenSlot).
    Reject,
}

/// Default cap on the number of inputs a truth table enumerates.
pub const DEFAULT_MAX_TRUTH_TABLE_INPUTS: usize = 16;

/// Construction-time configuration for a circuit.
#[derive(Debug, Clone)]
pub struct CircuitConfig {
    /// Policy for multiply-driven input slots.
    pub driver_policy: DriverPolicy,
    /// Largest input count [`truth_table`](crate::eval::truth_table) accepts.
    pub max_truth_table_inputs: usize,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            driver_policy: DriverPolicy::default(),
            max_truth_table_inputs: DEFAULT_MAX_TRUTH_TABLE_INPUTS,
        }
    }
}

impl CircuitConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multiply-driven slot policy.
    pub fn with_driver_policy(mut self, driver_policy: DriverPolicy) -> Self {
        self.driver_policy = driver_policy;
        self
    }

    /// Set the truth-table enumeration cap.
    ///
    /// Each extra input doubles the number of evaluation passes.
    pub fn with_max_truth_table_inputs(mut self, max_inputs: usize) -> Self {
        self.max_truth_table_inputs = max_inputs;
        self
    }
}
