//! Error types for the BitIt circuit core.
//!
//! This module provides a unified error type [`BitItError`] that covers
//! all error conditions that can occur while assembling a circuit, driving
//! it from the outside, and loading level descriptions.

use thiserror::Error;

/// Result type alias using [`BitItError`].
pub type Result<T> = std::result::Result<T, BitItError>;

/// Unified error type for all BitIt operations.
#[derive(Error, Debug)]
pub enum BitItError {
    // ============ Structural Errors ============
    /// Circuit has no input terminal
    #[error("Circuit needs at least one input node")]
    NoInputs,

    /// Circuit has no output terminal
    #[error("Circuit needs at least one output node")]
    NoOutputs,

    /// Connection endpoint does not exist
    #[error("Connection {connection} references node index {index}, but the circuit has {len} nodes")]
    NodeOutOfRange {
        connection: usize,
        index: usize,
        len: usize,
    },

    /// Connection targets an input slot the node does not have
    #[error("Connection into '{node}' targets input slot {slot}, but it only has {num_inputs}")]
    InputSlotOutOfRange {
        node: String,
        slot: usize,
        num_inputs: usize,
    },

    /// Connection reads an output other than the single one every node exposes
    #[error("Connection out of '{node}' reads output {index}, but nodes expose a single output")]
    OutputIndexOutOfRange { node: String, index: usize },

    /// Fan-in not allowed for the element kind
    #[error("Node '{node}' of kind {kind} cannot have {num_inputs} inputs (expected {expected})")]
    InvalidFanIn {
        node: String,
        kind: String,
        num_inputs: usize,
        expected: &'static str,
    },

    /// Two nodes share a label
    #[error("Duplicate node label '{label}'")]
    DuplicateLabel { label: String },

    /// Feedback wiring, no complete evaluation order exists
    #[error("Circuit contains a cycle: {unscheduled} node(s) could not be ordered ({})", .labels.join(", "))]
    CycleDetected {
        unscheduled: usize,
        labels: Vec<String>,
    },

    /// Slot driven by several connections under the strict driver policy
    #[error("Input slot {slot} of '{node}' is driven by {drivers} connections")]
    MultiplyDrivenSlot {
        node: String,
        slot: usize,
        drivers: usize,
    },

    // ============ Usage Errors ============
    /// Positional input vector does not match the input terminals
    #[error("Expected {expected} input values, got {actual}")]
    InputCountMismatch { expected: usize, actual: usize },

    /// No node carries the given label
    #[error("No input node labelled '{label}'")]
    UnknownInput { label: String },

    /// Node exists but is not an input terminal
    #[error("Node '{label}' is a {kind} node, not an input")]
    NotAnInput { label: String, kind: String },

    /// Input vector written as text contains something other than 0 and 1
    #[error("Invalid input bits '{bits}', expected only 0 and 1")]
    InvalidInputBits { bits: String },

    /// Exhaustive enumeration would be too large
    #[error("Truth table over {inputs} inputs exceeds the limit of {limit}")]
    TooManyInputs { inputs: usize, limit: usize },

    // ============ Level Description Errors ============
    /// Malformed level document
    #[error("Failed to parse level description: {source}")]
    LevelParse {
        #[source]
        source: serde_json::Error,
    },

    /// Gate type keyword not recognised
    #[error("Unknown gate type '{gate_type}' for gate '{label}'")]
    UnknownGateType { gate_type: String, label: String },

    /// Label referenced before or without declaration
    #[error("Unknown label '{label}' referenced by '{context}'")]
    UnknownLabel { label: String, context: String },

    /// Requested level id absent from the document
    #[error("Level {id} not found")]
    LevelNotFound { id: u32 },

    /// Document contains no levels at all
    #[error("Level description contains no levels")]
    EmptyLevelFile,

    /// Slot key of a gate's input map is not a number
    #[error("Invalid input slot '{slot}' on gate '{label}'")]
    InvalidSlot { slot: String, label: String },

    // ============ I/O Errors ============
    /// Error reading a level file
    #[error("Failed to read level file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BitItError {
    /// Create an unknown label error
    pub fn unknown_label(label: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
            context: context.into(),
        }
    }

    /// Create a slot-out-of-range error
    pub fn slot_out_of_range(node: impl Into<String>, slot: usize, num_inputs: usize) -> Self {
        Self::InputSlotOutOfRange {
            node: node.into(),
            slot,
            num_inputs,
        }
    }

    /// Whether this error is a construction-time structural failure.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::NoInputs
                | Self::NoOutputs
                | Self::NodeOutOfRange { .. }
                | Self::InputSlotOutOfRange { .. }
                | Self::OutputIndexOutOfRange { .. }
                | Self::InvalidFanIn { .. }
                | Self::DuplicateLabel { .. }
                | Self::CycleDetected { .. }
                | Self::MultiplyDrivenSlot { .. }
        )
    }
}
