//! Circuit nodes.

use crate::components::GateKind;

/// A logic element: input terminal, gate or output terminal.
///
/// Scheduling metadata (`level`, `level_index`) is assigned once when the
/// owning circuit is built. The input slots and output are rewritten by every
/// evaluation pass.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    kind: GateKind,
    inputs: Vec<bool>,
    output: bool,
    /// Externally set value, only meaningful for inputs
    value: bool,
    pub(crate) level: usize,
    pub(crate) level_index: usize,
}

impl Node {
    /// Create a node with the default fan-in of its kind.
    pub fn new(kind: GateKind, label: impl Into<String>) -> Self {
        Self::with_fan_in(kind, label, kind.default_fan_in())
    }

    /// Create a node with an explicit fan-in.
    ///
    /// The fan-in is checked against the kind when the circuit is assembled,
    /// not here.
    pub fn with_fan_in(kind: GateKind, label: impl Into<String>, num_inputs: usize) -> Self {
        Self {
            label: label.into(),
            kind,
            inputs: vec![false; num_inputs],
            output: false,
            value: false,
            level: 0,
            level_index: 0,
        }
    }

    /// Input terminal with an initial value.
    pub fn input(label: impl Into<String>, value: bool) -> Self {
        let mut node = Self::new(GateKind::Input, label);
        node.value = value;
        node
    }

    /// Output terminal.
    pub fn output_terminal(label: impl Into<String>) -> Self {
        Self::new(GateKind::Output, label)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Current input slot values.
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// Output computed by the last evaluation pass.
    pub fn output(&self) -> bool {
        self.output
    }

    /// Value set from outside (inputs only).
    pub fn value(&self) -> bool {
        self.value
    }

    /// Longest-path depth from the input frontier.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Position among the nodes sharing this level.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn is_input(&self) -> bool {
        self.kind == GateKind::Input
    }

    pub fn is_output(&self) -> bool {
        self.kind == GateKind::Output
    }

    pub(crate) fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    /// Write one input slot. Out-of-range slots are rejected at construction,
    /// so this only debug-asserts.
    pub(crate) fn set_input(&mut self, slot: usize, value: bool) {
        debug_assert!(slot < self.inputs.len(), "slot {slot} out of range");
        if let Some(s) = self.inputs.get_mut(slot) {
            *s = value;
        }
    }

    /// Recompute the output from the current input slots.
    pub(crate) fn compute(&mut self) -> bool {
        self.output = self.kind.transfer(&self.inputs, self.value);
        self.output
    }
}
