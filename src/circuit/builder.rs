//! Label-based circuit construction.

use std::collections::HashMap;

use super::types::{CircuitConfig, NodeId};
use super::{Circuit, Connection, Node};
use crate::components::GateKind;
use crate::error::{BitItError, Result};

/// Which declaration list a label lives in.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Input(usize),
    Gate(usize),
    Output(usize),
}

/// Builds a [`Circuit`] from labelled elements.
///
/// Calls chain by value. The first failing call is remembered and returned
/// from [`build`](Self::build); later calls are then ignored.
///
/// ```
/// use bitit_core::{CircuitBuilder, GateKind};
///
/// let mut circuit = CircuitBuilder::new()
///     .input_with_value("A", true)
///     .gate(GateKind::Not, "N")
///     .connect("A", "N", 0)
///     .drive_output("Q", "N")
///     .expect_outputs(vec![false])
///     .build()
///     .unwrap();
/// circuit.evaluate();
/// assert!(circuit.is_correct());
/// ```
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    inputs: Vec<Node>,
    gates: Vec<Node>,
    outputs: Vec<Node>,
    labels: HashMap<String, Slot>,
    /// (from, to, slot)
    wires: Vec<(String, String, usize)>,
    expected: Option<Vec<bool>>,
    config: CircuitConfig,
    error: Option<BitItError>,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input terminal, initially `false`.
    pub fn input(self, label: &str) -> Self {
        self.input_with_value(label, false)
    }

    /// Declare an input terminal with an initial value.
    pub fn input_with_value(mut self, label: &str, value: bool) -> Self {
        if self.claim(label, Slot::Input(self.inputs.len())) {
            self.inputs.push(Node::input(label, value));
        }
        self
    }

    /// Declare an output terminal.
    pub fn output(mut self, label: &str) -> Self {
        if self.claim(label, Slot::Output(self.outputs.len())) {
            self.outputs.push(Node::output_terminal(label));
        }
        self
    }

    /// Declare a gate with the default fan-in of its kind.
    pub fn gate(self, kind: GateKind, label: &str) -> Self {
        self.gate_with_fan_in(kind, label, kind.default_fan_in())
    }

    /// Declare a gate with an explicit fan-in.
    pub fn gate_with_fan_in(mut self, kind: GateKind, label: &str, num_inputs: usize) -> Self {
        if self.claim(label, Slot::Gate(self.gates.len())) {
            self.gates.push(Node::with_fan_in(kind, label, num_inputs));
        }
        self
    }

    /// Wire `from` into input slot `slot` of `to`.
    ///
    /// An undeclared `from` becomes a new input terminal. `to` must be
    /// declared by the time [`build`](Self::build) runs.
    pub fn connect(mut self, from: &str, to: &str, slot: usize) -> Self {
        if self.error.is_some() {
            return self;
        }
        if !self.labels.contains_key(from) {
            self = self.input(from);
        }
        self.wires.push((from.to_string(), to.to_string(), slot));
        self
    }

    /// Wire `gate` into slot 0 of output `output`, declaring the output if needed.
    ///
    /// Unlike [`connect`](Self::connect), the driver must already be
    /// declared; an unknown `gate` is an [`UnknownLabel`](BitItError::UnknownLabel) error.
    pub fn drive_output(mut self, output: &str, gate: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        if !self.labels.contains_key(gate) {
            self.error = Some(BitItError::unknown_label(gate, output));
            return self;
        }
        if !self.labels.contains_key(output) {
            self = self.output(output);
        }
        self.connect(gate, output, 0)
    }

    /// Expected output values, positionally.
    ///
    /// Defaults to all `false` when never set.
    pub fn expect_outputs(mut self, expected: Vec<bool>) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn config(mut self, config: CircuitConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve labels and assemble the circuit.
    ///
    /// Nodes are laid out as inputs, then gates, then outputs, each group in
    /// declaration order.
    pub fn build(self) -> Result<Circuit> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let gate_base = self.inputs.len();
        let output_base = gate_base + self.gates.len();
        let resolve = |label: &str, context: &str| -> Result<NodeId> {
            match self.labels.get(label) {
                Some(Slot::Input(i)) => Ok(NodeId(*i)),
                Some(Slot::Gate(i)) => Ok(NodeId(gate_base + i)),
                Some(Slot::Output(i)) => Ok(NodeId(output_base + i)),
                None => Err(BitItError::unknown_label(label, context)),
            }
        };

        let connections = self
            .wires
            .iter()
            .map(|(from, to, slot)| Ok(Connection::new(resolve(from, to)?, resolve(to, from)?, *slot)))
            .collect::<Result<Vec<_>>>()?;

        let expected = self
            .expected
            .unwrap_or_else(|| vec![false; self.outputs.len()]);

        let mut nodes = self.inputs;
        nodes.extend(self.gates);
        nodes.extend(self.outputs);

        Circuit::with_config(nodes, connections, expected, self.config)
    }

    /// Reserve `label`, recording a duplicate as the builder's error.
    fn claim(&mut self, label: &str, slot: Slot) -> bool {
        if self.error.is_some() {
            return false;
        }
        if self.labels.contains_key(label) {
            self.error = Some(BitItError::DuplicateLabel {
                label: label.to_string(),
            });
            return false;
        }
        self.labels.insert(label.to_string(), slot);
        true
    }
}
