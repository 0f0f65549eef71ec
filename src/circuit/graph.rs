//! Circuit graph structure.

use std::collections::HashMap;

use tracing::debug;

use super::types::{CircuitConfig, ConnectionId, NodeId};
use super::validate::validate_wiring;
use super::{Connection, Node};
use crate::components::GateKind;
use crate::error::{BitItError, Result};
use crate::eval;
use crate::schedule::{Schedule, ScheduleDisplay};

/// A complete combinational circuit ready for evaluation.
///
/// Nodes live in an arena addressed by [`NodeId`]; connections, the
/// dependency map and the level buckets all store indices. Everything
/// derived from the wiring is computed once by [`Circuit::new`], which fails
/// outright on structural errors, so a `Circuit` value is always fully
/// scheduled.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All nodes: inputs, gates and outputs alike
    nodes: Vec<Node>,

    /// All signal wires
    connections: Vec<Connection>,

    /// Input terminals, in node order
    inputs: Vec<NodeId>,

    /// Output terminals, in node order
    outputs: Vec<NodeId>,

    /// Label lookup
    label_map: HashMap<String, NodeId>,

    /// Dependency map, evaluation order and levels
    schedule: Schedule,

    /// Expected values of the output terminals, positionally
    expected: Vec<bool>,

    config: CircuitConfig,
}

impl Circuit {
    /// Assemble a circuit with the default configuration.
    pub fn new(nodes: Vec<Node>, connections: Vec<Connection>, expected: Vec<bool>) -> Result<Self> {
        Self::with_config(nodes, connections, expected, CircuitConfig::default())
    }

    /// Assemble a circuit: validate the wiring, then schedule it.
    pub fn with_config(
        mut nodes: Vec<Node>,
        connections: Vec<Connection>,
        expected: Vec<bool>,
        config: CircuitConfig,
    ) -> Result<Self> {
        validate_wiring(&nodes, &connections, &config)?;
        let schedule = Schedule::build(&nodes, &connections)?;

        let levels = schedule.levels();
        for (i, node) in nodes.iter_mut().enumerate() {
            node.level = levels.level(NodeId(i));
            node.level_index = levels.level_index(NodeId(i));
        }

        let select = |kind: GateKind| -> Vec<NodeId> {
            nodes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.kind() == kind)
                .map(|(i, _)| NodeId(i))
                .collect()
        };
        let inputs = select(GateKind::Input);
        let outputs = select(GateKind::Output);

        let label_map = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.label().to_string(), NodeId(i)))
            .collect();

        if expected.len() != outputs.len() {
            debug!(
                expected = expected.len(),
                outputs = outputs.len(),
                "expected output vector length differs from output count"
            );
        }

        Ok(Circuit {
            nodes,
            connections,
            inputs,
            outputs,
            label_map,
            schedule,
            expected,
            config,
        })
    }

    // ============ Read accessors ============

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node by id.
    ///
    /// # Panics
    /// If `id` does not belong to this circuit; see [`get_node`](Self::get_node).
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Connection by id.
    ///
    /// # Panics
    /// If `id` does not belong to this circuit; see [`get_connection`](Self::get_connection).
    pub fn connection(&self, id: ConnectionId) -> &Connection {
        &self.connections[id.0]
    }

    pub fn get_connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.0)
    }

    /// Input terminals, in node order.
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Output terminals, in node order.
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    /// Find a node by label.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.label_map.get(label).copied()
    }

    /// Labels of the given nodes.
    pub fn labels(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .map(|&id| self.nodes[id.0].label().to_string())
            .collect()
    }

    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Order in which [`evaluate`](Self::evaluate) visits the nodes.
    pub fn evaluation_order(&self) -> &[NodeId] {
        self.schedule.order()
    }

    /// Nodes `id` must be evaluated after.
    pub fn dependencies(&self, id: NodeId) -> &[NodeId] {
        self.schedule.dependencies().dependencies(id)
    }

    /// Nodes grouped by level; the index within a bucket is the node's level index.
    pub fn level_buckets(&self) -> &[Vec<NodeId>] {
        self.schedule.levels().buckets()
    }

    /// Highest level in the circuit.
    pub fn height(&self) -> usize {
        self.schedule.levels().height()
    }

    /// Evaluation order and level buckets, rendered with labels.
    pub fn describe_schedule(&self) -> ScheduleDisplay<'_> {
        self.schedule.describe(&self.nodes)
    }

    // ============ Inputs ============

    /// Set the value of an input terminal by label.
    ///
    /// Does not evaluate; call [`evaluate`](Self::evaluate) afterwards.
    pub fn set_input_value(&mut self, label: &str, value: bool) -> Result<()> {
        let id = self.input_id(label)?;
        self.nodes[id.0].set_value(value);
        Ok(())
    }

    /// Set the value of an input terminal by id.
    pub fn set_input(&mut self, id: NodeId, value: bool) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| BitItError::UnknownInput {
                label: id.to_string(),
            })?;
        if !node.is_input() {
            return Err(BitItError::NotAnInput {
                label: node.label().to_string(),
                kind: node.kind().to_string(),
            });
        }
        node.set_value(value);
        Ok(())
    }

    /// Set every input terminal positionally.
    ///
    /// Fails without touching any input if `values` does not have one entry
    /// per input terminal.
    pub fn set_input_values(&mut self, values: &[bool]) -> Result<()> {
        if values.len() != self.inputs.len() {
            return Err(BitItError::InputCountMismatch {
                expected: self.inputs.len(),
                actual: values.len(),
            });
        }
        for (&id, &value) in self.inputs.iter().zip(values) {
            self.nodes[id.0].set_value(value);
        }
        Ok(())
    }

    /// Flip an input terminal, returning its new value.
    pub fn toggle_input(&mut self, label: &str) -> Result<bool> {
        let id = self.input_id(label)?;
        let node = &mut self.nodes[id.0];
        let value = !node.value();
        node.set_value(value);
        Ok(value)
    }

    /// Current values of the input terminals.
    pub fn input_values(&self) -> Vec<bool> {
        self.inputs.iter().map(|&id| self.nodes[id.0].value()).collect()
    }

    fn input_id(&self, label: &str) -> Result<NodeId> {
        let id = self.find(label).ok_or_else(|| BitItError::UnknownInput {
            label: label.to_string(),
        })?;
        let node = &self.nodes[id.0];
        if !node.is_input() {
            return Err(BitItError::NotAnInput {
                label: label.to_string(),
                kind: node.kind().to_string(),
            });
        }
        Ok(id)
    }

    // ============ Evaluation ============

    /// Run one full propagation pass.
    pub fn evaluate(&mut self) {
        eval::evaluate(&mut self.nodes, &mut self.connections, &self.schedule);
    }

    /// Values of the output terminals after the last pass.
    pub fn actual_outputs(&self) -> Vec<bool> {
        self.outputs.iter().map(|&id| self.nodes[id.0].output()).collect()
    }

    pub fn expected_outputs(&self) -> &[bool] {
        &self.expected
    }

    pub fn set_expected_outputs(&mut self, expected: Vec<bool>) {
        self.expected = expected;
    }

    /// Whether the outputs match the expected vector.
    pub fn is_correct(&self) -> bool {
        eval::outputs_match(&self.actual_outputs(), &self.expected)
    }
}
