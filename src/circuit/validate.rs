//! Structural validation.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::{CircuitConfig, Connection, DriverPolicy, Node, NodeId};
use crate::error::{BitItError, Result};

/// Validate nodes and wiring before scheduling.
///
/// Checks:
/// - At least one input and one output terminal
/// - Labels are unique
/// - Every node's fan-in is legal for its kind
/// - Connection endpoints exist, read output 0 and target an existing slot
/// - Multiply-driven slots, according to the configured [`DriverPolicy`]
///
/// Cycles are detected later, by the scheduler.
pub fn validate_wiring(
    nodes: &[Node],
    connections: &[Connection],
    config: &CircuitConfig,
) -> Result<()> {
    if !nodes.iter().any(Node::is_input) {
        return Err(BitItError::NoInputs);
    }
    if !nodes.iter().any(Node::is_output) {
        return Err(BitItError::NoOutputs);
    }

    let mut labels = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !labels.insert(node.label()) {
            return Err(BitItError::DuplicateLabel {
                label: node.label().to_string(),
            });
        }
        if !node.kind().accepts_fan_in(node.num_inputs()) {
            return Err(BitItError::InvalidFanIn {
                node: node.label().to_string(),
                kind: node.kind().to_string(),
                num_inputs: node.num_inputs(),
                expected: node.kind().fan_in_rule(),
            });
        }
    }

    let mut drivers: HashMap<(NodeId, usize), usize> = HashMap::new();
    for (idx, conn) in connections.iter().enumerate() {
        for endpoint in [conn.source(), conn.target()] {
            if endpoint.0 >= nodes.len() {
                return Err(BitItError::NodeOutOfRange {
                    connection: idx,
                    index: endpoint.0,
                    len: nodes.len(),
                });
            }
        }

        let source = &nodes[conn.source().0];
        if conn.source_output() != 0 {
            return Err(BitItError::OutputIndexOutOfRange {
                node: source.label().to_string(),
                index: conn.source_output(),
            });
        }

        let target = &nodes[conn.target().0];
        if conn.target_slot() >= target.num_inputs() {
            return Err(BitItError::slot_out_of_range(
                target.label(),
                conn.target_slot(),
                target.num_inputs(),
            ));
        }

        *drivers.entry((conn.target(), conn.target_slot())).or_insert(0) += 1;
    }

    let mut shared: Vec<_> = drivers.into_iter().filter(|&(_, n)| n > 1).collect();
    shared.sort();
    if let Some(&((node, slot), count)) = shared.first() {
        let label = nodes[node.0].label();
        match config.driver_policy {
            DriverPolicy::Reject => {
                return Err(BitItError::MultiplyDrivenSlot {
                    node: label.to_string(),
                    slot,
                    drivers: count,
                });
            }
            DriverPolicy::LastWins => {
                for &((node, slot), count) in &shared {
                    warn!(
                        node = nodes[node.0].label(),
                        slot,
                        drivers = count,
                        "input slot has several drivers, last connection wins"
                    );
                }
            }
        }
    }

    let floating = floating_slots(nodes, connections);
    if !floating.is_empty() {
        debug!(count = floating.len(), "undriven input slots read as false");
    }

    Ok(())
}

/// Input slots no connection feeds. They read `false` on every pass.
pub fn floating_slots(nodes: &[Node], connections: &[Connection]) -> Vec<(NodeId, usize)> {
    let driven: HashSet<(NodeId, usize)> = connections
        .iter()
        .map(|c| (c.target(), c.target_slot()))
        .collect();

    nodes
        .iter()
        .enumerate()
        .flat_map(|(i, node)| (0..node.num_inputs()).map(move |slot| (NodeId(i), slot)))
        .filter(|key| !driven.contains(key))
        .collect()
}
