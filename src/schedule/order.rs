//! Evaluation order via Kahn's algorithm.

use std::collections::VecDeque;

use super::DependencyMap;
use crate::circuit::{Node, NodeId};
use crate::error::{BitItError, Result};

/// Topologically sort the nodes.
///
/// The ready queue is seeded with every node of in-degree 0 in node order
/// and drained first-in-first-out, so the same wiring always yields the same
/// order. Returns the possibly partial order: it is shorter than the node
/// count exactly when the graph has a cycle.
pub fn kahn_order(deps: &DependencyMap) -> Vec<NodeId> {
    let mut in_degree = deps.in_degrees();
    let mut ready: VecDeque<NodeId> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &d)| d == 0)
        .map(|(i, _)| NodeId(i))
        .collect();
    let mut order = Vec::with_capacity(deps.len());

    while let Some(node) = ready.pop_front() {
        order.push(node);
        for &next in deps.dependents(node) {
            let d = &mut in_degree[next.0];
            *d -= 1;
            if *d == 0 {
                ready.push_back(next);
            }
        }
    }

    order
}

/// Topologically sort the nodes, failing on feedback wiring.
pub fn evaluation_order(nodes: &[Node], deps: &DependencyMap) -> Result<Vec<NodeId>> {
    let order = kahn_order(deps);
    if order.len() == nodes.len() {
        return Ok(order);
    }

    let mut scheduled = vec![false; nodes.len()];
    for node in &order {
        scheduled[node.0] = true;
    }
    let labels: Vec<String> = nodes
        .iter()
        .zip(&scheduled)
        .filter(|(_, &done)| !done)
        .map(|(node, _)| node.label().to_string())
        .collect();

    Err(BitItError::CycleDetected {
        unscheduled: labels.len(),
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Connection;
    use crate::components::GateKind;

    fn nodes(n: usize) -> Vec<Node> {
        (0..n).map(|i| Node::new(GateKind::Or, format!("G{i}"))).collect()
    }

    #[test]
    fn test_fifo_order_is_stable() {
        // 0 -> 2, 1 -> 2, 2 -> 3
        let connections = vec![
            Connection::new(NodeId(0), NodeId(2), 0),
            Connection::new(NodeId(1), NodeId(2), 1),
            Connection::new(NodeId(2), NodeId(3), 0),
        ];
        let deps = DependencyMap::build(4, &connections);
        assert_eq!(
            kahn_order(&deps),
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
        );
    }

    #[test]
    fn test_reverse_declared_chain() {
        // 2 -> 1 -> 0
        let connections = vec![
            Connection::new(NodeId(2), NodeId(1), 0),
            Connection::new(NodeId(1), NodeId(0), 0),
        ];
        let deps = DependencyMap::build(3, &connections);
        assert_eq!(kahn_order(&deps), vec![NodeId(2), NodeId(1), NodeId(0)]);
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let connections = vec![Connection::new(NodeId(1), NodeId(1), 0)];
        let deps = DependencyMap::build(2, &connections);
        let err = evaluation_order(&nodes(2), &deps).unwrap_err();
        match err {
            BitItError::CycleDetected {
                unscheduled,
                labels,
            } => {
                assert_eq!(unscheduled, 1);
                assert_eq!(labels, vec!["G1".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cycle_blocks_downstream_nodes() {
        // 0 -> 1 -> 2 -> 1, 2 -> 3
        let connections = vec![
            Connection::new(NodeId(0), NodeId(1), 0),
            Connection::new(NodeId(1), NodeId(2), 0),
            Connection::new(NodeId(2), NodeId(1), 1),
            Connection::new(NodeId(2), NodeId(3), 0),
        ];
        let deps = DependencyMap::build(4, &connections);
        assert_eq!(kahn_order(&deps), vec![NodeId(0)]);
        assert!(matches!(
            evaluation_order(&nodes(4), &deps),
            Err(BitItError::CycleDetected { unscheduled: 3, .. })
        ));
    }
}
