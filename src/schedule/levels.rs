//! Longest-path layering.

use super::DependencyMap;
use crate::circuit::{Node, NodeId};

/// Level of every node plus the level buckets used for layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    /// `levels[n]`: depth of node `n`
    levels: Vec<usize>,
    /// `level_index[n]`: position of node `n` within its bucket
    level_index: Vec<usize>,
    /// `buckets[l]`: nodes at level `l`, in the order they were leveled
    buckets: Vec<Vec<NodeId>>,
}

impl Levels {
    pub fn level(&self, node: NodeId) -> usize {
        self.levels[node.0]
    }

    pub fn level_index(&self, node: NodeId) -> usize {
        self.level_index[node.0]
    }

    /// Nodes grouped by level.
    pub fn buckets(&self) -> &[Vec<NodeId>] {
        &self.buckets
    }

    /// Highest level present.
    pub fn height(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }
}

/// Assign levels following an already computed evaluation order.
///
/// Inputs sit at level 0. Every other node, visited in evaluation order, gets
/// one more than the deepest of its predecessors, so a node's level is the
/// length of its longest dependency chain back to the input frontier. A node
/// with no leveled predecessor (an undriven gate) gets level 0.
pub fn assign_levels(nodes: &[Node], deps: &DependencyMap, order: &[NodeId]) -> Levels {
    let mut leveled: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut visit_order = Vec::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        if node.is_input() {
            leveled[i] = Some(0);
            visit_order.push(NodeId(i));
        }
    }

    for &node in order {
        if leveled[node.0].is_some() {
            continue;
        }
        let level = deps
            .dependencies(node)
            .iter()
            .filter_map(|pred| leveled[pred.0])
            .max()
            .map_or(0, |deepest| deepest + 1);
        leveled[node.0] = Some(level);
        visit_order.push(node);
    }

    let levels: Vec<usize> = leveled.into_iter().map(|l| l.unwrap_or(0)).collect();
    let height = levels.iter().copied().max().unwrap_or(0);

    let mut buckets: Vec<Vec<NodeId>> = vec![Vec::new(); height + 1];
    let mut level_index = vec![0; nodes.len()];
    for node in visit_order {
        let bucket = &mut buckets[levels[node.0]];
        level_index[node.0] = bucket.len();
        bucket.push(node);
    }

    Levels {
        levels,
        level_index,
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Connection;
    use crate::components::GateKind;
    use crate::schedule::order::kahn_order;

    #[test]
    fn test_longest_path_not_shortest() {
        // A -> NOT -> AND, A -> AND directly: AND sits above NOT
        let nodes = vec![
            Node::input("A", false),
            Node::new(GateKind::Not, "N"),
            Node::new(GateKind::And, "G"),
        ];
        let connections = vec![
            Connection::new(NodeId(0), NodeId(1), 0),
            Connection::new(NodeId(1), NodeId(2), 0),
            Connection::new(NodeId(0), NodeId(2), 1),
        ];
        let deps = DependencyMap::build(3, &connections);
        let order = kahn_order(&deps);
        let levels = assign_levels(&nodes, &deps, &order);

        assert_eq!(levels.level(NodeId(0)), 0);
        assert_eq!(levels.level(NodeId(1)), 1);
        assert_eq!(levels.level(NodeId(2)), 2);
        assert_eq!(levels.height(), 2);
    }

    #[test]
    fn test_buckets_and_indices() {
        // Two inputs feeding two independent NOTs
        let nodes = vec![
            Node::input("A", false),
            Node::input("B", false),
            Node::new(GateKind::Not, "NB"),
            Node::new(GateKind::Not, "NA"),
        ];
        let connections = vec![
            Connection::new(NodeId(1), NodeId(2), 0),
            Connection::new(NodeId(0), NodeId(3), 0),
        ];
        let deps = DependencyMap::build(4, &connections);
        let order = kahn_order(&deps);
        let levels = assign_levels(&nodes, &deps, &order);

        assert_eq!(levels.buckets()[0], vec![NodeId(0), NodeId(1)]);
        assert_eq!(levels.level_index(NodeId(1)), 1);
        // A is dequeued first, so the NOT it feeds is leveled first

        assert_eq!(levels.buckets()[1], vec![NodeId(3), NodeId(2)]);
        assert_eq!(levels.level_index(NodeId(2)), 1);
    }

    #[test]
    fn test_floating_gate_is_level_zero() {
        let nodes = vec![Node::input("A", false), Node::new(GateKind::Or, "F")];
        let deps = DependencyMap::build(2, &[]);
        let order = kahn_order(&deps);
        let levels = assign_levels(&nodes, &deps, &order);
        assert_eq!(levels.level(NodeId(1)), 0);
        assert_eq!(levels.level_index(NodeId(1)), 1);
        assert_eq!(levels.height(), 0);
    }
}
