//! Dependency graph derived from wiring.

use std::collections::HashSet;

use crate::circuit::{Connection, ConnectionId, NodeId};

/// Which nodes must be evaluated before which.
///
/// Built once from the connection set. Every node has an entry, including
/// nodes without any driver, whose dependency set is empty. Several
/// connections between the same ordered pair count as one dependency edge,
/// while `incoming` keeps every connection so the evaluator can still pull
/// each slot.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    /// `dependencies[v]`: nodes `v` reads from, in first-wired order
    dependencies: Vec<Vec<NodeId>>,
    /// `dependents[u]`: nodes reading from `u`, in first-wired order
    dependents: Vec<Vec<NodeId>>,
    /// `incoming[v]`: connections feeding `v`, in connection-set order
    incoming: Vec<Vec<ConnectionId>>,
}

impl DependencyMap {
    /// Build the map for `num_nodes` nodes.
    ///
    /// Connection endpoints must already be known to be in range.
    pub fn build(num_nodes: usize, connections: &[Connection]) -> Self {
        let mut dependencies = vec![Vec::new(); num_nodes];
        let mut dependents = vec![Vec::new(); num_nodes];
        let mut incoming = vec![Vec::new(); num_nodes];
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(connections.len());

        for (idx, conn) in connections.iter().enumerate() {
            let (from, to) = (conn.source(), conn.target());
            incoming[to.0].push(ConnectionId(idx));
            if seen.insert((from, to)) {
                dependencies[to.0].push(from);
                dependents[from.0].push(to);
            }
        }

        Self {
            dependencies,
            dependents,
            incoming,
        }
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Nodes `node` depends on.
    pub fn dependencies(&self, node: NodeId) -> &[NodeId] {
        &self.dependencies[node.0]
    }

    /// Nodes that depend on `node`.
    pub fn dependents(&self, node: NodeId) -> &[NodeId] {
        &self.dependents[node.0]
    }

    /// Connections feeding `node`, in connection-set order.
    pub fn incoming(&self, node: NodeId) -> &[ConnectionId] {
        &self.incoming[node.0]
    }

    /// Size of the dependency set of `node`.
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.dependencies[node.0].len()
    }

    /// In-degree of every node, indexed by node.
    pub fn in_degrees(&self) -> Vec<usize> {
        self.dependencies.iter().map(Vec::len).collect()
    }
}
