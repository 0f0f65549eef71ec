//! Evaluation scheduling.
//!
//! Scheduling runs once, eagerly, when a circuit is assembled:
//!
//! 1. [`DependencyMap::build`] derives "which nodes must run before this one"
//!    from the connection set.
//! 2. [`evaluation_order`] runs Kahn's algorithm with a FIFO ready queue and
//!    rejects feedback wiring.
//! 3. [`assign_levels`] walks that order to give each node its longest-path
//!    depth and its index within the level.
//!
//! The result is stored on the circuit and never recomputed.

mod dependency;
mod levels;
mod order;

use std::fmt;

pub use dependency::DependencyMap;
pub use levels::{assign_levels, Levels};
pub use order::{evaluation_order, kahn_order};

use tracing::debug;

use crate::circuit::{Connection, Node, NodeId};
use crate::error::Result;

/// Everything derived from the wiring at construction time.
#[derive(Debug, Clone)]
pub struct Schedule {
    dependencies: DependencyMap,
    order: Vec<NodeId>,
    /// `position[n]`: index of node `n` in `order`
    position: Vec<usize>,
    levels: Levels,
}

impl Schedule {
    /// Build the full schedule, failing if the wiring contains a cycle.
    ///
    /// Connection endpoints must already have been validated.
    pub fn build(nodes: &[Node], connections: &[Connection]) -> Result<Self> {
        let dependencies = DependencyMap::build(nodes.len(), connections);
        let order = evaluation_order(nodes, &dependencies)?;
        let levels = assign_levels(nodes, &dependencies, &order);

        let mut position = vec![0; nodes.len()];
        for (i, node) in order.iter().enumerate() {
            position[node.0] = i;
        }

        debug!(
            nodes = nodes.len(),
            connections = connections.len(),
            height = levels.height(),
            "circuit scheduled"
        );

        Ok(Self {
            dependencies,
            order,
            position,
            levels,
        })
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    /// Total order in which nodes are evaluated.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Index of `node` in the evaluation order.
    pub fn position(&self, node: NodeId) -> usize {
        self.position[node.0]
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    /// Render the order and level buckets using node labels.
    pub fn describe<'a>(&'a self, nodes: &'a [Node]) -> ScheduleDisplay<'a> {
        ScheduleDisplay {
            schedule: self,
            nodes,
        }
    }
}

/// Human readable view of a [`Schedule`], see [`Schedule::describe`].
pub struct ScheduleDisplay<'a> {
    schedule: &'a Schedule,
    nodes: &'a [Node],
}

impl ScheduleDisplay<'_> {
    fn label(&self, id: NodeId) -> &str {
        self.nodes[id.0].label()
    }
}

impl fmt::Display for ScheduleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluation order:")?;
        for (i, &id) in self.schedule.order.iter().enumerate() {
            let sep = if i == 0 { " " } else { " -> " };
            write!(f, "{sep}{}", self.label(id))?;
        }
        writeln!(f)?;

        for (level, bucket) in self.schedule.levels.buckets().iter().enumerate() {
            let names: Vec<&str> = bucket.iter().map(|&id| self.label(id)).collect();
            writeln!(f, "level {level}: {}", names.join(", "))?;
        }
        Ok(())
    }
}
