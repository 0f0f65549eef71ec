//! Signal wires between nodes.

use super::types::NodeId;

/// Directed edge from a node's output to one input slot of another node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source: NodeId,
    source_output: usize,
    target: NodeId,
    target_slot: usize,
    /// Mirror of the source output after the last pass, for display only
    state: bool,
}

impl Connection {
    /// Wire output 0 of `source` into slot `target_slot` of `target`.
    pub fn new(source: NodeId, target: NodeId, target_slot: usize) -> Self {
        Self::with_output_index(source, 0, target, target_slot)
    }

    /// Wire with an explicit source output index.
    ///
    /// Nodes expose a single output, so anything but 0 fails construction.
    pub fn with_output_index(
        source: NodeId,
        source_output: usize,
        target: NodeId,
        target_slot: usize,
    ) -> Self {
        Self {
            source,
            source_output,
            target,
            target_slot,
            state: false,
        }
    }

    /// Node whose output this wire carries.
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn source_output(&self) -> usize {
        self.source_output
    }

    /// Node this wire feeds.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Input slot of the target this wire feeds.
    pub fn target_slot(&self) -> usize {
        self.target_slot
    }

    /// Cached signal, refreshed at the end of every evaluation pass.
    pub fn state(&self) -> bool {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: bool) {
        self.state = state;
    }
}
