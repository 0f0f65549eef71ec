//! Full propagation pass.

use tracing::trace;

use crate::circuit::{Connection, Node};
use crate::schedule::Schedule;

/// Run one full, deterministic evaluation pass.
///
/// Nodes are visited in evaluation order. Each node first pulls its input
/// slots from its incoming connections (in connection-set order, so when two
/// wires share a slot the later one wins) and then recomputes its output.
/// Because every driver precedes its targets in the order, one pass settles
/// the whole circuit. Finally every connection's cached state is refreshed
/// from its source.
///
/// Slots with no driver keep their previous value, which is `false` unless
/// something wrote them, so repeated passes with unchanged inputs are
/// idempotent.
pub fn evaluate(nodes: &mut [Node], connections: &mut [Connection], schedule: &Schedule) {
    let deps = schedule.dependencies();

    for &id in schedule.order() {
        for &conn_id in deps.incoming(id) {
            let conn = &connections[conn_id.0];
            let value = nodes[conn.source().0].output();
            nodes[id.0].set_input(conn.target_slot(), value);
        }
        nodes[id.0].compute();
    }

    for conn in connections.iter_mut() {
        let state = nodes[conn.source().0].output();
        conn.set_state(state);
    }

    trace!(nodes = nodes.len(), "evaluation pass complete");
}
