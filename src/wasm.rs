//! WASM bindings for BitIt Core.
//!
//! This module provides JavaScript-friendly bindings so the game front end
//! can build a level, toggle its inputs and render nodes by level.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'bitit_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit(levelsJson, 1);
//! circuit.set_input("A", true);
//! circuit.evaluate();
//!
//! for (let i = 0; i < circuit.node_count(); i++) {
//!   drawNode(circuit.node_label(i), circuit.node_level(i), circuit.node_level_index(i));
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, CircuitConfig, Connection, ConnectionId, NodeId};
use crate::error::BitItError;
use crate::level;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: BitItError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible circuit handle.
///
/// Node and connection accessors take raw indices; out-of-range indices
/// return `undefined`.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Build the circuit of level `level_id` from a level document.
    ///
    /// # Example
    /// ```javascript
    /// const circuit = new WasmCircuit(levelsJson, 1);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(level_json: &str, level_id: u32) -> Result<WasmCircuit, JsValue> {
        let file = level::parse(level_json).map_err(to_js)?;
        let mut circuit =
            level::load_level(&file, Some(level_id), CircuitConfig::default()).map_err(to_js)?;
        circuit.evaluate();
        Ok(WasmCircuit { circuit })
    }

    /// Set an input by label. Call [`evaluate`](Self::evaluate) to propagate.
    #[wasm_bindgen]
    pub fn set_input(&mut self, label: &str, value: bool) -> Result<(), JsValue> {
        self.circuit.set_input_value(label, value).map_err(to_js)
    }

    /// Flip an input by label, returning its new value.
    #[wasm_bindgen]
    pub fn toggle_input(&mut self, label: &str) -> Result<bool, JsValue> {
        self.circuit.toggle_input(label).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn evaluate(&mut self) {
        self.circuit.evaluate();
    }

    #[wasm_bindgen]
    pub fn is_correct(&self) -> bool {
        self.circuit.is_correct()
    }

    /// Output terminal values, in output order.
    #[wasm_bindgen]
    pub fn outputs(&self) -> Vec<u8> {
        self.circuit
            .actual_outputs()
            .into_iter()
            .map(u8::from)
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.circuit.height()
    }

    // ============ Nodes ============

    #[wasm_bindgen]
    pub fn node_count(&self) -> usize {
        self.circuit.nodes().len()
    }

    #[wasm_bindgen]
    pub fn node_label(&self, index: usize) -> Option<String> {
        self.circuit.get_node(NodeId(index)).map(|n| n.label().to_string())
    }

    /// Gate keyword of a node, e.g. `"AND"` or `"INPUT"`.
    #[wasm_bindgen]
    pub fn node_kind(&self, index: usize) -> Option<String> {
        self.circuit.get_node(NodeId(index)).map(|n| n.kind().to_string())
    }

    #[wasm_bindgen]
    pub fn node_level(&self, index: usize) -> Option<usize> {
        self.circuit.get_node(NodeId(index)).map(|n| n.level())
    }

    #[wasm_bindgen]
    pub fn node_level_index(&self, index: usize) -> Option<usize> {
        self.circuit.get_node(NodeId(index)).map(|n| n.level_index())
    }

    #[wasm_bindgen]
    pub fn node_output(&self, index: usize) -> Option<bool> {
        self.circuit.get_node(NodeId(index)).map(|n| n.output())
    }

    /// Index of the node labelled `label`.
    #[wasm_bindgen]
    pub fn find_node(&self, label: &str) -> Option<usize> {
        self.circuit.find(label).map(|id: NodeId| id.index())
    }

    // ============ Connections ============

    #[wasm_bindgen]
    pub fn connection_count(&self) -> usize {
        self.circuit.connections().len()
    }

    /// Source node index of a connection.
    #[wasm_bindgen]
    pub fn connection_from(&self, index: usize) -> Option<usize> {
        self.connection(index).map(|c| c.source().index())
    }

    /// Target node index of a connection.
    #[wasm_bindgen]
    pub fn connection_to(&self, index: usize) -> Option<usize> {
        self.connection(index).map(|c| c.target().index())
    }

    #[wasm_bindgen]
    pub fn connection_slot(&self, index: usize) -> Option<usize> {
        self.connection(index).map(|c| c.target_slot())
    }

    /// Signal carried by a connection after the last evaluation.
    #[wasm_bindgen]
    pub fn connection_state(&self, index: usize) -> Option<bool> {
        self.connection(index).map(|c| c.state())
    }
}

impl WasmCircuit {
    fn connection(&self, index: usize) -> Option<&Connection> {
        self.circuit.get_connection(ConnectionId(index))
    }

    /// Wrapped circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
