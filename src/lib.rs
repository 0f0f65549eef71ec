//! # BitIt Core
//!
//! Dependency graph and evaluation scheduler for combinational logic
//! circuits, as used by the BitIt puzzle game.
//!
//! This library provides:
//! - An arena-based circuit model of input terminals, gates and output terminals
//! - Dependency analysis and a deterministic topological evaluation order
//! - Longest-path layering of nodes for rendering
//! - Single-pass propagation of boolean signals and a correctness check
//! - Loading of puzzle levels from JSON descriptions
//!
//! ## Architecture
//!
//! - [`circuit`] - Nodes, connections, validation and the [`Circuit`] itself
//! - [`components`] - Gate kinds and their transfer functions
//! - [`schedule`] - Dependency map, Kahn ordering and level assignment
//! - [`eval`] - Propagation pass, output checking and truth tables
//! - [`level`] - JSON level descriptions
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! bitit levels.json --level 3 --inputs 10 --schedule
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuit } from 'bitit_core';
//!
//! const circuit = new WasmCircuit(levelsJson, 3);
//! circuit.set_input("A", true);
//! circuit.evaluate();
//! circuit.is_correct();
//! ```
//!
//! ## Evaluation Model
//!
//! Scheduling happens once, when a circuit is built. Feedback wiring is
//! rejected at that point, so a built circuit always has a complete
//! evaluation order in which every node follows the nodes driving it.
//! Evaluation then visits the nodes in that order exactly once:
//!
//! 1. Each node reads its input slots from its incoming connections
//! 2. The node recomputes its output from its gate kind
//! 3. Connections cache the value they carry, for display

pub mod circuit;
pub mod components;
pub mod error;
pub mod eval;
pub mod level;
pub mod schedule;

// Re-export main types for convenience
pub use circuit::{Circuit, CircuitBuilder, CircuitConfig, DriverPolicy, NodeId};
pub use components::GateKind;
pub use error::{BitItError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;
