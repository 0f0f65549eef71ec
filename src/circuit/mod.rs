//! Circuit graph representation and validation.
//!
//! A [`Circuit`] owns a flat arena of [`Node`]s and the [`Connection`]s
//! between them. Connections refer to nodes by [`NodeId`], so the graph holds
//! no references and can be cloned freely. Circuits are assembled either
//! directly from node and connection vectors with [`Circuit::new`], or by
//! label with [`CircuitBuilder`].

mod builder;
mod connection;
mod graph;
mod node;
mod types;
mod validate;

pub use builder::CircuitBuilder;
pub use connection::Connection;
pub use graph::Circuit;
pub use node::Node;
pub use types::*;
pub use validate::{floating_slots, validate_wiring};
