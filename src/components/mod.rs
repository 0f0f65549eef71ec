//! Logic element models.
//!
//! Every element of a circuit (input terminal, gate, output terminal) is the
//! same [`Node`](crate::circuit::Node) shape tagged with a [`GateKind`]. The
//! kind fixes the allowed fan-in and selects the pure transfer function that
//! turns the node's input slots into its output.
//!
//! | Kind | Fan-in | Output |
//! |------|--------|--------|
//! | INPUT | 0 | externally set value |
//! | OUTPUT | 1 | its single input |
//! | NOT | 1 | negated input |
//! | AND | >= 2 | every input true |
//! | OR | >= 2 | any input true |
//! | NAND | >= 2 | any input false |
//! | NOR | >= 2 | every input false |
//! | XOR | >= 2 | odd number of true inputs |
//! | XNOR | >= 2 | even number of true inputs |

mod gates;

pub use gates::GateKind;
