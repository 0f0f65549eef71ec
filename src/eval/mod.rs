//! Circuit evaluation.
//!
//! Evaluation is a single synchronous pass over the stored evaluation order:
//! no dirty tracking and no incremental recomputation. Every call costs
//! O(N + E) and always terminates because scheduling already rejected cycles.
//!
//! - [`evaluate`] propagates input values to every node and wire
//! - [`outputs_match`] compares the output terminals with the expected vector
//! - [`truth_table`] runs every input assignment through the circuit

mod checker;
mod evaluator;
mod truth_table;

pub use checker::{mismatches, outputs_match};
pub use evaluator::evaluate;
pub use truth_table::{truth_table, TruthRow, TruthTable, MAX_ENUMERABLE_INPUTS};
