//! Exhaustive enumeration of input assignments.

use std::fmt;

use crate::circuit::Circuit;
use crate::error::{BitItError, Result};

/// Row numbers are `u64`, so no configured limit enumerates more inputs than this.
pub const MAX_ENUMERABLE_INPUTS: usize = 63;

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    /// Input values, in input-node order
    pub inputs: Vec<bool>,
    /// Output values, in output-node order
    pub outputs: Vec<bool>,
}

/// Truth table of a whole circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub input_labels: Vec<String>,
    pub output_labels: Vec<String>,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Row whose inputs equal `inputs`, if any.
    pub fn row(&self, inputs: &[bool]) -> Option<&TruthRow> {
        self.rows.iter().find(|r| r.inputs == inputs)
    }
}

/// Evaluate the circuit for every input assignment.
///
/// Input `i` takes bit `i` of the row number, so row 0 is all-false and the
/// first input toggles fastest. The circuit's input values are restored and
/// the circuit re-evaluated before returning.
///
/// Fails with [`TooManyInputs`](BitItError::TooManyInputs) above the
/// configured limit, which is itself capped at [`MAX_ENUMERABLE_INPUTS`].
pub fn truth_table(circuit: &mut Circuit) -> Result<TruthTable> {
    let num_inputs = circuit.inputs().len();
    let limit = circuit.config().max_truth_table_inputs.min(MAX_ENUMERABLE_INPUTS);
    let row_count = (num_inputs <= limit)
        .then(|| 1u64 << num_inputs)
        .ok_or(BitItError::TooManyInputs {
            inputs: num_inputs,
            limit,
        })?;

    let saved = circuit.input_values();
    let mut rows = Vec::new();
    let mut assignment = vec![false; num_inputs];

    for row in 0..row_count {
        for (i, value) in assignment.iter_mut().enumerate() {
            *value = row & (1 << i) != 0;
        }
        circuit.set_input_values(&assignment)?;
        circuit.evaluate();
        rows.push(TruthRow {
            inputs: assignment.clone(),
            outputs: circuit.actual_outputs(),
        });
    }

    circuit.set_input_values(&saved)?;
    circuit.evaluate();

    Ok(TruthTable {
        input_labels: circuit.labels(circuit.inputs()),
        output_labels: circuit.labels(circuit.outputs()),
        rows,
    })
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn cells(values: &[bool], labels: &[String]) -> String {
            values
                .iter()
                .zip(labels)
                .map(|(&b, label)| format!("{:>w$}", u8::from(b), w = label.len().max(1)))
                .collect::<Vec<_>>()
                .join(" ")
        }

        writeln!(
            f,
            "{} | {}",
            self.input_labels.join(" "),
            self.output_labels.join(" ")
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{} | {}",
                cells(&row.inputs, &self.input_labels),
                cells(&row.outputs, &self.output_labels)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitBuilder;
    use crate::circuit::CircuitConfig;
    use crate::components::GateKind;

    fn xor_circuit() -> Circuit {
        CircuitBuilder::new()
            .input("A")
            .input("B")
            .gate(GateKind::Xor, "X")
            .connect("A", "X", 0)
            .connect("B", "X", 1)
            .drive_output("S", "X")
            .build()
            .unwrap()
    }

    #[test]
    fn test_xor_table() {
        let mut circuit = xor_circuit();
        let table = truth_table(&mut circuit).unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.input_labels, vec!["A", "B"]);
        assert_eq!(table.output_labels, vec!["S"]);
        let outputs: Vec<bool> = table.rows.iter().map(|r| r.outputs[0]).collect();
        assert_eq!(outputs, vec![false, true, true, false]);
        assert_eq!(table.rows[1].inputs, vec![true, false]);
    }

    #[test]
    fn test_inputs_restored() {
        let mut circuit = xor_circuit();
        circuit.set_input_values(&[true, false]).unwrap();
        circuit.evaluate();
        truth_table(&mut circuit).unwrap();
        assert_eq!(circuit.input_values(), vec![true, false]);
        assert_eq!(circuit.actual_outputs(), vec![true]);
    }

    #[test]
    fn test_limit() {
        let mut builder = CircuitBuilder::new().gate_with_fan_in(GateKind::Or, "G", 3);
        for (slot, label) in ["A", "B", "C"].iter().enumerate() {
            builder = builder.connect(*label, "G", slot);
        }
        let mut circuit = builder
            .drive_output("O", "G")
            .config(CircuitConfig::new().with_max_truth_table_inputs(2))
            .build()
            .unwrap();
        assert!(matches!(
            truth_table(&mut circuit),
            Err(BitItError::TooManyInputs { inputs: 3, limit: 2 })
        ));
    }

    #[test]
    fn test_limit_above_row_counter_width() {
        let mut builder = CircuitBuilder::new().gate_with_fan_in(GateKind::Or, "G", 64);
        for slot in 0..64 {
            builder = builder.connect(&format!("I{slot}"), "G", slot);
        }
        let mut circuit = builder
            .drive_output("O", "G")
            .config(CircuitConfig::new().with_max_truth_table_inputs(usize::MAX))
            .build()
            .unwrap();
        assert!(matches!(
            truth_table(&mut circuit),
            Err(BitItError::TooManyInputs { inputs: 64, limit: MAX_ENUMERABLE_INPUTS })
        ));
        assert_eq!(circuit.input_values(), vec![false; 64]);
    }

    #[test]
    fn test_display() {
        let mut circuit = xor_circuit();
        let table = truth_table(&mut circuit).unwrap();
        assert_eq!(
            table.to_string(),
            "A B | S\n0 0 | 0\n1 0 | 1\n0 1 | 1\n1 1 | 0\n"
        );
    }
}
