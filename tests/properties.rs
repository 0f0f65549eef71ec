//! Scheduling and evaluation invariants over a set of reference circuits.

use rstest::rstest;

use bitit_core::circuit::{Connection, Node, NodeId};
use bitit_core::eval::truth_table;
use bitit_core::{BitItError, Circuit, CircuitBuilder, GateKind};

/// Ripple-carry adder over two 2-bit numbers, gates declared out of order.
fn two_bit_adder() -> Circuit {
    CircuitBuilder::new()
        .input("A0")
        .input("A1")
        .input("B0")
        .input("B1")
        .gate(GateKind::Or, "C1")
        .gate(GateKind::Xor, "S1")
        .gate(GateKind::And, "P1")
        .gate(GateKind::And, "G1")
        .gate(GateKind::Xor, "X1")
        .gate(GateKind::And, "C0")
        .gate(GateKind::Xor, "S0")
        .connect("A0", "S0", 0)
        .connect("B0", "S0", 1)
        .connect("A0", "C0", 0)
        .connect("B0", "C0", 1)
        .connect("A1", "X1", 0)
        .connect("B1", "X1", 1)
        .connect("X1", "S1", 0)
        .connect("C0", "S1", 1)
        .connect("A1", "G1", 0)
        .connect("B1", "G1", 1)
        .connect("X1", "P1", 0)
        .connect("C0", "P1", 1)
        .connect("G1", "C1", 0)
        .connect("P1", "C1", 1)
        .drive_output("SUM0", "S0")
        .drive_output("SUM1", "S1")
        .drive_output("CARRY", "C1")
        .build()
        .unwrap()
}

/// Short and long paths into the same gate.
fn reconvergent() -> Circuit {
    CircuitBuilder::new()
        .input("A")
        .gate(GateKind::Not, "N1")
        .gate(GateKind::Not, "N2")
        .gate(GateKind::Not, "N3")
        .gate(GateKind::Nor, "G")
        .connect("A", "N1", 0)
        .connect("N1", "N2", 0)
        .connect("N2", "N3", 0)
        .connect("A", "G", 0)
        .connect("N3", "G", 1)
        .drive_output("O", "G")
        .build()
        .unwrap()
}

/// Nodes handed over directly, sinks first.
fn reverse_declared() -> Circuit {
    let nodes = vec![
        Node::output_terminal("O"),
        Node::with_fan_in(GateKind::Xnor, "X", 3),
        Node::new(GateKind::Nand, "N"),
        Node::input("A", true),
        Node::input("B", false),
    ];
    let connections = vec![
        Connection::new(NodeId(1), NodeId(0), 0),
        Connection::new(NodeId(2), NodeId(1), 0),
        Connection::new(NodeId(3), NodeId(1), 1),
        Connection::new(NodeId(4), NodeId(1), 2),
        Connection::new(NodeId(3), NodeId(2), 0),
        Connection::new(NodeId(4), NodeId(2), 1),
    ];
    Circuit::new(nodes, connections, vec![true]).unwrap()
}

#[rstest]
#[case::adder(two_bit_adder())]
#[case::reconvergent(reconvergent())]
#[case::reverse_declared(reverse_declared())]
fn test_order_respects_every_connection(#[case] circuit: Circuit) {
    let order = circuit.evaluation_order();
    assert_eq!(order.len(), circuit.nodes().len());

    let schedule = circuit.schedule();
    for conn in circuit.connections() {
        assert!(schedule.position(conn.source()) < schedule.position(conn.target()));
    }
}

#[rstest]
#[case::adder(two_bit_adder())]
#[case::reconvergent(reconvergent())]
#[case::reverse_declared(reverse_declared())]
fn test_levels_are_monotone(#[case] circuit: Circuit) {
    for &id in circuit.inputs() {
        assert_eq!(circuit.node(id).level(), 0);
    }
    for conn in circuit.connections() {
        let from = circuit.node(conn.source()).level();
        let to = circuit.node(conn.target()).level();
        assert!(to > from, "{} -> {}", conn.source(), conn.target());
    }
    let height = circuit.height();
    assert!(circuit.nodes().iter().any(|n| n.level() == height));
}

#[rstest]
#[case::adder(two_bit_adder())]
#[case::reconvergent(reconvergent())]
#[case::reverse_declared(reverse_declared())]
fn test_buckets_match_node_metadata(#[case] circuit: Circuit) {
    let buckets = circuit.level_buckets();
    assert_eq!(buckets.len(), circuit.height() + 1);
    let total: usize = buckets.iter().map(Vec::len).sum();
    assert_eq!(total, circuit.nodes().len());

    for (level, bucket) in buckets.iter().enumerate() {
        for (index, &id) in bucket.iter().enumerate() {
            assert_eq!(circuit.node(id).level(), level);
            assert_eq!(circuit.node(id).level_index(), index);
        }
    }
}

#[rstest]
#[case::adder(two_bit_adder())]
#[case::reconvergent(reconvergent())]
#[case::reverse_declared(reverse_declared())]
fn test_evaluation_is_idempotent(#[case] mut circuit: Circuit) {
    let inputs: Vec<bool> = (0..circuit.inputs().len()).map(|i| i % 2 == 0).collect();
    circuit.set_input_values(&inputs).unwrap();

    circuit.evaluate();
    let outputs: Vec<bool> = circuit.nodes().iter().map(Node::output).collect();
    let wires: Vec<bool> = circuit.connections().iter().map(Connection::state).collect();

    circuit.evaluate();
    assert_eq!(circuit.nodes().iter().map(Node::output).collect::<Vec<_>>(), outputs);
    assert_eq!(circuit.connections().iter().map(Connection::state).collect::<Vec<_>>(), wires);
}

#[test]
fn test_longest_path_levels() {
    let circuit = reconvergent();
    let level = |label: &str| circuit.node(circuit.find(label).unwrap()).level();
    assert_eq!(level("N3"), 3);
    assert_eq!(level("G"), 4, "G follows its deepest driver, not its shallowest");
    assert_eq!(level("O"), 5);
}

#[test]
fn test_adder_adds() {
    let mut circuit = two_bit_adder();
    let table = truth_table(&mut circuit).unwrap();
    assert_eq!(table.rows.len(), 16);

    let bits = |values: &[bool]| -> u8 {
        values
            .iter()
            .enumerate()
            .map(|(i, &b)| u8::from(b) << i)
            .sum()
    };
    for row in &table.rows {
        // inputs are A0 A1 B0 B1, outputs SUM0 SUM1 CARRY
        let a = bits(&row.inputs[0..2]);
        let b = bits(&row.inputs[2..4]);
        assert_eq!(bits(&row.outputs), a + b, "{a} + {b}");
    }
}

#[test]
fn test_reverse_declared_outputs() {
    let mut circuit = reverse_declared();
    circuit.evaluate();
    // NAND(1, 0) = 1, XNOR(1, 1, 0) has two highs
    assert_eq!(circuit.actual_outputs(), vec![true]);
    assert!(circuit.is_correct());
}

#[test]
fn test_transitive_cycle_rejected() {
    let err = CircuitBuilder::new()
        .input("A")
        .gate(GateKind::Or, "G1")
        .gate(GateKind::Not, "G2")
        .gate(GateKind::Not, "G3")
        .connect("A", "G1", 0)
        .connect("G3", "G1", 1)
        .connect("G1", "G2", 0)
        .connect("G2", "G3", 0)
        .drive_output("O", "G3")
        .build()
        .unwrap_err();

    assert!(err.is_structural());
    assert!(matches!(err, BitItError::CycleDetected { unscheduled: 4, .. }));
}

#[test]
fn test_expected_length_mismatch_is_incorrect() {
    let mut circuit = reconvergent();
    circuit.evaluate();
    circuit.set_expected_outputs(vec![]);
    assert!(!circuit.is_correct());
    circuit.set_expected_outputs(circuit.actual_outputs());
    assert!(circuit.is_correct());
}
