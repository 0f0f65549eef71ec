//! Turning level definitions into circuits.

use tracing::debug;

use super::ast::{GateDef, LevelDef, LevelFile};
use crate::circuit::{Circuit, CircuitBuilder, CircuitConfig};
use crate::components::GateKind;
use crate::error::{BitItError, Result};

/// Pick a level by id, or the first level when `id` is `None`.
pub fn select_level(file: &LevelFile, id: Option<u32>) -> Result<&LevelDef> {
    match id {
        Some(id) => file.level(id).ok_or(BitItError::LevelNotFound { id }),
        None => file.levels.first().ok_or(BitItError::EmptyLevelFile),
    }
}

/// Build the circuit of one level of a document.
pub fn load_level(file: &LevelFile, id: Option<u32>, config: CircuitConfig) -> Result<Circuit> {
    build_level(select_level(file, id)?, config)
}

/// Build the circuit described by a level.
///
/// Every gate is declared before any wire is added, so gates may reference
/// each other regardless of their order in the document. A gate input that
/// names an undeclared label becomes an input terminal; an output driven by
/// an undeclared label is an error.
pub fn build_level(level: &LevelDef, config: CircuitConfig) -> Result<Circuit> {
    let mut builder = CircuitBuilder::new().config(config);

    for input in &level.inputs {
        builder = builder.input_with_value(&input.label, input.value);
    }

    let mut wiring = Vec::with_capacity(level.gates.len());
    for gate in &level.gates {
        let kind = gate_kind(gate)?;
        let slots = gate_slots(gate)?;
        let highest = slots.iter().map(|(slot, _)| slot + 1).max().unwrap_or(0);
        let fan_in = gate
            .fan_in
            .unwrap_or_else(|| kind.default_fan_in().max(highest));
        builder = builder.gate_with_fan_in(kind, &gate.label, fan_in);
        wiring.push((gate.label.as_str(), slots));
    }

    for (label, slots) in wiring {
        for (slot, source) in slots {
            builder = builder.connect(source, label, slot);
        }
    }

    for output in &level.outputs {
        builder = builder.drive_output(&output.label, &output.input);
    }

    if let Some(solution) = &level.solution {
        let expected = level
            .outputs
            .iter()
            .map(|o| solution.get(&o.label).copied().unwrap_or(false))
            .collect();
        builder = builder.expect_outputs(expected);
    }

    let circuit = builder.build()?;
    debug!(
        level = level.id,
        nodes = circuit.nodes().len(),
        height = circuit.height(),
        "level loaded"
    );
    Ok(circuit)
}

/// Gate keyword, restricted to real gates.
fn gate_kind(gate: &GateDef) -> Result<GateKind> {
    GateKind::from_keyword(&gate.gate_type)
        .filter(|kind| !kind.is_terminal())
        .ok_or_else(|| BitItError::UnknownGateType {
            gate_type: gate.gate_type.clone(),
            label: gate.label.clone(),
        })
}

/// Parsed `(slot, source label)` pairs, in ascending slot order.
fn gate_slots(gate: &GateDef) -> Result<Vec<(usize, &str)>> {
    let mut slots = gate
        .inputs
        .iter()
        .map(|(key, source)| {
            key.trim()
                .parse::<usize>()
                .map(|slot| (slot, source.as_str()))
                .map_err(|_| BitItError::InvalidSlot {
                    slot: key.clone(),
                    label: gate.label.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    slots.sort_by_key(|&(slot, _)| slot);
    Ok(slots)
}
