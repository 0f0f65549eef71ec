//! Serde types for level description documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level document: a list of levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    pub levels: Vec<LevelDef>,
}

impl LevelFile {
    /// Level with the given id, if present.
    pub fn level(&self, id: u32) -> Option<&LevelDef> {
        self.levels.iter().find(|l| l.id == id)
    }
}

/// One puzzle level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    pub id: u32,
    #[serde(default)]
    pub inputs: Vec<InputDef>,
    #[serde(default)]
    pub gates: Vec<GateDef>,
    #[serde(default)]
    pub outputs: Vec<OutputDef>,
    /// Expected value per output label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<BTreeMap<String, bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDef {
    pub label: String,
    /// Initial value
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub value: bool,
}

/// A gate and the labels feeding its input slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDef {
    pub label: String,
    /// Gate keyword, e.g. `"AND"`
    #[serde(rename = "type")]
    pub gate_type: String,
    /// Slot number (as a string key) to driving label
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    #[serde(rename = "fanIn", default, skip_serializing_if = "Option::is_none")]
    pub fan_in: Option<usize>,
}

/// An output terminal and the label driving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDef {
    pub label: String,
    pub input: String,
}
