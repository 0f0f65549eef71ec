//! Level descriptions.
//!
//! Puzzle levels are stored as JSON documents holding a list of levels, each
//! naming its input terminals, its gates with the labels feeding each input
//! slot, and its output terminals:
//!
//! ```json
//! { "levels": [ { "id": 1,
//!     "inputs":  [ { "label": "A" }, { "label": "B" } ],
//!     "gates":   [ { "label": "G1", "type": "AND", "inputs": { "0": "A", "1": "B" } } ],
//!     "outputs": [ { "label": "S", "input": "G1" } ],
//!     "solution": { "S": true } } ] }
//! ```
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `inputs[].value` | optional initial value, default `false` |
//! | `gates[].type` | AND, OR, NOT, NAND, NOR, XOR, XNOR (any case) |
//! | `gates[].inputs` | slot number to driving label |
//! | `gates[].fanIn` | optional; otherwise the larger of the kind's default and the highest slot + 1 |
//! | `solution` | optional expected value per output label, missing labels are `false` |

mod ast;
mod loader;

pub use ast::*;
pub use loader::{build_level, load_level, select_level};

use crate::error::{BitItError, Result};

/// Parse a level document.
pub fn parse(input: &str) -> Result<LevelFile> {
    serde_json::from_str(input).map_err(|source| BitItError::LevelParse { source })
}

/// Parse a level document from disk.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<LevelFile> {
    let content = std::fs::read_to_string(path).map_err(|e| BitItError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
