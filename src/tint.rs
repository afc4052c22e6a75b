//! Tint lookup tables for pelt and white-patch shading
//!
//! The tint dictionaries are authored as JSON objects. Their inner structure
//! belongs to the shading code; here they are opaque key -> value mappings
//! loaded best-effort at startup.

use std::fs;
use std::path::Path;

use crate::error::Warning;

/// Opaque tint specification data, keyed by colour or category name.
pub type TintTable = serde_json::Map<String, serde_json::Value>;

/// How a tint table load concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintOutcome {
    /// Parsed from the file on disk
    Loaded,
    /// File was missing or unreadable; the table is empty
    Missing,
    /// File existed but was not a JSON object; the table is empty
    Invalid,
}

/// Result of a lenient tint table load - always yields a table, possibly empty.
///
/// The outcome lets callers distinguish "no tints configured" from "tint file
/// failed to parse" without the load itself ever failing.
#[derive(Debug, Clone, PartialEq)]
pub struct TintLoadResult {
    pub table: TintTable,
    pub outcome: TintOutcome,
    pub warning: Option<Warning>,
}

impl TintLoadResult {
    fn fallback(outcome: TintOutcome, warning: Warning) -> Self {
        Self {
            table: TintTable::new(),
            outcome,
            warning: Some(warning),
        }
    }
}

impl Default for TintLoadResult {
    fn default() -> Self {
        Self {
            table: TintTable::new(),
            outcome: TintOutcome::Missing,
            warning: None,
        }
    }
}

/// Load a tint table from `path`, recovering to an empty table on failure.
///
/// Never fails: a missing file or a parse error produces an empty table with
/// the matching [`TintOutcome`] and a warning describing the problem.
pub fn load_tint_table(path: &Path) -> TintLoadResult {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            return TintLoadResult::fallback(
                TintOutcome::Missing,
                Warning::new(format!(
                    "could not read tint file '{}': {}",
                    path.display(),
                    err
                )),
            );
        }
    };

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(serde_json::Value::Object(table)) => TintLoadResult {
            table,
            outcome: TintOutcome::Loaded,
            warning: None,
        },
        Ok(_) => TintLoadResult::fallback(
            TintOutcome::Invalid,
            Warning::new(format!(
                "tint file '{}' is not a JSON object",
                path.display()
            )),
        ),
        Err(err) => TintLoadResult::fallback(
            TintOutcome::Invalid,
            Warning::new(format!(
                "could not parse tint file '{}': {}",
                path.display(),
                err
            )),
        ),
    }
}
