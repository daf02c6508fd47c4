//! # Storage Module - Vars File Persistence
//!
//! Serializes the world-variable store to a JSON file and reads it back at
//! session start. The wire format is a bare array of records:
//!
//! ```json
//! [
//!   { "name": "score", "type": "INT", "value": "10" },
//!   { "name": "ratio", "type": "DOUBLE", "value": "2.5" }
//! ]
//! ```
//!
//! No wrapper object, no schema version. Loading is tolerant: a missing file
//! yields an empty store, a file that is not valid JSON yields an empty store
//! with a warning, and individual records that fail to decode or whose value
//! does not validate for the declared type are skipped with a warning.
//!
//! Writes are plain synchronous overwrites on the command-execution thread;
//! the store performs one full save after every mutation (see
//! [`crate::vars::VarStore`]).

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::vars::{VarError, VarType, WorldVariable};

/// Persisted shape of one variable. Matches the vars-file schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: VarType,
    pub value: String,
}

impl From<&WorldVariable> for VarRecord {
    fn from(var: &WorldVariable) -> Self {
        VarRecord {
            name: var.name().to_string(),
            var_type: var.var_type(),
            value: var.value().to_string(),
        }
    }
}

/// Write the full variable sequence to `path`, creating parent directories
/// as needed. Pretty-printed UTF-8 JSON, plain overwrite.
pub fn save(path: &Path, vars: &[WorldVariable]) -> Result<(), VarError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let records: Vec<VarRecord> = vars.iter().map(VarRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read the variable sequence from `path`.
///
/// Missing file and top-level parse failures both produce an empty sequence;
/// only the latter warns. Per-record problems are skipped, not fatal.
pub fn load(path: &Path) -> Result<Vec<WorldVariable>, VarError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(values) => values,
        Err(e) => {
            warn!(
                "vars file {} is not a valid JSON array: {}",
                path.display(),
                e
            );
            return Ok(Vec::new());
        }
    };

    let mut vars = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<VarRecord>(value) {
            Ok(record) => {
                if !record.var_type.is_valid(&record.value) {
                    warn!(
                        "skipping variable '{}': '{}' is not a valid {}",
                        record.name, record.value, record.var_type
                    );
                    continue;
                }
                vars.push(WorldVariable::new(
                    &record.name,
                    record.var_type,
                    &record.value,
                    "",
                ));
            }
            Err(e) => {
                warn!("skipping malformed variable record: {}", e);
            }
        }
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("world_vars.json");
        let vars = load(&path).expect("load");
        assert!(vars.is_empty());
    }

    #[test]
    fn garbage_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("world_vars.json");
        fs::write(&path, "not json at all {{{").unwrap();
        let vars = load(&path).expect("load");
        assert!(vars.is_empty());
    }

    #[test]
    fn bad_records_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("world_vars.json");
        fs::write(
            &path,
            r#"[
                { "name": "ok", "type": "INT", "value": "3" },
                { "name": "bad_type", "type": "FLOAT", "value": "3" },
                { "name": "missing_value", "type": "INT" },
                { "name": "bad_value", "type": "BOOLEAN", "value": "maybe" },
                "not even an object"
            ]"#,
        )
        .unwrap();
        let vars = load(&path).expect("load");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name(), "ok");
        assert_eq!(vars[0].value(), "3");
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/config/world_vars.json");
        let vars = vec![WorldVariable::new("x", VarType::Int, "1", "")];
        save(&path, &vars).expect("save");
        assert!(path.exists());
        let loaded = load(&path).expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "x");
    }
}
