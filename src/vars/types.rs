//! The closed set of value types a world variable can hold.

use serde::{Deserialize, Serialize};

/// Type of a world variable. Every value is stored as a canonical string;
/// the type decides what strings are acceptable and how they coerce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarType {
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "BOOLEAN")]
    Boolean,
}

impl VarType {
    /// Command-facing lowercase names, in declaration order.
    pub const NAMES: [&'static str; 4] = ["int", "double", "string", "boolean"];

    /// Look up a type by its command-facing or persisted name (case-insensitive).
    pub fn parse(name: &str) -> Option<VarType> {
        match name.to_ascii_lowercase().as_str() {
            "int" => Some(VarType::Int),
            "double" => Some(VarType::Double),
            "string" => Some(VarType::String),
            "boolean" => Some(VarType::Boolean),
            _ => None,
        }
    }

    /// The persisted (wire) name, as written into the vars file.
    pub fn wire_name(&self) -> &'static str {
        match self {
            VarType::Int => "INT",
            VarType::Double => "DOUBLE",
            VarType::String => "STRING",
            VarType::Boolean => "BOOLEAN",
        }
    }

    /// Pure predicate: does `raw` denote a value of this type?
    pub fn is_valid(&self, raw: &str) -> bool {
        match self {
            VarType::Int => raw.parse::<i32>().is_ok(),
            VarType::Double => raw.parse::<f64>().is_ok(),
            VarType::Boolean => matches!(
                raw.to_ascii_lowercase().as_str(),
                "true" | "false" | "1" | "0"
            ),
            VarType::String => true,
        }
    }

    /// Normalize `raw` to the canonical stored form.
    ///
    /// Callers are expected to have checked [`is_valid`](Self::is_valid) first.
    /// For a boolean spelling outside the four recognized ones the raw value
    /// passes through unchanged (fallback, not an error). An invalid INT also
    /// passes through unchanged rather than panicking.
    pub fn canonicalize(&self, raw: &str) -> String {
        match self {
            VarType::Int => raw
                .parse::<i32>()
                .map(|n| n.to_string())
                .unwrap_or_else(|_| raw.to_string()),
            VarType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => "true".to_string(),
                "false" | "0" => "false".to_string(),
                _ => raw.to_string(),
            },
            VarType::Double | VarType::String => raw.to_string(),
        }
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
