//! A single named, typed, mutable variable cell.

use super::errors::VarError;
use super::types::VarType;

/// One stored variable: a name (the identity key), an immutable type, a value
/// kept in canonical string form, and an optional free-text description.
///
/// The description lives only in memory for the session; the persisted record
/// is just `{name, type, value}` (see [`crate::storage`]).
#[derive(Debug, Clone)]
pub struct WorldVariable {
    name: String,
    var_type: VarType,
    value: String,
    description: String,
}

impl WorldVariable {
    /// Build a variable, canonicalizing `raw`.
    ///
    /// Construction does not validate: callers check
    /// [`VarType::is_valid`] first (the store and the loader both do).
    pub fn new(name: &str, var_type: VarType, raw: &str, description: &str) -> Self {
        WorldVariable {
            name: name.to_string(),
            var_type,
            value: var_type.canonicalize(raw),
            description: description.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn var_type(&self) -> VarType {
        self.var_type
    }

    /// The canonical stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Re-canonicalize and overwrite the value. Does not validate; the store
    /// runs `is_valid` before calling this.
    pub fn set_value(&mut self, raw: &str) {
        self.value = self.var_type.canonicalize(raw);
    }

    /// Read the value as an integer. DOUBLE truncates toward zero, BOOLEAN
    /// maps to 1/0, STRING has no integer reading.
    pub fn as_int(&self) -> Result<i32, VarError> {
        match self.var_type {
            VarType::Int => self.parse_int(),
            VarType::Double => Ok(self.parse_double()? as i32),
            VarType::Boolean => Ok(if self.as_bool()? { 1 } else { 0 }),
            VarType::String => Err(VarError::UnsupportedConversion {
                var_type: self.var_type,
                wanted: "an integer",
            }),
        }
    }

    /// Read the value as a double. INT widens, BOOLEAN maps to 1.0/0.0,
    /// STRING has no numeric reading.
    pub fn as_double(&self) -> Result<f64, VarError> {
        match self.var_type {
            VarType::Double => self.parse_double(),
            VarType::Int => Ok(f64::from(self.parse_int()?)),
            VarType::Boolean => Ok(if self.as_bool()? { 1.0 } else { 0.0 }),
            VarType::String => Err(VarError::UnsupportedConversion {
                var_type: self.var_type,
                wanted: "a double",
            }),
        }
    }

    /// Read the value as a boolean. Numeric types use a nonzero test; STRING
    /// matches `true`/`1` case-insensitively and anything else reads false.
    pub fn as_bool(&self) -> Result<bool, VarError> {
        match self.var_type {
            VarType::Boolean => Ok(self.value == "true"),
            VarType::Int => Ok(self.parse_int()? != 0),
            VarType::Double => Ok(self.parse_double()? != 0.0),
            VarType::String => {
                let lower = self.value.to_ascii_lowercase();
                Ok(lower == "true" || lower == "1")
            }
        }
    }

    /// Add a whole-number delta. INT uses wrapping integer addition; DOUBLE
    /// widens the delta and adds in floating point. Other types refuse.
    pub fn add_int(&mut self, delta: i32) -> Result<(), VarError> {
        match self.var_type {
            VarType::Int => {
                let next = self.parse_int()?.wrapping_add(delta);
                self.value = next.to_string();
                Ok(())
            }
            VarType::Double => {
                let next = self.parse_double()? + f64::from(delta);
                self.value = next.to_string();
                Ok(())
            }
            VarType::String | VarType::Boolean => {
                Err(VarError::UnsupportedOperation(self.var_type))
            }
        }
    }

    /// Subtract a whole-number delta; same type rules as [`add_int`](Self::add_int).
    pub fn subtract_int(&mut self, delta: i32) -> Result<(), VarError> {
        self.add_int(delta.wrapping_neg())
    }

    fn parse_int(&self) -> Result<i32, VarError> {
        self.value
            .parse::<i32>()
            .map_err(|_| self.invalid_format())
    }

    fn parse_double(&self) -> Result<f64, VarError> {
        self.value
            .parse::<f64>()
            .map_err(|_| self.invalid_format())
    }

    fn invalid_format(&self) -> VarError {
        VarError::InvalidFormat {
            var_type: self.var_type,
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_canonicalizes() {
        let var = WorldVariable::new("flag", VarType::Boolean, "TRUE", "");
        assert_eq!(var.value(), "true");
        let var = WorldVariable::new("count", VarType::Int, "+07", "");
        assert_eq!(var.value(), "7");
    }

    #[test]
    fn int_coercions() {
        let var = WorldVariable::new("n", VarType::Int, "-3", "");
        assert_eq!(var.as_int().unwrap(), -3);
        assert_eq!(var.as_double().unwrap(), -3.0);
        assert!(var.as_bool().unwrap());
    }

    #[test]
    fn double_truncates_toward_zero() {
        let var = WorldVariable::new("r", VarType::Double, "-2.9", "");
        assert_eq!(var.as_int().unwrap(), -2);
        let var = WorldVariable::new("r", VarType::Double, "2.9", "");
        assert_eq!(var.as_int().unwrap(), 2);
    }

    #[test]
    fn string_numeric_reads_fail() {
        let var = WorldVariable::new("s", VarType::String, "12", "");
        assert!(matches!(
            var.as_int(),
            Err(VarError::UnsupportedConversion { .. })
        ));
        assert!(matches!(
            var.as_double(),
            Err(VarError::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn string_bool_reads_text() {
        assert!(WorldVariable::new("s", VarType::String, "True", "")
            .as_bool()
            .unwrap());
        assert!(WorldVariable::new("s", VarType::String, "1", "")
            .as_bool()
            .unwrap());
        assert!(!WorldVariable::new("s", VarType::String, "yes", "")
            .as_bool()
            .unwrap());
    }

    #[test]
    fn arithmetic_on_numeric_types() {
        let mut var = WorldVariable::new("n", VarType::Int, "10", "");
        var.add_int(5).unwrap();
        assert_eq!(var.value(), "15");
        var.subtract_int(5).unwrap();
        assert_eq!(var.value(), "10");

        let mut var = WorldVariable::new("r", VarType::Double, "3.5", "");
        var.subtract_int(1).unwrap();
        assert_eq!(var.value(), "2.5");
    }

    #[test]
    fn arithmetic_refused_for_string_and_boolean() {
        let mut var = WorldVariable::new("s", VarType::String, "x", "");
        assert!(matches!(
            var.add_int(1),
            Err(VarError::UnsupportedOperation(VarType::String))
        ));
        let mut var = WorldVariable::new("b", VarType::Boolean, "true", "");
        assert!(matches!(
            var.subtract_int(1),
            Err(VarError::UnsupportedOperation(VarType::Boolean))
        ));
    }

    #[test]
    fn corrupt_numeric_value_reports_invalid_format() {
        // A variable can only hold a corrupt value if something bypassed
        // validation; arithmetic must still fail cleanly.
        let mut var = WorldVariable::new("n", VarType::Int, "ten", "");
        assert!(matches!(
            var.add_int(1),
            Err(VarError::InvalidFormat { .. })
        ));
    }
}
