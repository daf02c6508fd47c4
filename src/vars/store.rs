//! The ordered, name-keyed collection of world variables.

use std::path::{Path, PathBuf};

use log::{error, info};

use super::errors::VarError;
use super::types::VarType;
use super::variable::WorldVariable;
use crate::storage;

/// In-memory store of world variables plus the backing vars file.
///
/// Insertion order is preserved and names are unique (case-sensitive).
/// Every mutating operation validates first, applies the change, then
/// persists the full store synchronously through [`commit`](Self::commit).
/// There is no batching: N mutations mean N full-file rewrites.
pub struct VarStore {
    path: PathBuf,
    vars: Vec<WorldVariable>,
}

impl VarStore {
    /// Open the store backed by `path`, loading any persisted variables.
    ///
    /// A missing or unreadable file starts an empty session rather than
    /// failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let vars = match storage::load(&path) {
            Ok(vars) => {
                info!("loaded {} variable(s) from {}", vars.len(), path.display());
                vars
            }
            Err(e) => {
                error!("failed to load vars file {}: {}", path.display(), e);
                Vec::new()
            }
        };
        VarStore { path, vars }
    }

    /// Path of the backing vars file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldVariable> {
        self.vars.iter()
    }

    /// Names of all stored variables, in insertion order. Backs the
    /// name-suggestion queries of the command layer.
    pub fn list_names(&self) -> Vec<String> {
        self.vars.iter().map(|v| v.name().to_string()).collect()
    }

    /// Look up a variable by exact name. Absence is a normal outcome here,
    /// not an error.
    pub fn get(&self, name: &str) -> Option<&WorldVariable> {
        self.vars.iter().find(|v| v.name() == name)
    }

    /// Create a new variable at the end of the sequence.
    pub fn create(
        &mut self,
        name: &str,
        var_type: VarType,
        raw: &str,
        description: &str,
    ) -> Result<(), VarError> {
        if self.get(name).is_some() {
            return Err(VarError::DuplicateName(name.to_string()));
        }
        if !var_type.is_valid(raw) {
            return Err(VarError::InvalidFormat {
                var_type,
                value: raw.to_string(),
            });
        }
        self.vars
            .push(WorldVariable::new(name, var_type, raw, description));
        self.commit();
        Ok(())
    }

    /// Overwrite a variable's value, keeping its type.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), VarError> {
        let var = self
            .vars
            .iter_mut()
            .find(|v| v.name() == name)
            .ok_or_else(|| VarError::NotFound(name.to_string()))?;
        if !var.var_type().is_valid(raw) {
            return Err(VarError::InvalidFormat {
                var_type: var.var_type(),
                value: raw.to_string(),
            });
        }
        var.set_value(raw);
        self.commit();
        Ok(())
    }

    /// Remove a variable, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Result<(), VarError> {
        let pos = self
            .vars
            .iter()
            .position(|v| v.name() == name)
            .ok_or_else(|| VarError::NotFound(name.to_string()))?;
        self.vars.remove(pos);
        self.commit();
        Ok(())
    }

    /// Add a whole-number delta to a numeric variable.
    pub fn add(&mut self, name: &str, delta: i32) -> Result<(), VarError> {
        self.apply_arithmetic(name, delta)
    }

    /// Subtract a whole-number delta from a numeric variable.
    pub fn subtract(&mut self, name: &str, delta: i32) -> Result<(), VarError> {
        self.apply_arithmetic(name, delta.wrapping_neg())
    }

    fn apply_arithmetic(&mut self, name: &str, delta: i32) -> Result<(), VarError> {
        let var = self
            .vars
            .iter_mut()
            .find(|v| v.name() == name)
            .ok_or_else(|| VarError::NotFound(name.to_string()))?;
        match var.add_int(delta) {
            Ok(()) => {
                self.commit();
                Ok(())
            }
            // The store's arithmetic contract reports both a wrong type and a
            // corrupt stored value as a format problem.
            Err(VarError::UnsupportedOperation(var_type)) => Err(VarError::InvalidFormat {
                var_type,
                value: var.value().to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Persist the full store. A failed save is logged and the in-memory
    /// state stays authoritative until the next successful save.
    fn commit(&self) {
        if let Err(e) = storage::save(&self.path, &self.vars) {
            error!("failed to save vars file {}: {}", self.path.display(), e);
        }
    }
}
