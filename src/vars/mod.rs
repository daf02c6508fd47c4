//! # World Variables - Typed, Persisted Key-Value Cells
//!
//! A world variable is a named scalar with one of four types (INT, DOUBLE,
//! STRING, BOOLEAN). Values are stored in canonical string form and validated
//! against their type on every write. The [`VarStore`] keeps variables in
//! insertion order with unique names and rewrites the backing JSON file after
//! every mutation, so the on-disk state always mirrors memory.
//!
//! Typical use:
//!
//! ```rust,no_run
//! use worldvars::vars::{VarStore, VarType};
//!
//! let mut store = VarStore::open("data/world_vars.json");
//! store.create("score", VarType::Int, "10", "")?;
//! store.add("score", 5)?;
//! assert_eq!(store.get("score").unwrap().value(), "15");
//! # Ok::<(), worldvars::vars::VarError>(())
//! ```

pub mod errors;
pub mod store;
pub mod types;
pub mod variable;

pub use errors::VarError;
pub use store::VarStore;
pub use types::VarType;
pub use variable::WorldVariable;
