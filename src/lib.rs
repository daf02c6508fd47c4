//! # Worldvars - Persisted Typed Variable Store
//!
//! Worldvars keeps a small set of named, typed scalar values (INT, DOUBLE,
//! STRING, BOOLEAN) in memory and mirrors every mutation to a JSON file, so
//! the on-disk state always matches the session. Variables are manipulated
//! through a terse command surface whose integer result codes double as a
//! data channel for scoreboard-style consumers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use worldvars::config::Config;
//! use worldvars::console::Console;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let mut console = Console::new(config);
//!     console.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`vars`] - the typed variable cells and the ordered, name-keyed store
//! - [`storage`] - JSON persistence of the store (save/load, tolerant loader)
//! - [`console`] - command parsing, result-code encoding, interactive loop
//! - [`config`] - TOML configuration
//! - [`logutil`] - log sanitization helpers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Console      │ ← command parsing + result encoding
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │    VarStore     │ ← validation, uniqueness, ordering
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │    Storage      │ ← full-file JSON rewrite after each mutation
//! └─────────────────┘
//! ```
//!
//! The model is single-threaded and cooperative: one command executes at a
//! time, each mutating command persists synchronously before the next runs.

pub mod config;
pub mod console;
pub mod logutil;
pub mod storage;
pub mod vars;
