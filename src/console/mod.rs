//! # Console Module - Command Surface
//!
//! The console is the host-facing command layer: it parses operation lines,
//! calls into [`crate::vars::VarStore`], and renders each outcome as a message
//! plus an integer result code suitable for scoreboard-style consumption.
//!
//! - [`commands::CommandProcessor`] - parses and executes one command line
//! - [`server::Console`] - interactive stdin loop around the processor

pub mod commands;
pub mod server;

pub use commands::{encode_result, string_hash, CommandProcessor, CommandReply, FAILURE};
pub use server::Console;
