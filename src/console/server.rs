//! Interactive console driving the command processor.
//!
//! Commands execute strictly one at a time on this task, matching the
//! single-writer discipline the store assumes. Persistence happens inside the
//! store after each mutation, so there is nothing to flush on exit.

use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::commands::CommandProcessor;
use crate::config::Config;
use crate::vars::VarStore;

/// Interactive session: reads command lines from stdin, executes them against
/// the store, and prints the reply text followed by the result code.
pub struct Console {
    config: Config,
    store: VarStore,
    processor: CommandProcessor,
}

impl Console {
    pub fn new(config: Config) -> Self {
        let store = VarStore::open(config.vars_file());
        Console {
            config,
            store,
            processor: CommandProcessor::new(),
        }
    }

    /// Run the read-execute-print loop until EOF, `exit`/`quit`, or ctrl-c.
    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(
                format!(
                    "{} - {} variable(s) loaded from {}\nType 'help' for commands, 'exit' to leave.\n",
                    self.config.console.name,
                    self.store.len(),
                    self.store.path().display()
                )
                .as_bytes(),
            )
            .await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break; // EOF
                    };
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                        break;
                    }
                    let reply = self.processor.process(&mut self.store, trimmed);
                    stdout
                        .write_all(format!("{}\n=> {}\n", reply.text, reply.code).as_bytes())
                        .await?;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupt received, shutting down");
                    break;
                }
            }
        }
        info!("console session ended");
        Ok(())
    }

    /// Execute a single command line and print the outcome. Returns the
    /// command result code.
    pub fn exec(&mut self, line: &str) -> i32 {
        let reply = self.processor.process(&mut self.store, line);
        println!("{}\n=> {}", reply.text, reply.code);
        reply.code
    }

    /// Print a short status summary.
    pub fn show_status(&self) {
        println!("Vars file: {}", self.store.path().display());
        println!("Variables: {}", self.store.len());
        for var in self.store.iter() {
            println!("  {} ({}) = '{}'", var.name(), var.var_type(), var.value());
        }
    }
}
