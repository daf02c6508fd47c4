//! Command processing for the world-variable console.
//!
//! The processor is the stand-in for a host command dispatcher: it takes one
//! textual command line, runs it against the [`VarStore`], and returns a
//! rendered reply plus an integer result code. The code channel doubles as a
//! data channel (scoreboard-style): successful reads and writes encode the
//! variable's value as an integer, failures return [`FAILURE`].
//!
//! Value encoding by type:
//! - INT: the value itself
//! - DOUBLE: value x 100 truncated (2-decimal fixed point)
//! - BOOLEAN: 1 or 0
//! - STRING: a 32-bit polynomial hash of the value (see [`string_hash`])

use std::collections::HashMap;

use log::info;

use crate::logutil::escape_log;
use crate::vars::{VarError, VarStore, VarType, WorldVariable};

/// Result code for any failed command. Successes return a non-negative
/// payload, except INT variables whose value is itself negative: there the
/// payload is the value, by contract.
pub const FAILURE: i32 = -1;

/// A rendered command outcome: user-facing text plus the integer result code.
#[derive(Debug, Clone)]
pub struct CommandReply {
    pub text: String,
    pub code: i32,
}

impl CommandReply {
    fn ok(text: impl Into<String>, code: i32) -> Self {
        CommandReply {
            text: text.into(),
            code,
        }
    }

    fn fail(text: impl Into<String>) -> Self {
        CommandReply {
            text: text.into(),
            code: FAILURE,
        }
    }
}

/// 32-bit polynomial string hash over UTF-16 code units: `h = 31*h + unit`,
/// wrapping. Deterministic across runs, so scoreboard comparisons of STRING
/// variables stay stable.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Encode a variable's value on the integer result channel.
pub fn encode_result(var: &WorldVariable) -> i32 {
    match var.var_type() {
        VarType::Int => var.as_int().unwrap_or(FAILURE),
        VarType::Double => var
            .as_double()
            .map(|d| (d * 100.0) as i32)
            .unwrap_or(FAILURE),
        VarType::Boolean => var.as_bool().map(|b| i32::from(b)).unwrap_or(FAILURE),
        VarType::String => string_hash(var.value()),
    }
}

/// Processes console commands against a variable store.
pub struct CommandProcessor {
    /// hash -> original string, for `hash decrypt`. Session-local only.
    hash_history: HashMap<i32, String>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        CommandProcessor {
            hash_history: HashMap::new(),
        }
    }

    /// Execute one command line and return the reply.
    pub fn process(&mut self, store: &mut VarStore, line: &str) -> CommandReply {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&op) = tokens.first() else {
            return CommandReply::fail(usage());
        };
        match op.to_ascii_lowercase().as_str() {
            "new" => self.handle_new(store, &tokens),
            "get" => self.handle_get(store, &tokens),
            "set" => self.handle_set(store, &tokens),
            "remove" => self.handle_remove(store, &tokens),
            "add" => self.handle_arith(store, &tokens, true),
            "subtract" => self.handle_arith(store, &tokens, false),
            "list" => self.handle_list(store),
            "hash" => self.handle_hash(&tokens),
            "check" => CommandReply::ok(
                format!(
                    "{} v{} ready ({} variable(s) stored)",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION"),
                    store.len()
                ),
                1,
            ),
            "help" => CommandReply::ok(usage(), 1),
            _ => CommandReply::fail(format!("Unknown command '{}'\n{}", escape_log(op), usage())),
        }
    }

    /// `new <type> <name> <value> [description...]`
    fn handle_new(&self, store: &mut VarStore, tokens: &[&str]) -> CommandReply {
        let [_, type_name, name, value, description @ ..] = tokens else {
            return CommandReply::fail("Usage: new <int|double|string|boolean> <name> <value> [description]");
        };
        let Some(var_type) = VarType::parse(type_name) else {
            return CommandReply::fail(format!(
                "Unknown type '{}' (expected {})",
                escape_log(type_name),
                VarType::NAMES.join("|")
            ));
        };
        let description = description.join(" ");
        match store.create(name, var_type, value, &description) {
            Ok(()) => {
                info!("created {} variable '{}'", var_type, escape_log(name));
                let value = store.get(name).map(|v| v.value().to_string()).unwrap_or_default();
                CommandReply::ok(
                    format!("Created {} variable '{}' = '{}'", var_type, name, value),
                    1,
                )
            }
            Err(e) => reply_for_error(e),
        }
    }

    /// `get <name>`
    fn handle_get(&self, store: &VarStore, tokens: &[&str]) -> CommandReply {
        let [_, name] = tokens else {
            return CommandReply::fail("Usage: get <name>");
        };
        match store.get(name) {
            Some(var) => {
                let mut text = format!("{} ({}) = '{}'", var.name(), var.var_type(), var.value());
                if !var.description().is_empty() {
                    text.push_str(&format!(" - {}", var.description()));
                }
                CommandReply::ok(text, encode_result(var))
            }
            None => reply_for_error(VarError::NotFound(name.to_string())),
        }
    }

    /// `set <name> <value...>`
    fn handle_set(&self, store: &mut VarStore, tokens: &[&str]) -> CommandReply {
        let [_, name, value @ ..] = tokens else {
            return CommandReply::fail("Usage: set <name> <value>");
        };
        if value.is_empty() {
            return CommandReply::fail("Usage: set <name> <value>");
        }
        let value = value.join(" ");
        match store.set(name, &value) {
            Ok(()) => {
                info!("set '{}' = '{}'", escape_log(name), escape_log(&value));
                let var = store.get(name).expect("variable present after set");
                CommandReply::ok(
                    format!("{} = '{}'", var.name(), var.value()),
                    encode_result(var),
                )
            }
            Err(e) => reply_for_error(e),
        }
    }

    /// `remove <name>`
    fn handle_remove(&self, store: &mut VarStore, tokens: &[&str]) -> CommandReply {
        let [_, name] = tokens else {
            return CommandReply::fail("Usage: remove <name>");
        };
        match store.remove(name) {
            Ok(()) => {
                info!("removed variable '{}'", escape_log(name));
                CommandReply::ok(format!("Removed '{}'", name), 1)
            }
            Err(e) => reply_for_error(e),
        }
    }

    /// `add <name> <int>` / `subtract <name> <int>`
    fn handle_arith(&self, store: &mut VarStore, tokens: &[&str], adding: bool) -> CommandReply {
        let verb = if adding { "add" } else { "subtract" };
        let [_, name, delta] = tokens else {
            return CommandReply::fail(format!("Usage: {} <name> <value:int>", verb));
        };
        let Ok(delta) = delta.parse::<i32>() else {
            return CommandReply::fail(format!("'{}' is not an integer", escape_log(delta)));
        };
        let result = if adding {
            store.add(name, delta)
        } else {
            store.subtract(name, delta)
        };
        match result {
            Ok(()) => {
                let var = store.get(name).expect("variable present after arithmetic");
                info!("{} {} on '{}' -> '{}'", verb, delta, escape_log(name), var.value());
                CommandReply::ok(
                    format!("{} = '{}'", var.name(), var.value()),
                    encode_result(var),
                )
            }
            Err(e) => reply_for_error(e),
        }
    }

    /// `list` - stored names in insertion order; code is the count.
    fn handle_list(&self, store: &VarStore) -> CommandReply {
        if store.is_empty() {
            return CommandReply::ok("No variables stored", 0);
        }
        let names = store.list_names();
        let count = names.len();
        CommandReply::ok(names.join(", "), count as i32)
    }

    /// `hash encrypt <string...>` / `hash decrypt <hash>`
    fn handle_hash(&mut self, tokens: &[&str]) -> CommandReply {
        match tokens {
            [_, sub, rest @ ..] if sub.eq_ignore_ascii_case("encrypt") && !rest.is_empty() => {
                let input = rest.join(" ");
                let hash = string_hash(&input);
                self.hash_history.insert(hash, input);
                CommandReply::ok(format!("Hash: {}", hash), hash)
            }
            [_, sub, hash] if sub.eq_ignore_ascii_case("decrypt") => {
                let Ok(hash) = hash.parse::<i32>() else {
                    return CommandReply::fail(format!("'{}' is not a hash value", escape_log(hash)));
                };
                match self.hash_history.get(&hash) {
                    Some(original) => {
                        CommandReply::ok(format!("{} = '{}'", hash, original), 1)
                    }
                    None => CommandReply::fail(format!("No string recorded for hash {}", hash)),
                }
            }
            _ => CommandReply::fail("Usage: hash encrypt <string> | hash decrypt <value:int>"),
        }
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn reply_for_error(e: VarError) -> CommandReply {
    let text = match &e {
        VarError::NotFound(name) => format!("No variable named '{}'", name),
        VarError::DuplicateName(name) => format!("Variable '{}' already exists", name),
        VarError::InvalidFormat { var_type, value } => {
            format!("'{}' is not a valid {} value", value, var_type)
        }
        other => other.to_string(),
    };
    CommandReply::fail(text)
}

fn usage() -> &'static str {
    "Commands:\n  new <int|double|string|boolean> <name> <value> [description]\n  get <name>\n  set <name> <value>\n  add <name> <value:int>\n  subtract <name> <value:int>\n  remove <name>\n  list\n  hash encrypt <string> | hash decrypt <value:int>\n  check | help"
}
