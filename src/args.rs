//! Command-line argument configuration source.
//!
//! Arguments of the form `-key=value`, `--key=value`, `-key value` or
//! `--key value` merge into the shared tree, where `key` may contain dots
//! for hierarchy. One or two leading dashes are equivalent. Parsing runs
//! left to right, so when the same key appears more than once the last
//! occurrence wins: `./prog -key.alg=dsa -key.alg=rsa` leaves `key.alg`
//! holding `rsa`.
//!
//! An optional namespace prefix lets one argument list carry settings for
//! several unrelated consumers. With prefix `ca`, only `-ca.key.alg=rsa`
//! style arguments are merged (stored under `key.alg`); everything else is
//! skipped without error.

use crate::error::{ConfigError, Result};
use crate::source::Source;
use crate::tree::{self, Node, Scalar};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Configuration loaded from command-line arguments.
#[derive(Debug)]
pub struct ArgsConfig {
    root: HashMap<String, Node>,
    prefix: String,
    args: Vec<String>,
    pos: usize,
}

impl ArgsConfig {
    /// Create a parser over `args`, without the program name.
    ///
    /// An empty `prefix` disables namespace filtering.
    pub fn new(args: Vec<String>, prefix: impl Into<String>) -> Self {
        Self {
            root: HashMap::new(),
            prefix: prefix.into(),
            args,
            pos: 0,
        }
    }

    /// Create a parser over the arguments of the current process.
    pub fn from_env(prefix: impl Into<String>) -> Self {
        Self::new(std::env::args().skip(1).collect(), prefix)
    }

    /// Parse all remaining arguments and merge them into the tree.
    ///
    /// Pairs are merged as they are parsed, so a later argument overwrites
    /// an earlier write at the same path. Stops at the first invalid
    /// argument; the offending tokens have already been consumed at that
    /// point, so a caller that logs the error and calls `parse` again
    /// resumes with the next argument.
    pub fn parse(&mut self) -> Result<()> {
        while self.pos < self.args.len() {
            if let Some((key, raw)) = self.parse_next()? {
                debug!(key = %key, value = %raw, "parsed argument");
                self.feed(&key, &raw);
            }
        }
        Ok(())
    }

    /// Look up a dotted key path in the merged tree.
    pub fn get(&self, key: &str) -> Value<'_> {
        Value::new(tree::lookup(&self.root, key))
    }

    /// Parse one key/value pair, consuming one or two tokens.
    ///
    /// Returns `None` when the argument list is exhausted or the key was
    /// filtered out by the namespace prefix. Note that a filtered-out
    /// `-key value` form still consumes its value token.
    fn parse_next(&mut self) -> Result<Option<(String, String)>> {
        let Some(token) = self.pop_arg() else {
            return Ok(None);
        };

        // Strip a leading `-` or `--`; anything else is not a flag. Dashes
        // beyond the second belong to the key.
        if token.len() < 2 || !token.starts_with('-') {
            return Err(ConfigError::MalformedArgument { token });
        }
        let body = token.strip_prefix("--").unwrap_or(&token[1..]);

        // `-key=value` carries its value inline (which may be empty);
        // `-key value` takes it from the next token.
        let (key, raw) = match body.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => {
                let key = body.to_string();
                let Some(value) = self.pop_arg() else {
                    return Err(ConfigError::MissingValue { key });
                };
                (key, value)
            }
        };

        // Keys outside the configured namespace are skipped; matching keys
        // are returned with the prefix stripped.
        if !self.prefix.is_empty() {
            let Some(stripped) = key
                .strip_prefix(self.prefix.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
            else {
                return Ok(None);
            };
            return Ok(Some((stripped.to_string(), raw)));
        }

        Ok(Some((key, raw)))
    }

    fn pop_arg(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    /// Merge one key/value pair into the tree.
    ///
    /// Every segment before the last must hold an interior node: missing
    /// ones are created, and a leaf in the way is discarded for a fresh
    /// interior node. The last segment always receives a leaf write,
    /// replacing whatever was there, leaf or subtree.
    fn feed(&mut self, key: &str, raw: &str) {
        let segments: Vec<&str> = key.split('.').collect();
        let Some((&last, interior)) = segments.split_last() else {
            return;
        };

        let mut cur = &mut self.root;
        for segment in interior.iter().copied() {
            let slot = cur
                .entry(segment.to_string())
                .or_insert_with(|| Node::Interior(HashMap::new()));
            if !matches!(slot, Node::Interior(_)) {
                *slot = Node::Interior(HashMap::new());
            }
            match slot {
                Node::Interior(children) => cur = children,
                Node::Leaf(_) => unreachable!("slot was just coerced to an interior node"),
            }
        }

        cur.insert(last.to_string(), Node::Leaf(Scalar::infer(raw)));
    }
}

impl Source for ArgsConfig {
    fn get(&self, key: &str) -> Value<'_> {
        ArgsConfig::get(self, key)
    }
}

impl fmt::Display for ArgsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgsConfig: {:?}", self.root)
    }
}
