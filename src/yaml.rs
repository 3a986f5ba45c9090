//! YAML file configuration source.
//!
//! A whole document is decoded in one atomic call and normalized into the
//! shared tree shape; lookups then behave exactly like the command-line
//! source. Decoding itself is delegated to `serde_yaml`.

use crate::error::{ConfigError, Result};
use crate::source::Source;
use crate::tree::{self, Node, Scalar};
use crate::value::Value;
use serde_yaml::Mapping;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration loaded from a YAML document.
///
/// Top-level and nested mappings become interior nodes; scalars become
/// leaves with YAML's native typing, so a `size: 2048` entry reads back
/// through [`Value::int_or`] and an `enabled: true` entry through
/// [`Value::bool_or`].
#[derive(Debug, Default)]
pub struct YamlConfig {
    root: HashMap<String, Node>,
}

impl YamlConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and decode a YAML document from a file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(file)
    }

    /// Load and decode a YAML document from a reader.
    pub fn load_reader(&mut self, reader: impl Read) -> Result<()> {
        let mapping: Mapping = serde_yaml::from_reader(reader)?;
        self.root = normalize_mapping(mapping);
        Ok(())
    }

    /// Load and decode a YAML document from a string.
    pub fn load_str(&mut self, document: &str) -> Result<()> {
        let mapping: Mapping = serde_yaml::from_str(document)?;
        self.root = normalize_mapping(mapping);
        Ok(())
    }

    /// Look up a dotted key path in the decoded tree.
    pub fn get(&self, key: &str) -> Value<'_> {
        Value::new(tree::lookup(&self.root, key))
    }
}

impl Source for YamlConfig {
    fn get(&self, key: &str) -> Value<'_> {
        YamlConfig::get(self, key)
    }
}

impl fmt::Display for YamlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YamlConfig: {:?}", self.root)
    }
}

/// Convert a decoded mapping into the canonical tree shape.
///
/// The decoder keys mappings with arbitrary YAML values. Only string keys
/// are addressable by a dotted path, so entries under any other key are
/// dropped, as are null and sequence values. Running this once at decode
/// time means lookups never special-case decoder representations.
fn normalize_mapping(mapping: Mapping) -> HashMap<String, Node> {
    let mut nodes = HashMap::new();
    for (key, value) in mapping {
        let serde_yaml::Value::String(name) = key else {
            continue;
        };
        if let Some(node) = normalize_value(value) {
            nodes.insert(name, node);
        }
    }
    nodes
}

fn normalize_value(value: serde_yaml::Value) -> Option<Node> {
    match value {
        serde_yaml::Value::Mapping(mapping) => Some(Node::Interior(normalize_mapping(mapping))),
        serde_yaml::Value::String(s) => Some(Node::Leaf(Scalar::String(s))),
        serde_yaml::Value::Number(n) => {
            let scalar = match n.as_i64() {
                Some(i) => Scalar::Integer(i),
                None => Scalar::Float(n.as_f64()?),
            };
            Some(Node::Leaf(scalar))
        }
        serde_yaml::Value::Bool(b) => Some(Node::Leaf(Scalar::Bool(b))),
        serde_yaml::Value::Tagged(tagged) => normalize_value(tagged.value),
        serde_yaml::Value::Null | serde_yaml::Value::Sequence(_) => None,
    }
}
