//! Common lookup contract implemented by every configuration source.

use crate::value::Value;

/// A loaded configuration source addressable by dotted key paths.
///
/// Both the command-line and the YAML source populate the same tree shape
/// during their load phase and answer lookups identically afterwards, so
/// callers can read settings without caring where they came from.
pub trait Source {
    /// Look up `key`, a dot-separated path such as `serial.attr.name`.
    ///
    /// The returned [`Value`] is absent when no node exists at that path.
    fn get(&self, key: &str) -> Value<'_>;
}
