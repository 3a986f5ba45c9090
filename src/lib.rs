//! Hierarchical key/value configuration from command-line arguments and
//! YAML files.
//!
//! Both sources materialize into one tree addressable by dotted key paths,
//! read back through default-safe typed accessors:
//!
//! ```
//! use conftree::ArgsConfig;
//!
//! let args = vec!["-key.alg=rsa".to_string(), "-key.size=2048".to_string()];
//! let mut config = ArgsConfig::new(args, "");
//! config.parse().unwrap();
//!
//! assert_eq!(config.get("key.alg").str_or(""), "rsa");
//! assert_eq!(config.get("key.size").int_or(0), 2048);
//! assert_eq!(config.get("key.absent").str_or("fallback"), "fallback");
//! ```

pub mod args;
pub mod error;
pub mod source;
pub mod tree;
pub mod value;
pub mod yaml;

pub use args::ArgsConfig;
pub use error::{ConfigError, Result};
pub use source::Source;
pub use tree::{Node, Scalar};
pub use value::Value;
pub use yaml::YamlConfig;
