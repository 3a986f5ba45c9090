//! Integration tests for the command-line configuration source.
//!
//! Exercises the full pipeline: tokenizing an argument list, merging pairs
//! into the tree, and reading leaves back through the typed accessors.

use conftree::{ArgsConfig, ConfigError, Source};

fn parse(args: &[&str], prefix: &str) -> ArgsConfig {
    let mut config = ArgsConfig::new(args.iter().map(|s| s.to_string()).collect(), prefix);
    config.parse().expect("parse failed");
    config
}

#[test]
fn test_dash_forms_are_equivalent() {
    for args in [
        ["-cn=test-cn"].as_slice(),
        ["--cn=test-cn"].as_slice(),
        ["-cn", "test-cn"].as_slice(),
        ["--cn", "test-cn"].as_slice(),
    ] {
        let config = parse(args, "");
        assert_eq!(config.get("cn").str_or(""), "test-cn", "args {args:?}");
    }
}

#[test]
fn test_prefix_filtering() {
    // Matching keys are stored with the prefix stripped.
    let config = parse(&["-ca.key.alg=rsa", "-other.key.alg=dsa", "-cn=x"], "ca");
    assert_eq!(config.get("key.alg").str_or(""), "rsa");
    // The prefix itself is not part of the stored path.
    assert!(!config.get("ca.key.alg").exists());
    // Non-matching keys were skipped entirely.
    assert!(!config.get("cn").exists());
    assert!(!config.get("other.key.alg").exists());
}

#[test]
fn test_end_to_end_scenario() {
    let config = parse(
        &[
            "-cn=test-cn",
            "-name=\"test-cn\"",
            "-label='test'",
            "-serial.sid=\"999\"",
            "-key.alg=rsa",
            "-key.size=2048",
            "-serial.big=1024.123",
            "-serial.small=-1024.123",
            "-serial.attr.name=serial1",
            "-serial.attr.name=serial2",
        ],
        "",
    );

    assert_eq!(config.get("cn").str_or(""), "test-cn");
    assert_eq!(config.get("key.alg").str_or(""), "rsa");
    assert_eq!(config.get("key.size").int_or(0), 2048);
    assert_eq!(config.get("serial.big").float_or(0.0), 1024.123);
    assert_eq!(config.get("serial.small").float_or(0.0), -1024.123);

    // Quotes of either kind are stripped, and a quoted number is a string.
    assert_eq!(config.get("name").str_or(""), "test-cn");
    assert_eq!(config.get("label").str_or(""), "test");
    assert_eq!(config.get("serial.sid").str_or(""), "999");
    assert_eq!(config.get("serial.sid").int_or(0), 0);

    // The rightmost write for a path wins.
    assert_eq!(config.get("serial.attr.name").str_or(""), "serial2");

    // Absent paths read back as the caller's default.
    assert_eq!(config.get("key.alg_not_exists").str_or("fallback"), "fallback");
    assert!(!config.get("key.alg_not_exists").exists());
}

#[test]
fn test_leaf_to_node_coercion_end_to_end() {
    let config = parse(&["-k=1", "-k.sub=2"], "");
    assert_eq!(config.get("k.sub").int_or(0), 2);
    // `k` is now an interior node; a scalar read on it yields the default.
    assert!(config.get("k").exists());
    assert_eq!(config.get("k").int_or(0), 0);
}

#[test]
fn test_empty_value_is_found() {
    let config = parse(&["-key="], "");
    assert!(config.get("key").exists());
    assert_eq!(config.get("key").str_or("fallback"), "");
}

#[test]
fn test_missing_value_is_fatal() {
    let mut config = ArgsConfig::new(vec!["-key".to_string()], "");
    match config.parse() {
        Err(ConfigError::MissingValue { key }) => assert_eq!(key, "key"),
        other => panic!("expected MissingValue, got {other:?}"),
    }
}

#[test]
fn test_malformed_argument_is_fatal() {
    let mut config = ArgsConfig::new(vec!["key=val".to_string()], "");
    match config.parse() {
        Err(ConfigError::MalformedArgument { token }) => assert_eq!(token, "key=val"),
        other => panic!("expected MalformedArgument, got {other:?}"),
    }
}

#[test]
fn test_source_trait_object() {
    let config = parse(&["-key.alg=rsa"], "");
    let source: &dyn Source = &config;
    assert_eq!(source.get("key.alg").str_or(""), "rsa");
}
