// crates/resource-ids/tests/config.rs
// =============================================================================
// Module: Resource IDs Config Tests
// Description: Loading, limits and grammar validation for TOML configuration.
// Purpose: Ensure config validation is fail-closed.
// =============================================================================
//! ## Overview
//! Integration tests for [`resource_ids::ResourceIdsConfig`].

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::io::Write;
use std::path::Path;

use resource_ids::ConfigError;
use resource_ids::ResourceIdsConfig;
use resource_ids::SegmentKind;
use resource_ids::config::MAX_CONFIG_FILE_SIZE;

type TestResult = Result<(), String>;

/// Key grammar declared as data.
const KEY_CONFIG: &str = r#"
[parser]
max_input_bytes = 2048

[[grammars]]
name = "key_vault_key"
label = "Key"
segments = [
  { name = "staticSubscriptions", kind = "static", value = "subscriptions" },
  { name = "subscriptionId", kind = "subscription_id", example = "12345678-1234-9876-4563-123456789012" },
  { name = "staticResourceGroups", kind = "static", value = "resourceGroups" },
  { name = "resourceGroupName", kind = "resource_group" },
  { name = "staticProviders", kind = "static", value = "providers" },
  { name = "staticMicrosoftKeyVault", kind = "resource_provider", value = "Microsoft.KeyVault" },
  { name = "staticVaults", kind = "static", value = "vaults" },
  { name = "vaultName", kind = "user_specified" },
  { name = "staticKeys", kind = "static", value = "keys" },
  { name = "keyName", kind = "user_specified" },
]
"#;

/// Assert that a result is an error containing a specific substring.
fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parses_declarative_grammar() -> TestResult {
    let config = ResourceIdsConfig::from_toml_str(KEY_CONFIG).map_err(|err| err.to_string())?;
    if config.parser.max_input_bytes != 2048 {
        return Err("parser options not applied".to_string());
    }
    let grammar = config.grammars[0].build().map_err(|err| err.to_string())?;
    if grammar.label() != "Key" || grammar.len() != 10 {
        return Err(format!("unexpected grammar {grammar}"));
    }
    if grammar.template()
        != "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.KeyVault/vaults/{vaultName}/keys/{keyName}"
    {
        return Err(format!("unexpected template {}", grammar.template()));
    }
    let vault = grammar.segment("vaultName").ok_or("missing vaultName")?;
    if vault.kind != SegmentKind::UserSpecified || vault.example_value != "vaultNameValue" {
        return Err(format!("unexpected segment {vault}"));
    }
    Ok(())
}

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let config = ResourceIdsConfig::from_toml_str("").map_err(|err| err.to_string())?;
    if config != ResourceIdsConfig::default() {
        return Err("expected default config".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn rejects_unknown_fields() -> TestResult {
    assert_invalid(ResourceIdsConfig::from_toml_str("[parser]\nmax_bytes = 10\n"), "config parse error")
}

#[test]
fn rejects_zero_input_limit() -> TestResult {
    assert_invalid(ResourceIdsConfig::from_toml_str("[parser]\nmax_input_bytes = 0\n"), "max_input_bytes")
}

#[test]
fn rejects_duplicate_grammar_names() -> TestResult {
    let content = r#"
[[grammars]]
name = "dup"
segments = [{ name = "a", kind = "user_specified" }]

[[grammars]]
name = "dup"
segments = [{ name = "b", kind = "user_specified" }]
"#;
    assert_invalid(ResourceIdsConfig::from_toml_str(content), "duplicate grammar name")
}

#[test]
fn rejects_literal_without_value() -> TestResult {
    let content = r#"
[[grammars]]
name = "bad"
segments = [{ name = "staticVaults", kind = "static" }]
"#;
    assert_invalid(ResourceIdsConfig::from_toml_str(content), "requires a value")
}

#[test]
fn rejects_duplicate_segment_names() -> TestResult {
    let content = r#"
[[grammars]]
name = "bad"
segments = [
  { name = "vaultName", kind = "user_specified" },
  { name = "vaultName", kind = "user_specified" },
]
"#;
    assert_invalid(ResourceIdsConfig::from_toml_str(content), "more than once")
}

#[test]
fn rejects_constant_without_values() -> TestResult {
    let content = r#"
[[grammars]]
name = "bad"
segments = [{ name = "tier", kind = "constant" }]
"#;
    assert_invalid(ResourceIdsConfig::from_toml_str(content), "at least one")
}

#[test]
fn rejects_unusable_capture_example() -> TestResult {
    for example in ["", "a/b"] {
        let content = format!(
            "[[grammars]]\nname = \"bad\"\nsegments = [{{ name = \"vaultName\", kind = \"user_specified\", example = {example:?} }}]\n"
        );
        assert_invalid(ResourceIdsConfig::from_toml_str(&content), "invalid example value")?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Loading
// ============================================================================

#[test]
fn loads_from_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(KEY_CONFIG.as_bytes()).map_err(|err| err.to_string())?;
    let config = ResourceIdsConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.grammars.len() != 1 {
        return Err("expected one grammar".to_string());
    }
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new().map_err(|err| err.to_string())?;
    let padding = format!("# {}\n", "x".repeat(MAX_CONFIG_FILE_SIZE));
    file.write_all(padding.as_bytes()).map_err(|err| err.to_string())?;
    assert_invalid(ResourceIdsConfig::load(Some(file.path())), "size limit")
}

#[test]
fn load_rejects_missing_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let missing = dir.path().join("absent.toml");
    assert_invalid(ResourceIdsConfig::load(Some(&missing)), "config io error")
}

#[test]
fn load_rejects_non_utf8() -> TestResult {
    let mut file = tempfile::NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xff, 0xfe, 0x00]).map_err(|err| err.to_string())?;
    assert_invalid(ResourceIdsConfig::load(Some(file.path())), "utf-8")
}

#[test]
fn load_rejects_overlong_path() -> TestResult {
    let long_path = "segment/".repeat(600);
    assert_invalid(ResourceIdsConfig::load(Some(Path::new(&long_path))), "exceeds max length")
}

#[test]
fn load_rejects_overlong_path_component() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("c".repeat(300));
    assert_invalid(ResourceIdsConfig::load(Some(&path)), "component too long")
}
