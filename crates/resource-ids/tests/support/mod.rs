// crates/resource-ids/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and grammars for engine integration tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions, plus the key
//! version grammar used as the reference shape across engine tests.

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
    dead_code,
    reason = "Test-only helpers; not every test binary uses every helper."
)]

use std::error::Error;
use std::fmt;

use resource_ids::Grammar;
use resource_ids::Segment;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across engine integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { fail(message) }
}

/// Returns a formatted test failure.
///
/// # Errors
/// Always returns a `TestError`.
pub fn fail<T>(message: impl Into<String>) -> TestResult<T> {
    Err(Box::new(TestError {
        message: message.into(),
    }))
}

// ========================================================================
// Grammars
// ========================================================================

/// Canonical key version path used in engine tests.
pub const KEY_VERSION_ID: &str =
    "/subscriptions/abc/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/v1/keys/k1/versions/ver1";

/// Builds the Key Vault key version grammar.
///
/// # Errors
/// Returns the grammar error if the declaration is invalid.
pub fn key_version_grammar() -> TestResult<Grammar> {
    Ok(Grammar::new(
        "Version",
        vec![
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault", "Microsoft.KeyVault"),
            Segment::static_segment("staticVaults", "vaults", "vaults"),
            Segment::user_specified("vaultName", "vaultValue"),
            Segment::static_segment("staticKeys", "keys", "keys"),
            Segment::user_specified("keyName", "keyValue"),
            Segment::static_segment("staticVersions", "versions", "versions"),
            Segment::user_specified("versionName", "versionValue"),
        ],
    )?)
}
