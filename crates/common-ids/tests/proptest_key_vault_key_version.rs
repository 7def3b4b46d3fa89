// crates/common-ids/tests/proptest_key_vault_key_version.rs
// ============================================================================
// Module: Key Version Property-Based Tests
// Description: Property tests for key version id rendering and parsing.
// Purpose: Check that constructed ids round-trip through their canonical form.
// ============================================================================

//! Property-based tests for key version id invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use common_ids::KeyVaultKeyVersionId;
use proptest::prelude::*;
use resource_ids::ResourceId;

/// Non-empty path component without separators.
fn component() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._()-]{1,32}"
}

proptest! {
    #[test]
    fn constructed_ids_round_trip(
        sub in component(),
        rg in component(),
        vault in component(),
        key in component(),
        version in component(),
    ) {
        let id = KeyVaultKeyVersionId::new(sub.clone(), rg.clone(), vault.clone(), key.clone(), version.clone());
        let rendered = id.id();
        prop_assert_eq!(
            &rendered,
            &format!(
                "/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.KeyVault/vaults/{vault}/keys/{key}/versions/{version}"
            )
        );
        prop_assert_eq!(KeyVaultKeyVersionId::parse(&rendered).unwrap(), id.clone());
        prop_assert_eq!(KeyVaultKeyVersionId::parse_insensitively(&rendered).unwrap(), id);
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,300}") {
        let _ = KeyVaultKeyVersionId::parse(&input);
        let _ = KeyVaultKeyVersionId::parse_insensitively(&input);
    }
}
