// crates/common-ids/src/key_vault_key_version.rs
// ============================================================================
// Module: Key Vault Key Version ID
// Description: Typed identifier for a versioned key inside a Key Vault.
// Purpose: Parse, render and describe key version resource ids.
// Dependencies: resource-ids, serde, serde_json
// ============================================================================

//! ## Overview
//! [`KeyVaultKeyVersionId`] identifies one version of a key:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.KeyVault/vaults/{vaultName}/keys/{keyName}/versions/{versionName}
//! ```
//!
//! ### Example
//!
//! ```
//! use common_ids::KeyVaultKeyVersionId;
//! use resource_ids::ResourceId;
//!
//! let id = KeyVaultKeyVersionId::parse(
//!     "/subscriptions/abc/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/v1/keys/k1/versions/ver1",
//! )
//! .unwrap();
//! assert_eq!(id.key_name, "k1");
//! assert_eq!(id, KeyVaultKeyVersionId::new("abc", "rg1", "v1", "k1", "ver1"));
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use resource_ids::Grammar;
use resource_ids::ParseResult;
use resource_ids::ResourceId;
use resource_ids::ResourceIdError;
use resource_ids::Segment;
use resource_ids::ValidationOutcome;
use resource_ids::validate_resource_id;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

// ============================================================================
// SECTION: Identifier
// ============================================================================

/// Resource id for a Key Vault key version.
///
/// # Invariants
/// - Fields are non-empty when produced by parsing; [`KeyVaultKeyVersionId::new`]
///   performs no validation.
/// - Field values keep the casing found in the parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyVaultKeyVersionId {
    /// Subscription the vault lives in.
    pub subscription_id: String,
    /// Resource group holding the vault.
    pub resource_group_name: String,
    /// Vault name.
    pub vault_name: String,
    /// Key name within the vault.
    pub key_name: String,
    /// Key version.
    pub version_name: String,
}

impl KeyVaultKeyVersionId {
    /// Creates an identifier from its parts without validation.
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        vault_name: impl Into<String>,
        key_name: impl Into<String>,
        version_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            vault_name: vault_name.into(),
            key_name: key_name.into(),
            version_name: version_name.into(),
        }
    }

    /// Checks that `value` is a string parsing as a key version id.
    ///
    /// `key` names the field in the returned error.
    #[must_use]
    pub fn validate(value: &Value, key: &str) -> ValidationOutcome {
        validate_resource_id::<Self>(value, key)
    }
}

impl ResourceId for KeyVaultKeyVersionId {
    const LABEL: &'static str = "Version";

    fn segments() -> Vec<Segment> {
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
        ]
    }

    fn shared_grammar() -> Result<Cow<'static, Grammar>, ResourceIdError> {
        static GRAMMAR: OnceLock<Result<Grammar, ResourceIdError>> = OnceLock::new();
        match GRAMMAR.get_or_init(Self::grammar) {
            Ok(grammar) => Ok(Cow::Borrowed(grammar)),
            Err(err) => Err(err.clone()),
        }
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            vault_name: result.require("vaultName")?,
            key_name: result.require("keyName")?,
            version_name: result.require("versionName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.KeyVault/vaults/{}/keys/{}/versions/{}",
            self.subscription_id, self.resource_group_name, self.vault_name, self.key_name, self.version_name
        )
    }

    fn description_components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Subscription", self.subscription_id.as_str()),
            ("Resource Group Name", self.resource_group_name.as_str()),
            ("Vault Name", self.vault_name.as_str()),
            ("Key Name", self.key_name.as_str()),
            ("Version Name", self.version_name.as_str()),
        ]
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl fmt::Display for KeyVaultKeyVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for KeyVaultKeyVersionId {
    type Err = ResourceIdError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl Serialize for KeyVaultKeyVersionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for KeyVaultKeyVersionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
