// crates/common-ids/src/lib.rs
// ============================================================================
// Module: Common IDs Library
// Description: Typed resource identifiers shared across services.
// Purpose: Expose fixed-shape identifiers built on the resource-ids engine.
// Dependencies: crate::key_vault_key_version, resource-ids
// ============================================================================

//! ## Overview
//! Each identifier here declares its segment grammar and fields and
//! implements [`resource_ids::ResourceId`]; parsing and description come
//! from the engine.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod key_vault_key_version;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use key_vault_key_version::KeyVaultKeyVersionId;
