// crates/resource-ids/src/lib.rs
// ============================================================================
// Module: Resource IDs Library
// Description: Public API surface for the resource id segment engine.
// Purpose: Expose grammars, the parser/formatter, typed id support and config.
// Dependencies: crate::{catalog, config, error, grammar, parser, resource_id,
//              segment, validation}
// ============================================================================

//! ## Overview
//! `resource-ids` parses and formats slash-delimited cloud resource paths
//! against declared segment grammars such as
//! `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/...`.
//!
//! - [`Segment`] and [`Grammar`] declare a path shape.
//! - [`Parser`] matches input against a grammar, optionally ignoring case in
//!   literals, and returns named captures.
//! - [`ResourceId`] turns a grammar into a typed identifier with strict and
//!   case-insensitive parsing and a labeled description.
//! - [`GrammarCatalog`] loads grammars declared in TOML and parses them into
//!   [`DynamicResourceId`]s.
//! - [`validate_resource_id`] adapts parsing to warning/error lists for
//!   schema-driven validation.
//!
//! Parsing is pure and synchronous; all types are `Send + Sync`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod resource_id;
pub mod segment;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::DynamicResourceId;
pub use catalog::GrammarCatalog;
pub use config::ConfigError;
pub use config::GrammarConfig;
pub use config::ResourceIdsConfig;
pub use config::SegmentConfig;
pub use config::SegmentKindConfig;
pub use error::GrammarError;
pub use error::ParseError;
pub use error::ResourceIdError;
pub use grammar::Grammar;
pub use parser::ParseResult;
pub use parser::Parser;
pub use parser::ParserOptions;
pub use resource_id::ResourceId;
pub use resource_id::parse_with_case;
pub use segment::CaseSensitivity;
pub use segment::Segment;
pub use segment::SegmentKind;
pub use validation::ValidationError;
pub use validation::ValidationOutcome;
pub use validation::validate_resource_id;
