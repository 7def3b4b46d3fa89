// crates/resource-ids/src/catalog.rs
// ============================================================================
// Module: Grammar Catalog
// Description: Named grammars declared as data and parsed at runtime.
// Purpose: Support resource id shapes without a dedicated Rust type.
// Dependencies: crate::{config, error, grammar, parser, resource_id, validation}
// ============================================================================

//! ## Overview
//! A [`GrammarCatalog`] maps names to validated grammars built from
//! [`ResourceIdsConfig`]. Parsing through the catalog yields a
//! [`DynamicResourceId`], which carries its grammar and captured values and
//! renders, describes and validates like a typed identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;
use crate::config::ResourceIdsConfig;
use crate::error::ResourceIdError;
use crate::grammar::Grammar;
use crate::parser::Parser;
use crate::parser::ParserOptions;
use crate::resource_id::describe_components;
use crate::segment::CaseSensitivity;
use crate::validation::ValidationOutcome;
use crate::validation::validate_with;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by catalog lookups and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No grammar is registered under the requested name.
    #[error("unknown grammar {0:?}")]
    UnknownGrammar(String),
    /// The catalog configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The input did not parse under the named grammar.
    #[error(transparent)]
    ResourceId(#[from] ResourceIdError),
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Named grammars sharing one set of parser options.
#[derive(Debug, Clone, Default)]
pub struct GrammarCatalog {
    /// Parser limits applied to every grammar.
    options: ParserOptions,
    /// Grammars keyed by catalog name.
    grammars: BTreeMap<String, Arc<Grammar>>,
}

impl GrammarCatalog {
    /// Creates an empty catalog with the given options.
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self {
            options,
            grammars: BTreeMap::new(),
        }
    }

    /// Builds a catalog from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when the configuration is invalid.
    pub fn from_config(config: &ResourceIdsConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let mut catalog = Self::new(config.parser);
        for grammar in &config.grammars {
            catalog.insert(grammar.name.clone(), grammar.build()?);
        }
        Ok(catalog)
    }

    /// Registers `grammar` under `name`, returning any grammar it replaced.
    pub fn insert(&mut self, name: impl Into<String>, grammar: Grammar) -> Option<Arc<Grammar>> {
        self.grammars.insert(name.into(), Arc::new(grammar))
    }

    /// Returns the grammar registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Grammar> {
        self.grammars.get(name).map(|grammar| &**grammar)
    }

    /// Iterates over registered grammar names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.grammars.keys().map(String::as_str)
    }

    /// Returns the number of registered grammars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    /// Returns true when no grammars are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Parses `input` with the grammar registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownGrammar`] for unregistered names and
    /// [`CatalogError::ResourceId`] when the input does not match.
    pub fn parse(&self, name: &str, input: &str, case: CaseSensitivity) -> Result<DynamicResourceId, CatalogError> {
        let grammar = self.grammars.get(name).ok_or_else(|| CatalogError::UnknownGrammar(name.to_string()))?;
        let result = Parser::with_options(grammar, self.options).parse(input, case).map_err(|source| {
            ResourceIdError::Parse {
                input: input.to_string(),
                source,
            }
        })?;
        Ok(DynamicResourceId {
            grammar: Arc::clone(grammar),
            values: result.parsed,
        })
    }

    /// Validates that `value` is a string parsing strictly under grammar `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownGrammar`] for unregistered names; parse
    /// failures are reported inside the outcome.
    pub fn validate(&self, name: &str, value: &Value, key: &str) -> Result<ValidationOutcome, CatalogError> {
        let grammar = self.grammars.get(name).ok_or_else(|| CatalogError::UnknownGrammar(name.to_string()))?;
        let parser = Parser::with_options(grammar, self.options);
        Ok(validate_with(value, key, |input| {
            parser.parse(input, CaseSensitivity::Sensitive).map(|_| ()).map_err(|source| ResourceIdError::Parse {
                input: input.to_string(),
                source,
            })
        }))
    }
}

// ============================================================================
// SECTION: Dynamic Identifier
// ============================================================================

/// A resource identifier whose shape comes from a runtime grammar.
///
/// # Invariants
/// - `values` holds one non-empty value per capture segment of `grammar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicResourceId {
    /// Grammar the identifier was parsed with.
    grammar: Arc<Grammar>,
    /// Captured values keyed by segment name.
    values: BTreeMap<String, String>,
}

impl DynamicResourceId {
    /// Returns the grammar this identifier follows.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the value captured under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the captured values keyed by segment name.
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns the canonical resource id.
    #[must_use]
    pub fn id(&self) -> String {
        self.grammar.render(|name| self.get(name)).unwrap_or_default()
    }

    /// Returns a multi-line, labeled description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        let components: Vec<(&str, &str)> = self
            .grammar
            .capture_names()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect();
        describe_components(self.grammar.label(), &components)
    }
}

impl fmt::Display for DynamicResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
