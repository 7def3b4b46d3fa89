// crates/resource-ids/src/config.rs
// ============================================================================
// Module: Resource IDs Configuration
// Description: Configuration loading and validation for parser limits and
//              declarative grammars.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: crate::{grammar, parser, segment}, serde, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. It holds
//! parser options and a list of grammars declared as data, which
//! [`crate::GrammarCatalog`] turns into parsers at runtime.
//!
//! ```toml
//! [parser]
//! max_input_bytes = 65536
//!
//! [[grammars]]
//! name = "key_vault_key"
//! label = "Key"
//! segments = [
//!   { name = "staticSubscriptions", kind = "static", value = "subscriptions" },
//!   { name = "subscriptionId", kind = "subscription_id" },
//! ]
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::grammar::Grammar;
use crate::parser::ParserOptions;
use crate::segment::Segment;
use crate::segment::SegmentKind;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "resource-ids.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "RESOURCE_IDS_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single config path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length for the config file.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Largest accepted `parser.max_input_bytes`.
pub const MAX_INPUT_BYTES_LIMIT: usize = 1024 * 1024;
/// Maximum number of grammars in one configuration.
pub const MAX_GRAMMARS: usize = 256;
/// Maximum number of segments in one grammar.
pub const MAX_GRAMMAR_SEGMENTS: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level resource IDs configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceIdsConfig {
    /// Parser limits applied to every grammar.
    #[serde(default)]
    pub parser: ParserOptions,
    /// Declarative grammars.
    #[serde(default)]
    pub grammars: Vec<GrammarConfig>,
}

impl ResourceIdsConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then `RESOURCE_IDS_CONFIG`, then
    /// `resource-ids.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config = Self::from_toml_str(content)?;
        tracing::debug!(
            path = %resolved.display(),
            grammars = config.grammars.len(),
            "loaded resource ids config"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.parser.max_input_bytes;
        if max == 0 || max > MAX_INPUT_BYTES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "parser.max_input_bytes must be between 1 and {MAX_INPUT_BYTES_LIMIT}"
            )));
        }
        if self.grammars.len() > MAX_GRAMMARS {
            return Err(ConfigError::Invalid(format!("too many grammars (max {MAX_GRAMMARS})")));
        }
        let mut names = BTreeSet::new();
        for grammar in &self.grammars {
            if !names.insert(grammar.name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate grammar name {:?}", grammar.name)));
            }
            grammar.build()?;
        }
        Ok(())
    }
}

/// One declarative grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    /// Catalog key for the grammar.
    pub name: String,
    /// Human-readable resource kind; defaults to `name`.
    #[serde(default)]
    pub label: Option<String>,
    /// Ordered segments.
    pub segments: Vec<SegmentConfig>,
}

impl GrammarConfig {
    /// Converts the declaration into a validated [`Grammar`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a segment or the grammar is invalid.
    pub fn build(&self) -> Result<Grammar, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("grammar name must be non-empty".to_string()));
        }
        if self.segments.len() > MAX_GRAMMAR_SEGMENTS {
            return Err(ConfigError::Invalid(format!(
                "grammar {:?} has too many segments (max {MAX_GRAMMAR_SEGMENTS})",
                self.name
            )));
        }
        let segments =
            self.segments.iter().map(|segment| segment.build(&self.name)).collect::<Result<Vec<_>, _>>()?;
        let label = self.label.clone().unwrap_or_else(|| self.name.clone());
        Grammar::new(label, segments).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

/// Segment kinds accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKindConfig {
    /// Literal path text; requires `value`.
    Static,
    /// Literal provider namespace; requires `value`.
    ResourceProvider,
    /// Subscription id capture.
    SubscriptionId,
    /// Resource group capture.
    ResourceGroup,
    /// User-specified name capture.
    UserSpecified,
    /// Constant capture; requires `allowed`.
    Constant,
}

/// One declarative segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentConfig {
    /// Segment name.
    pub name: String,
    /// Segment kind.
    pub kind: SegmentKindConfig,
    /// Literal text for literal kinds.
    #[serde(default)]
    pub value: Option<String>,
    /// Example value for capture kinds.
    #[serde(default)]
    pub example: Option<String>,
    /// Allowed values for constant kinds.
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl SegmentConfig {
    /// Converts the declaration into a [`Segment`].
    fn build(&self, grammar: &str) -> Result<Segment, ConfigError> {
        let literal = || {
            self.value.clone().ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "grammar {grammar:?} segment {:?} requires a value",
                    self.name
                ))
            })
        };
        let example = self.example.clone().unwrap_or_else(|| format!("{}Value", self.name));
        let kind = match self.kind {
            SegmentKindConfig::Static => SegmentKind::Static {
                value: literal()?,
            },
            SegmentKindConfig::ResourceProvider => SegmentKind::ResourceProvider {
                value: literal()?,
            },
            SegmentKindConfig::SubscriptionId => SegmentKind::SubscriptionId,
            SegmentKindConfig::ResourceGroup => SegmentKind::ResourceGroup,
            SegmentKindConfig::UserSpecified => SegmentKind::UserSpecified,
            SegmentKindConfig::Constant => SegmentKind::Constant {
                allowed: self.allowed.clone(),
            },
        };
        let example_value = match &kind {
            SegmentKind::Static {
                value,
            }
            | SegmentKind::ResourceProvider {
                value,
            } => value.clone(),
            SegmentKind::Constant {
                allowed,
            } => allowed.first().cloned().unwrap_or(example),
            SegmentKind::SubscriptionId | SegmentKind::ResourceGroup | SegmentKind::UserSpecified => example,
        };
        Ok(Segment {
            name: self.name.clone(),
            kind,
            example_value,
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from an explicit path or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates config path length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    if path.components().any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH) {
        return Err(ConfigError::Invalid("config path component too long".to_string()));
    }
    Ok(())
}
