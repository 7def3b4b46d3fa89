// crates/resource-ids/src/segment.rs
// ============================================================================
// Module: Resource ID Segments
// Description: Descriptors for the literal and captured parts of a resource path.
// Purpose: Provide the building blocks that grammars are declared from.
// ============================================================================

//! ## Overview
//! A resource path is a `/`-delimited sequence of components. Each component
//! is described by a [`Segment`]: either a literal that must appear verbatim
//! (`subscriptions`, `Microsoft.KeyVault`) or a named capture whose value is
//! extracted during parsing (`subscriptionId`, `vaultName`).
//!
//! Literal segments are matched and discarded. Capture segments are stored
//! under their name in the parse result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Segment Kinds
// ============================================================================

/// The role a segment plays within a resource path.
///
/// # Invariants
/// - Literal kinds carry the exact text expected in the path.
/// - `Constant` carries the closed set of accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Fixed path text such as `subscriptions` or `vaults`.
    Static {
        /// Text that must appear in the path.
        value: String,
    },
    /// Fixed resource provider namespace such as `Microsoft.KeyVault`.
    ResourceProvider {
        /// Provider namespace that must appear in the path.
        value: String,
    },
    /// Captured subscription identifier.
    SubscriptionId,
    /// Captured resource group name.
    ResourceGroup,
    /// Captured user-chosen resource name.
    UserSpecified,
    /// Captured value restricted to a fixed set.
    Constant {
        /// Accepted values for this segment.
        allowed: Vec<String>,
    },
}

impl SegmentKind {
    /// Returns the literal text for literal kinds, `None` for captures.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Static {
                value,
            }
            | Self::ResourceProvider {
                value,
            } => Some(value),
            Self::SubscriptionId | Self::ResourceGroup | Self::UserSpecified | Self::Constant {
                ..
            } => None,
        }
    }

    /// Returns true when the segment's value is captured during parsing.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !matches!(self, Self::Static { .. } | Self::ResourceProvider { .. })
    }

    /// Short label used in grammar descriptions.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Static {
                ..
            } => "static",
            Self::ResourceProvider {
                ..
            } => "resource provider",
            Self::SubscriptionId => "subscription id",
            Self::ResourceGroup => "resource group",
            Self::UserSpecified => "user specified",
            Self::Constant {
                ..
            } => "constant",
        }
    }
}

// ============================================================================
// SECTION: Segment
// ============================================================================

/// One component of a resource path grammar.
///
/// # Invariants
/// - `name` is unique within its grammar (enforced by [`crate::Grammar::new`]).
/// - `example_value` is only used for documentation and error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Segment name; capture segments are stored under this key.
    pub name: String,
    /// Role of the segment.
    pub kind: SegmentKind,
    /// Example value rendered into example resource IDs.
    pub example_value: String,
}

impl Segment {
    /// Declares a static literal segment.
    #[must_use]
    pub fn static_segment(
        name: impl Into<String>,
        value: impl Into<String>,
        example_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: SegmentKind::Static {
                value: value.into(),
            },
            example_value: example_value.into(),
        }
    }

    /// Declares a resource provider literal segment.
    #[must_use]
    pub fn resource_provider(
        name: impl Into<String>,
        value: impl Into<String>,
        example_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: SegmentKind::ResourceProvider {
                value: value.into(),
            },
            example_value: example_value.into(),
        }
    }

    /// Declares a subscription id capture.
    #[must_use]
    pub fn subscription_id(name: impl Into<String>, example_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SegmentKind::SubscriptionId,
            example_value: example_value.into(),
        }
    }

    /// Declares a resource group capture.
    #[must_use]
    pub fn resource_group(name: impl Into<String>, example_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SegmentKind::ResourceGroup,
            example_value: example_value.into(),
        }
    }

    /// Declares a user-specified name capture.
    #[must_use]
    pub fn user_specified(name: impl Into<String>, example_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SegmentKind::UserSpecified,
            example_value: example_value.into(),
        }
    }

    /// Declares a capture restricted to `allowed` values.
    ///
    /// The first allowed value doubles as the example value.
    #[must_use]
    pub fn constant<I, S>(name: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let example_value = allowed.first().cloned().unwrap_or_default();
        Self {
            name: name.into(),
            kind: SegmentKind::Constant {
                allowed,
            },
            example_value,
        }
    }

    /// Returns true when the segment's value is captured during parsing.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.kind.is_capture()
    }

    /// Returns the text rendered for this segment in example IDs.
    #[must_use]
    pub fn example(&self) -> &str {
        self.kind.literal().unwrap_or(self.example_value.as_str())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SegmentKind::Static {
                value,
            }
            | SegmentKind::ResourceProvider {
                value,
            } => write!(f, "{} ({}: {value:?})", self.name, self.kind.label()),
            SegmentKind::Constant {
                allowed,
            } => write!(f, "{} ({}: one of {})", self.name, self.kind.label(), allowed.join(", ")),
            SegmentKind::SubscriptionId | SegmentKind::ResourceGroup | SegmentKind::UserSpecified => {
                write!(f, "{} ({}, e.g. {:?})", self.name, self.kind.label(), self.example_value)
            }
        }
    }
}

// ============================================================================
// SECTION: Literal Matching
// ============================================================================

/// How literal and constant segments are compared against path text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// Text must match exactly.
    #[default]
    Sensitive,
    /// Text matches ignoring case. Captured values keep their input casing.
    Insensitive,
}

impl CaseSensitivity {
    /// Compares `expected` against `found` under this rule.
    #[must_use]
    pub fn matches(self, expected: &str, found: &str) -> bool {
        match self {
            Self::Sensitive => expected == found,
            Self::Insensitive => {
                expected.eq_ignore_ascii_case(found)
                    || ((!expected.is_ascii() || !found.is_ascii())
                        && expected.to_lowercase() == found.to_lowercase())
            }
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensitive => f.write_str("sensitive"),
            Self::Insensitive => f.write_str("insensitive"),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
