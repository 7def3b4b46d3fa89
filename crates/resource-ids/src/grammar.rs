// crates/resource-ids/src/grammar.rs
// ============================================================================
// Module: Resource ID Grammar
// Description: Ordered, validated segment lists describing one path shape.
// Purpose: Shared input for the parser and the canonical formatter.
// Dependencies: crate::{error, segment}
// ============================================================================

//! ## Overview
//! A [`Grammar`] is a labeled, ordered list of [`Segment`]s. Construction
//! validates the declaration once so the parser and formatter can rely on
//! unique names and well-formed literals.
//!
//! The formatter side lives here too: [`Grammar::render`] rebuilds the
//! canonical path from captured values, [`Grammar::template`] shows the shape
//! with `{name}` placeholders and [`Grammar::example_id`] renders the
//! example values used in error messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Write as _;

use crate::error::GrammarError;
use crate::segment::Segment;
use crate::segment::SegmentKind;

// ============================================================================
// SECTION: Grammar
// ============================================================================

/// A validated resource path grammar.
///
/// # Invariants
/// - At least one segment.
/// - Segment names are non-empty and unique.
/// - Literal values are non-empty and contain no `/`.
/// - Constant segments allow at least one non-empty value without `/`.
/// - Capture example values are non-empty and contain no `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grammar {
    /// Human-readable name of the resource kind (e.g. `Version`).
    label: String,
    /// Ordered segment declarations.
    segments: Vec<Segment>,
}

impl Grammar {
    /// Validates and builds a grammar.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError`] when the declaration breaks an invariant.
    pub fn new(label: impl Into<String>, segments: Vec<Segment>) -> Result<Self, GrammarError> {
        let label = label.into();
        if segments.is_empty() {
            return Err(GrammarError::Empty {
                label,
            });
        }
        let mut seen = BTreeSet::new();
        for (index, segment) in segments.iter().enumerate() {
            if segment.name.is_empty() {
                return Err(GrammarError::UnnamedSegment {
                    label,
                    index,
                });
            }
            if !seen.insert(segment.name.as_str()) {
                return Err(GrammarError::DuplicateSegment {
                    label,
                    name: segment.name.clone(),
                });
            }
            match &segment.kind {
                SegmentKind::Static {
                    value,
                }
                | SegmentKind::ResourceProvider {
                    value,
                } => {
                    if !is_valid_component(value) {
                        return Err(GrammarError::InvalidLiteral {
                            label,
                            name: segment.name.clone(),
                            value: value.clone(),
                        });
                    }
                }
                SegmentKind::Constant {
                    allowed,
                } => {
                    if allowed.is_empty() || !allowed.iter().all(|value| is_valid_component(value)) {
                        return Err(GrammarError::InvalidConstant {
                            label,
                            name: segment.name.clone(),
                        });
                    }
                }
                SegmentKind::SubscriptionId | SegmentKind::ResourceGroup | SegmentKind::UserSpecified => {}
            }
            if segment.is_capture() && !is_valid_component(&segment.example_value) {
                return Err(GrammarError::InvalidExample {
                    label,
                    name: segment.name.clone(),
                    value: segment.example_value.clone(),
                });
            }
        }
        Ok(Self {
            label,
            segments,
        })
    }

    /// Returns the grammar label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the ordered segment declarations.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of path components the grammar matches.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; grammars hold at least one segment.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the names of capture segments in grammar order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter(|segment| segment.is_capture()).map(|segment| segment.name.as_str())
    }

    /// Returns the segment declared under `name`.
    #[must_use]
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.name == name)
    }

    /// Renders the canonical path, looking capture values up by segment name.
    ///
    /// Returns `None` if any capture has no value.
    pub fn render<'v, F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment.kind.literal() {
                Some(literal) => out.push_str(literal),
                None => out.push_str(lookup(&segment.name)?),
            }
        }
        Some(out)
    }

    /// Renders the path template with `{name}` placeholders for captures.
    #[must_use]
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.kind.literal() {
                Some(literal) => {
                    let _ = write!(out, "/{literal}");
                }
                None => {
                    let _ = write!(out, "/{{{}}}", segment.name);
                }
            }
        }
        out
    }

    /// Renders an example id from each segment's example value.
    #[must_use]
    pub fn example_id(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(segment.example());
        }
        out
    }

    /// Describes the grammar one segment per line, for documentation.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = format!("{} ({} segments)", self.label, self.segments.len());
        for (index, segment) in self.segments.iter().enumerate() {
            let _ = write!(out, "\n  {index}: {segment}");
        }
        out
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.template())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when `value` can stand as a single path component.
fn is_valid_component(value: &str) -> bool {
    !value.is_empty() && !value.contains('/')
}

// ============================================================================
// SECTION: Tests
// ============================================================================
