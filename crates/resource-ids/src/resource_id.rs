// crates/resource-ids/src/resource_id.rs
// ============================================================================
// Module: Typed Resource Identifiers
// Description: Trait shared by fixed-shape resource identifier types.
// Purpose: Keep parsing and description logic in one place so each
//          identifier type only declares its grammar and fields.
// Dependencies: crate::{error, grammar, parser, segment}
// ============================================================================

//! ## Overview
//! A typed identifier declares its segments, how to build itself from a
//! [`ParseResult`], how to render its canonical id and which labeled fields
//! describe it. Parsing (strict and case-insensitive) and the human-readable
//! description are provided.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::error::ResourceIdError;
use crate::grammar::Grammar;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::segment::CaseSensitivity;
use crate::segment::Segment;

// ============================================================================
// SECTION: Trait
// ============================================================================

/// A resource identifier with a fixed path grammar.
pub trait ResourceId: Sized {
    /// Human-readable name of the resource kind, e.g. `Version`.
    const LABEL: &'static str;

    /// Returns the ordered segments that make up this identifier.
    fn segments() -> Vec<Segment>;

    /// Builds the identifier from captured values.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::SegmentNotFound`] for the first expected
    /// capture that is absent.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError>;

    /// Returns the canonical resource id.
    fn id(&self) -> String;

    /// Returns labeled field values for [`ResourceId::describe`].
    fn description_components(&self) -> Vec<(&'static str, &str)>;

    /// Returns the validated grammar for this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::Grammar`] if the declared segments are invalid.
    fn grammar() -> Result<Grammar, ResourceIdError> {
        Ok(Grammar::new(Self::LABEL, Self::segments())?)
    }

    /// Returns the grammar used for parsing.
    ///
    /// Builds a fresh grammar by default. Implementors that parse often
    /// override this to hand out a grammar built once and kept in a static.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::Grammar`] if the declared segments are invalid.
    fn shared_grammar() -> Result<Cow<'static, Grammar>, ResourceIdError> {
        Self::grammar().map(Cow::Owned)
    }

    /// Parses `input`, matching literal segments exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError`] when the input does not match.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        parse_with_case(input, CaseSensitivity::Sensitive)
    }

    /// Parses `input`, matching literal segments without regard to case.
    ///
    /// Captured values keep the casing found in `input`. Intended for ids
    /// returned by remote APIs rather than for user input.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError`] when the input does not match.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        parse_with_case(input, CaseSensitivity::Insensitive)
    }

    /// Returns a multi-line, labeled description for diagnostics.
    ///
    /// Not intended to be parsed back.
    fn describe(&self) -> String {
        describe_components(Self::LABEL, &self.description_components())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses `input` into `T` under the given case rule.
///
/// # Errors
///
/// Returns [`ResourceIdError`] when the grammar is invalid, the input does
/// not match, or an expected capture is absent.
pub fn parse_with_case<T: ResourceId>(input: &str, case: CaseSensitivity) -> Result<T, ResourceIdError> {
    let grammar = T::shared_grammar()?;
    let result = Parser::new(&grammar).parse(input, case).map_err(|source| ResourceIdError::Parse {
        input: input.to_string(),
        source,
    })?;
    T::from_parse_result(&result)
}

/// Formats labeled components as `Label (Name: "value"\n...)`.
#[must_use]
pub fn describe_components(label: &str, components: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (index, (name, value)) in components.iter().enumerate() {
        if index > 0 {
            body.push('\n');
        }
        let _ = write!(body, "{name}: {value:?}");
    }
    format!("{label} ({body})")
}
