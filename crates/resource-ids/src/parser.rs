// crates/resource-ids/src/parser.rs
// ============================================================================
// Module: Resource ID Parser
// Description: Matches slash-delimited paths against a grammar.
// Purpose: Extract named captures and reject malformed input with diagnostics.
// Dependencies: crate::{error, grammar, segment}, tracing
// ============================================================================

//! ## Overview
//! The parser tokenizes input by `/` and walks the grammar and the tokens in
//! lock-step. Literal segments must match (exactly, or ignoring case when
//! asked); capture segments store the token as written under the segment's
//! name. Input with missing or extra components is rejected.
//!
//! When a literal does not match but the token matches a later literal in
//! the grammar, the captures in between are reported as missing. Omitting
//! `keys/{keyName}` from a key version id therefore names `keyName` instead
//! of only reporting that `versions` is not `keys`.
//!
//! ### Example
//!
//! ```
//! use resource_ids::CaseSensitivity;
//! use resource_ids::Grammar;
//! use resource_ids::Parser;
//! use resource_ids::Segment;
//!
//! let grammar = Grammar::new(
//!     "Vault",
//!     vec![
//!         Segment::static_segment("staticVaults", "vaults", "vaults"),
//!         Segment::user_specified("vaultName", "vaultValue"),
//!     ],
//! )
//! .unwrap();
//! let result = Parser::new(&grammar).parse("/Vaults/Main", CaseSensitivity::Insensitive).unwrap();
//! assert_eq!(result.get("vaultName"), Some("Main"));
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;
use crate::error::ResourceIdError;
use crate::grammar::Grammar;
use crate::segment::CaseSensitivity;
use crate::segment::Segment;
use crate::segment::SegmentKind;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum input size in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Tunables applied to every parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserOptions {
    /// Maximum accepted input size in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Serde default for [`ParserOptions::max_input_bytes`].
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

// ============================================================================
// SECTION: Parse Result
// ============================================================================

/// Captured values from a successful parse.
///
/// # Invariants
/// - Holds exactly one non-empty value per capture segment of the grammar it
///   was parsed with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    /// Captured values keyed by segment name.
    pub parsed: BTreeMap<String, String>,
    /// Input the values were parsed from.
    pub raw_input: String,
}

impl ParseResult {
    /// Returns the value captured under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parsed.get(name).map(String::as_str)
    }

    /// Returns the value captured under `name` or a typed not-found error.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::SegmentNotFound`] when no value was captured.
    pub fn require(&self, name: &str) -> Result<String, ResourceIdError> {
        self.parsed.get(name).cloned().ok_or_else(|| ResourceIdError::SegmentNotFound {
            segment: name.to_string(),
            input: self.raw_input.clone(),
        })
    }
}

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Matches input text against a borrowed grammar.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'g> {
    /// Grammar to match against.
    grammar: &'g Grammar,
    /// Parse limits.
    options: ParserOptions,
}

impl<'g> Parser<'g> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_options(grammar, ParserOptions::default())
    }

    /// Creates a parser with explicit options.
    #[must_use]
    pub const fn with_options(grammar: &'g Grammar, options: ParserOptions) -> Self {
        Self {
            grammar,
            options,
        }
    }

    /// Returns the grammar this parser matches against.
    #[must_use]
    pub const fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Parses `input` into named captures.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input is empty, too large, lacks a
    /// leading `/`, has the wrong number of components, or a literal or
    /// constant segment does not match.
    #[tracing::instrument(
        name = "parse",
        level = "debug",
        skip_all,
        fields(grammar = %self.grammar.label(), case = %case, input_len = input.len())
    )]
    pub fn parse(&self, input: &str, case: CaseSensitivity) -> Result<ParseResult, ParseError> {
        let result = self.match_input(input, case);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "resource id rejected");
        }
        result
    }

    /// Runs the size checks, tokenizer and lock-step walk.
    fn match_input(&self, input: &str, case: CaseSensitivity) -> Result<ParseResult, ParseError> {
        if input.is_empty() {
            return Err(ParseError::EmptyInput {
                label: self.grammar.label().to_string(),
                example: self.grammar.example_id(),
            });
        }
        if input.len() > self.options.max_input_bytes {
            return Err(ParseError::InputTooLarge {
                max_bytes: self.options.max_input_bytes,
                actual_bytes: input.len(),
            });
        }
        let tokens = tokenize(input).ok_or_else(|| ParseError::MissingLeadingSlash {
            label: self.grammar.label().to_string(),
            example: self.grammar.example_id(),
        })?;

        let segments = self.grammar.segments();
        let mut parsed = BTreeMap::new();
        for (index, segment) in segments.iter().enumerate() {
            let Some(token) = tokens.get(index) else {
                return Err(self.exhausted(&segments[index ..], input.len(), tokens.len()));
            };
            match &segment.kind {
                SegmentKind::Static {
                    value,
                }
                | SegmentKind::ResourceProvider {
                    value,
                } => {
                    if !case.matches(value, token.text) {
                        return Err(self.literal_mismatch(index, segment, value, *token, tokens.len(), case));
                    }
                }
                SegmentKind::Constant {
                    allowed,
                } => {
                    if !allowed.iter().any(|value| case.matches(value, token.text)) {
                        return Err(ParseError::ConstantNotAllowed {
                            segment: segment.name.clone(),
                            allowed: allowed.clone(),
                            found: token.text.to_string(),
                            position: token.position,
                        });
                    }
                    parsed.insert(segment.name.clone(), token.text.to_string());
                }
                SegmentKind::SubscriptionId | SegmentKind::ResourceGroup | SegmentKind::UserSpecified => {
                    if token.text.is_empty() {
                        return Err(ParseError::EmptySegment {
                            segment: segment.name.clone(),
                            position: token.position,
                        });
                    }
                    parsed.insert(segment.name.clone(), token.text.to_string());
                }
            }
        }

        if let Some(extra) = tokens.get(segments.len()) {
            return Err(ParseError::TrailingSegments {
                label: self.grammar.label().to_string(),
                unexpected: input[extra.position ..].trim_end_matches('/').to_string(),
                expected: segments.len(),
                actual: tokens.len(),
                example: self.grammar.example_id(),
            });
        }

        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
        })
    }

    /// Builds the error for a literal mismatch at `index`.
    ///
    /// If the found token matches a later literal and skipping to it accounts
    /// exactly for the components the input is short by, the captures between
    /// the two literals are reported as missing.
    fn literal_mismatch(
        &self,
        index: usize,
        segment: &Segment,
        expected: &str,
        token: Token<'_>,
        token_count: usize,
        case: CaseSensitivity,
    ) -> ParseError {
        let segments = self.grammar.segments();
        let shortfall = self.grammar.len().saturating_sub(token_count);
        let resync = segments[index + 1 ..]
            .iter()
            .position(|later| later.kind.literal().is_some_and(|literal| case.matches(literal, token.text)))
            .map(|offset| index + 1 + offset);
        if let Some(resync) = resync {
            let skipped = &segments[index .. resync];
            if skipped.len() == shortfall && skipped.iter().any(Segment::is_capture) {
                return self.missing(skipped, token.position, token_count);
            }
        }
        ParseError::LiteralMismatch {
            label: self.grammar.label().to_string(),
            segment: segment.name.clone(),
            expected: expected.to_string(),
            found: token.text.to_string(),
            position: token.position,
            example: self.grammar.example_id(),
        }
    }

    /// Builds the error for input that ran out before `remaining`.
    ///
    /// Names the unresolved captures, or the first absent literal when only
    /// literals remain.
    fn exhausted(&self, remaining: &[Segment], position: usize, token_count: usize) -> ParseError {
        if remaining.iter().any(Segment::is_capture) {
            return self.missing(remaining, position, token_count);
        }
        let (segment, expected) = remaining
            .first()
            .map(|segment| (segment.name.clone(), segment.kind.literal().unwrap_or_default().to_string()))
            .unwrap_or_default();
        ParseError::MissingLiteral {
            label: self.grammar.label().to_string(),
            segment,
            expected,
            position,
            example: self.grammar.example_id(),
        }
    }

    /// Builds the error naming unresolved captures among `skipped`.
    fn missing(&self, skipped: &[Segment], position: usize, token_count: usize) -> ParseError {
        ParseError::MissingSegments {
            label: self.grammar.label().to_string(),
            missing: skipped.iter().filter(|segment| segment.is_capture()).map(|segment| segment.name.clone()).collect(),
            position,
            expected: self.grammar.len(),
            actual: token_count,
            example: self.grammar.example_id(),
        }
    }
}

// ============================================================================
// SECTION: Tokenizer
// ============================================================================

/// A path component paired with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    /// Component text (may be empty for `//`).
    text: &'a str,
    /// Byte offset of the component in the original input.
    position: usize,
}

/// Splits `input` into path components.
///
/// Returns `None` when the input does not start with `/`. One trailing `/`
/// is ignored.
fn tokenize(input: &str) -> Option<Vec<Token<'_>>> {
    let body = input.strip_prefix('/')?;
    let body = body.strip_suffix('/').unwrap_or(body);
    if body.is_empty() {
        return Some(Vec::new());
    }
    let mut tokens = Vec::new();
    let mut position = 1;
    for text in body.split('/') {
        tokens.push(Token {
            text,
            position,
        });
        position += text.len() + 1;
    }
    Some(tokens)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
