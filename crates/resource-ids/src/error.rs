// crates/resource-ids/src/error.rs
// ============================================================================
// Module: Resource ID Errors
// Description: Structured diagnostics for grammar declaration and parsing.
// Purpose: Name the offending segment and input for every rejection.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors are split by layer:
//! - [`GrammarError`]: a declared grammar violates its own invariants.
//! - [`ParseError`]: input text does not match a grammar (engine layer).
//! - [`ResourceIdError`]: a typed identifier could not be produced, wrapping
//!   engine errors with the raw input or naming a capture that was absent.
//!
//! All failures are local values; nothing in this crate panics on bad input.

use thiserror::Error;

// ============================================================================
// SECTION: Grammar Errors
// ============================================================================

/// Errors raised when a grammar declaration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The grammar declared no segments.
    #[error("grammar {label:?} declares no segments")]
    Empty {
        /// Grammar label.
        label: String,
    },
    /// A segment was declared without a name.
    #[error("grammar {label:?} has an unnamed segment at index {index}")]
    UnnamedSegment {
        /// Grammar label.
        label: String,
        /// Index of the unnamed segment.
        index: usize,
    },
    /// Two segments share a name.
    #[error("grammar {label:?} declares segment {name:?} more than once")]
    DuplicateSegment {
        /// Grammar label.
        label: String,
        /// Repeated segment name.
        name: String,
    },
    /// A literal segment has empty text or contains a path separator.
    #[error("grammar {label:?} segment {name:?} has invalid literal {value:?}")]
    InvalidLiteral {
        /// Grammar label.
        label: String,
        /// Segment name.
        name: String,
        /// Offending literal text.
        value: String,
    },
    /// A capture segment's example value is empty or contains a path separator.
    #[error("grammar {label:?} segment {name:?} has invalid example value {value:?}")]
    InvalidExample {
        /// Grammar label.
        label: String,
        /// Segment name.
        name: String,
        /// Offending example value.
        value: String,
    },
    /// A constant segment lists no usable values.
    #[error("grammar {label:?} constant segment {name:?} must allow at least one non-empty value")]
    InvalidConstant {
        /// Grammar label.
        label: String,
        /// Segment name.
        name: String,
    },
}

// ============================================================================
// SECTION: Parse Errors
// ============================================================================

/// Errors raised by the parser when input does not match a grammar.
///
/// Positions are byte offsets into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty.
    #[error("the resource id is empty; expected a {label} id such as {example:?}")]
    EmptyInput {
        /// Grammar label.
        label: String,
        /// Example id rendered from the grammar.
        example: String,
    },
    /// Input exceeded the configured size limit.
    #[error("the resource id exceeds the size limit: {actual_bytes} bytes (max {max_bytes})")]
    InputTooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual input length in bytes.
        actual_bytes: usize,
    },
    /// Input did not begin with `/`.
    #[error("the resource id must begin with '/'; expected a {label} id such as {example:?}")]
    MissingLeadingSlash {
        /// Grammar label.
        label: String,
        /// Example id rendered from the grammar.
        example: String,
    },
    /// A literal segment did not match the expected text.
    #[error(
        "expected the segment {segment:?} to be {expected:?} but found {found:?} at {position}; \
         expected a {label} id such as {example:?}"
    )]
    LiteralMismatch {
        /// Grammar label.
        label: String,
        /// Name of the literal segment.
        segment: String,
        /// Expected literal text.
        expected: String,
        /// Text found in the input.
        found: String,
        /// Byte offset of the found text.
        position: usize,
        /// Example id rendered from the grammar.
        example: String,
    },
    /// A captured segment was present but empty.
    #[error("the segment {segment:?} is empty at {position}")]
    EmptySegment {
        /// Name of the capture segment.
        segment: String,
        /// Byte offset where the value was expected.
        position: usize,
    },
    /// A constant segment held a value outside its allowed set.
    #[error(
        "the segment {segment:?} must be one of [{}] but found {found:?} at {position}",
        .allowed.join(", ")
    )]
    ConstantNotAllowed {
        /// Name of the constant segment.
        segment: String,
        /// Accepted values.
        allowed: Vec<String>,
        /// Text found in the input.
        found: String,
        /// Byte offset of the found text.
        position: usize,
    },
    /// One or more captures could not be resolved because the input omitted them.
    #[error(
        "the resource id is missing the segment(s) [{}] at {position} \
         (expected {expected} segments, parsed {actual}); expected a {label} id such as {example:?}",
        .missing.join(", ")
    )]
    MissingSegments {
        /// Grammar label.
        label: String,
        /// Names of the unresolved capture segments, in grammar order.
        missing: Vec<String>,
        /// Byte offset where the first missing segment was expected.
        position: usize,
        /// Number of segments the grammar declares.
        expected: usize,
        /// Number of segments parsed from the input.
        actual: usize,
        /// Example id rendered from the grammar.
        example: String,
    },
    /// Input ended before a literal segment with no capture left to resolve.
    #[error(
        "the resource id ended before the segment {segment:?} (expected {expected:?} at {position}); \
         expected a {label} id such as {example:?}"
    )]
    MissingLiteral {
        /// Grammar label.
        label: String,
        /// Name of the first absent literal segment.
        segment: String,
        /// Literal text that was expected.
        expected: String,
        /// Byte offset where the literal was expected.
        position: usize,
        /// Example id rendered from the grammar.
        example: String,
    },
    /// Input held more segments than the grammar declares.
    #[error(
        "the resource id has unexpected trailing segments {unexpected:?} \
         (expected {expected} segments, parsed {actual}); expected a {label} id such as {example:?}"
    )]
    TrailingSegments {
        /// Grammar label.
        label: String,
        /// Unmatched remainder of the input.
        unexpected: String,
        /// Number of segments the grammar declares.
        expected: usize,
        /// Number of segments parsed from the input.
        actual: usize,
        /// Example id rendered from the grammar.
        example: String,
    },
}

impl ParseError {
    /// Returns the names of capture segments this error leaves unresolved.
    #[must_use]
    pub fn unresolved_segments(&self) -> &[String] {
        match self {
            Self::MissingSegments {
                missing,
                ..
            } => missing,
            _ => &[],
        }
    }
}

// ============================================================================
// SECTION: Resource ID Errors
// ============================================================================

/// Errors raised when producing a typed resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceIdError {
    /// The identifier's own grammar declaration is invalid.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    /// The input did not match the grammar.
    #[error("parsing {input:?}: {source}")]
    Parse {
        /// Raw input that failed to parse.
        input: String,
        /// Engine error.
        source: ParseError,
    },
    /// A capture expected by the identifier was absent from the parse result.
    #[error("the segment '{segment}' was not found in the resource id {input:?}")]
    SegmentNotFound {
        /// Missing capture name.
        segment: String,
        /// Raw input the result was parsed from.
        input: String,
    },
}

impl ResourceIdError {
    /// Returns the capture names this error leaves unresolved.
    #[must_use]
    pub fn unresolved_segments(&self) -> Vec<&str> {
        match self {
            Self::Parse {
                source,
                ..
            } => source.unresolved_segments().iter().map(String::as_str).collect(),
            Self::SegmentNotFound {
                segment,
                ..
            } => vec![segment.as_str()],
            Self::Grammar(_) => Vec::new(),
        }
    }
}
