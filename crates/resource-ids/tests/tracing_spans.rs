// crates/resource-ids/tests/tracing_spans.rs
// ============================================================================
// Test Module: Parser Tracing
// Coverage: Span emission for parse calls.
// ============================================================================
//! ## Overview
//! Verifies that `Parser::parse` runs inside a `parse` span carrying the
//! grammar label.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::sync::Arc;
use std::sync::Mutex;

use resource_ids::CaseSensitivity;
use resource_ids::Parser;
use support::KEY_VERSION_ID;
use support::TestResult;
use support::ensure;
use support::key_version_grammar;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// SECTION: Collecting Layer
// ============================================================================

/// Records the names of spans as they are created.
#[derive(Clone, Default)]
struct SpanCollector {
    /// Span names in creation order.
    spans: Arc<Mutex<Vec<String>>>,
}

impl<S> tracing_subscriber::Layer<S> for SpanCollector
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        _attrs: &tracing::span::Attributes<'_>,
        id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if let Some(span) = ctx.span(id) {
            self.spans.lock().expect("lock poisoned").push(span.name().to_owned());
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Tests successful and failed parses both open a `parse` span.
#[test]
fn parse_creates_span() -> TestResult {
    let collector = SpanCollector::default();
    let spans = Arc::clone(&collector.spans);
    let subscriber = tracing_subscriber::registry().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    let grammar = key_version_grammar()?;
    let parser = Parser::new(&grammar);
    parser.parse(KEY_VERSION_ID, CaseSensitivity::Sensitive)?;
    ensure(parser.parse("/nope", CaseSensitivity::Sensitive).is_err(), "expected rejection")?;

    let recorded = spans.lock().expect("lock poisoned");
    ensure(
        recorded.iter().filter(|name| name.as_str() == "parse").count() == 2,
        format!("expected two 'parse' spans, got: {recorded:?}"),
    )?;
    Ok(())
}
