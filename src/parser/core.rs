//! # Core Parser Definitions
//!
//! The parser function contract and the failure type shared by every
//! combinator in the engine.

use thiserror::Error;

/// The core parsing interface.
///
/// A parser is a pure function value: applied to the same input slice and
/// position it returns the same outcome every call, and it never mutates the
/// input. Instead of carving a fresh remainder string per match, parsers work
/// on a borrowed slice with an explicit cursor; the unconsumed remainder
/// after a success at `new_pos` is `input[new_pos..]`.
///
/// # Type Parameters
///
/// * `I` - The input element type
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse `input` starting at `pos`.
    ///
    /// On success returns the position just past the consumed elements,
    /// together with the parsed value. `pos <= new_pos <= input.len()` holds
    /// for every success; a rule that can succeed with `new_pos == pos`
    /// (a zero-width match) must never be installed at the scanner's top
    /// level, see [`crate::scanner`].
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// Result type for parsing operations: new position and value, or an error.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Failure outcome of a parser.
///
/// Failures are ordinary return values, never panics, and carry no source
/// position: the scanner's recovery policy discards them wholesale, so the
/// variants exist to make unit tests and logs legible rather than to drive
/// user-facing diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input exhausted before the parser could look at an element.
    #[error("unexpected end of input")]
    Eof,
    /// The element at the cursor did not satisfy the parser.
    #[error("unexpected input")]
    Unexpected,
    /// Every branch of an ordered alternative failed.
    #[error("no alternative matched")]
    NoAlternative,
    /// Explicit failure with a reason.
    #[error("fail: {0}")]
    Fail(String),
    /// A failure wrapped with the name of the enclosing rule.
    #[error("{message}: {inner}")]
    WithContext {
        message: String,
        inner: Box<ParseError>,
    },
}
