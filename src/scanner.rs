//! # Scanning Driver
//!
//! Walks an input string left to right, applying the top-level grammar
//! alternative at each unconsumed position. A successful match is yielded and
//! the cursor advances by the consumed length; anything unrecognized is
//! skipped one character at a time, silently. This is a lossy recovery
//! policy: whitespace and unmodeled punctuation vanish with no error signal.

use crate::parser::rules::item;
use crate::parser::Parser;
use crate::token::ScanItem;

/// Lazy iterator over the recognized items of an input string.
///
/// The sequence is finite and not restartable: once consumed, build a new
/// scanner. [`Scanner::with_offset`] resumes from a checkpoint position, and
/// scanning from a checkpoint yields exactly the items a full scan would
/// have yielded from that position onward.
pub struct Scanner {
    input: Vec<char>,
    pos: usize,
    parser: Box<dyn Parser<char, ScanItem>>,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self::with_offset(input, 0)
    }

    pub fn with_offset(input: &str, pos: usize) -> Self {
        Self {
            input: input.chars().collect(),
            pos,
            parser: Box::new(item()),
        }
    }

    /// Current cursor position, in characters from the start of the input.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Iterator for Scanner {
    type Item = ScanItem;

    fn next(&mut self) -> Option<ScanItem> {
        while self.pos < self.input.len() {
            match self.parser.parse(&self.input, self.pos) {
                // The grammar never matches zero-width, but a match that
                // did not consume would pin the cursor here forever; only
                // strictly advancing successes are yielded.
                Ok((new_pos, item)) if new_pos > self.pos => {
                    tracing::trace!(pos = self.pos, new_pos, "matched item");
                    self.pos = new_pos;
                    return Some(item);
                }
                Ok(_) | Err(_) => {
                    tracing::trace!(pos = self.pos, "skipping unrecognized character");
                    self.pos += 1;
                }
            }
        }
        None
    }
}

/// Scans `input`, yielding every recognized item in input order.
pub fn scan(input: &str) -> Scanner {
    Scanner::new(input)
}
