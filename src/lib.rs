//! # exprscan
//!
//! A small parser combinator engine with a skip-tolerant expression scanner.
//!
//! Parsers are pure values composed from primitive matchers and combinators
//! (ordered alternative, sequential composition, repetition); grammar rules
//! build a typed AST; the scanner drives the combined top-level rule across
//! an input string, yielding recognized items and silently skipping
//! everything else.
//!
//! ```text
//! Input → Scanner → Grammar Rules → Combinators → AST Nodes / Token Markers
//! ```
//!
//! ## Example
//!
//! ```
//! use exprscan::{scan, Node, Operator, ScanItem};
//!
//! let items: Vec<ScanItem> = scan("x = 42 + y").collect();
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[1], ScanItem::Operator(Operator::Plus));
//! assert_eq!(
//!     items[2],
//!     ScanItem::Node(Node::Variable { name: "y".to_string() })
//! );
//! ```

pub mod ast;
pub mod parser;
pub mod scanner;
pub mod token;

// Re-exports
pub use ast::Node;
pub use parser::{ParseError, ParseResult, Parser};
pub use scanner::{scan, Scanner};
pub use token::{Operator, ScanItem};
