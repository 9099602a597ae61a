//! # Parser Combinator Engine
//!
//! Recursive-descent parsers for a character stream, built out of composable
//! pieces:
//!
//! 1. **Core Parser Interface**: the [`Parser`] trait defines the parsing
//!    contract over a borrowed slice and a cursor position
//! 2. **Combinators**: small, composable parser units that can be combined
//! 3. **Grammar Rules**: the expression grammar assembled from those units
//!
//! ## Usage Example
//!
//! ```
//! use exprscan::parser::prelude::*;
//! use exprscan::parser::Parser;
//!
//! let input: Vec<char> = "a+b".chars().collect();
//! let parser = equal('a');
//! assert_eq!(parser.parse(&input, 0), Ok((1, 'a')));
//! ```

pub mod combinators;
pub mod core;
pub mod prelude;
pub mod rules;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
