//! Token markers for recognized symbols that carry no AST structure, and the
//! item type the scanner hands to its caller.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::ast::Node;

/// Operator symbols recognized by the grammar.
///
/// Serialized as the literal symbol, so `Operator::Plus.to_string() == "+"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Operator {
    /// Addition operator (`+`)
    #[strum(serialize = "+")]
    Plus,
}

/// One recognized item in scan order: either a structured AST node or a bare
/// token marker for punctuation the grammar recognizes but does not model.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanItem {
    Node(Node),
    Operator(Operator),
}
