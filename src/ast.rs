//! # Abstract Syntax Tree
//!
//! Node types produced by the grammar rules. The tree is a closed sum type:
//! each parent exclusively owns its boxed children, the structure is acyclic,
//! and nodes are never mutated after construction.

use core::fmt;

/// A parsed fragment of the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An identifier, `[A-Za-z][A-Za-z0-9_]*`.
    Variable { name: String },
    /// An unsigned integer decoded from a maximal run of decimal digits.
    Number { value: u64 },
    /// A binary operation over two sub-expressions.
    BinaryOp {
        op: char,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `identifier = number`. The target is always a `Variable` and the
    /// value always a `Number`; the grammar admits nothing else.
    Assignment { target: Box<Node>, value: Box<Node> },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Variable { name } => write!(f, "Variable({})", name),
            Node::Number { value } => write!(f, "Number({})", value),
            Node::BinaryOp { op, left, right } => {
                write!(f, "BinaryOp({}, {}, {})", op, left, right)
            }
            Node::Assignment { target, value } => {
                write!(f, "Assignment({}, {})", target, value)
            }
        }
    }
}
