//! # Grammar Rules
//!
//! The expression grammar, built from the combinators: identifiers, unsigned
//! integers, `identifier = number` assignment, and the `+` operator symbol.
//! Character classification is locale-independent ASCII throughout.

use super::core::Parser;
use super::prelude::*;
use crate::ast::Node;
use crate::token::{Operator, ScanItem};

fn alphabetic() -> impl Parser<char, char> {
    satisfy(|c: &char| c.is_ascii_alphabetic().then_some(*c))
}

fn alnum_or_underscore() -> impl Parser<char, char> {
    satisfy(|c: &char| (c.is_ascii_alphanumeric() || *c == '_').then_some(*c))
}

fn digit() -> impl Parser<char, u64> {
    satisfy(|c: &char| c.to_digit(10).map(u64::from))
}

fn spaces() -> impl Parser<char, ()> {
    as_unit(many(satisfy(|c: &char| {
        c.is_ascii_whitespace().then_some(())
    })))
}

/// Identifier: an ASCII letter followed by letters, digits or underscores.
///
/// The mandatory first letter means the rule can never succeed on a
/// zero-length name, which is what keeps the scanner's skip loop safe.
pub fn identifier() -> impl Parser<char, Node> {
    with_context(
        map(
            tuple2(alphabetic(), many(alnum_or_underscore())),
            |(first, rest)| {
                let mut name = String::with_capacity(1 + rest.len());
                name.push(first);
                name.extend(rest);
                Node::Variable { name }
            },
        ),
        "identifier",
    )
}

/// Number: a maximal run of decimal digits, decoded base 10.
///
/// The whole run is consumed, not just the first digit.
pub fn number() -> impl Parser<char, Node> {
    with_context(
        map(many1(digit()), |digits| Node::Number {
            value: digits.into_iter().fold(0, |acc, d| acc * 10 + d),
        }),
        "number",
    )
}

/// Assignment: `identifier = number`, with optional whitespace around `=`.
///
/// All three stages must succeed, each picking up where the previous one
/// stopped; any failure aborts the rule with no partial node.
pub fn assignment() -> impl Parser<char, Node> {
    with_context(
        map(
            tuple3(identifier(), equals_sign(), number()),
            |(target, _, value)| Node::Assignment {
                target: Box::new(target),
                value: Box::new(value),
            },
        ),
        "assignment",
    )
}

// The `=` is pure punctuation: its surroundings and the sign itself are
// consumed but produce no output.
fn equals_sign() -> impl Parser<char, ()> {
    as_unit(tuple3(spaces(), equal('='), spaces()))
}

/// The `+` operator, recognized as a bare token marker with no AST node.
pub fn plus() -> impl Parser<char, Operator> {
    map(equal('+'), |_| Operator::Plus)
}

/// The top-level alternative applied by the scanner at each position.
///
/// Assignment is listed before identifier: both match an identifier prefix,
/// and the ordered choice would otherwise never reach the assignment rule.
pub fn item() -> impl Parser<char, ScanItem> {
    choice(vec![
        Box::new(map(assignment(), ScanItem::Node)),
        Box::new(map(identifier(), ScanItem::Node)),
        Box::new(map(number(), ScanItem::Node)),
        Box::new(map(plus(), ScanItem::Operator)),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn variable(name: &str) -> Node {
        Node::Variable {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_identifier_accepts_letter_then_word_chars() {
        let input = chars("y_2 + x");
        assert_eq!(identifier().parse(&input, 0), Ok((3, variable("y_2"))));
    }

    #[test]
    fn test_identifier_single_letter() {
        let input = chars("x");
        assert_eq!(identifier().parse(&input, 0), Ok((1, variable("x"))));
    }

    #[test]
    fn test_identifier_stops_at_non_word_char() {
        let input = chars("abc+def");
        assert_eq!(identifier().parse(&input, 0), Ok((3, variable("abc"))));
        assert_eq!(identifier().parse(&input, 4), Ok((7, variable("def"))));
    }

    #[test]
    fn test_identifier_rejects_leading_digit_or_underscore() {
        assert!(identifier().parse(&chars("1abc"), 0).is_err());
        assert!(identifier().parse(&chars("_abc"), 0).is_err());
        assert!(identifier().parse(&chars(""), 0).is_err());
    }

    #[test]
    fn test_number_consumes_maximal_digit_run() {
        let input = chars("123+");
        assert_eq!(
            number().parse(&input, 0),
            Ok((3, Node::Number { value: 123 }))
        );
    }

    #[test]
    fn test_number_rejects_non_digit() {
        assert!(number().parse(&chars("x1"), 0).is_err());
        assert!(number().parse(&chars(""), 0).is_err());
    }

    #[test]
    fn test_number_leading_zeros() {
        let input = chars("007");
        assert_eq!(number().parse(&input, 0), Ok((3, Node::Number { value: 7 })));
    }

    #[test]
    fn test_assignment() {
        let input = chars("x=42");
        assert_eq!(
            assignment().parse(&input, 0),
            Ok((
                4,
                Node::Assignment {
                    target: Box::new(variable("x")),
                    value: Box::new(Node::Number { value: 42 }),
                }
            ))
        );
    }

    #[test]
    fn test_assignment_leaves_trailing_input() {
        let input = chars("x=42 + y");
        let (pos, _) = assignment().parse(&input, 0).unwrap();
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_assignment_tolerates_spaces_around_equals() {
        let input = chars("x = 42 + y_2");
        assert_eq!(
            assignment().parse(&input, 0),
            Ok((
                6,
                Node::Assignment {
                    target: Box::new(variable("x")),
                    value: Box::new(Node::Number { value: 42 }),
                }
            ))
        );
    }

    #[test]
    fn test_assignment_fails_without_partial_node() {
        // missing '='
        assert!(assignment().parse(&chars("x42"), 0).is_err());
        // missing value
        assert!(assignment().parse(&chars("x="), 0).is_err());
        // value is not a number
        assert!(assignment().parse(&chars("x=y"), 0).is_err());
        // missing target
        assert!(assignment().parse(&chars("=42"), 0).is_err());
    }

    #[test]
    fn test_plus() {
        let input = chars("+x");
        assert_eq!(plus().parse(&input, 0), Ok((1, Operator::Plus)));
        assert!(plus().parse(&input, 1).is_err());
    }

    #[test]
    fn test_item_prefers_assignment_over_identifier() {
        let input = chars("x=42");
        assert_eq!(
            item().parse(&input, 0),
            Ok((
                4,
                ScanItem::Node(Node::Assignment {
                    target: Box::new(variable("x")),
                    value: Box::new(Node::Number { value: 42 }),
                })
            ))
        );
    }

    #[test]
    fn test_item_falls_back_to_identifier() {
        // '=' not followed by a number, so the assignment branch fails and
        // the bare identifier wins
        let input = chars("x=y");
        assert_eq!(
            item().parse(&input, 0),
            Ok((1, ScanItem::Node(variable("x"))))
        );
    }

    #[test]
    fn test_item_recognizes_plus() {
        let input = chars("+");
        assert_eq!(
            item().parse(&input, 0),
            Ok((1, ScanItem::Operator(Operator::Plus)))
        );
    }

    #[test]
    fn test_item_recognizes_bare_number() {
        let input = chars("123 + x");
        assert_eq!(
            item().parse(&input, 0),
            Ok((3, ScanItem::Node(Node::Number { value: 123 })))
        );
    }

    #[test]
    fn test_item_fails_on_unmodeled_input() {
        assert!(item().parse(&chars(" x"), 0).is_err());
        assert!(item().parse(&chars("*"), 0).is_err());
        assert!(item().parse(&chars("=1"), 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_identifier_accepts_exactly_word_shape(name in "[A-Za-z][A-Za-z0-9_]{0,12}") {
            let input = chars(&name);
            let (pos, node) = identifier().parse(&input, 0).unwrap();
            prop_assert_eq!(pos, input.len());
            prop_assert_eq!(node, variable(&name));
        }

        #[test]
        fn prop_identifier_matches_maximal_prefix(name in "[A-Za-z][A-Za-z0-9_]{0,12}") {
            let text = format!("{}+rest", name);
            let input = chars(&text);
            let (pos, node) = identifier().parse(&input, 0).unwrap();
            prop_assert_eq!(pos, name.chars().count());
            prop_assert_eq!(node, variable(&name));
        }

        #[test]
        fn prop_number_round_trips_decimal(n in any::<u64>()) {
            let text = format!("{}x", n);
            let input = chars(&text);
            let (pos, node) = number().parse(&input, 0).unwrap();
            prop_assert_eq!(pos, input.len() - 1);
            prop_assert_eq!(node, Node::Number { value: n });
        }
    }
}
