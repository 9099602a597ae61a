//! # Parser Combinators
//!
//! The building blocks of the engine. Each combinator is a small struct
//! holding its sub-parsers by value and implementing [`Parser`]; grammar
//! rules compose them through the constructor functions in
//! [`prelude`](super::prelude).
//!
//! * **Primitive matchers**: [`Equal`], [`Satisfy`]
//! * **Constant outcomes**: [`Zero`], [`Fail`]
//! * **Ordered alternative**: [`Choice`]
//! * **Sequential composition**: [`Tuple2`], [`Tuple3`]
//! * **Output adapters**: [`Map`], [`AsUnit`]
//! * **Repetition**: [`Many`], [`Many1`]
//! * **Failure context**: [`WithContext`]

use std::marker::PhantomData;

use super::core::ParseError;
use super::core::ParseResult;
use super::core::Parser;

/// Equal: matches one specific input element.
///
/// Succeeds iff the element at the cursor equals `value`, consuming exactly
/// one element. This is the primitive matcher every punctuation rule is
/// built from.
#[derive(Clone)]
pub struct Equal<I> {
    value: I,
}

impl<I> Equal<I> {
    pub fn new(value: I) -> Self {
        Self { value }
    }
}

impl<I: Clone + PartialEq> Parser<I, I> for Equal<I> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<I> {
        match input.get(pos) {
            Some(found) if *found == self.value => Ok((pos + 1, found.clone())),
            Some(_) => Err(ParseError::Unexpected),
            None => Err(ParseError::Eof),
        }
    }
}

/// Satisfy: matches one element through a predicate-projection.
///
/// The closure both tests the element and produces the output, so character
/// classification and value extraction happen in a single step without
/// building a throwaway alternative parser per character class.
#[derive(Clone)]
pub struct Satisfy<I, O, F> {
    f: F,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O, F> Satisfy<I, O, F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, F> Parser<I, O> for Satisfy<I, O, F>
where
    F: Fn(&I) -> Option<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        match input.get(pos) {
            Some(element) => match (self.f)(element) {
                Some(result) => Ok((pos + 1, result)),
                None => Err(ParseError::Unexpected),
            },
            None => Err(ParseError::Eof),
        }
    }
}

/// Zero: always succeeds with `zero_value`, consuming nothing.
#[derive(Clone)]
pub struct Zero<I, O> {
    zero_value: O,
    _phantom: PhantomData<I>,
}

impl<I, O> Zero<I, O> {
    pub fn new(zero_value: O) -> Self {
        Self {
            zero_value,
            _phantom: PhantomData,
        }
    }
}

impl<I, O: Clone> Parser<I, O> for Zero<I, O> {
    fn parse(&self, _input: &[I], pos: usize) -> ParseResult<O> {
        Ok((pos, self.zero_value.clone()))
    }
}

/// Fail: always fails with the given message.
#[derive(Clone)]
pub struct Fail<I, O> {
    message: String,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O> Fail<I, O> {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl<I, O> Parser<I, O> for Fail<I, O> {
    fn parse(&self, _input: &[I], _pos: usize) -> ParseResult<O> {
        Err(ParseError::Fail(self.message.clone()))
    }
}

/// Choice: the ordered alternative ("Or") combinator.
///
/// Tries each parser in declared order against the same position and returns
/// the outcome of the first success. Order is part of the grammar contract:
/// when two branches can match a prefix of the same input, the more specific
/// branch must be listed first or it is unreachable. No longest-match
/// disambiguation is attempted.
pub struct Choice<I, O> {
    parsers: Vec<Box<dyn Parser<I, O>>>,
}

impl<I, O> Choice<I, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<I, O>>>) -> Self {
        Self { parsers }
    }
}

impl<I, O> Parser<I, O> for Choice<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(input, pos) {
                return Ok(result);
            }
        }
        Err(ParseError::NoAlternative)
    }
}

/// Tuple2: the sequential ("And") combinator.
///
/// Runs the first parser, then the second from where the first stopped.
/// Either failure fails the whole combinator; there is no backtracking past
/// a successful first stage. The combined remainder is the second parser's
/// remainder.
#[derive(Clone)]
pub struct Tuple2<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Tuple2<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, (O1, O2)> for Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        Ok((pos, (result1, result2)))
    }
}

/// Tuple3: three-stage sequential composition.
#[derive(Clone)]
pub struct Tuple3<P1, P2, P3, I, O1, O2, O3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    _phantom: PhantomData<(I, O1, O2, O3)>,
}

impl<P1, P2, P3, I, O1, O2, O3> Tuple3<P1, P2, P3, I, O1, O2, O3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, I, O1, O2, O3> Parser<I, (O1, O2, O3)> for Tuple3<P1, P2, P3, I, O1, O2, O3>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2, O3)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        let (pos, result3) = self.parser3.parse(input, pos)?;
        Ok((pos, (result1, result2, result3)))
    }
}

/// Map: transforms the output of a parser on success.
///
/// This is how a sequential rule combines sub-results into a composite AST
/// node: compose with [`Tuple2`] or [`Tuple3`] and map the tuple.
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    parser: P,
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, A, B, P, F> Parser<I, B> for Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<B> {
        self.parser
            .parse(input, pos)
            .map(|(pos, value)| (pos, (self.f)(value)))
    }
}

/// AsUnit: discards a parser's output, keeping only its consumption.
///
/// Used to skip fixed punctuation (the `=` in an assignment) inside a
/// sequential rule that does not want the punctuation in its result.
#[derive(Clone)]
pub struct AsUnit<P, O> {
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> AsUnit<P, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, P, O> Parser<I, ()> for AsUnit<P, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<()> {
        self.parser.parse(input, pos).map(|(pos, _)| (pos, ()))
    }
}

/// Many: zero or more repetitions of a parser.
///
/// Never fails. Stops extending as soon as the inner parser fails, or as
/// soon as it succeeds without consuming: a zero-width success would pin the
/// cursor forever.
#[derive(Clone)]
pub struct Many<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let mut results = Vec::new();
        let mut current_pos = pos;

        while let Ok((new_pos, value)) = self.parser.parse(input, current_pos) {
            if new_pos == current_pos {
                break;
            }
            results.push(value);
            current_pos = new_pos;
        }

        Ok((current_pos, results))
    }
}

/// Many1: one or more repetitions of a parser.
///
/// Fails if the first repetition fails; otherwise extends greedily under the
/// same zero-width stop rule as [`Many`].
#[derive(Clone)]
pub struct Many1<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many1<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many1<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let (first_pos, first) = self.parser.parse(input, pos)?;
        let mut results = vec![first];
        let mut current_pos = first_pos;

        while let Ok((new_pos, value)) = self.parser.parse(input, current_pos) {
            if new_pos == current_pos {
                break;
            }
            results.push(value);
            current_pos = new_pos;
        }

        Ok((current_pos, results))
    }
}

/// WithContext: wraps failures with the name of the enclosing rule.
///
/// Purely local bookkeeping for tests and logs; the scanner discards errors
/// without looking inside.
#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<I, O, P, C: ToString> Parser<I, O> for WithContext<P, C>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.parser
            .parse(input, pos)
            .map_err(|e| ParseError::WithContext {
                message: self.context.to_string(),
                inner: Box::new(e),
            })
    }
}
