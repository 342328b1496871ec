//! Generic parser and combinator building blocks.
//!
//! This module provides the majority of the combinators that will be used to
//! implement most parsers: character and literal matchers, sequencing,
//! alternation, optionality, repetition and delimiter scanning. When using
//! `parsel`, it is best to become familiar with the contents of this module, as
//! the majority of parsing problems should have a solution implemented here.
//!
//! Most functions that take a parser as a parameter and produce a transformed parser
//! (A.K.A. combinators) are also available as methods on the [`Parse`] trait.
//!
//! Every combinator records a checkpoint before it calls an inner parser, and
//! restores it whenever that parser does not match or reports an error. The
//! rollback covers the whole span the combinator has consumed so far, so
//! `seq((a, b))` leaves no trace of `a` when `b` fails.

use crate::{Cursor, Error, ErrorKind, ErrorSeed, Match, Or, PResult, Parse};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

/// Runs a parser, rolling the cursor back to `$start` and returning early
/// unless it matched.
macro_rules! attempt {
    ($cursor:ident, $start:expr, $parse:expr) => {
        match $parse {
            Ok(Some(value)) => value,
            Ok(None) => {
                $cursor.restore($start);
                return Ok(None);
            }
            Err(err) => {
                $cursor.restore($start);
                return Err(err);
            }
        }
    };
}

/// Creates a parser that applies each of its arguments in order.
///
/// [`seq!`] accepts any number of parsers and produces a flat tuple of their
/// parsed values. Up to nine parsers it is equivalent to calling [`seq`] with a
/// tuple; beyond that the parsers are grouped into nested pairs internally and
/// the result is flattened again.
///
/// # Example
/// ```
/// use parsel::{basic::{seq, literal, any_char}, Parse};
///
/// let p = seq!(literal("a"), any_char, literal("c"));
/// assert_eq!(p.parse_str("abcd").unwrap(), Some((("a", 'b', "c"), "d")));
/// ```
pub use parsel_macros::seq;

/// Creates a parser that matches the first of its arguments that matches.
///
/// [`alt!`] accepts any number of parsers producing the same value type, and
/// is the variadic form of [`any`].
///
/// # Example
/// ```
/// use parsel::{basic::{alt, literal}, Parse};
///
/// let keyword = alt!(literal("let"), literal("fn"), literal("if"));
/// assert_eq!(keyword.parse_str("fn main").unwrap(), Some(("fn", " main")));
/// assert_eq!(keyword.parse_str("loop").unwrap(), None);
/// ```
pub use parsel_macros::alt;

/// Matches only at the end of input.
///
/// [`eof`] never consumes input.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// assert_eq!(eof.parse_str("").unwrap(), Some(((), "")));
/// assert_eq!(eof.parse_str("A").unwrap(), None);
/// ```
pub fn eof(cursor: &mut Cursor<'_>) -> PResult<()> {
    Ok(cursor.peek(1).is_none().then_some(()))
}

/// Matches any single code point.
pub fn any_char(cursor: &mut Cursor<'_>) -> PResult<char> {
    Ok(cursor.next_char())
}

#[derive(Debug, Clone, Copy)]
struct CharParser(char);

impl<'a> Parse<'a> for CharParser {
    type Parsed = char;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<char> {
        next_char_if(cursor, |ch| ch == self.0)
    }
}

/// Creates a parser that matches exactly the code point `expected`.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::char;
/// assert_eq!(char('A').parse_str("ABC").unwrap(), Some(('A', "BC")));
/// assert_eq!(char('A').parse_str("abc").unwrap(), None);
/// ```
#[inline]
pub const fn char<'a>(expected: char) -> impl Parse<'a, Parsed = char, Error = Error> {
    CharParser(expected)
}

#[derive(Debug, Clone)]
struct CharWhereParser<F>(F);

impl<'a, F> Parse<'a> for CharWhereParser<F>
where
    F: Fn(char) -> bool,
{
    type Parsed = char;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<char> {
        next_char_if(cursor, &self.0)
    }
}

/// Creates a parser that matches one code point accepted by `predicate`.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::char_where;
/// let upper = char_where(char::is_uppercase);
/// assert_eq!(upper.parse_str("Abc").unwrap(), Some(('A', "bc")));
/// assert_eq!(upper.parse_str("abc").unwrap(), None);
/// ```
#[inline]
pub const fn char_where<'a, F>(predicate: F) -> impl Parse<'a, Parsed = char, Error = Error>
where
    F: Fn(char) -> bool,
{
    CharWhereParser(predicate)
}

#[derive(Debug, Clone)]
struct CharInParser<S>(S, bool);

impl<'a, S> Parse<'a> for CharInParser<S>
where
    S: AsRef<str>,
{
    type Parsed = char;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<char> {
        next_char_if(cursor, |ch| self.0.as_ref().contains(ch) == self.1)
    }
}

/// Creates a parser that matches one code point contained in `set`.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::char_in;
/// assert_eq!(char_in("CBA").parse_str("ABC").unwrap(), Some(('A', "BC")));
/// assert_eq!(char_in("123").parse_str("ABC").unwrap(), None);
/// ```
#[inline]
pub const fn char_in<'a, S>(set: S) -> impl Parse<'a, Parsed = char, Error = Error>
where
    S: AsRef<str>,
{
    CharInParser(set, true)
}

/// Creates a parser that matches one code point not contained in `set`.
///
/// The end of input is never matched.
#[inline]
pub const fn char_not_in<'a, S>(set: S) -> impl Parse<'a, Parsed = char, Error = Error>
where
    S: AsRef<str>,
{
    CharInParser(set, false)
}

fn next_char_if<F>(cursor: &mut Cursor<'_>, accept: F) -> PResult<char>
where
    F: Fn(char) -> bool,
{
    match cursor.peek_char() {
        Some(ch) if accept(ch) => Ok(cursor.next_char()),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone)]
struct LiteralParser<S>(S, bool);

impl<'a, S> Parse<'a> for LiteralParser<S>
where
    S: AsRef<str>,
{
    type Parsed = &'a str;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<&'a str> {
        let expected = self.0.as_ref();
        let Ok(len) = isize::try_from(expected.chars().count()) else {
            return Ok(None);
        };
        let Some(candidate) = cursor.peek(len) else {
            return Ok(None);
        };
        let matched = if self.1 {
            candidate
                .chars()
                .zip(expected.chars())
                .all(|(a, b)| fold_eq(a, b))
        } else {
            candidate == expected
        };
        if matched {
            cursor.take(len);
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    }
}

/// Creates a parser that matches `expected` exactly.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::literal;
/// assert_eq!(literal("ABC").parse_str("ABCDEF").unwrap(), Some(("ABC", "DEF")));
/// assert_eq!(literal("ABC").parse_str("abcdef").unwrap(), None);
/// ```
#[inline]
pub const fn literal<'a, S>(expected: S) -> impl Parse<'a, Parsed = &'a str, Error = Error>
where
    S: AsRef<str>,
{
    LiteralParser(expected, false)
}

/// Creates a parser that matches `expected` ignoring case.
///
/// Code points are compared with locale independent case folding. The parsed
/// value is the matched input, so the original casing is preserved.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::literal_insensitive;
/// let p = literal_insensitive("ABC");
/// assert_eq!(p.parse_str("abCDEF").unwrap(), Some(("abC", "DEF")));
/// assert_eq!(p.parse_str("ÁBC").unwrap(), None);
/// ```
#[inline]
pub const fn literal_insensitive<'a, S>(
    expected: S,
) -> impl Parse<'a, Parsed = &'a str, Error = Error>
where
    S: AsRef<str>,
{
    LiteralParser(expected, true)
}

fn fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

#[derive(Debug, Clone)]
struct MapParser<P, F>(P, F);

impl<'a, P, F, R> Parse<'a> for MapParser<P, F>
where
    P: Parse<'a>,
    F: Fn(P::Parsed) -> R,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<R, P::Error> {
        Ok(self.0.parse(cursor)?.map(&self.1))
    }
}

/// Creates a parser whose parsed result is transformed.
///
/// The provided function, `map_fn`, is applied to the parsed result of
/// `parser` if it matches. The value returned from `map_fn` is the parsed
/// result of the new parser.
///
/// If the mapping operation could fail, use [`try_map`] instead.
///
/// See also [`Parse::map`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{map, char_in};
/// let digit = map(char_in("0123456789"), |ch| ch as u32 - '0' as u32);
/// assert_eq!(digit.parse_str("7").unwrap(), Some((7, "")));
/// ```
#[inline]
pub const fn map<'a, P, F, R>(parser: P, map_fn: F) -> impl Parse<'a, Parsed = R, Error = P::Error>
where
    P: Parse<'a>,
    F: Fn(P::Parsed) -> R,
{
    MapParser(parser, map_fn)
}

#[derive(Debug, Clone)]
struct TryMapParser<P, F>(P, F);

impl<'a, P, F, R, S> Parse<'a> for TryMapParser<P, F>
where
    P: Parse<'a>,
    F: Fn(P::Parsed) -> Result<R, S>,
    S: ErrorSeed<P::Error>,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<R, P::Error> {
        let start = cursor.checkpoint();
        let value = attempt!(cursor, start, self.0.parse(cursor));
        match (self.1)(value) {
            Ok(value) => Ok(Some(value)),
            Err(seed) => {
                cursor.restore(start);
                trace!("conversion failed at offset {}", start.offset());
                Err(seed.into_error(start.offset()))
            }
        }
    }
}

/// Creates a parser whose parsed result is fallibly transformed.
///
/// The provided function, `try_map_fn`, is applied to the parsed result of
/// `parser` if it matches. When `try_map_fn` returns [`Err`], the new parser
/// restores the cursor and reports an error built from the contained
/// [`ErrorSeed`], positioned where `parser` started. Errors are not
/// backtrackable, so enclosing combinators will not try alternatives.
///
/// If the mapping function cannot fail, use [`map`] instead.
///
/// See also [`Parse::try_map`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{try_map, char_in};
/// let octal = try_map(char_in("0123456789"), |ch| {
///     if ch < '8' {
///         Ok(ch as u32 - '0' as u32)
///     } else {
///         Err(ErrorKind::InvalidInput)
///     }
/// });
/// assert_eq!(octal.parse_str("7").unwrap(), Some((7, "")));
/// assert!(octal.parse_str("9").is_err());
/// ```
#[inline]
pub const fn try_map<'a, P, F, R, S>(
    parser: P,
    try_map_fn: F,
) -> impl Parse<'a, Parsed = R, Error = P::Error>
where
    P: Parse<'a>,
    F: Fn(P::Parsed) -> Result<R, S>,
    S: ErrorSeed<P::Error>,
{
    TryMapParser(parser, try_map_fn)
}

#[derive(Debug, Clone)]
struct MapErrParser<P, F>(P, F);

impl<'a, P, F, R> Parse<'a> for MapErrParser<P, F>
where
    P: Parse<'a>,
    F: Fn(P::Error) -> R,
{
    type Parsed = P::Parsed;
    type Error = R;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, R> {
        self.0.parse(cursor).map_err(&self.1)
    }
}

/// Creates a parser whose error is transformed.
///
/// See also [`Parse::map_err`].
#[inline]
pub const fn map_err<'a, P, F, R>(
    parser: P,
    map_err_fn: F,
) -> impl Parse<'a, Parsed = P::Parsed, Error = R>
where
    P: Parse<'a>,
    F: Fn(P::Error) -> R,
{
    MapErrParser(parser, map_err_fn)
}

struct ErrIntoParser<P, E>(P, PhantomData<fn() -> E>);

impl<'a, P, E> Parse<'a> for ErrIntoParser<P, E>
where
    P: Parse<'a>,
    P::Error: Into<E>,
{
    type Parsed = P::Parsed;
    type Error = E;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, E> {
        self.0.parse(cursor).map_err(Into::into)
    }
}

/// Creates a parser whose error is converted with [`Into`].
///
/// See also [`Parse::err_into`].
#[inline]
pub const fn err_into<'a, P, E>(parser: P) -> impl Parse<'a, Parsed = P::Parsed, Error = E>
where
    P: Parse<'a>,
    P::Error: Into<E>,
{
    ErrIntoParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct WithValueParser<P, T>(P, T);

impl<'a, P, T> Parse<'a> for WithValueParser<P, T>
where
    P: Parse<'a>,
    T: Clone,
{
    type Parsed = T;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<T, P::Error> {
        Ok(self.0.parse(cursor)?.map(|_| self.1.clone()))
    }
}

/// Creates a parser that replaces the parsed value with a clone of `value`.
///
/// See also [`Parse::with_value`].
#[inline]
pub const fn with_value<'a, P, T>(parser: P, value: T) -> impl Parse<'a, Parsed = T, Error = P::Error>
where
    P: Parse<'a>,
    T: Clone,
{
    WithValueParser(parser, value)
}

#[derive(Debug, Clone)]
struct VerifyParser<P, F>(P, F);

impl<'a, P, F> Parse<'a> for VerifyParser<P, F>
where
    P: Parse<'a>,
    F: Fn(&P::Parsed) -> bool,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        let start = cursor.checkpoint();
        let value = attempt!(cursor, start, self.0.parse(cursor));
        if (self.1)(&value) {
            Ok(Some(value))
        } else {
            cursor.restore(start);
            Ok(None)
        }
    }
}

/// Creates a parser that matches only when the parsed value passes
/// `verify_fn`.
///
/// A rejected value is a non-match and the cursor is restored.
///
/// See also [`Parse::verify`].
#[inline]
pub const fn verify<'a, P, F>(
    parser: P,
    verify_fn: F,
) -> impl Parse<'a, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<'a>,
    F: Fn(&P::Parsed) -> bool,
{
    VerifyParser(parser, verify_fn)
}

#[derive(Debug, Clone)]
struct OptionalParser<P>(P);

impl<'a, P> Parse<'a> for OptionalParser<P>
where
    P: Parse<'a>,
{
    type Parsed = Match<P::Parsed>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Match<P::Parsed>, P::Error> {
        let start = cursor.checkpoint();
        match self.0.parse(cursor) {
            Ok(Some(value)) => Ok(Some(Match::Present(value))),
            Ok(None) => {
                cursor.restore(start);
                Ok(Some(Match::Absent))
            }
            Err(err) => {
                cursor.restore(start);
                Err(err)
            }
        }
    }
}

/// Creates a parser that turns a non-match of `parser` into a match of
/// [`Match::Absent`].
///
/// The new parser only ever reports a non-match-free outcome: either a
/// [`Match`] or the error reported by `parser`.
///
/// See also [`Parse::optional`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::literal;
/// let p = optional(literal("1"));
/// assert_eq!(p.parse_str("ABCDEF").unwrap(), Some((Match::Absent, "ABCDEF")));
/// assert_eq!(p.parse_str("1BCDEF").unwrap(), Some((Match::Present("1"), "BCDEF")));
/// ```
#[inline]
pub const fn optional<'a, P>(parser: P) -> impl Parse<'a, Parsed = Match<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    OptionalParser(parser)
}

#[derive(Debug, Clone)]
struct StringFromParser<P>(P);

impl<'a, P> Parse<'a> for StringFromParser<P>
where
    P: Parse<'a>,
{
    type Parsed = &'a str;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<&'a str, P::Error> {
        let start = cursor.checkpoint();
        attempt!(cursor, start, self.0.parse(cursor));
        Ok(Some(cursor.slice(start, cursor.checkpoint())))
    }
}

/// Creates a parser that returns the input consumed by `parser`.
///
/// The returned text is sliced from the original input between the positions
/// before and after `parser` ran; the value `parser` produced is discarded.
///
/// See also [`Parse::recognize`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{char, char_in};
/// let date = string_from(seq((
///     char_in("0123456789").times(4),
///     char('-'),
///     char_in("0123456789").times(2),
/// )));
/// assert_eq!(date.parse_str("2024-06 rest").unwrap(), Some(("2024-06", " rest")));
/// ```
#[inline]
pub const fn string_from<'a, P>(parser: P) -> impl Parse<'a, Parsed = &'a str, Error = P::Error>
where
    P: Parse<'a>,
{
    StringFromParser(parser)
}

#[derive(Debug, Clone)]
struct SpannedParser<P>(P);

impl<'a, P> Parse<'a> for SpannedParser<P>
where
    P: Parse<'a>,
{
    type Parsed = (P::Parsed, &'a str);
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Self::Parsed, P::Error> {
        let start = cursor.checkpoint();
        let value = attempt!(cursor, start, self.0.parse(cursor));
        Ok(Some((value, cursor.slice(start, cursor.checkpoint()))))
    }
}

/// Creates a parser that returns the value of `parser` together with the
/// input it consumed.
///
/// See also [`Parse::spanned`].
#[inline]
pub const fn spanned<'a, P>(
    parser: P,
) -> impl Parse<'a, Parsed = (P::Parsed, &'a str), Error = P::Error>
where
    P: Parse<'a>,
{
    SpannedParser(parser)
}

#[derive(Debug, Clone)]
struct PeekParser<P>(P);

impl<'a, P> Parse<'a> for PeekParser<P>
where
    P: Parse<'a>,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        let start = cursor.checkpoint();
        let res = self.0.parse(cursor);
        cursor.restore(start);
        res
    }
}

/// Creates a parser that applies `parser` without consuming input.
///
/// See also [`Parse::peek`].
#[inline]
pub const fn peek<'a, P>(parser: P) -> impl Parse<'a, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<'a>,
{
    PeekParser(parser)
}

#[derive(Debug, Clone)]
struct NotParser<P>(P);

impl<'a, P> Parse<'a> for NotParser<P>
where
    P: Parse<'a>,
{
    type Parsed = ();
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<(), P::Error> {
        let start = cursor.checkpoint();
        let res = self.0.parse(cursor);
        cursor.restore(start);
        match res? {
            Some(_) => Ok(None),
            None => Ok(Some(())),
        }
    }
}

/// Creates a parser that matches, without consuming input, wherever `parser`
/// does not match.
///
/// Errors reported by `parser` are propagated.
///
/// See also [`Parse::not`].
#[inline]
pub const fn not<'a, P>(parser: P) -> impl Parse<'a, Parsed = (), Error = P::Error>
where
    P: Parse<'a>,
{
    NotParser(parser)
}

#[derive(Debug, Clone)]
struct CompleteParser<P>(P);

impl<'a, P> Parse<'a> for CompleteParser<P>
where
    P: Parse<'a>,
    ErrorKind: ErrorSeed<P::Error>,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        let start = cursor.checkpoint();
        let value = attempt!(cursor, start, self.0.parse(cursor));
        if cursor.is_at_end() {
            Ok(Some(value))
        } else {
            let pos = cursor.position();
            cursor.restore(start);
            Err(ErrorKind::ExpectedEof.into_error(pos))
        }
    }
}

/// Creates a parser that requires `parser` to consume all remaining input.
///
/// When `parser` matches but input remains, the new parser reports an
/// [`ErrorKind::ExpectedEof`] error positioned at the leftover input. A
/// non-match of `parser` is still a non-match.
///
/// See also [`Parse::complete`].
#[inline]
pub const fn complete<'a, P>(parser: P) -> impl Parse<'a, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<'a>,
    ErrorKind: ErrorSeed<P::Error>,
{
    CompleteParser(parser)
}

#[derive(Debug)]
struct RefParser<'p, P>(&'p P);

impl<'a, P> Parse<'a> for RefParser<'_, P>
where
    P: Parse<'a>,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        self.0.parse(cursor)
    }
}

/// Creates a parser out of a reference to another parser.
///
/// See also [`Parse::by_ref`].
#[inline]
pub const fn by_ref<'a, 'p, P>(
    parser: &'p P,
) -> impl Parse<'a, Parsed = P::Parsed, Error = P::Error> + 'p
where
    P: Parse<'a>,
{
    RefParser(parser)
}

/// A parser with its concrete type erased.
///
/// See [`Parse::boxed`].
pub struct Boxed<'p, 'a, T, E>(Box<dyn Parse<'a, Parsed = T, Error = E> + 'p>);

impl<'p, 'a, T, E> Boxed<'p, 'a, T, E> {
    /// Boxes `parser`.
    pub fn new<P>(parser: P) -> Self
    where
        P: Parse<'a, Parsed = T, Error = E> + 'p,
    {
        Self(Box::new(parser))
    }
}

impl<'a, T, E> Parse<'a> for Boxed<'_, 'a, T, E> {
    type Parsed = T;
    type Error = E;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<T, E> {
        self.0.parse(cursor)
    }
}

impl<T, E> fmt::Debug for Boxed<'_, '_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
struct PairParser<P, Q>(P, Q);

impl<'a, P, Q> Parse<'a> for PairParser<P, Q>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    type Parsed = (P::Parsed, Q::Parsed);
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Self::Parsed, P::Error> {
        let start = cursor.checkpoint();
        let first = attempt!(cursor, start, self.0.parse(cursor));
        let second = attempt!(cursor, start, self.1.parse(cursor));
        Ok(Some((first, second)))
    }
}

/// Creates a parser that applies two parsers in sequence.
///
/// If `second` does not match, the input consumed by `first` is restored.
///
/// See also [`Parse::then`] and [`seq`].
#[inline]
pub const fn pair<'a, P, Q>(
    first: P,
    second: Q,
) -> impl Parse<'a, Parsed = (P::Parsed, Q::Parsed), Error = P::Error>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    PairParser(first, second)
}

/// A fixed-size group of parsers with possibly different value types.
///
/// Implemented for tuples of 2 to 9 parsers sharing an error type. See [`seq`].
pub trait Sequence<'a> {
    /// A tuple of the value types of each parser.
    type Parsed;

    /// The error type shared by all parsers.
    type Error;

    /// Applies each parser in order.
    fn parse_seq(&self, cursor: &mut Cursor<'a>) -> PResult<Self::Parsed, Self::Error>;
}

macro_rules! impl_sequence {
    ($($P:ident),+) => {
        impl<'a, E, $($P),+> Sequence<'a> for ($($P,)+)
        where
            $($P: Parse<'a, Error = E>,)+
        {
            type Parsed = ($($P::Parsed,)+);
            type Error = E;

            #[allow(non_snake_case)]
            fn parse_seq(&self, cursor: &mut Cursor<'a>) -> PResult<Self::Parsed, E> {
                let start = cursor.checkpoint();
                let ($($P,)+) = self;
                $(
                    let $P = match $P.parse(cursor) {
                        Ok(Some(value)) => value,
                        Ok(None) => {
                            cursor.restore(start);
                            trace!("sequence rolled back to offset {}", start.offset());
                            return Ok(None);
                        }
                        Err(err) => {
                            cursor.restore(start);
                            trace!("sequence error, rolled back to offset {}", start.offset());
                            return Err(err);
                        }
                    };
                )+
                Ok(Some(($($P,)+)))
            }
        }
    };
}

impl_sequence!(A, B);
impl_sequence!(A, B, C);
impl_sequence!(A, B, C, D);
impl_sequence!(A, B, C, D, F);
impl_sequence!(A, B, C, D, F, G);
impl_sequence!(A, B, C, D, F, G, H);
impl_sequence!(A, B, C, D, F, G, H, J);
impl_sequence!(A, B, C, D, F, G, H, J, K);

#[derive(Debug, Clone)]
struct SeqParser<S>(S);

impl<'a, S> Parse<'a> for SeqParser<S>
where
    S: Sequence<'a>,
{
    type Parsed = S::Parsed;
    type Error = S::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<S::Parsed, S::Error> {
        self.0.parse_seq(cursor)
    }
}

/// Creates a parser that applies a tuple of parsers in order.
///
/// The parsed value is the tuple of each parser's value. If any parser does not
/// match or reports an error, the cursor is restored to where the sequence
/// started, undoing the input consumed by the parsers before it.
///
/// Tuples of 2 to 9 parsers are supported. For longer sequences, use [`seq!`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::literal;
/// let ab = seq((literal("A"), literal("B")));
/// assert_eq!(ab.parse_str("AB").unwrap(), Some((("A", "B"), "")));
/// assert_eq!(ab.parse_str("AC").unwrap(), None);
/// ```
#[inline]
pub const fn seq<'a, S>(parsers: S) -> impl Parse<'a, Parsed = S::Parsed, Error = S::Error>
where
    S: Sequence<'a>,
{
    SeqParser(parsers)
}

/// An ordered collection of parsers with the same value type.
///
/// Implemented for arrays, slices, vectors, and tuples of 2 to 9 parsers. See
/// [`any`] and [`all`].
pub trait ParserList<'a> {
    /// The value type shared by all parsers.
    type Parsed;

    /// The error type shared by all parsers.
    type Error;

    /// The number of parsers.
    fn count(&self) -> usize;

    /// Applies the parser at `index`.
    ///
    /// An out of range `index` is a non-match.
    fn parse_nth(&self, index: usize, cursor: &mut Cursor<'a>)
        -> PResult<Self::Parsed, Self::Error>;
}

impl<'a, P, const N: usize> ParserList<'a> for [P; N]
where
    P: Parse<'a>,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn count(&self) -> usize {
        N
    }

    fn parse_nth(&self, index: usize, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        self.as_slice().parse_nth(index, cursor)
    }
}

impl<'a, P> ParserList<'a> for &[P]
where
    P: Parse<'a>,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn count(&self) -> usize {
        self.len()
    }

    fn parse_nth(&self, index: usize, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        match self.get(index) {
            Some(parser) => parser.parse(cursor),
            None => Ok(None),
        }
    }
}

impl<'a, P> ParserList<'a> for Vec<P>
where
    P: Parse<'a>,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn count(&self) -> usize {
        self.len()
    }

    fn parse_nth(&self, index: usize, cursor: &mut Cursor<'a>) -> PResult<P::Parsed, P::Error> {
        self.as_slice().parse_nth(index, cursor)
    }
}

macro_rules! impl_parser_list {
    ($count:literal; $($idx:tt $P:ident),+) => {
        impl<'a, T, E, $($P),+> ParserList<'a> for ($($P,)+)
        where
            $($P: Parse<'a, Parsed = T, Error = E>,)+
        {
            type Parsed = T;
            type Error = E;

            fn count(&self) -> usize {
                $count
            }

            fn parse_nth(&self, index: usize, cursor: &mut Cursor<'a>) -> PResult<T, E> {
                match index {
                    $($idx => self.$idx.parse(cursor),)+
                    _ => Ok(None),
                }
            }
        }
    };
}

impl_parser_list!(2; 0 A, 1 B);
impl_parser_list!(3; 0 A, 1 B, 2 C);
impl_parser_list!(4; 0 A, 1 B, 2 C, 3 D);
impl_parser_list!(5; 0 A, 1 B, 2 C, 3 D, 4 F);
impl_parser_list!(6; 0 A, 1 B, 2 C, 3 D, 4 F, 5 G);
impl_parser_list!(7; 0 A, 1 B, 2 C, 3 D, 4 F, 5 G, 6 H);
impl_parser_list!(8; 0 A, 1 B, 2 C, 3 D, 4 F, 5 G, 6 H, 7 J);
impl_parser_list!(9; 0 A, 1 B, 2 C, 3 D, 4 F, 5 G, 6 H, 7 J, 8 K);

#[derive(Debug, Clone)]
struct AnyParser<L>(L);

impl<'a, L> Parse<'a> for AnyParser<L>
where
    L: ParserList<'a>,
{
    type Parsed = L::Parsed;
    type Error = L::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<L::Parsed, L::Error> {
        let start = cursor.checkpoint();
        for index in 0..self.0.count() {
            match self.0.parse_nth(index, cursor) {
                Ok(Some(value)) => return Ok(Some(value)),
                Ok(None) => cursor.restore(start),
                Err(err) => {
                    cursor.restore(start);
                    return Err(err);
                }
            }
        }
        Ok(None)
    }
}

/// Creates a parser that matches the first of `parsers` that matches.
///
/// Alternatives are tried in order, so earlier ones take precedence. The first
/// alternative that matches or reports an error decides the outcome; later
/// alternatives are not tried. When none match, nothing is consumed.
///
/// `parsers` may be a tuple of up to 9 parsers, an array, a slice or a
/// [`Vec`]. See also [`alt!`] and [`or`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::char;
/// let ab = any((char('A'), char('B')));
/// assert_eq!(ab.parse_str("B").unwrap(), Some(('B', "")));
/// assert_eq!(ab.parse_str("C").unwrap(), None);
///
/// let weekend = any(["saturday", "sunday"].map(parsel::basic::literal));
/// assert_eq!(weekend.parse_str("sunday!").unwrap(), Some(("sunday", "!")));
/// ```
#[inline]
pub const fn any<'a, L>(parsers: L) -> impl Parse<'a, Parsed = L::Parsed, Error = L::Error>
where
    L: ParserList<'a>,
{
    AnyParser(parsers)
}

#[derive(Debug, Clone)]
struct AllParser<L>(L);

impl<'a, L> Parse<'a> for AllParser<L>
where
    L: ParserList<'a>,
{
    type Parsed = Vec<L::Parsed>;
    type Error = L::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Vec<L::Parsed>, L::Error> {
        let start = cursor.checkpoint();
        let count = self.0.count();
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            items.push(attempt!(cursor, start, self.0.parse_nth(index, cursor)));
        }
        Ok(Some(items))
    }
}

/// Creates a parser that applies every one of `parsers` in order and collects
/// their values.
///
/// [`all`] is the homogeneous form of [`seq`]: it has the same rollback
/// behavior, but the values are collected into a [`Vec`] so the number of
/// parsers is not limited to a tuple arity.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::literal;
/// let abc = all([literal("A"), literal("B"), literal("C")]);
/// assert_eq!(abc.parse_str("ABCD").unwrap(), Some((vec!["A", "B", "C"], "D")));
/// assert_eq!(abc.parse_str("ABD").unwrap(), None);
/// ```
#[inline]
pub const fn all<'a, L>(parsers: L) -> impl Parse<'a, Parsed = Vec<L::Parsed>, Error = L::Error>
where
    L: ParserList<'a>,
{
    AllParser(parsers)
}

#[derive(Debug, Clone)]
struct OrParser<P, Q>(P, Q);

impl<'a, P, Q> Parse<'a> for OrParser<P, Q>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    type Parsed = Or<P::Parsed, Q::Parsed>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Self::Parsed, P::Error> {
        let start = cursor.checkpoint();
        match self.0.parse(cursor) {
            Ok(Some(value)) => return Ok(Some(Or::Left(value))),
            Ok(None) => cursor.restore(start),
            Err(err) => {
                cursor.restore(start);
                return Err(err);
            }
        }
        let value = attempt!(cursor, start, self.1.parse(cursor));
        Ok(Some(Or::Right(value)))
    }
}

/// Creates a parser that tries `left` and then `right`, reporting which one
/// matched.
///
/// Unlike [`any`], the two parsers may produce different value types. The
/// parsed value is an [`Or`] tagged with the side that matched. When neither
/// side matches, the new parser reports a non-match.
///
/// See also [`Parse::or`].
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{char, literal};
/// let p = or(literal("A"), char('B'));
/// assert_eq!(p.parse_str("A").unwrap(), Some((Or::Left("A"), "")));
/// assert_eq!(p.parse_str("B").unwrap(), Some((Or::Right('B'), "")));
/// assert_eq!(p.parse_str("C").unwrap(), None);
/// ```
#[inline]
pub const fn or<'a, P, Q>(
    left: P,
    right: Q,
) -> impl Parse<'a, Parsed = Or<P::Parsed, Q::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    OrParser(left, right)
}

#[derive(Debug, Clone)]
struct RepeatParser<P, F>(usize, F, P);

impl<'a, P, F> Parse<'a> for RepeatParser<P, F>
where
    P: Parse<'a>,
    F: Fn(usize) -> bool,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Vec<P::Parsed>, P::Error> {
        let RepeatParser(min, proceed, parser) = self;
        let start = cursor.checkpoint();
        let mut items = Vec::new();
        while proceed(items.len()) {
            let before = cursor.checkpoint();
            match parser.parse(cursor) {
                Ok(Some(item)) => items.push(item),
                Ok(None) => {
                    cursor.restore(before);
                    break;
                }
                Err(err) => {
                    cursor.restore(start);
                    trace!("repetition error after {} items, rolled back", items.len());
                    return Err(err);
                }
            }
            // An item that consumed nothing would match forever.
            if cursor.checkpoint() == before && items.len() >= *min {
                break;
            }
        }
        let within_bounds = match items.len().checked_sub(1) {
            Some(last) => proceed(last),
            None => true,
        };
        if items.len() >= *min && within_bounds {
            Ok(Some(items))
        } else {
            cursor.restore(start);
            trace!(
                "repetition matched {} items, needed {}, rolled back to offset {}",
                items.len(),
                min,
                start.offset()
            );
            Ok(None)
        }
    }
}

/// Creates a parser that applies `parser` repeatedly, the engine behind every
/// repetition combinator.
///
/// Before each attempt, `proceed` is called with the number of items matched
/// so far; repetition continues while it returns `true` and `parser` keeps
/// matching. The collected items are returned if there are at least `min` of
/// them and `proceed` accepts the index of the last one. Otherwise the cursor
/// is restored and the new parser does not match.
///
/// An item that matches without consuming input ends the repetition once
/// `min` is reached.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{char, repeat};
/// // Two to three `A`s.
/// let p = repeat(2, |count| count < 3, char('A'));
/// assert_eq!(p.parse_str("AAAA").unwrap(), Some((vec!['A', 'A', 'A'], "A")));
/// assert_eq!(p.parse_str("AB").unwrap(), None);
/// ```
#[inline]
pub const fn repeat<'a, P, F>(
    min: usize,
    proceed: F,
    parser: P,
) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
    F: Fn(usize) -> bool,
{
    RepeatParser(min, proceed, parser)
}

/// Creates a parser that applies `parser` exactly `count` times.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::char;
/// assert_eq!(times(2, char('A')).parse_str("AAA").unwrap(), Some((vec!['A', 'A'], "A")));
/// assert_eq!(times(2, char('A')).parse_str("AB").unwrap(), None);
/// ```
#[inline]
pub fn times<'a, P>(count: usize, parser: P) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    repeat(count, move |n| n < count, parser)
}

/// Creates a parser that applies `parser` at least `min` and at most `max`
/// times, matching as many as possible.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::char;
/// let p = between(1, 5, char('A'));
/// assert_eq!(p.parse_str("AAAAAA").unwrap(), Some((vec!['A'; 5], "A")));
/// assert_eq!(p.parse_str("").unwrap(), None);
/// ```
#[inline]
pub fn between<'a, P>(
    min: usize,
    max: usize,
    parser: P,
) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    repeat(min, move |n| n < max, parser)
}

/// Creates a parser that applies `parser` as many times as possible, but at
/// least `min` times.
#[inline]
pub fn at_least<'a, P>(min: usize, parser: P) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    repeat(min, |_| true, parser)
}

/// Creates a parser that applies `parser` as many times as possible, but at
/// most `max` times. Zero matches is a match.
#[inline]
pub fn at_most<'a, P>(max: usize, parser: P) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    repeat(0, move |n| n < max, parser)
}

/// Creates a parser that applies `parser` as many times as possible. Zero
/// matches is a match.
#[inline]
pub fn zero_or_more<'a, P>(parser: P) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    repeat(0, |_| true, parser)
}

/// Creates a parser that applies `parser` as many times as possible, but at
/// least once.
#[inline]
pub fn one_or_more<'a, P>(parser: P) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
{
    repeat(1, |_| true, parser)
}

#[derive(Debug, Clone)]
struct EndOrParser<Q>(Q);

impl<'a, Q> Parse<'a> for EndOrParser<Q>
where
    Q: Parse<'a>,
{
    type Parsed = ();
    type Error = Q::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<(), Q::Error> {
        if cursor.is_at_end() {
            return Ok(Some(()));
        }
        Ok(self.0.parse(cursor)?.map(|_| ()))
    }
}

/// Tests `delimiter` at the cursor without consuming anything.
fn probe<'a, Q>(delimiter: &Q, cursor: &mut Cursor<'a>) -> Result<bool, Q::Error>
where
    Q: Parse<'a>,
{
    let before = cursor.checkpoint();
    let res = delimiter.parse(cursor);
    cursor.restore(before);
    Ok(res?.is_some())
}

#[derive(Debug, Clone)]
struct UntilParser<P, Q>(P, Q);

impl<'a, P, Q> Parse<'a> for UntilParser<P, Q>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Vec<P::Parsed>, P::Error> {
        let start = cursor.checkpoint();
        let mut items = Vec::new();
        loop {
            let before = cursor.checkpoint();
            items.push(attempt!(cursor, start, self.0.parse(cursor)));
            match probe(&self.1, cursor) {
                Ok(true) => return Ok(Some(items)),
                Ok(false) if cursor.checkpoint() == before => break,
                Ok(false) => {}
                Err(err) => {
                    cursor.restore(start);
                    trace!("until: delimiter error, rolled back to offset {}", start.offset());
                    return Err(err);
                }
            }
        }
        cursor.restore(start);
        Ok(None)
    }
}

/// Creates a parser that applies `parser` until `delimiter` matches.
///
/// `parser` is applied first, and `delimiter` is tested after each item. At
/// least one item is required. The delimiter is never consumed. If `parser`
/// stops matching before the delimiter is found, including at the end of
/// input, the cursor is restored and the new parser does not match.
///
/// See also [`while_not`], which tests the delimiter before each item.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{any_char, char};
/// let p = until(any_char, char('D'));
/// assert_eq!(p.parse_str("ABCDEF").unwrap(), Some((vec!['A', 'B', 'C'], "DEF")));
/// assert_eq!(p.parse_str("ABC").unwrap(), None);
/// assert_eq!(p.parse_str("D").unwrap(), None);
/// ```
#[inline]
pub const fn until<'a, P, Q>(
    parser: P,
    delimiter: Q,
) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    UntilParser(parser, delimiter)
}

/// Like [`until`], but reaching the end of input also ends the scan.
///
/// At least one item is still required, so empty input does not match.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{any_char, char, until_eof};
/// let p = until_eof(any_char, char('G'));
/// assert_eq!(p.parse_str("ABC").unwrap(), Some((vec!['A', 'B', 'C'], "")));
/// assert_eq!(p.parse_str("").unwrap(), None);
/// ```
#[inline]
pub const fn until_eof<'a, P, Q>(
    parser: P,
    delimiter: Q,
) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    UntilParser(parser, EndOrParser(delimiter))
}

#[derive(Debug, Clone)]
struct WhileNotParser<P, Q>(P, Q);

impl<'a, P, Q> Parse<'a> for WhileNotParser<P, Q>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Vec<P::Parsed>, P::Error> {
        let start = cursor.checkpoint();
        let mut items = Vec::new();
        loop {
            match probe(&self.1, cursor) {
                Ok(true) => return Ok(Some(items)),
                Ok(false) => {}
                Err(err) => {
                    cursor.restore(start);
                    trace!("while_not: delimiter error, rolled back to offset {}", start.offset());
                    return Err(err);
                }
            }
            let before = cursor.checkpoint();
            items.push(attempt!(cursor, start, self.0.parse(cursor)));
            if cursor.checkpoint() == before {
                break;
            }
        }
        cursor.restore(start);
        Ok(None)
    }
}

/// Creates a parser that applies `parser` for as long as `delimiter` does not
/// match.
///
/// `delimiter` is tested before each item, so zero items is a match when the
/// delimiter is found immediately. The delimiter is never consumed. If
/// `parser` stops matching before the delimiter is found, including at the
/// end of input, the cursor is restored and the new parser does not match.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::basic::{any_char, char};
/// let p = while_not(any_char, char('A'));
/// assert_eq!(p.parse_str("ABCA").unwrap(), Some((vec![], "ABCA")));
/// assert_eq!(p.parse_str("BCAD").unwrap(), Some((vec!['B', 'C'], "AD")));
/// assert_eq!(p.parse_str("BCD").unwrap(), None);
/// ```
#[inline]
pub const fn while_not<'a, P, Q>(
    parser: P,
    delimiter: Q,
) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    WhileNotParser(parser, delimiter)
}

/// Like [`while_not`], but reaching the end of input also ends the scan.
///
/// Empty input matches with no items.
#[inline]
pub const fn while_not_eof_or<'a, P, Q>(
    parser: P,
    delimiter: Q,
) -> impl Parse<'a, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<'a>,
    Q: Parse<'a, Error = P::Error>,
{
    WhileNotParser(parser, EndOrParser(delimiter))
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;
    use proptest::{prop_assert_eq, proptest};

    /// Consumes one code point and then reports a non-match.
    fn naughty(cursor: &mut Cursor<'_>) -> PResult<char> {
        cursor.take(1);
        Ok(None)
    }

    /// Consumes one code point and then reports an error.
    fn faulty(cursor: &mut Cursor<'_>) -> PResult<char> {
        cursor.take(1);
        Err(Error::new(ErrorKind::InvalidInput, cursor.position()))
    }

    fn run<'a, P: Parse<'a>>(parser: P, text: &'a str) -> (PResult<P::Parsed, P::Error>, &'a str) {
        let mut cursor = Cursor::new(text);
        let res = parser.parse(&mut cursor);
        (res, cursor.remaining())
    }

    #[test]
    fn chars() {
        assert_eq!(char('A').parse_str("ABC").unwrap(), Some(('A', "BC")));
        assert_eq!(char('A').parse_str("").unwrap(), None);
        assert_eq!(char_where(|ch| ch == 'a').parse_str("ABC").unwrap(), None);
        assert_eq!(char_in("CBA").parse_str("ABC").unwrap(), Some(('A', "BC")));
        assert_eq!(char_not_in("ABC").parse_str("ABC").unwrap(), None);
        assert_eq!(char_not_in("123").parse_str("ABC").unwrap(), Some(('A', "BC")));
        assert_eq!(char_not_in("123").parse_str("").unwrap(), None);
        assert_eq!(any_char.parse_str("日本").unwrap(), Some(('日', "本")));
    }

    #[test]
    fn literals() {
        assert_eq!(literal("ABC").parse_str("ABCDEF").unwrap(), Some(("ABC", "DEF")));
        assert_eq!(literal("ABC").parse_str("AB").unwrap(), None);
        assert_eq!(literal("").parse_str("AB").unwrap(), Some(("", "AB")));
        assert_eq!(
            literal_insensitive("ABC").parse_str("abCDEF").unwrap(),
            Some(("abC", "DEF"))
        );
        assert_eq!(
            literal_insensitive("straße").parse_str("STRAẞE!").unwrap(),
            Some(("STRAẞE", "!"))
        );
        assert_eq!(literal_insensitive("abc").parse_str("abd").unwrap(), None);
    }

    #[test]
    fn end_of_input() {
        let (res, rem) = run(eof, "A");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "A");
        assert_eq!(eof.parse_str("").unwrap(), Some(((), "")));
    }

    #[test]
    fn sequences() {
        let (res, rem) = run(seq((literal("A"), literal("B"))), "AB");
        assert_eq!(res.unwrap(), Some(("A", "B")));
        assert_eq!(rem, "");

        let (res, rem) = run(seq((literal("A"), literal("B"))), "AC");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "AC");

        let (res, rem) = run(seq((char('A'), char('B'), naughty)), "ABC");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "ABC");

        let (res, rem) = run(
            seq((char('1'), char('2'), char('3'), char('4'), char('5'), char('6'), char('7'), char('8'), char('9'))),
            "1234567890",
        );
        assert_eq!(res.unwrap(), Some(('1', '2', '3', '4', '5', '6', '7', '8', '9')));
        assert_eq!(rem, "0");
    }

    #[test]
    fn sequence_macro() {
        let p = seq!(char('a'), char('b'), char('c'), char('d'), char('e'), char('f'), char('g'), char('h'), char('i'), char('j'), char('k'));
        let (res, rem) = run(p, "abcdefghijkl");
        assert_eq!(
            res.unwrap(),
            Some(('a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k'))
        );
        assert_eq!(rem, "l");

        let p = seq!(char('a'), char('b'), char('c'), char('d'), char('e'), char('f'), char('g'), char('h'), char('i'), char('j'), char('k'));
        let (res, rem) = run(p, "abcdefghijX");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "abcdefghijX");
    }

    #[test]
    fn pairs() {
        let (res, rem) = run(pair(char('A'), naughty), "AB");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "AB");
    }

    #[test]
    fn all_of() {
        let (res, rem) = run(all((literal("A"), literal("B"))), "ABC");
        assert_eq!(res.unwrap(), Some(vec!["A", "B"]));
        assert_eq!(rem, "C");

        let (res, rem) = run(all(vec![char('A'), char('B')]), "AC");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "AC");

        let parsers = [char('A'), char('B')];
        let (res, _) = run(all(&parsers[..]), "AB");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B']));
    }

    #[test]
    fn any_of() {
        let (res, rem) = run(any((char('A'), char('B'))), "C");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "C");

        let (res, rem) = run(any((char('A'), char('B'))), "B");
        assert_eq!(res.unwrap(), Some('B'));
        assert_eq!(rem, "");

        let (res, rem) = run(any((naughty, char('B'))), "B");
        assert_eq!(res.unwrap(), Some('B'));
        assert_eq!(rem, "");

        let empty: [fn(&mut Cursor<'_>) -> PResult<char>; 0] = [];
        assert_eq!(any(empty).parse_str("A").unwrap(), None);
    }

    #[test]
    fn any_stops_at_error() {
        let (res, rem) = run(any((faulty, char('A'))), "A");
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(rem, "A");
    }

    #[test]
    fn alt_macro() {
        let p = alt!(literal("monday"), literal("mon"), literal("m"));
        assert_eq!(p.parse_str("mond").unwrap(), Some(("mon", "d")));
        assert_eq!(p.parse_str("tue").unwrap(), None);
    }

    #[test]
    fn or_tags_side() {
        let (res, rem) = run(or(char('A'), literal("B")), "C");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "C");

        let (res, _) = run(or(char('A'), literal("B")), "A");
        let matched = res.unwrap().unwrap();
        assert_eq!(matched, Or::Left('A'));
        assert_eq!(matched.left(), Match::Present(&'A'));
        assert!(matched.right().is_absent());

        let matched = or(char('A'), literal("B")).parse_str("B").unwrap().map(|(v, _)| v);
        assert_eq!(matched, Some(Or::Right("B")));

        let (res, rem) = run(or(naughty, char('B')), "B");
        assert_eq!(res.unwrap(), Some(Or::Right('B')));
        assert_eq!(rem, "");
    }

    #[test]
    fn optional_values() {
        let (res, rem) = run(optional(literal("1")), "ABCDEF");
        assert_eq!(res.unwrap(), Some(Match::Absent));
        assert_eq!(rem, "ABCDEF");

        let (res, rem) = run(optional(literal("A")), "ABCDEF");
        assert_eq!(res.unwrap(), Some(Match::Present("A")));
        assert_eq!(rem, "BCDEF");

        let (res, rem) = run(optional(naughty), "ABC");
        assert_eq!(res.unwrap(), Some(Match::Absent));
        assert_eq!(rem, "ABC");

        let (res, rem) = run(optional(faulty), "ABC");
        assert!(res.is_err());
        assert_eq!(rem, "ABC");
    }

    #[test]
    fn repetition() {
        let (res, rem) = run(times(2, char('A')), "ABCDEF");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "ABCDEF");

        assert_eq!(times(2, char('A')).parse_str("AA").unwrap(), Some((vec!['A', 'A'], "")));

        let (res, rem) = run(times(2, naughty), "AC");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "AC");

        assert_eq!(times(0, char('A')).parse_str("AA").unwrap(), Some((vec![], "AA")));
    }

    #[test]
    fn repetition_bounds() {
        let p = between(1, 5, char('A'));
        assert_eq!(p.parse_str("AAAA").unwrap(), Some((vec!['A'; 4], "")));
        assert_eq!(p.parse_str("AAAAA").unwrap(), Some((vec!['A'; 5], "")));
        assert_eq!(p.parse_str("AAAAAA").unwrap(), Some((vec!['A'; 5], "A")));
        assert_eq!(p.parse_str("A").unwrap(), Some((vec!['A'], "")));
        assert_eq!(p.parse_str("").unwrap(), None);

        let p = at_least(1, char('A'));
        assert_eq!(p.parse_str("").unwrap(), None);
        assert_eq!(p.parse_str("AA").unwrap(), Some((vec!['A'; 2], "")));

        let p = at_most(3, char('A'));
        assert_eq!(p.parse_str("").unwrap(), Some((vec![], "")));
        assert_eq!(p.parse_str("AAAA").unwrap(), Some((vec!['A'; 3], "A")));

        assert_eq!(
            zero_or_more(char('A')).parse_str("BCDEF").unwrap(),
            Some((vec![], "BCDEF"))
        );
        assert_eq!(one_or_more(char('A')).parse_str("BCDEF").unwrap(), None);
        assert_eq!(one_or_more(char('A')).parse_str("AA").unwrap(), Some((vec!['A'; 2], "")));
    }

    #[test]
    fn repetition_error_rolls_back() {
        fn a_then_fault(cursor: &mut Cursor<'_>) -> PResult<char> {
            if cursor.peek_char() == Some('!') {
                faulty(cursor)
            } else {
                char('A').parse(cursor)
            }
        }

        let (res, rem) = run(zero_or_more(a_then_fault), "AA!A");
        assert_eq!(res.unwrap_err().position(), 3);
        assert_eq!(rem, "AA!A");
    }

    #[test]
    fn repetition_of_empty_matches_terminates() {
        let (res, rem) = run(zero_or_more(optional(char('A'))), "AAB");
        assert_eq!(
            res.unwrap(),
            Some(vec![Match::Present('A'), Match::Present('A'), Match::Absent])
        );
        assert_eq!(rem, "B");

        assert_eq!(times(3, eof).parse_str("").unwrap(), Some((vec![(); 3], "")));
    }

    #[test]
    fn until_delimiter() {
        let (res, rem) = run(until(any_char, char('D')), "ABCDEF");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B', 'C']));
        assert_eq!(rem, "DEF");

        let (res, rem) = run(until(any_char, char('A')), "ABCA");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B', 'C']));
        assert_eq!(rem, "A");

        let (res, rem) = run(until(any_char, char('G')), "ABCDEF");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "ABCDEF");

        let (res, rem) = run(until(naughty, char('G')), "ABC");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "ABC");

        let (res, rem) = run(until(any_char, faulty), "ABC");
        assert!(res.is_err());
        assert_eq!(rem, "ABC");
    }

    #[test]
    fn until_end_of_input() {
        let (res, rem) = run(until_eof(any_char, char('G')), "ABCDEF");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B', 'C', 'D', 'E', 'F']));
        assert_eq!(rem, "");

        let (res, rem) = run(until_eof(any_char, char('D')), "ABCDEF");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B', 'C']));
        assert_eq!(rem, "DEF");

        assert_eq!(until_eof(any_char, char('G')).parse_str("").unwrap(), None);
    }

    #[test]
    fn while_not_delimiter() {
        let (res, rem) = run(while_not(any_char, char('A')), "ABCA");
        assert_eq!(res.unwrap(), Some(vec![]));
        assert_eq!(rem, "ABCA");

        let (res, rem) = run(while_not(any_char, char('D')), "ABCDEF");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B', 'C']));
        assert_eq!(rem, "DEF");

        let (res, rem) = run(while_not(any_char, char('G')), "ABCDEF");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "ABCDEF");

        let (res, rem) = run(while_not(naughty, char('G')), "ABC");
        assert_eq!(res.unwrap(), None);
        assert_eq!(rem, "ABC");

        let (res, rem) = run(while_not(any_char, faulty), "ABC");
        assert!(res.is_err());
        assert_eq!(rem, "ABC");
    }

    #[test]
    fn while_not_end_of_input() {
        let (res, rem) = run(while_not_eof_or(any_char, char('G')), "ABC");
        assert_eq!(res.unwrap(), Some(vec!['A', 'B', 'C']));
        assert_eq!(rem, "");

        assert_eq!(
            while_not_eof_or(any_char, char('G')).parse_str("").unwrap(),
            Some((vec![], ""))
        );
    }

    #[test]
    fn conversions() {
        let number = try_map(one_or_more(char_in("0123456789")).recognize(), str::parse::<u8>);
        assert_eq!(number.parse_str("12a").unwrap(), Some((12, "a")));
        assert_eq!(number.parse_str("a").unwrap(), None);

        let (res, rem) = run(seq((char('x'), try_map(one_or_more(char_in("0123456789")).recognize(), str::parse::<u8>))), "x999");
        let err = res.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.position(), 1);
        assert_eq!(rem, "x999");
    }

    #[test]
    fn lookahead() {
        let (res, rem) = run(peek(literal("AB")), "ABC");
        assert_eq!(res.unwrap(), Some("AB"));
        assert_eq!(rem, "ABC");

        let (res, rem) = run(not(char('A')), "BC");
        assert_eq!(res.unwrap(), Some(()));
        assert_eq!(rem, "BC");

        assert_eq!(not(naughty).parse_str("BC").unwrap(), Some(((), "BC")));
    }

    #[test]
    fn spans() {
        let (res, rem) = run(spanned(times(2, any_char)), "héllo");
        assert_eq!(res.unwrap(), Some((vec!['h', 'é'], "hé")));
        assert_eq!(rem, "llo");

        let (res, _) = run(verify(any_char, |ch| ch.is_ascii_digit()), "x");
        assert_eq!(res.unwrap(), None);
    }

    #[test]
    fn completeness() {
        let (res, rem) = run(complete(literal("ok")), "okay");
        let err = res.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedEof);
        assert_eq!(err.position(), 2);
        assert_eq!(rem, "okay");
    }

    #[test]
    fn boxed_and_by_ref() {
        let a = char('A');
        let both = seq((a.by_ref(), a.by_ref()));
        assert_eq!(both.parse_str("AAB").unwrap(), Some((('A', 'A'), "B")));

        let list: Vec<Boxed<'_, '_, char, Error>> = vec![char('x').boxed(), any_char.boxed()];
        assert_eq!(any(list).parse_str("yz").unwrap(), Some(('y', "z")));
    }

    fn naughty_or_char(misbehave: bool) -> impl for<'a> Fn(&mut Cursor<'a>) -> PResult<char> {
        move |cursor: &mut Cursor<'_>| {
            if misbehave {
                naughty(cursor)
            } else {
                char_in("ab").parse(cursor)
            }
        }
    }

    proptest! {
        #[test]
        fn non_match_leaves_cursor_untouched(text in "[abc]{0,12}", skip in 0isize..4, misbehave in proptest::bool::ANY) {
            let leaf = naughty_or_char(misbehave);
            let mut cursor = Cursor::new(&text);
            cursor.take(skip);
            let before = cursor.checkpoint();

            macro_rules! check {
                ($parser:expr) => {
                    cursor.restore(before);
                    if let Ok(None) | Err(_) = $parser.parse(&mut cursor) {
                        prop_assert_eq!(cursor.checkpoint(), before);
                    }
                };
            }

            check!(seq((leaf.by_ref(), leaf.by_ref(), char('c'))));
            check!(all([leaf.by_ref(), leaf.by_ref()]));
            check!(any((leaf.by_ref(), char('c'))));
            check!(or(leaf.by_ref(), literal("cc")));
            check!(times(3, leaf.by_ref()));
            check!(between(2, 4, leaf.by_ref()));
            check!(one_or_more(leaf.by_ref()));
            check!(until(leaf.by_ref(), char('c')));
            check!(until_eof(leaf.by_ref(), char('c')));
            check!(while_not(leaf.by_ref(), char('c')));
            check!(string_from(seq((leaf.by_ref(), char('c')))));
            check!(try_map(leaf.by_ref(), |ch| if ch == 'a' { Ok(ch) } else { Err(ErrorKind::InvalidInput) }));
        }
    }
}
