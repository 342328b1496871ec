//! Parsers for ASCII text.
//!
//! The parsers in this module produce [`AsciiChar`] and [`AsciiStr`] values
//! from the [`ascii`](::ascii) crate. Code points outside of the ASCII range
//! never match.

// TODO: Switch to `core::ascii::Char` once it is stabilized

use crate::{Cursor, Error, PResult, Parse};

#[doc(inline)]
pub use ascii::{AsciiChar, AsciiStr};

fn next_ascii_if<F>(cursor: &mut Cursor<'_>, accept: F) -> PResult<AsciiChar>
where
    F: Fn(AsciiChar) -> bool,
{
    match cursor.peek_char().map(AsciiChar::from_ascii) {
        Some(Ok(ch)) if accept(ch) => {
            cursor.next_char();
            Ok(Some(ch))
        }
        _ => Ok(None),
    }
}

/// Matches any ASCII character.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// use parsel::ascii::{self, AsciiChar};
///
/// assert_eq!(ascii::char.parse_str("a").unwrap(), Some((AsciiChar::a, "")));
/// assert_eq!(ascii::char.parse_str("á").unwrap(), None);
/// ```
pub fn char(cursor: &mut Cursor<'_>) -> PResult<AsciiChar> {
    next_ascii_if(cursor, |_| true)
}

/// Matches an ASCII decimal digit.
pub fn digit(cursor: &mut Cursor<'_>) -> PResult<AsciiChar> {
    next_ascii_if(cursor, |ch| ch.is_ascii_digit())
}

/// Matches an ASCII hexadecimal digit, in either case.
pub fn hex_digit(cursor: &mut Cursor<'_>) -> PResult<AsciiChar> {
    next_ascii_if(cursor, |ch| ch.is_ascii_hexdigit())
}

/// Matches an ASCII letter.
pub fn alphabetic(cursor: &mut Cursor<'_>) -> PResult<AsciiChar> {
    next_ascii_if(cursor, |ch| ch.is_alphabetic())
}

/// Matches an ASCII letter or decimal digit.
pub fn alphanumeric(cursor: &mut Cursor<'_>) -> PResult<AsciiChar> {
    next_ascii_if(cursor, |ch| ch.is_alphanumeric())
}

/// Matches one ASCII whitespace character: space, tab, line feed, form feed or
/// carriage return.
pub fn whitespace_char(cursor: &mut Cursor<'_>) -> PResult<AsciiChar> {
    next_ascii_if(cursor, |ch| ch.is_ascii_whitespace())
}

#[derive(Debug, Clone)]
struct CharWhereParser<F>(F);

impl<'a, F> Parse<'a> for CharWhereParser<F>
where
    F: Fn(AsciiChar) -> bool,
{
    type Parsed = AsciiChar;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<AsciiChar> {
        next_ascii_if(cursor, &self.0)
    }
}

/// Creates a parser that matches one ASCII character accepted by `predicate`.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// use parsel::ascii::{self, AsciiChar};
///
/// let sign = ascii::char_where(|ch| ch == AsciiChar::Plus || ch == AsciiChar::Minus);
/// assert_eq!(sign.parse_str("-1").unwrap(), Some((AsciiChar::Minus, "1")));
/// ```
#[inline]
pub const fn char_where<'a, F>(predicate: F) -> impl Parse<'a, Parsed = AsciiChar, Error = Error>
where
    F: Fn(AsciiChar) -> bool,
{
    CharWhereParser(predicate)
}

#[derive(Debug, Clone)]
struct LiteralParser<S>(S, bool);

impl<'a, S> Parse<'a> for LiteralParser<S>
where
    S: AsRef<[AsciiChar]>,
{
    type Parsed = &'a AsciiStr;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<&'a AsciiStr> {
        let expected = <&AsciiStr>::from(self.0.as_ref()).as_str();
        let Some(candidate) = cursor.remaining().get(..expected.len()) else {
            return Ok(None);
        };
        let matched = if self.1 {
            candidate.eq_ignore_ascii_case(expected)
        } else {
            candidate == expected
        };
        match AsciiStr::from_ascii(candidate) {
            Ok(text) if matched => {
                cursor.take(text.len() as isize);
                Ok(Some(text))
            }
            _ => Ok(None),
        }
    }
}

/// Creates a parser that matches the ASCII string `expected` exactly.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// use parsel::ascii::{self, AsciiStr};
///
/// let get = ascii::literal(AsciiStr::from_ascii("GET").unwrap());
/// assert_eq!(get.parse_str("GET /").unwrap().map(|(m, rem)| (m.as_str(), rem)), Some(("GET", " /")));
/// assert_eq!(get.parse_str("get /").unwrap(), None);
/// ```
#[inline]
pub const fn literal<'a, S>(expected: S) -> impl Parse<'a, Parsed = &'a AsciiStr, Error = Error>
where
    S: AsRef<[AsciiChar]>,
{
    LiteralParser(expected, false)
}

/// Creates a parser that matches the ASCII string `expected`, ignoring ASCII
/// case.
///
/// The parsed value is the matched input, so the original casing is
/// preserved.
#[inline]
pub const fn literal_insensitive<'a, S>(
    expected: S,
) -> impl Parse<'a, Parsed = &'a AsciiStr, Error = Error>
where
    S: AsRef<[AsciiChar]>,
{
    LiteralParser(expected, true)
}
