//! Whitespace, line break, and span-returning scan parsers.
//!
//! The parsers in this module are built entirely out of [`basic`](crate::basic)
//! combinators. The `string_*` scans are the character level counterparts of
//! [`until`](crate::basic::until) and friends: they advance one code point at a
//! time and return the consumed input as a single slice.

use crate::basic::{
    any, char_in, char_where, literal, one_or_more, string_from, until, until_eof, while_not,
    while_not_eof_or, zero_or_more,
};
use crate::{Cursor, PResult, Parse};
use core::marker::PhantomData;

/// Matches one or more Unicode `White_Space` code points.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::text::whitespace;
/// assert_eq!(whitespace.parse_str(" \t \n \r ABC").unwrap(), Some((" \t \n \r ", "ABC")));
/// assert_eq!(whitespace.parse_str("ABC").unwrap(), None);
/// ```
pub fn whitespace<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    string_from(one_or_more(char_where(char::is_whitespace))).parse(cursor)
}

/// Matches one or more spaces or tabs.
pub fn inline_whitespace<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    string_from(one_or_more(char_in(" \t"))).parse(cursor)
}

/// Like [`whitespace`], but always matches, possibly with an empty span.
pub fn optional_whitespace<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    string_from(zero_or_more(char_where(char::is_whitespace))).parse(cursor)
}

/// Like [`inline_whitespace`], but always matches, possibly with an empty span.
pub fn optional_inline_whitespace<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    string_from(zero_or_more(char_in(" \t"))).parse(cursor)
}

/// Matches a carriage return.
pub fn cr<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    literal("\r").parse(cursor)
}

/// Matches a line feed.
pub fn lf<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    literal("\n").parse(cursor)
}

/// Matches a carriage return followed by a line feed.
pub fn crlf<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    literal("\r\n").parse(cursor)
}

/// Matches a Windows or Unix line break.
///
/// `"\r\n"` is tried before `"\n"`, and a lone `"\r"` is not a line break.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::text::newline;
/// assert_eq!(newline.parse_str("\r\nx").unwrap(), Some(("\r\n", "x")));
/// assert_eq!(newline.parse_str("\nx").unwrap(), Some(("\n", "x")));
/// assert_eq!(newline.parse_str("\rx").unwrap(), None);
/// ```
pub fn newline<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str> {
    any((crlf, lf)).parse(cursor)
}

/// Consumes one code point, with an error type chosen by the caller.
#[derive(Debug)]
struct NextChar<E>(PhantomData<fn() -> E>);

impl<E> Clone for NextChar<E> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<'a, E> Parse<'a> for NextChar<E> {
    type Parsed = char;
    type Error = E;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<char, E> {
        Ok(cursor.next_char())
    }
}

const fn next_char<E>() -> NextChar<E> {
    NextChar(PhantomData)
}

/// Creates a parser that consumes code points until `delimiter` matches, and
/// returns the consumed input.
///
/// At least one code point is required before the delimiter. Reaching the end
/// of input without finding the delimiter is a non-match.
///
/// See also [`until`](crate::basic::until).
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::text::string_until;
/// # use parsel::basic::char;
/// assert_eq!(string_until(char('D')).parse_str("ABCDEF").unwrap(), Some(("ABC", "DEF")));
/// assert_eq!(string_until(char('G')).parse_str("ABCDEF").unwrap(), None);
/// ```
#[inline]
pub const fn string_until<'a, Q>(delimiter: Q) -> impl Parse<'a, Parsed = &'a str, Error = Q::Error>
where
    Q: Parse<'a>,
{
    string_from(until(next_char(), delimiter))
}

/// Like [`string_until`], but reaching the end of input also ends the scan.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::text::string_until_eof;
/// # use parsel::basic::char;
/// assert_eq!(string_until_eof(char('G')).parse_str("ABCDEF").unwrap(), Some(("ABCDEF", "")));
/// assert_eq!(string_until_eof(char('G')).parse_str("").unwrap(), None);
/// ```
#[inline]
pub const fn string_until_eof<'a, Q>(
    delimiter: Q,
) -> impl Parse<'a, Parsed = &'a str, Error = Q::Error>
where
    Q: Parse<'a>,
{
    string_from(until_eof(next_char(), delimiter))
}

/// Creates a parser that consumes code points for as long as `delimiter` does
/// not match, and returns the consumed input.
///
/// An empty span is returned when the delimiter matches immediately. Reaching
/// the end of input without finding the delimiter is a non-match.
///
/// See also [`while_not`](crate::basic::while_not).
#[inline]
pub const fn string_while_not<'a, Q>(
    delimiter: Q,
) -> impl Parse<'a, Parsed = &'a str, Error = Q::Error>
where
    Q: Parse<'a>,
{
    string_from(while_not(next_char(), delimiter))
}

/// Like [`string_while_not`], but reaching the end of input also ends the
/// scan.
#[inline]
pub const fn string_while_not_eof_or<'a, Q>(
    delimiter: Q,
) -> impl Parse<'a, Parsed = &'a str, Error = Q::Error>
where
    Q: Parse<'a>,
{
    string_from(while_not_eof_or(next_char(), delimiter))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::basic::{char, literal_insensitive, seq};
    use crate::{Error, ErrorKind};

    fn digit(cursor: &mut Cursor<'_>) -> PResult<char> {
        char_where(|ch| ch.is_ascii_digit()).parse(cursor)
    }

    #[test]
    fn whitespace_variants() {
        assert_eq!(
            whitespace.parse_str(" \t \n \r ABC").unwrap(),
            Some((" \t \n \r ", "ABC"))
        );
        assert_eq!(whitespace.parse_str("\u{a0}\u{2003}x").unwrap(), Some(("\u{a0}\u{2003}", "x")));
        assert_eq!(whitespace.parse_str("").unwrap(), None);

        assert_eq!(inline_whitespace.parse_str(" \t\nABC").unwrap(), Some((" \t", "\nABC")));
        assert_eq!(inline_whitespace.parse_str("\nABC").unwrap(), None);

        assert_eq!(optional_whitespace.parse_str("ABC").unwrap(), Some(("", "ABC")));
        assert_eq!(optional_whitespace.parse_str(" \nABC").unwrap(), Some((" \n", "ABC")));
        assert_eq!(optional_inline_whitespace.parse_str("\nABC").unwrap(), Some(("", "\nABC")));
        assert_eq!(optional_inline_whitespace.parse_str("  ABC").unwrap(), Some(("  ", "ABC")));
    }

    #[test]
    fn line_breaks() {
        assert_eq!(cr.parse_str("\r\n").unwrap(), Some(("\r", "\n")));
        assert_eq!(lf.parse_str("\r\n").unwrap(), None);
        assert_eq!(crlf.parse_str("\r\n\n").unwrap(), Some(("\r\n", "\n")));
        assert_eq!(crlf.parse_str("\n").unwrap(), None);
        assert_eq!(newline.parse_str("\r\n\n").unwrap(), Some(("\r\n", "\n")));
        assert_eq!(newline.parse_str("\n\r\n").unwrap(), Some(("\n", "\r\n")));
        assert_eq!(newline.parse_str("x").unwrap(), None);
    }

    #[test]
    fn scans() {
        assert_eq!(string_until(char('D')).parse_str("ABCDEF").unwrap(), Some(("ABC", "DEF")));
        assert_eq!(string_until(char('A')).parse_str("ABCA").unwrap(), Some(("ABC", "A")));
        assert_eq!(string_until(char('A')).parse_str("").unwrap(), None);

        assert_eq!(string_until_eof(char('G')).parse_str("ABCDEF").unwrap(), Some(("ABCDEF", "")));
        assert_eq!(string_until_eof(char('C')).parse_str("ABCDEF").unwrap(), Some(("AB", "CDEF")));
        assert_eq!(string_until_eof(char('G')).parse_str("").unwrap(), None);

        assert_eq!(string_while_not(digit).parse_str("1ABCDEF").unwrap(), Some(("", "1ABCDEF")));
        assert_eq!(string_while_not(digit).parse_str("AB1CDEF").unwrap(), Some(("AB", "1CDEF")));
        assert_eq!(string_while_not(digit).parse_str("ABCDEF").unwrap(), None);

        assert_eq!(string_while_not_eof_or(digit).parse_str("ABCDEF").unwrap(), Some(("ABCDEF", "")));
        assert_eq!(string_while_not_eof_or(digit).parse_str("").unwrap(), Some(("", "")));
    }

    #[test]
    fn scans_return_source_slices() {
        let text = "ünïcödé;";
        let (span, rest) = string_until(char(';')).parse_str(text).unwrap().unwrap();
        assert_eq!(span, "ünïcödé");
        assert_eq!(rest, ";");
        assert!(core::ptr::eq(span.as_ptr(), text.as_ptr()));
    }

    #[test]
    fn scan_over_multi_code_point_delimiter() {
        let p = seq((string_until(literal_insensitive("end")), literal_insensitive("END")));
        assert_eq!(p.parse_str("body End").unwrap(), Some((("body ", "End"), "")));
    }

    #[test]
    fn scan_errors_roll_back() {
        fn faulty(cursor: &mut Cursor<'_>) -> PResult<()> {
            match cursor.peek_char() {
                Some('!') => Err(Error::new(ErrorKind::InvalidInput, cursor.position())),
                _ => Ok(None),
            }
        }

        let mut cursor = Cursor::new("AB!C");
        let err = string_while_not(faulty).parse(&mut cursor).unwrap_err();
        assert_eq!(err.position(), 2);
        assert_eq!(cursor.position(), 0);
    }
}
