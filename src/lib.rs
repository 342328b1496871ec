#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Backtracking parser-combinator library for Rust.
//! `parsel` is a small parser-combinator library with support for `no_std`. It is
//! built around a single mutable [`Cursor`] over an immutable `&str`, and a strict
//! contract that every parser and combinator honors: a parser that does not match
//! leaves the cursor exactly where it found it.
//!
//! # Contents
//! * [Example](#example) - Jump directly into an example parser implementation
//! * [Parse Outcomes](#parse-outcomes) - Match, non-match, and error
//! * [Defining a Parser](#defining-a-parser) - How to write your own parser
//! * [Defining a Combinator](#defining-a-combinator) - How to write your own
//!   combinator
//! * [Parsing Errors](#parsing-errors) - The `parsel` error channel
//! * [Features](#features) - Available crate features
//!
//! # Example
//! ```
//! use parsel::prelude::*;
//! use parsel::basic::{char_in, literal};
//!
//! #[derive(Debug, PartialEq)]
//! struct Color {
//!     red: u8,
//!     green: u8,
//!     blue: u8,
//! }
//!
//! fn hex_byte<'a>(cursor: &mut Cursor<'a>) -> PResult<u8> {
//!     char_in("0123456789abcdefABCDEF")
//!         .times(2)
//!         .recognize()
//!         .try_map(|digits| u8::from_str_radix(digits, 16))
//!         .parse(cursor)
//! }
//!
//! fn hex_color<'a>(cursor: &mut Cursor<'a>) -> PResult<Color> {
//!     seq((literal("#"), hex_byte, hex_byte, hex_byte))
//!         .map(|(_, red, green, blue)| Color { red, green, blue })
//!         .parse(cursor)
//! }
//!
//! assert_eq!(
//!     hex_color.parse_str("#2F14DF;").unwrap(),
//!     Some((Color { red: 0x2f, green: 0x14, blue: 0xdf }, ";")),
//! );
//! assert!(hex_color.parse_str("#2F14").unwrap().is_none());
//! ```
//!
//! # Parse Outcomes
//! A parser reports one of three outcomes through [`PResult`], which is an alias
//! for `Result<Option<T>, E>`:
//!
//! * `Ok(Some(value))` - the parser matched and the cursor sits after the
//!   consumed input.
//! * `Ok(None)` - the parser does not apply here. This is an ordinary,
//!   backtrackable outcome and the cursor is unchanged.
//! * `Err(error)` - something matched the grammar but failed validation, such as a
//!   number that does not fit its target type. Errors are not backtrackable:
//!   every enclosing combinator restores its own starting position and passes
//!   the error up unchanged, without trying alternatives or further
//!   repetitions.
//!
//! Combinators never trust their inner parsers to restore the cursor. Each one
//! records a [`Checkpoint`] before calling an inner parser and restores it when
//! the inner parser does not match, so a misbehaving leaf cannot leak partial
//! consumption to its callers.
//!
//! # Defining a Parser
//! Most user defined parsers should be plain functions. Any type implementing
//! [`Fn(&mut Cursor<'a>) -> PResult<T, E>`](core::ops::Fn) automatically implements
//! [`Parse<'a, Parsed = T, Error = E>`](Parse).
//!
//! ```
//! use parsel::{Cursor, Parse, PResult};
//!
//! // `answer` implements `Parse<'a, Parsed = i32, Error = parsel::Error>`
//! fn answer(cursor: &mut Cursor<'_>) -> PResult<i32> {
//!     match cursor.peek(2) {
//!         Some("42") => {
//!             cursor.take(2);
//!             Ok(Some(42))
//!         }
//!         _ => Ok(None),
//!     }
//! }
//!
//! assert_eq!(answer.parse_str("42!").unwrap(), Some((42, "!")));
//! ```
//!
//! When needed, [`Parse`] can always be implemented manually.
//!
//! # Defining a Combinator
//! The simplest way to define a reusable combinator is a function returning
//! [`impl Parse`](Parse).
//!
//! ```
//! use parsel::{basic::seq, Parse};
//!
//! // Applies `parser` twice and returns both values.
//! fn twice<'a, P>(parser: P) -> impl Parse<'a, Parsed = (P::Parsed, P::Parsed), Error = P::Error>
//! where
//!     P: Parse<'a> + Clone,
//! {
//!     seq((parser.clone(), parser))
//! }
//! ```
//!
//! It is usually necessary for the [`impl Parse`](Parse) return to spell out the
//! [`Parsed`](Parse::Parsed) and [`Error`](Parse::Error) associated types so that
//! type inference works in conjunction with other combinators.
//!
//! # Parsing Errors
//! The built in parsers use [`Error`], which records an [`ErrorKind`], the byte
//! offset where the failing sub-parse started, and an optional cause. Combinators
//! are generic over the error type and only require that all parsers they combine
//! agree on it.
//!
//! Fallible conversions are attached with [`Parse::try_map`]. The closure returns
//! a [`Result`] whose error type implements [`ErrorSeed`]. Any
//! [`core::error::Error`] that is `Send + Sync + 'static` is an [`ErrorSeed`] for
//! [`Error`] and becomes its [`source`](core::error::Error::source).
//!
//! ```
//! use parsel::prelude::*;
//! use parsel::basic::char_where;
//! use core::error::Error as _;
//!
//! fn small(cursor: &mut Cursor<'_>) -> PResult<u8> {
//!     char_where(|ch| ch.is_ascii_digit())
//!         .one_or_more()
//!         .recognize()
//!         .try_map(str::parse::<u8>)
//!         .parse(cursor)
//! }
//!
//! let mut cursor = Cursor::new("x=300");
//! cursor.take(2);
//! let err = small.parse(&mut cursor).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! assert_eq!(err.position(), 2);
//! assert!(err.source().is_some());
//! assert_eq!(cursor.position(), 2);
//! ```
//!
//! User defined error types can be used as well. Built in parsers can be adapted
//! with [`Parse::err_into`] or [`Parse::map_err`].
//!
//! # Features
//! There is no `std` feature, since `parsel` never makes use of types that are only
//! available in `std`. The [`alloc`] crate is always required.
//!
//! * `unicode` - Enable the [`unicode`](./unicode) module, which provides Unicode
//!   property lookups and matchers such as [`unicode::letter`](./unicode/fn.letter.html).
//!   Enabled by default.
//! * `ascii` - Enable the [`ascii`](./ascii) module, which provides ASCII
//!   character class matchers. Enabled by default.
//! * `log` - Emit `trace` level records through the [`log`](https://crates.io/crates/log)
//!   facade whenever a combinator rolls back or propagates an error.

extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => { ::log::trace!(target: "parsel", $($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

mod cursor;

pub mod basic;
pub mod text;

#[cfg(feature = "ascii")]
pub mod ascii;
#[cfg(feature = "unicode")]
pub mod unicode;

pub use cursor::*;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

extern crate self as parsel;

/// The `parsel` prelude.
pub mod prelude {
    pub use super::basic::{
        all, alt, any, between, eof, optional, or, pair, seq, string_from, times, until,
        while_not,
    };
    pub use super::{
        Cursor, Error, ErrorKind, ErrorSeed as _, Match, Or, PResult, Parse, ParseOutcome as _,
    };
}

/// A parsing error descriptor that can be used to build a parsing error.
///
/// An [`ErrorSeed`] is an error with the input position abstracted away. Fallible
/// combinators such as [`Parse::try_map`] accept any [`ErrorSeed`] for the
/// parser's error type and supply the position themselves.
///
/// [`ErrorKind`] and every `core::error::Error + Send + Sync + 'static` are
/// seeds for [`Error`]. User defined error types can implement [`ErrorSeed`]
/// for their own seeds.
pub trait ErrorSeed<E> {
    /// Combines this seed with the byte offset where the failure started.
    fn into_error(self, pos: usize) -> E;
}

/// The category of an [`Error`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// Matched input failed a validation or conversion.
    InvalidInput,
    /// The parser finished before the end of input was reached.
    ExpectedEof,
}

/// The error type of the built in parsers.
#[derive(Debug, thiserror::Error)]
#[error("{kind} at offset {pos}")]
pub struct Error {
    kind: ErrorKind,
    pos: usize,
    #[source]
    cause: Option<Box<dyn core::error::Error + Send + Sync + 'static>>,
}

/// The [`Result`] type returned by a parser.
///
/// `Ok(Some(_))` is a match, `Ok(None)` is a non-match, and `Err(_)` is an error.
/// See the [crate level documentation](crate#parse-outcomes).
pub type PResult<T, E = Error> = Result<Option<T>, E>;

/// A value that may or may not have been matched.
///
/// [`Match`] is produced by [`basic::optional`] and by the accessors of [`Or`].
/// It carries a value together with whether that value was present in the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Match<T> {
    /// The parser matched and produced this value.
    Present(T),
    /// The parser did not match.
    Absent,
}

/// The result of a binary alternation, tagged by the branch that matched.
///
/// Produced by [`basic::or`]. When neither branch matches, the alternation
/// reports a non-match instead, so an [`Or`] always holds exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Or<L, R> {
    /// The first parser matched.
    Left(L),
    /// The first parser did not match and the second one did.
    Right(R),
}

/// Trait implemented by all parsers.
///
/// The [`Parse`] trait is where the logic of parsing is implemented. However,
/// most `parsel` users will not implement [`Parse`] directly. See the crate level
/// documentation for examples of user defined parsers.
pub trait Parse<'a> {
    /// The value type that is produced by the parser on success.
    type Parsed;

    /// The error type that is produced by the parser on failure.
    type Error;

    /// Parses from the current position of `cursor`.
    ///
    /// On a match the cursor is left after the consumed input. On a non-match
    /// or an error the cursor must be left where it was.
    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<Self::Parsed, Self::Error>;

    /// Parses from the start of `text`.
    ///
    /// On a match, the parsed value is returned together with the input that
    /// was not consumed.
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::literal;
    /// assert_eq!(literal("ab").parse_str("abc").unwrap(), Some(("ab", "c")));
    /// assert_eq!(literal("ab").parse_str("xyz").unwrap(), None);
    /// ```
    fn parse_str(&self, text: &'a str) -> PResult<(Self::Parsed, &'a str), Self::Error> {
        let mut cursor = Cursor::new(text);
        let parsed = self.parse(&mut cursor)?;
        Ok(parsed.map(|value| (value, cursor.remaining())))
    }

    /// Creates a parser whose parsed result is transformed.
    ///
    /// See also [`basic::map`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::any_char;
    /// fn upper(cursor: &mut Cursor<'_>) -> PResult<char> {
    ///     any_char.map(|ch| ch.to_ascii_uppercase()).parse(cursor)
    /// }
    ///
    /// assert_eq!(upper.parse_str("ab").unwrap(), Some(('A', "b")));
    /// ```
    #[inline]
    fn map<F, R>(self, map_fn: F) -> impl Parse<'a, Parsed = R, Error = Self::Error>
    where
        Self: Sized,
        F: Fn(Self::Parsed) -> R,
    {
        basic::map(self, map_fn)
    }

    /// Creates a parser whose parsed result is fallibly transformed.
    ///
    /// When `try_map_fn` returns [`Err`], the new parser restores the cursor
    /// and reports an error built from the returned [`ErrorSeed`], positioned
    /// where `self` started.
    ///
    /// See also [`basic::try_map`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::char_where;
    /// fn number(cursor: &mut Cursor<'_>) -> PResult<u8> {
    ///     char_where(|ch| ch.is_ascii_digit())
    ///         .one_or_more()
    ///         .recognize()
    ///         .try_map(str::parse::<u8>)
    ///         .parse(cursor)
    /// }
    ///
    /// assert_eq!(number.parse_str("42").unwrap(), Some((42, "")));
    /// assert!(number.parse_str("420").is_err());
    /// ```
    #[inline]
    fn try_map<F, R, S>(self, try_map_fn: F) -> impl Parse<'a, Parsed = R, Error = Self::Error>
    where
        Self: Sized,
        F: Fn(Self::Parsed) -> Result<R, S>,
        S: ErrorSeed<Self::Error>,
    {
        basic::try_map(self, try_map_fn)
    }

    /// Creates a parser whose error is transformed.
    ///
    /// See also [`basic::map_err`].
    #[inline]
    fn map_err<F, R>(self, map_err_fn: F) -> impl Parse<'a, Parsed = Self::Parsed, Error = R>
    where
        Self: Sized,
        F: Fn(Self::Error) -> R,
    {
        basic::map_err(self, map_err_fn)
    }

    /// Creates a parser whose error is converted with [`Into`].
    ///
    /// See also [`basic::err_into`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::literal;
    /// #[derive(Debug)]
    /// struct MyError(parsel::Error);
    ///
    /// impl From<parsel::Error> for MyError {
    ///     fn from(err: parsel::Error) -> Self {
    ///         Self(err)
    ///     }
    /// }
    ///
    /// fn keyword<'a>(cursor: &mut Cursor<'a>) -> PResult<&'a str, MyError> {
    ///     literal("let").err_into().parse(cursor)
    /// }
    ///
    /// assert_eq!(keyword.parse_str("let x").unwrap(), Some(("let", " x")));
    /// ```
    #[inline]
    fn err_into<E>(self) -> impl Parse<'a, Parsed = Self::Parsed, Error = E>
    where
        Self: Sized,
        Self::Error: Into<E>,
    {
        basic::err_into(self)
    }

    /// Creates a parser that replaces the parsed value with `value`.
    ///
    /// See also [`basic::with_value`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::literal;
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum Token {
    ///     Begin,
    /// }
    ///
    /// assert_eq!(
    ///     literal("begin").with_value(Token::Begin).parse_str("begin end").unwrap(),
    ///     Some((Token::Begin, " end")),
    /// );
    /// ```
    #[inline]
    fn with_value<T>(self, value: T) -> impl Parse<'a, Parsed = T, Error = Self::Error>
    where
        Self: Sized,
        T: Clone,
    {
        basic::with_value(self, value)
    }

    /// Creates a parser that only matches when the parsed value passes
    /// `verify_fn`.
    ///
    /// A rejected value is a non-match, not an error.
    ///
    /// See also [`basic::verify`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::any_char;
    /// let vowel = any_char.verify(|ch| "aeiou".contains(*ch));
    /// assert_eq!(vowel.parse_str("ab").unwrap(), Some(('a', "b")));
    /// assert_eq!(vowel.parse_str("ba").unwrap(), None);
    /// ```
    #[inline]
    fn verify<F>(self, verify_fn: F) -> impl Parse<'a, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
        F: Fn(&Self::Parsed) -> bool,
    {
        basic::verify(self, verify_fn)
    }

    /// Creates a parser that turns a non-match into [`Match::Absent`].
    ///
    /// Errors are still reported as errors.
    ///
    /// See also [`basic::optional`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::literal;
    /// let sign = literal("-").optional();
    /// assert_eq!(sign.parse_str("-1").unwrap(), Some((Match::Present("-"), "1")));
    /// assert_eq!(sign.parse_str("1").unwrap(), Some((Match::Absent, "1")));
    /// ```
    #[inline]
    fn optional(self) -> impl Parse<'a, Parsed = Match<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::optional(self)
    }

    /// Creates a parser that returns the input consumed by `self`.
    ///
    /// See also [`basic::string_from`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::char_in;
    /// let digits = char_in("0123456789").one_or_more().recognize();
    /// assert_eq!(digits.parse_str("2024-01").unwrap(), Some(("2024", "-01")));
    /// ```
    #[inline]
    fn recognize(self) -> impl Parse<'a, Parsed = &'a str, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::string_from(self)
    }

    /// Creates a parser that returns the parsed value together with the input
    /// consumed to produce it.
    ///
    /// See also [`basic::spanned`].
    #[inline]
    fn spanned(self) -> impl Parse<'a, Parsed = (Self::Parsed, &'a str), Error = Self::Error>
    where
        Self: Sized,
    {
        basic::spanned(self)
    }

    /// Creates a parser that matches without consuming input.
    ///
    /// See also [`basic::peek`].
    #[inline]
    fn peek(self) -> impl Parse<'a, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::peek(self)
    }

    /// Creates a parser that matches, without consuming input, only where
    /// `self` does not.
    ///
    /// See also [`basic::not`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::literal;
    /// let not_comment = literal("//").not();
    /// assert_eq!(not_comment.parse_str("x // y").unwrap(), Some(((), "x // y")));
    /// assert_eq!(not_comment.parse_str("// y").unwrap(), None);
    /// ```
    #[inline]
    fn not(self) -> impl Parse<'a, Parsed = (), Error = Self::Error>
    where
        Self: Sized,
    {
        basic::not(self)
    }

    /// Creates a parser that reports an [`ErrorKind::ExpectedEof`] error when
    /// `self` matches without consuming all input.
    ///
    /// See also [`basic::complete`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::literal;
    /// let exact = literal("ok").complete();
    /// assert_eq!(exact.parse_str("ok").unwrap(), Some(("ok", "")));
    /// assert_eq!(exact.parse_str("okay").unwrap_err().kind(), ErrorKind::ExpectedEof);
    /// ```
    #[inline]
    fn complete(self) -> impl Parse<'a, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
        ErrorKind: ErrorSeed<Self::Error>,
    {
        basic::complete(self)
    }

    /// Creates a parser out of a reference to another parser.
    ///
    /// [`Parse`] is not automatically implemented for references to types that
    /// implement [`Parse`], so [`Parse::by_ref`] can be used to reuse a parser
    /// without moving it.
    ///
    /// See also [`basic::by_ref`].
    #[inline]
    fn by_ref<'p>(&'p self) -> impl Parse<'a, Parsed = Self::Parsed, Error = Self::Error> + 'p
    where
        Self: Sized,
    {
        basic::by_ref(self)
    }

    /// Erases the type of the parser.
    ///
    /// Boxed parsers of the same [`Parsed`](Parse::Parsed) and
    /// [`Error`](Parse::Error) types can be stored together, for example as
    /// the alternatives of [`basic::any`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::{literal, char_in};
    /// let options = vec![
    ///     literal("yes").boxed(),
    ///     char_in("yY").recognize().boxed(),
    /// ];
    /// assert_eq!(any(options).parse_str("Yes").unwrap(), Some(("Y", "es")));
    /// ```
    #[inline]
    fn boxed<'p>(self) -> basic::Boxed<'p, 'a, Self::Parsed, Self::Error>
    where
        Self: Sized + 'p,
    {
        basic::Boxed::new(self)
    }

    /// Creates a parser that applies `self` and then `other`.
    ///
    /// See also [`basic::pair`] and [`basic::seq`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::any_char;
    /// assert_eq!(any_char.then(any_char).parse_str("abc").unwrap(), Some((('a', 'b'), "c")));
    /// assert_eq!(any_char.then(any_char).parse_str("a").unwrap(), None);
    /// ```
    #[inline]
    fn then<P>(
        self,
        other: P,
    ) -> impl Parse<'a, Parsed = (Self::Parsed, P::Parsed), Error = Self::Error>
    where
        Self: Sized,
        P: Parse<'a, Error = Self::Error>,
    {
        basic::pair(self, other)
    }

    /// Creates a parser that tries `self` and then `other`, reporting which of
    /// the two matched.
    ///
    /// See also [`basic::or`].
    ///
    /// # Example
    /// ```
    /// # use parsel::prelude::*;
    /// # use parsel::basic::{any_char, literal};
    /// let p = literal("null").or(any_char);
    /// assert_eq!(p.parse_str("null").unwrap(), Some((Or::Left("null"), "")));
    /// assert_eq!(p.parse_str("x").unwrap(), Some((Or::Right('x'), "")));
    /// ```
    #[inline]
    fn or<P>(self, other: P) -> impl Parse<'a, Parsed = Or<Self::Parsed, P::Parsed>, Error = Self::Error>
    where
        Self: Sized,
        P: Parse<'a, Error = Self::Error>,
    {
        basic::or(self, other)
    }

    /// Creates a parser that applies `self` exactly `count` times.
    ///
    /// See also [`basic::times`].
    #[inline]
    fn times(self, count: usize) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::times(count, self)
    }

    /// Creates a parser that applies `self` at least `min` and at most `max`
    /// times.
    ///
    /// See also [`basic::between`].
    #[inline]
    fn between(
        self,
        min: usize,
        max: usize,
    ) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::between(min, max, self)
    }

    /// Creates a parser that applies `self` at least `min` times.
    ///
    /// See also [`basic::at_least`].
    #[inline]
    fn at_least(self, min: usize) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::at_least(min, self)
    }

    /// Creates a parser that applies `self` at most `max` times.
    ///
    /// See also [`basic::at_most`].
    #[inline]
    fn at_most(self, max: usize) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::at_most(max, self)
    }

    /// Creates a parser that applies `self` as many times as possible.
    ///
    /// See also [`basic::zero_or_more`].
    #[inline]
    fn zero_or_more(self) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::zero_or_more(self)
    }

    /// Creates a parser that applies `self` as many times as possible, but at
    /// least once.
    ///
    /// See also [`basic::one_or_more`].
    #[inline]
    fn one_or_more(self) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::one_or_more(self)
    }

    /// Creates a parser that applies `self` until `delimiter` matches after
    /// an item.
    ///
    /// See also [`basic::until`].
    #[inline]
    fn until<Q>(self, delimiter: Q) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
        Q: Parse<'a, Error = Self::Error>,
    {
        basic::until(self, delimiter)
    }

    /// Like [`Parse::until`], but the end of input also ends the scan.
    ///
    /// See also [`basic::until_eof`].
    #[inline]
    fn until_eof<Q>(
        self,
        delimiter: Q,
    ) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
        Q: Parse<'a, Error = Self::Error>,
    {
        basic::until_eof(self, delimiter)
    }

    /// Creates a parser that applies `self` for as long as `delimiter` does
    /// not match.
    ///
    /// See also [`basic::while_not`].
    #[inline]
    fn while_not<Q>(
        self,
        delimiter: Q,
    ) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
        Q: Parse<'a, Error = Self::Error>,
    {
        basic::while_not(self, delimiter)
    }

    /// Like [`Parse::while_not`], but the end of input also ends the scan.
    ///
    /// See also [`basic::while_not_eof_or`].
    #[inline]
    fn while_not_eof_or<Q>(
        self,
        delimiter: Q,
    ) -> impl Parse<'a, Parsed = Vec<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
        Q: Parse<'a, Error = Self::Error>,
    {
        basic::while_not_eof_or(self, delimiter)
    }
}

mod sealed {
    use super::PResult;

    pub trait Sealed {}

    impl<T, E> Sealed for PResult<T, E> {}
}

/// Additional convenience methods for [`PResult`].
pub trait ParseOutcome: sealed::Sealed {
    type Parsed;
    type Error;

    /// Returns `true` for `Ok(Some(_))`.
    fn is_match(&self) -> bool;

    /// Returns `true` for `Ok(None)`.
    fn is_no_match(&self) -> bool;

    /// Returns the parsed value, if any.
    fn parsed(&self) -> Option<&Self::Parsed>;

    /// Returns the error, if any.
    fn error(&self) -> Option<&Self::Error>;
}

impl<T, E> ParseOutcome for PResult<T, E> {
    type Parsed = T;
    type Error = E;

    fn is_match(&self) -> bool {
        matches!(self, Ok(Some(_)))
    }

    fn is_no_match(&self) -> bool {
        matches!(self, Ok(None))
    }

    fn parsed(&self) -> Option<&T> {
        match self {
            Ok(Some(val)) => Some(val),
            _ => None,
        }
    }

    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

impl<'a, F, T, E> Parse<'a> for F
where
    F: Fn(&mut Cursor<'a>) -> PResult<T, E>,
{
    type Parsed = T;
    type Error = E;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<T, E> {
        (*self)(cursor)
    }
}

impl Error {
    /// Creates an error without a cause.
    pub const fn new(kind: ErrorKind, pos: usize) -> Self {
        Self {
            kind,
            pos,
            cause: None,
        }
    }

    /// Creates an error caused by another error.
    pub fn caused_by<C>(kind: ErrorKind, pos: usize, cause: C) -> Self
    where
        C: Into<Box<dyn core::error::Error + Send + Sync + 'static>>,
    {
        Self {
            kind,
            pos,
            cause: Some(cause.into()),
        }
    }

    /// The category of the error.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte offset of the sub-parse that failed.
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "invalid input",
            Self::ExpectedEof => "expected end of input",
        })
    }
}

impl ErrorSeed<Error> for ErrorKind {
    fn into_error(self, pos: usize) -> Error {
        Error::new(self, pos)
    }
}

impl<C> ErrorSeed<Error> for C
where
    C: core::error::Error + Send + Sync + 'static,
{
    fn into_error(self, pos: usize) -> Error {
        Error::caused_by(ErrorKind::InvalidInput, pos, self)
    }
}

impl<T> Match<T> {
    /// Returns `true` if a value was matched.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if nothing was matched.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts to a [`Match`] of a reference.
    pub const fn as_ref(&self) -> Match<&T> {
        match self {
            Self::Present(val) => Match::Present(val),
            Self::Absent => Match::Absent,
        }
    }

    /// Transforms the matched value, if any.
    pub fn map<F, R>(self, map_fn: F) -> Match<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(val) => Match::Present(map_fn(val)),
            Self::Absent => Match::Absent,
        }
    }

    /// Returns the matched value, if any.
    pub fn value(self) -> Option<T> {
        self.into()
    }

    /// Returns the matched value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(val) => val,
            Self::Absent => default,
        }
    }
}

impl<T> Default for Match<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Match<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => Self::Present(val),
            None => Self::Absent,
        }
    }
}

impl<T> From<Match<T>> for Option<T> {
    fn from(m: Match<T>) -> Self {
        match m {
            Match::Present(val) => Some(val),
            Match::Absent => None,
        }
    }
}

impl<L, R> Or<L, R> {
    /// Returns `true` if the first parser matched.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the second parser matched.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The value of the first parser, present only if it matched.
    pub const fn left(&self) -> Match<&L> {
        match self {
            Self::Left(val) => Match::Present(val),
            Self::Right(_) => Match::Absent,
        }
    }

    /// The value of the second parser, present only if it matched.
    pub const fn right(&self) -> Match<&R> {
        match self {
            Self::Left(_) => Match::Absent,
            Self::Right(val) => Match::Present(val),
        }
    }

    /// Splits into the values of both sides.
    pub fn into_matches(self) -> (Match<L>, Match<R>) {
        match self {
            Self::Left(val) => (Match::Present(val), Match::Absent),
            Self::Right(val) => (Match::Absent, Match::Present(val)),
        }
    }
}

impl<T> Or<T, T> {
    /// Returns the value of whichever side matched.
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(val) | Self::Right(val) => val,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::basic::literal;
    use alloc::string::ToString;
    use core::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("not a weekday")]
    struct NotAWeekday;

    #[test]
    fn error_display_and_source() {
        let err = Error::caused_by(ErrorKind::InvalidInput, 3, NotAWeekday);
        assert_eq!(err.to_string(), "invalid input at offset 3");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("not a weekday"));
        assert!(Error::new(ErrorKind::ExpectedEof, 0).source().is_none());
    }

    #[test]
    fn error_seeds() {
        let err: Error = ErrorKind::ExpectedEof.into_error(7);
        assert_eq!(err.kind(), ErrorKind::ExpectedEof);
        assert_eq!(err.position(), 7);

        let err: Error = NotAWeekday.into_error(2);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.source().is_some());
    }

    #[test]
    fn match_accessors() {
        let present = Match::Present(5);
        assert!(present.is_present());
        assert_eq!(present.as_ref().map(|v| v * 2), Match::Present(10));
        assert_eq!(present.value(), Some(5));
        assert_eq!(Match::<i32>::default(), Match::Absent);
        assert_eq!(Match::<i32>::Absent.unwrap_or(1), 1);
        assert_eq!(Match::from(Some('a')), Match::Present('a'));
    }

    #[test]
    fn or_accessors() {
        let left: Or<&str, char> = Or::Left("A");
        assert_eq!(left.left(), Match::Present(&"A"));
        assert_eq!(left.right(), Match::Absent);
        assert_eq!(left.into_matches(), (Match::Present("A"), Match::Absent));

        let right: Or<&str, &str> = Or::Right("B");
        assert!(right.is_right());
        assert_eq!(right.into_inner(), "B");
    }

    #[test]
    fn outcome_helpers() {
        let res = literal("A").parse(&mut Cursor::new("AB"));
        assert!(res.is_match());
        assert_eq!(res.parsed(), Some(&"A"));

        let res = literal("A").parse(&mut Cursor::new("BA"));
        assert!(res.is_no_match());
        assert!(res.error().is_none());
    }

    #[test]
    fn parse_str_returns_remaining() {
        assert_eq!(literal("A").parse_str("ABC").unwrap(), Some(("A", "BC")));
        assert_eq!(literal("A").parse_str("").unwrap(), None);
    }
}
