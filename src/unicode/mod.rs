//! Parsers driven by Unicode character properties.
//!
//! Property data comes from the [`icu_properties`] crate, so lookups follow
//! the Unicode version that crate is built with rather than the one `core`
//! uses for methods such as [`char::is_alphabetic`].

use crate::{Cursor, Error, PResult, Parse};

pub mod prop;

use prop::GeneralCategory;

/// A set of code points, described by a Unicode property.
///
/// See the [`prop`] module for the available properties and for how to combine
/// them.
pub trait Property: core::fmt::Debug + Copy {
    /// Returns `true` if `ch` has this property.
    fn contains(self, ch: char) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct CharWithPropParser<P>(P);

impl<'a, P> Parse<'a> for CharWithPropParser<P>
where
    P: Property,
{
    type Parsed = char;
    type Error = Error;

    fn parse(&self, cursor: &mut Cursor<'a>) -> PResult<char> {
        match cursor.peek_char() {
            Some(ch) if self.0.contains(ch) => Ok(cursor.next_char()),
            _ => Ok(None),
        }
    }
}

/// Creates a parser that matches one code point with `property`.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// use parsel::unicode::{char_with_prop, prop::{GeneralCategory, WhiteSpace}};
///
/// let symbol = char_with_prop(GeneralCategory::S & !WhiteSpace);
/// assert_eq!(symbol.parse_str("€5").unwrap(), Some(('€', "5")));
/// assert_eq!(symbol.parse_str("5€").unwrap(), None);
/// ```
#[inline]
pub const fn char_with_prop<'a, P>(property: P) -> impl Parse<'a, Parsed = char, Error = Error>
where
    P: Property,
{
    CharWithPropParser(property)
}

/// Matches a letter, any code point in general category `L`.
///
/// # Example
/// ```
/// # use parsel::prelude::*;
/// # use parsel::unicode::letter;
/// assert_eq!(letter.parse_str("ñu").unwrap(), Some(('ñ', "u")));
/// assert_eq!(letter.parse_str("1a").unwrap(), None);
/// ```
pub fn letter(cursor: &mut Cursor<'_>) -> PResult<char> {
    char_with_prop(GeneralCategory::L).parse(cursor)
}

/// Matches a number, any code point in general category `N`.
///
/// This includes decimal digits of every script as well as letter-like and
/// other numerals such as `Ⅻ` and `½`.
pub fn digit(cursor: &mut Cursor<'_>) -> PResult<char> {
    char_with_prop(GeneralCategory::N).parse(cursor)
}
