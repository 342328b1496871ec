//! Unicode property definitions and combinators.
//!
//! Properties are small `Copy` values that answer whether a code point belongs
//! to a set. They can be combined with the `!`, `&` and `|` operators, or with
//! [`not`], [`and`], [`or`], [`all!`] and [`any!`].
//!
//! ```
//! use parsel::unicode::prop::{GeneralCategory, WhiteSpace};
//! use parsel::unicode::Property;
//!
//! let visible = !WhiteSpace & !GeneralCategory::C;
//! assert!(visible.contains('a'));
//! assert!(!visible.contains(' '));
//! assert!(!visible.contains('\u{7}'));
//! ```

use super::Property;
use icu_properties::props::{self as icup, BinaryProperty, EnumeratedProperty};

#[doc(inline)]
pub use crate::{unicode_prop_all as all, unicode_prop_any as any};

/// Combines properties so that a code point must have all of them.
#[doc(hidden)]
#[macro_export]
macro_rules! unicode_prop_all {
    ($prop:expr $(,)?) => {
        $prop
    };
    ($prop0:expr, $($propn:expr),+ $(,)?) => {
        $crate::unicode::prop::and($prop0, $crate::unicode::prop::all!($($propn),+))
    };
}

/// Combines properties so that a code point must have at least one of them.
#[doc(hidden)]
#[macro_export]
macro_rules! unicode_prop_any {
    ($prop:expr $(,)?) => {
        $prop
    };
    ($prop0:expr, $($propn:expr),+ $(,)?) => {
        $crate::unicode::prop::or($prop0, $crate::unicode::prop::any!($($propn),+))
    };
}

/// Code points that do not have the inner property.
#[derive(Debug, Clone, Copy)]
pub struct Not<P: Property>(P);

/// Code points that have both properties.
#[derive(Debug, Clone, Copy)]
pub struct And<L: Property, R: Property>(L, R);

/// Code points that have either property.
#[derive(Debug, Clone, Copy)]
pub struct Or<L: Property, R: Property>(L, R);

pub const fn not<P: Property>(property: P) -> Not<P> {
    Not(property)
}

pub const fn and<L: Property, R: Property>(lhs: L, rhs: R) -> And<L, R> {
    And(lhs, rhs)
}

pub const fn or<L: Property, R: Property>(lhs: L, rhs: R) -> Or<L, R> {
    Or(lhs, rhs)
}

impl<P: Property> Property for Not<P> {
    fn contains(self, ch: char) -> bool {
        !self.0.contains(ch)
    }
}

impl<L: Property, R: Property> Property for And<L, R> {
    fn contains(self, ch: char) -> bool {
        self.0.contains(ch) && self.1.contains(ch)
    }
}

impl<L: Property, R: Property> Property for Or<L, R> {
    fn contains(self, ch: char) -> bool {
        self.0.contains(ch) || self.1.contains(ch)
    }
}

/// Implements the `!`, `&` and `|` operators for a property type.
macro_rules! impl_prop_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> core::ops::Not for $ty {
            type Output = Not<Self>;

            fn not(self) -> Not<Self> {
                Not(self)
            }
        }

        impl<$($gen)* Rhs: Property> core::ops::BitAnd<Rhs> for $ty {
            type Output = And<Self, Rhs>;

            fn bitand(self, rhs: Rhs) -> And<Self, Rhs> {
                And(self, rhs)
            }
        }

        impl<$($gen)* Rhs: Property> core::ops::BitOr<Rhs> for $ty {
            type Output = Or<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
                Or(self, rhs)
            }
        }
    };
}

impl_prop_ops!([P: Property,] Not<P>);
impl_prop_ops!([L: Property, R: Property,] And<L, R>);
impl_prop_ops!([L: Property, R: Property,] Or<L, R>);

macro_rules! def_binary_prop {
    ($($(#[$attr:meta])* $ty:ident => $prop:ty;)+) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy)]
            pub struct $ty;

            impl Property for $ty {
                fn contains(self, ch: char) -> bool {
                    <$prop as BinaryProperty>::for_char(ch)
                }
            }

            impl_prop_ops!([] $ty);
        )+
    };
}

def_binary_prop! {
    /// The Unicode `Alphabetic` property.
    Alphabetic => icup::Alphabetic;
    /// The Unicode `ASCII_Hex_Digit` property.
    AsciiHexDigit => icup::AsciiHexDigit;
    /// The Unicode `Dash` property.
    Dash => icup::Dash;
    /// The Unicode `Hex_Digit` property, which includes full width digits.
    HexDigit => icup::HexDigit;
    /// The Unicode `ID_Continue` property.
    IdContinue => icup::IdContinue;
    /// The Unicode `ID_Start` property.
    IdStart => icup::IdStart;
    /// The Unicode `Lowercase` property.
    Lowercase => icup::Lowercase;
    /// The Unicode `Math` property.
    Math => icup::Math;
    /// The Unicode `Uppercase` property.
    Uppercase => icup::Uppercase;
    /// The Unicode `White_Space` property.
    WhiteSpace => icup::WhiteSpace;
}

/// The Unicode `General_Category` of a code point.
///
/// As a [`Property`], a category matches the code points assigned to it. The
/// one and two letter associated constants name categories and category
/// groups by their Unicode abbreviations, so `GeneralCategory::L` matches any
/// letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralCategory {
    Unassigned,
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    PrivateUse,
    Surrogate,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    ConnectorPunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
}

impl GeneralCategory {
    /// Gets the category of a code point.
    pub fn of(ch: char) -> Self {
        use icup::GeneralCategory as Gc;

        match <Gc as EnumeratedProperty>::for_char(ch) {
            Gc::UppercaseLetter => Self::UppercaseLetter,
            Gc::LowercaseLetter => Self::LowercaseLetter,
            Gc::TitlecaseLetter => Self::TitlecaseLetter,
            Gc::ModifierLetter => Self::ModifierLetter,
            Gc::OtherLetter => Self::OtherLetter,
            Gc::NonspacingMark => Self::NonspacingMark,
            Gc::SpacingMark => Self::SpacingMark,
            Gc::EnclosingMark => Self::EnclosingMark,
            Gc::DecimalNumber => Self::DecimalNumber,
            Gc::LetterNumber => Self::LetterNumber,
            Gc::OtherNumber => Self::OtherNumber,
            Gc::SpaceSeparator => Self::SpaceSeparator,
            Gc::LineSeparator => Self::LineSeparator,
            Gc::ParagraphSeparator => Self::ParagraphSeparator,
            Gc::Control => Self::Control,
            Gc::Format => Self::Format,
            Gc::PrivateUse => Self::PrivateUse,
            Gc::Surrogate => Self::Surrogate,
            Gc::DashPunctuation => Self::DashPunctuation,
            Gc::OpenPunctuation => Self::OpenPunctuation,
            Gc::ClosePunctuation => Self::ClosePunctuation,
            Gc::ConnectorPunctuation => Self::ConnectorPunctuation,
            Gc::InitialPunctuation => Self::InitialPunctuation,
            Gc::FinalPunctuation => Self::FinalPunctuation,
            Gc::OtherPunctuation => Self::OtherPunctuation,
            Gc::MathSymbol => Self::MathSymbol,
            Gc::CurrencySymbol => Self::CurrencySymbol,
            Gc::ModifierSymbol => Self::ModifierSymbol,
            Gc::OtherSymbol => Self::OtherSymbol,
            #[allow(unreachable_patterns)]
            _ => Self::Unassigned,
        }
    }
}

#[allow(non_upper_case_globals)]
impl GeneralCategory {
    pub const Cc: Self = Self::Control;
    pub const Cf: Self = Self::Format;
    pub const Co: Self = Self::PrivateUse;
    pub const Cs: Self = Self::Surrogate;
    pub const Ll: Self = Self::LowercaseLetter;
    pub const Lm: Self = Self::ModifierLetter;
    pub const Lo: Self = Self::OtherLetter;
    pub const Lt: Self = Self::TitlecaseLetter;
    pub const Lu: Self = Self::UppercaseLetter;
    pub const Mc: Self = Self::SpacingMark;
    pub const Me: Self = Self::EnclosingMark;
    pub const Mn: Self = Self::NonspacingMark;
    pub const Nd: Self = Self::DecimalNumber;
    pub const Nl: Self = Self::LetterNumber;
    pub const No: Self = Self::OtherNumber;
    pub const Pc: Self = Self::ConnectorPunctuation;
    pub const Pd: Self = Self::DashPunctuation;
    pub const Pe: Self = Self::ClosePunctuation;
    pub const Pf: Self = Self::FinalPunctuation;
    pub const Pi: Self = Self::InitialPunctuation;
    pub const Po: Self = Self::OtherPunctuation;
    pub const Ps: Self = Self::OpenPunctuation;
    pub const Sc: Self = Self::CurrencySymbol;
    pub const Sk: Self = Self::ModifierSymbol;
    pub const Sm: Self = Self::MathSymbol;
    pub const So: Self = Self::OtherSymbol;
    pub const Zl: Self = Self::LineSeparator;
    pub const Zp: Self = Self::ParagraphSeparator;
    pub const Zs: Self = Self::SpaceSeparator;

    /// Letters.
    pub const L: Or<Self, Or<Self, Or<Self, Or<Self, Self>>>> =
        or(Self::Ll, or(Self::Lu, or(Self::Lt, or(Self::Lm, Self::Lo))));

    /// Control, format, private use and surrogate code points.
    pub const C: Or<Self, Or<Self, Or<Self, Self>>> =
        or(Self::Cc, or(Self::Cf, or(Self::Co, Self::Cs)));

    /// Marks.
    pub const M: Or<Self, Or<Self, Self>> = or(Self::Mc, or(Self::Me, Self::Mn));

    /// Numbers.
    pub const N: Or<Self, Or<Self, Self>> = or(Self::Nd, or(Self::Nl, Self::No));

    /// Punctuation.
    pub const P: Or<Self, Or<Self, Or<Self, Or<Self, Or<Self, Or<Self, Self>>>>>> = or(
        Self::Pc,
        or(Self::Pd, or(Self::Pe, or(Self::Pf, or(Self::Pi, or(Self::Po, Self::Ps))))),
    );

    /// Symbols.
    pub const S: Or<Self, Or<Self, Or<Self, Self>>> =
        or(Self::Sc, or(Self::Sk, or(Self::Sm, Self::So)));

    /// Separators.
    pub const Z: Or<Self, Or<Self, Self>> = or(Self::Zl, or(Self::Zp, Self::Zs));
}

impl Property for GeneralCategory {
    fn contains(self, ch: char) -> bool {
        self == Self::of(ch)
    }
}

impl_prop_ops!([] GeneralCategory);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(GeneralCategory::of('a'), GeneralCategory::LowercaseLetter);
        assert_eq!(GeneralCategory::of('Ж'), GeneralCategory::UppercaseLetter);
        assert_eq!(GeneralCategory::of('٣'), GeneralCategory::DecimalNumber);
        assert_eq!(GeneralCategory::of('Ⅻ'), GeneralCategory::LetterNumber);
        assert_eq!(GeneralCategory::of('\u{378}'), GeneralCategory::Unassigned);
        assert!(GeneralCategory::L.contains('語'));
        assert!(!GeneralCategory::L.contains('1'));
        assert!(GeneralCategory::N.contains('½'));
        assert!(GeneralCategory::Z.contains('\u{2028}'));
    }

    #[test]
    fn combinators() {
        let word = any!(GeneralCategory::L, GeneralCategory::Nd, GeneralCategory::Pc);
        assert!(word.contains('_'));
        assert!(word.contains('7'));
        assert!(!word.contains('-'));

        let ascii_letter = all!(Alphabetic, AsciiHexDigit);
        assert!(ascii_letter.contains('f'));
        assert!(!ascii_letter.contains('g'));

        let not_space = !WhiteSpace;
        assert!(not_space.contains('x'));
        assert!(!not_space.contains('\t'));

        assert!((Uppercase | Dash).contains('-'));
        assert!((Lowercase & !GeneralCategory::Lu).contains('q'));
        assert!(not(Math).contains('a'));
    }
}
