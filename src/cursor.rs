use core::fmt;

/// A restorable snapshot of a [`Cursor`] position.
///
/// Checkpoints are produced by [`Cursor::checkpoint`] and consumed by
/// [`Cursor::restore`]. They are only meaningful for the cursor (or a cursor
/// over the same text) that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);

/// A position within an immutable input text.
///
/// [`Cursor`] is the only mutable state involved in parsing. Parsers receive a
/// `&mut Cursor` and advance it as they consume input. Every parser is
/// expected to leave the cursor where it found it when it does not match, and
/// combinators use [`Cursor::checkpoint`] and [`Cursor::restore`] to enforce
/// that regardless of how their inner parsers behave.
///
/// Positions are byte offsets into the text and always lie on a `char`
/// boundary. Counts passed to [`peek`](Cursor::peek) and
/// [`take`](Cursor::take) are measured in code points.
///
/// # Example
/// ```
/// # use parsel::Cursor;
/// let mut cursor = Cursor::new("héllo");
/// assert_eq!(cursor.peek(2), Some("hé"));
/// assert_eq!(cursor.take(3), Some("hél"));
/// assert_eq!(cursor.peek(-2), Some("él"));
/// assert_eq!(cursor.remaining(), "lo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

/// Human readable rendering of a [`Cursor`], see [`Cursor::debug`].
#[derive(Clone, Copy)]
pub struct CursorDebug<'c, 'a>(&'c Cursor<'a>);

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The complete input text, regardless of position.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The current byte offset into the input text.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The input that has not been consumed yet.
    pub fn remaining(&self) -> &'a str {
        // `pos` is kept on a char boundary by every mutation.
        &self.text[self.pos..]
    }

    /// The input that has already been consumed.
    pub fn consumed(&self) -> &'a str {
        &self.text[..self.pos]
    }

    /// Returns `true` if there is no more input to consume.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the next `n` code points without consuming them.
    ///
    /// A negative `n` looks behind the current position instead, returning
    /// the `|n|` code points that immediately precede it. [`None`] is
    /// returned if the requested range does not fit inside the input.
    /// `peek(0)` always returns the empty string.
    ///
    /// # Example
    /// ```
    /// # use parsel::Cursor;
    /// let mut cursor = Cursor::new("ABCDEF");
    /// assert_eq!(cursor.peek(0), Some(""));
    /// assert_eq!(cursor.peek(-1), None);
    /// assert_eq!(cursor.peek(7), None);
    /// cursor.take(2);
    /// assert_eq!(cursor.peek(-2), Some("AB"));
    /// assert_eq!(cursor.peek(4), Some("CDEF"));
    /// ```
    pub fn peek(&self, n: isize) -> Option<&'a str> {
        if n < 0 {
            let start = self.behind(n.unsigned_abs())?;
            Some(&self.text[start..self.pos])
        } else {
            let end = self.ahead(n.unsigned_abs())?;
            Some(&self.text[self.pos..end])
        }
    }

    /// Consumes and returns the next `n` code points.
    ///
    /// Fails without moving if fewer than `n` code points remain. Negative
    /// counts always fail; the cursor never moves backwards except through
    /// [`restore`](Cursor::restore).
    pub fn take(&mut self, n: isize) -> Option<&'a str> {
        if n < 0 {
            return None;
        }
        let end = self.ahead(n.unsigned_abs())?;
        let taken = &self.text[self.pos..end];
        self.pos = end;
        Some(taken)
    }

    /// Returns the next code point without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes and returns the next code point.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Records the current position.
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Moves back (or forward) to a recorded position.
    ///
    /// The position is clamped to the input length and, should it fall
    /// inside a multi-byte code point, moved down to the start of that code
    /// point.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        let mut pos = checkpoint.0.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Returns the input between two checkpoints.
    ///
    /// The bounds are clamped the same way [`restore`](Cursor::restore)
    /// clamps, and an inverted range yields the empty string.
    pub fn slice(&self, from: Checkpoint, to: Checkpoint) -> &'a str {
        let start = self.clamp(from.0);
        let end = self.clamp(to.0);
        if start >= end {
            ""
        } else {
            &self.text[start..end]
        }
    }

    /// Renders the input with a marker at the current position.
    ///
    /// The rendering is intended for tracing and test failure output; its
    /// exact format is not stable.
    ///
    /// # Example
    /// ```
    /// # use parsel::Cursor;
    /// let mut cursor = Cursor::new("key=value");
    /// cursor.take(4);
    /// assert_eq!(cursor.debug().to_string(), "key=|value (offset 4)");
    /// ```
    pub const fn debug(&self) -> CursorDebug<'_, 'a> {
        CursorDebug(self)
    }

    fn ahead(&self, n: usize) -> Option<usize> {
        let mut chars = self.remaining().chars();
        for _ in 0..n {
            chars.next()?;
        }
        Some(self.text.len() - chars.as_str().len())
    }

    fn behind(&self, n: usize) -> Option<usize> {
        let mut chars = self.consumed().chars();
        for _ in 0..n {
            chars.next_back()?;
        }
        Some(chars.as_str().len())
    }

    fn clamp(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl Checkpoint {
    /// The byte offset this checkpoint records.
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl fmt::Display for CursorDebug<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.0;
        write!(
            f,
            "{}|{} (offset {})",
            cursor.consumed().escape_debug(),
            cursor.remaining().escape_debug(),
            cursor.pos
        )
    }
}

impl fmt::Debug for CursorDebug<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;
    use proptest::prelude::*;

    #[test]
    fn peek() {
        let mut cursor = Cursor::new("ABCDEF");
        assert_eq!(cursor.peek(1), Some("A"));
        assert_eq!(cursor.peek(6), Some("ABCDEF"));
        assert_eq!(cursor.peek(7), None);
        assert_eq!(cursor.peek(-5), None);
        assert_eq!(cursor.position(), 0);

        cursor.take(3);
        assert_eq!(cursor.peek(-3), Some("ABC"));
        assert_eq!(cursor.peek(-4), None);
        assert_eq!(cursor.peek(3), Some("DEF"));
        assert_eq!(cursor.peek(0), Some(""));
    }

    #[test]
    fn peek_at_end() {
        let mut cursor = Cursor::new("AB");
        cursor.take(2);
        assert_eq!(cursor.peek(0), Some(""));
        assert_eq!(cursor.peek(1), None);
        assert_eq!(cursor.peek(-2), Some("AB"));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn take() {
        let mut cursor = Cursor::new("ABCDEF");
        assert_eq!(cursor.take(-1), None);
        assert_eq!(cursor.take(0), Some(""));
        assert_eq!(cursor.take(2), Some("AB"));
        assert_eq!(cursor.take(5), None);
        assert_eq!(cursor.remaining(), "CDEF");
        assert_eq!(cursor.take(4), Some("CDEF"));
        assert_eq!(cursor.take(1), None);
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn multibyte() {
        let mut cursor = Cursor::new("añ日本b");
        assert_eq!(cursor.take(3), Some("añ日"));
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.peek(-2), Some("ñ日"));
        assert_eq!(cursor.next_char(), Some('本'));
        assert_eq!(cursor.peek_char(), Some('b'));
    }

    #[test]
    fn restore_clamps() {
        let mut cursor = Cursor::new("ABC");
        let start = cursor.checkpoint();
        cursor.restore(Checkpoint(100));
        assert_eq!(cursor.position(), 3);
        cursor.restore(start);
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("日本");
        cursor.restore(Checkpoint(4));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), "本");
    }

    #[test]
    fn slice() {
        let mut cursor = Cursor::new("ABCDEF");
        let start = cursor.checkpoint();
        cursor.take(4);
        let end = cursor.checkpoint();
        assert_eq!(cursor.slice(start, end), "ABCD");
        assert_eq!(cursor.slice(end, start), "");
    }

    #[test]
    fn debug() {
        let mut cursor = Cursor::new("a\nb");
        cursor.take(1);
        assert_eq!(cursor.debug().to_string(), "a|\\nb (offset 1)");
    }

    proptest! {
        #[test]
        fn restore_then_checkpoint_is_identity(text in ".{0,32}", first in 0isize..40, second in 0isize..40) {
            let mut cursor = Cursor::new(&text);
            cursor.take(first);
            let marker = cursor.checkpoint();
            cursor.take(second);
            cursor.restore(marker);
            prop_assert_eq!(cursor.checkpoint(), marker);
            cursor.restore(marker);
            cursor.restore(marker);
            prop_assert_eq!(cursor.checkpoint(), marker);
        }

        #[test]
        fn peek_does_not_move(text in ".{0,32}", skip in 0isize..40, n in -40isize..40) {
            let mut cursor = Cursor::new(&text);
            cursor.take(skip);
            let before = cursor.checkpoint();
            let _ = cursor.peek(n);
            prop_assert_eq!(cursor.checkpoint(), before);
        }
    }
}
