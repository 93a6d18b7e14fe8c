use crate::atomic::Atomic;
use crate::error::CursorError;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor is a forward-only position in a sequence of tokens. It carries the
/// end of the range it walks, so a single cursor stands for the `(start, end)`
/// pair a parser is given. Parsers only dereference, compare and advance it.
pub trait Cursor<'code>: Copy + PartialEq + fmt::Debug {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence
    fn value(&self) -> Result<Self::Element, CursorError>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Advance the cursor by `n` elements, stopping at the end
    fn advance(self, n: usize) -> Self {
        let mut cursor = self;
        for _ in 0..n {
            if cursor.eos() {
                break;
            }
            cursor = cursor.next();
        }
        cursor
    }

    /// Advance the cursor to the next element, returning an error if at end
    fn try_next(self) -> Result<Self, CursorError> {
        if self.eos() {
            return Err(CursorError::AlreadyAtEnd {
                position: self.position(),
            });
        }
        Ok(self.next())
    }

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors, this returns the length of the walked range
    fn position(&self) -> usize;

    /// Number of elements between this cursor and a later one
    fn distance_to(&self, later: &Self) -> usize {
        later.position().saturating_sub(self.position())
    }

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'code [Self::Element];

    /// Consume the cursor and return its inner data and position
    fn inner(self) -> (&'code [Self::Element], usize);
}
