use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::flatten::Kept;
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source with start and end positions
/// and a reference to the source tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code, T: Atomic = u8> {
    /// Reference to the source tokens
    pub source: &'code [T],
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code, T: Atomic> Span<'code, T> {
    pub fn new(source: &'code [T], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The tokens this span covers
    pub fn slice(&self) -> &'code [T] {
        &self.source[self.start..self.end]
    }

    pub fn as_string(&self) -> String {
        T::slice_to_string(self.slice())
    }
}

/// A parser combinator that pairs a match with the span it consumed
#[derive(Clone)]
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
    <P::Cursor as Cursor<'code>>::Element: 'code,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span<'code, <P::Cursor as Cursor<'code>>::Element>);
    type Slot = Kept;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Outcome::Matched { value, cursor: end } => {
                let span = Span::new(cursor.source(), cursor.position(), end.position());
                Outcome::Matched {
                    value: (value, span),
                    cursor: end,
                }
            }
            Outcome::Failed { error, cursor } => Outcome::Failed { error, cursor },
            Outcome::EndOfInput(eoi) => Outcome::EndOfInput(eoi),
        }
    }
}

pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
