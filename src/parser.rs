use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::flatten::Slot;
use crate::outcome::{Failure, Outcome};

/// What every parser returns for a cursor of type `C`
pub type ParseResult<'code, T, C> = Outcome<T, ParseError<<C as Cursor<'code>>::Element>, C>;

/// A non-matching [`ParseResult`], used to thread steps together with `?`
pub type ParseFailure<'code, C> = Failure<ParseError<<C as Cursor<'code>>::Element>, C>;

/// Core parser trait for parser combinators
///
/// A parser reads from the given cursor up to the end of the range the cursor
/// walks. It never returns a cursor before the one it was given, and it never
/// mutates anything: the same parser may run any number of times, from any
/// number of threads.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;
    /// Whether [`Self::Output`] takes part in a composite value
    type Slot: Slot;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Slot = P::Slot;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}
