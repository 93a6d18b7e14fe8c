use crate::cursor::Cursor;
use crate::flatten::Kept;
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that consumes and returns a single token, whatever it is
pub struct Any<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> Any<C> {
    pub fn new() -> Self {
        Any {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for Any<C> {
    fn default() -> Self {
        Any::new()
    }
}

impl<C> Clone for Any<C> {
    fn clone(&self) -> Self {
        Any::new()
    }
}

impl<'code, C> Parser<'code> for Any<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = C::Element;
    type Slot = Kept;

    fn parse(&self, cursor: C) -> ParseResult<'code, C::Element, C> {
        match cursor.value() {
            Ok(value) => Outcome::Matched {
                value,
                cursor: cursor.next(),
            },
            Err(_) => Outcome::eoi("any"),
        }
    }
}

/// Convenience function to create an Any parser
pub fn any<'code, C>() -> Any<C>
where
    C: Cursor<'code>,
{
    Any::new()
}
