use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::UnitError;
use crate::flatten::Kept;
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that matches one token equal to `expected`
pub struct Unit<T, C> {
    expected: T,
    _cursor: PhantomData<fn() -> C>,
}

impl<T, C> Unit<T, C> {
    pub fn new(expected: T) -> Self {
        Unit {
            expected,
            _cursor: PhantomData,
        }
    }

    pub fn expected(&self) -> &T {
        &self.expected
    }
}

impl<T: Clone, C> Clone for Unit<T, C> {
    fn clone(&self) -> Self {
        Unit::new(self.expected.clone())
    }
}

impl<'code, T, C> Parser<'code> for Unit<T, C>
where
    T: Atomic,
    C: Cursor<'code, Element = T>,
{
    type Cursor = C;
    type Output = T;
    type Slot = Kept;

    fn parse(&self, cursor: C) -> ParseResult<'code, T, C> {
        match cursor.value() {
            Ok(got) if got == self.expected => Outcome::Matched {
                value: got,
                cursor: cursor.next(),
            },
            Ok(got) => Outcome::Failed {
                error: UnitError {
                    expected: self.expected.clone(),
                    got,
                }
                .into(),
                cursor,
            },
            Err(_) => Outcome::eoi(format!("unit expecting {:?}", self.expected)),
        }
    }
}

/// Convenience function to create a Unit parser
pub fn unit<'code, C>(expected: C::Element) -> Unit<C::Element, C>
where
    C: Cursor<'code>,
{
    Unit::new(expected)
}
