use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::{ByteCursor, CharCursor};
use crate::error::LiteralError;
use crate::flatten::Kept;
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;
use std::sync::Arc;

/// Parser that matches a fixed run of tokens
///
/// The matched value is the literal itself, shared rather than copied.
pub struct Literal<T, C> {
    expected: Arc<[T]>,
    _cursor: PhantomData<fn() -> C>,
}

impl<T, C> Literal<T, C> {
    pub fn new<I>(expected: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Literal {
            expected: expected.into_iter().collect(),
            _cursor: PhantomData,
        }
    }

    pub fn expected(&self) -> &[T] {
        &self.expected
    }
}

impl<T, C> Clone for Literal<T, C> {
    fn clone(&self) -> Self {
        Literal {
            expected: Arc::clone(&self.expected),
            _cursor: PhantomData,
        }
    }
}

impl<'code, T, C> Parser<'code> for Literal<T, C>
where
    T: Atomic,
    C: Cursor<'code, Element = T>,
{
    type Cursor = C;
    type Output = Arc<[T]>;
    type Slot = Kept;

    fn parse(&self, cursor: C) -> ParseResult<'code, Self::Output, C> {
        let mut current = cursor;
        for expected in self.expected.iter() {
            match current.value() {
                Ok(got) if &got == expected => current = current.next(),
                Ok(_) => {
                    return Outcome::Failed {
                        error: LiteralError {
                            expected: Arc::clone(&self.expected),
                            inner_offset: cursor.distance_to(&current),
                        }
                        .into(),
                        cursor: current,
                    };
                }
                Err(_) => {
                    return Outcome::eoi(format!(
                        "literal \"{}\"",
                        T::slice_to_string(&self.expected)
                    ));
                }
            }
        }

        Outcome::Matched {
            value: Arc::clone(&self.expected),
            cursor: current,
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<'code, C, I>(expected: I) -> Literal<C::Element, C>
where
    C: Cursor<'code>,
    I: IntoIterator<Item = C::Element>,
{
    Literal::new(expected)
}

/// Literal over the characters of `text`
pub fn text<'code>(text: &str) -> Literal<char, CharCursor<'code>> {
    Literal::new(text.chars())
}

/// Literal over the bytes of `bytes`
pub fn bytes<'code>(bytes: &[u8]) -> Literal<u8, ByteCursor<'code>> {
    Literal::new(bytes.iter().copied())
}
