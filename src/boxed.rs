use crate::cursor::Cursor;
use crate::flatten::{Kept, Slot};
use crate::parser::{ParseResult, Parser};
use std::sync::Arc;

/// A type-erased parser behind a shared pointer
///
/// Cloning is cheap, and the handle can be sent to and shared between threads.
/// Boxing is mostly useful to give a recursive grammar a nameable type.
pub struct Boxed<'code, C, O, S = Kept> {
    inner: Arc<dyn Parser<'code, Cursor = C, Output = O, Slot = S> + Send + Sync + 'code>,
}

impl<'code, C, O, S> Clone for Boxed<'code, C, O, S> {
    fn clone(&self) -> Self {
        Boxed {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'code, C, O, S> Parser<'code> for Boxed<'code, C, O, S>
where
    C: Cursor<'code>,
    S: Slot,
{
    type Cursor = C;
    type Output = O;
    type Slot = S;

    fn parse(&self, cursor: C) -> ParseResult<'code, O, C> {
        self.inner.parse(cursor)
    }
}

pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> Boxed<'code, Self::Cursor, Self::Output, Self::Slot>
    where
        Self: Send + Sync + 'code,
    {
        Boxed {
            inner: Arc::new(self),
        }
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
