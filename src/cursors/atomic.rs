use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor over a slice of tokens
///
/// The walked range ends at the end of `data`; [`AtomicCursor::between`]
/// restricts it to a sub-range.
#[derive(Debug)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfFile { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }

    /// Cursor over `data[start..end]` that reports positions relative to `data`
    ///
    /// Bounds are clamped to the slice, and `start` is clamped to `end`.
    pub fn between(data: &'code [T], start: usize, end: usize) -> Self {
        let end = end.min(data.len());
        AtomicCursor::new(&data[..end]).advance(start.min(end))
    }
}

impl<'code, T: Atomic> Clone for AtomicCursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T: Atomic> Copy for AtomicCursor<'code, T> {}

impl<'code, T: Atomic> PartialEq for AtomicCursor<'code, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source(), other.source()) && self.position() == other.position()
    }
}

impl<'code, T: Atomic> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;

    fn value(&self) -> Result<Self::Element, CursorError> {
        match self {
            AtomicCursor::Valid { data, position } => {
                data.get(*position)
                    .cloned()
                    .ok_or(CursorError::CannotReadAtEnd {
                        position: *position,
                    })
            }
            AtomicCursor::EndOfFile { data } => Err(CursorError::CannotReadAtEnd {
                position: data.len(),
            }),
        }
    }

    fn next(self) -> Self {
        self.advance(1)
    }

    fn advance(self, n: usize) -> Self {
        match self {
            AtomicCursor::Valid { data, position } => match position.checked_add(n) {
                Some(position) if position < data.len() => AtomicCursor::Valid { data, position },
                _ => AtomicCursor::EndOfFile { data },
            },
            AtomicCursor::EndOfFile { data } => AtomicCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }

    fn eos(&self) -> bool {
        matches!(self, AtomicCursor::EndOfFile { .. })
    }

    fn source(&self) -> &'code [Self::Element] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfFile { data } => data,
        }
    }

    fn inner(self) -> (&'code [Self::Element], usize) {
        match self {
            AtomicCursor::Valid { data, position } => (data, position),
            AtomicCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}
