use crate::cursor::Cursor;
use crate::flatten::{Empty, Skipped};
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that always matches without consuming anything
///
/// This is the delimiter [`Sequence`](crate::sequence::Sequence) and
/// [`Many`](crate::many::Many) use until another one is configured.
pub struct Nop<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> Nop<C> {
    pub fn new() -> Self {
        Nop {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for Nop<C> {
    fn default() -> Self {
        Nop::new()
    }
}

impl<C> Clone for Nop<C> {
    fn clone(&self) -> Self {
        Nop::new()
    }
}

impl<C> std::fmt::Debug for Nop<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Nop")
    }
}

impl<'code, C> Parser<'code> for Nop<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = Empty;
    type Slot = Skipped;

    fn parse(&self, cursor: C) -> ParseResult<'code, Empty, C> {
        Outcome::Matched {
            value: Empty,
            cursor,
        }
    }
}

pub fn nop<'code, C>() -> Nop<C>
where
    C: Cursor<'code>,
{
    Nop::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CharCursor;

    #[test]
    fn test_nop_never_consumes() {
        let data = ['a'];
        let cursor = CharCursor::new(&data);

        assert_eq!(
            nop::<CharCursor>().parse(cursor),
            Outcome::Matched {
                value: Empty,
                cursor
            }
        );
    }

    #[test]
    fn test_nop_matches_at_end() {
        let data: [char; 0] = [];
        let cursor = CharCursor::new(&data);

        assert!(nop::<CharCursor>().parse(cursor).is_matched());
    }
}
