use crate::cursor::Cursor;
use crate::error::AltError;
use crate::flatten::Kept;
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};
use log::trace;
use std::marker::PhantomData;

/// Tries a tuple of parsers in order from the same cursor, keeping the first match
///
/// Every arm's value is converted into `U`. [`alt`] picks the first arm's
/// output type, which is all that is needed when the arms agree;
/// [`Alt::into_union`] selects another type, typically an enum with one
/// variant per distinct arm type.
///
/// When no arm matches only the number of failed arms and of arms that hit the
/// end of input are kept, not the arms' errors.
pub struct Alt<Ps, U> {
    arms: Ps,
    _union: PhantomData<fn() -> U>,
}

impl<Ps, U> Alt<Ps, U> {
    pub fn new(arms: Ps) -> Self {
        Alt {
            arms,
            _union: PhantomData,
        }
    }

    /// Convert every arm's value into `V` instead
    pub fn into_union<V>(self) -> Alt<Ps, V> {
        Alt::new(self.arms)
    }
}

impl<Ps: Clone, U> Clone for Alt<Ps, U> {
    fn clone(&self) -> Self {
        Alt::new(self.arms.clone())
    }
}

/// A tuple of parsers usable as alternatives
pub trait Arms<'code> {
    /// Output of the first arm
    type First;
}

/// Convenience function to create an Alt over a tuple of 1 to 8 parsers
pub fn alt<'code, Ps>(arms: Ps) -> Alt<Ps, Ps::First>
where
    Ps: Arms<'code>,
{
    Alt::new(arms)
}

fn exhausted<'code, U, C>(cursor: C, failed_count: usize, eoi_count: usize) -> ParseResult<'code, U, C>
where
    C: Cursor<'code>,
{
    trace!(
        "no alternative matched at position {}: {} failed, {} reached end of input",
        cursor.position(),
        failed_count,
        eoi_count
    );
    if failed_count > 0 {
        Outcome::Failed {
            error: AltError {
                failed_count,
                eoi_count,
            }
            .into(),
            cursor,
        }
    } else {
        Outcome::eoi("Alt")
    }
}

macro_rules! impl_alt {
    ($P0:ident $($P:ident)*; $($p:ident)+) => {
        impl<'code, $P0 $(, $P)*> Arms<'code> for ($P0, $($P,)*)
        where
            $P0: Parser<'code>,
        {
            type First = $P0::Output;
        }

        impl<'code, U, C, $P0 $(, $P)*> Parser<'code> for Alt<($P0, $($P,)*), U>
        where
            C: Cursor<'code>,
            $P0: Parser<'code, Cursor = C>,
            $P0::Output: Into<U>,
            $(
                $P: Parser<'code, Cursor = C>,
                $P::Output: Into<U>,
            )*
        {
            type Cursor = C;
            type Output = U;
            type Slot = Kept;

            fn parse(&self, cursor: C) -> ParseResult<'code, U, C> {
                let ($($p,)+) = &self.arms;
                let mut failed_count = 0;
                let mut eoi_count = 0;
                $(
                    match $p.parse(cursor) {
                        Outcome::Matched { value, cursor } => {
                            return Outcome::Matched {
                                value: value.into(),
                                cursor,
                            };
                        }
                        Outcome::Failed { .. } => failed_count += 1,
                        Outcome::EndOfInput(_) => eoi_count += 1,
                    }
                )+
                exhausted(cursor, failed_count, eoi_count)
            }
        }
    };
}

impl_alt!(P0; p0);
impl_alt!(P0 P1; p0 p1);
impl_alt!(P0 P1 P2; p0 p1 p2);
impl_alt!(P0 P1 P2 P3; p0 p1 p2 p3);
impl_alt!(P0 P1 P2 P3 P4; p0 p1 p2 p3 p4);
impl_alt!(P0 P1 P2 P3 P4 P5; p0 p1 p2 p3 p4 p5);
impl_alt!(P0 P1 P2 P3 P4 P5 P6; p0 p1 p2 p3 p4 p5 p6);
impl_alt!(P0 P1 P2 P3 P4 P5 P6 P7; p0 p1 p2 p3 p4 p5 p6 p7);
