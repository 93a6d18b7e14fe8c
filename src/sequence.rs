use crate::cursor::Cursor;
use crate::error::{SequenceCause, SequenceError};
use crate::flatten::{Collect, Flatten};
use crate::nop::Nop;
use crate::outcome::{Failure, Outcome};
use crate::parser::{ParseFailure, ParseResult, Parser};
use log::trace;

/// Runs a fixed tuple of parsers back to back
///
/// Between steps an optional delimiter runs, [`Nop`] unless
/// [`Sequence::with_delim`] sets one. The values of the steps are collected in
/// order and flattened: hidden steps are dropped, a single remaining value is
/// returned bare, and an empty result becomes [`Empty`](crate::flatten::Empty).
///
/// The first step that does not match ends the sequence; later steps never run.
#[derive(Clone)]
pub struct Sequence<Ps, D> {
    parsers: Ps,
    delimiter: D,
}

impl<'code, Ps> Sequence<Ps, Nop<Ps::Cursor>>
where
    Ps: Steps<'code>,
{
    pub fn new(parsers: Ps) -> Self {
        Sequence {
            parsers,
            delimiter: Nop::new(),
        }
    }
}

impl<Ps, D> Sequence<Ps, D> {
    /// Require `delimiter` between consecutive steps
    pub fn with_delim<D2>(self, delimiter: D2) -> Sequence<Ps, D2> {
        Sequence {
            parsers: self.parsers,
            delimiter,
        }
    }
}

/// A tuple of parsers usable as sequence steps
pub trait Steps<'code> {
    /// Cursor of the first step, which every step and the delimiter share
    type Cursor: Cursor<'code>;
}

/// Convenience function to create a Sequence over a tuple of 1 to 8 parsers
pub fn sequence<'code, Ps>(parsers: Ps) -> Sequence<Ps, Nop<Ps::Cursor>>
where
    Ps: Steps<'code>,
{
    Sequence::new(parsers)
}

/// Run the delimiter (for every step but the first), then the step itself
fn step<'code, P, D>(
    parser: &P,
    delimiter: &D,
    index: usize,
    start: P::Cursor,
    cursor: P::Cursor,
) -> Result<(P::Output, P::Cursor), ParseFailure<'code, P::Cursor>>
where
    P: Parser<'code>,
    D: Parser<'code, Cursor = P::Cursor>,
{
    let mut cursor = cursor;
    if index > 0 {
        cursor = match delimiter.parse(cursor) {
            Outcome::Matched { cursor: next, .. } => next,
            Outcome::Failed { error, cursor: at } => {
                trace!(
                    "delimiter before sequence step {} failed at position {}",
                    index + 1,
                    at.position()
                );
                return Err(Failure::Failed {
                    error: SequenceError {
                        failing_index: index,
                        cause: SequenceCause::Delimiter,
                        inner_offset: start.distance_to(&cursor),
                        prior: Box::new(error),
                    }
                    .into(),
                    cursor: at,
                });
            }
            Outcome::EndOfInput(eoi) => {
                return Err(Failure::EndOfInput(eoi.within(format!(
                    "sequence delimiter before step {}",
                    index + 1
                ))));
            }
        };
    }

    match parser.parse(cursor) {
        Outcome::Matched { value, cursor } => Ok((value, cursor)),
        Outcome::Failed { error, cursor: at } => {
            trace!(
                "sequence step {} failed at position {}",
                index + 1,
                at.position()
            );
            Err(Failure::Failed {
                error: SequenceError {
                    failing_index: index,
                    cause: SequenceCause::Parser,
                    inner_offset: start.distance_to(&cursor),
                    prior: Box::new(error),
                }
                .into(),
                cursor: at,
            })
        }
        Outcome::EndOfInput(eoi) => Err(Failure::EndOfInput(
            eoi.within(format!("sequence position {}", index + 1)),
        )),
    }
}

macro_rules! impl_sequence {
    ($last:ident; $($prev:ty => $A:ident: $P:ident $p:ident $i:literal),+ $(,)?) => {
        impl<'code, $($P),+> Steps<'code> for ($($P,)+)
        where
            P0: Parser<'code>,
        {
            type Cursor = P0::Cursor;
        }

        impl<'code, C, D, $($P, $A),+> Parser<'code> for Sequence<($($P,)+), D>
        where
            C: Cursor<'code>,
            D: Parser<'code, Cursor = C>,
            $(
                $P: Parser<'code, Cursor = C>,
                $prev: Collect<$P::Slot, $P::Output, Output = $A>,
            )+
            $last: Flatten,
        {
            type Cursor = C;
            type Output = <$last as Flatten>::Output;
            type Slot = <$last as Flatten>::Slot;

            fn parse(&self, cursor: C) -> ParseResult<'code, Self::Output, C> {
                let ($($p,)+) = &self.parsers;
                let start = cursor;
                let acc = ();
                $(
                    let (value, cursor) = match step($p, &self.delimiter, $i, start, cursor) {
                        Ok(done) => done,
                        Err(failure) => return failure.into(),
                    };
                    let acc: $A = Collect::<$P::Slot, $P::Output>::collect_step(acc, value);
                )+
                Outcome::Matched {
                    value: acc.flatten(),
                    cursor,
                }
            }
        }
    };
}

impl_sequence!(A0; () => A0: P0 p0 0);
impl_sequence!(A1; () => A0: P0 p0 0, A0 => A1: P1 p1 1);
impl_sequence!(A2;
    () => A0: P0 p0 0, A0 => A1: P1 p1 1, A1 => A2: P2 p2 2,
);
impl_sequence!(A3;
    () => A0: P0 p0 0, A0 => A1: P1 p1 1, A1 => A2: P2 p2 2, A2 => A3: P3 p3 3,
);
impl_sequence!(A4;
    () => A0: P0 p0 0, A0 => A1: P1 p1 1, A1 => A2: P2 p2 2, A2 => A3: P3 p3 3,
    A3 => A4: P4 p4 4,
);
impl_sequence!(A5;
    () => A0: P0 p0 0, A0 => A1: P1 p1 1, A1 => A2: P2 p2 2, A2 => A3: P3 p3 3,
    A3 => A4: P4 p4 4, A4 => A5: P5 p5 5,
);
impl_sequence!(A6;
    () => A0: P0 p0 0, A0 => A1: P1 p1 1, A1 => A2: P2 p2 2, A2 => A3: P3 p3 3,
    A3 => A4: P4 p4 4, A4 => A5: P5 p5 5, A5 => A6: P6 p6 6,
);
impl_sequence!(A7;
    () => A0: P0 p0 0, A0 => A1: P1 p1 1, A1 => A2: P2 p2 2, A2 => A3: P3 p3 3,
    A3 => A4: P4 p4 4, A4 => A5: P5 p5 5, A5 => A6: P6 p6 6, A6 => A7: P7 p7 7,
);
