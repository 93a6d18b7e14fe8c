use crate::cursor::Cursor;
use crate::error::{ManyCause, ManyError};
use crate::flatten::Kept;
use crate::nop::Nop;
use crate::outcome::Outcome;
use crate::parser::{ParseResult, Parser};
use log::trace;

/// Repetition limits for [`Many`]
///
/// Unset limits mean zero and unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub minimum: Option<usize>,
    pub maximum: Option<usize>,
}

impl Bounds {
    pub fn new() -> Self {
        Bounds::default()
    }

    pub fn at_least(self, minimum: usize) -> Self {
        Bounds {
            minimum: Some(minimum),
            ..self
        }
    }

    pub fn at_most(self, maximum: usize) -> Self {
        Bounds {
            maximum: Some(maximum),
            ..self
        }
    }

    pub fn exactly(self, count: usize) -> Self {
        self.at_least(count).at_most(count)
    }

    fn minimum(&self) -> usize {
        self.minimum.unwrap_or(0)
    }

    /// A maximum below the minimum is raised to the minimum
    fn reached_maximum(&self, taken: usize) -> bool {
        self.maximum
            .is_some_and(|maximum| taken >= maximum.max(self.minimum()))
    }
}

/// Decides whether a freshly parsed value continues a repetition
pub trait Condition<T> {
    fn holds(&self, value: &T) -> bool;
}

/// Every value continues the repetition
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconditional;

impl<T> Condition<T> for Unconditional {
    fn holds(&self, _value: &T) -> bool {
        true
    }
}

/// The repetition continues while the predicate holds
#[derive(Clone, Copy)]
pub struct While<F>(F);

impl<T, F> Condition<T> for While<F>
where
    F: Fn(&T) -> bool,
{
    fn holds(&self, value: &T) -> bool {
        (self.0)(value)
    }
}

/// Parser combinator that applies a parser repeatedly, collecting the values
///
/// Repetition is greedy and never backtracks. It ends when the maximum is
/// reached, or when the delimiter, the element parser or the condition stops
/// matching; before the minimum is reached each of those is an error instead.
/// A delimiter is only consumed together with the element that follows it.
///
/// The maximum is checked after each value is taken, so at least one attempt is
/// always made and a maximum of zero behaves like a maximum of one. Starting at
/// the end of input is always reported as end of input, even with a minimum of
/// zero. A parser that matches without consuming input repeats
/// forever unless a maximum is set.
#[derive(Clone)]
pub struct Many<P, D, W = Unconditional> {
    parser: P,
    delimiter: D,
    bounds: Bounds,
    condition: W,
}

impl<'code, P> Many<P, Nop<P::Cursor>>
where
    P: Parser<'code>,
{
    pub fn new(parser: P) -> Self {
        Many {
            parser,
            delimiter: Nop::new(),
            bounds: Bounds::default(),
            condition: Unconditional,
        }
    }
}

impl<P, D, W> Many<P, D, W> {
    pub fn at_least(self, minimum: usize) -> Self {
        let bounds = self.bounds.at_least(minimum);
        self.with_bounds(bounds)
    }

    pub fn at_most(self, maximum: usize) -> Self {
        let bounds = self.bounds.at_most(maximum);
        self.with_bounds(bounds)
    }

    pub fn exactly(self, count: usize) -> Self {
        let bounds = self.bounds.exactly(count);
        self.with_bounds(bounds)
    }

    pub fn with_bounds(self, bounds: Bounds) -> Self {
        Many { bounds, ..self }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Require `delimiter` between consecutive elements
    pub fn with_delim<D2>(self, delimiter: D2) -> Many<P, D2, W> {
        Many {
            parser: self.parser,
            delimiter,
            bounds: self.bounds,
            condition: self.condition,
        }
    }

    /// Stop before the first value for which `predicate` is false
    pub fn take_while<'code, F>(self, predicate: F) -> Many<P, D, While<F>>
    where
        P: Parser<'code>,
        F: Fn(&P::Output) -> bool,
    {
        Many {
            parser: self.parser,
            delimiter: self.delimiter,
            bounds: self.bounds,
            condition: While(predicate),
        }
    }
}

impl<'code, P, D, W> Parser<'code> for Many<P, D, W>
where
    P: Parser<'code>,
    D: Parser<'code, Cursor = P::Cursor>,
    W: Condition<P::Output>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Slot = Kept;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        if cursor.eos() {
            return Outcome::eoi("many position 1");
        }

        let start = cursor;
        let minimum = self.bounds.minimum();
        let mut values = Vec::new();
        let mut iter = cursor;

        loop {
            let taken = values.len();
            let mut attempt = iter;
            if taken > 0 {
                match self.delimiter.parse(iter) {
                    Outcome::Matched { cursor, .. } => attempt = cursor,
                    Outcome::Failed { error, cursor: at } => {
                        if taken < minimum {
                            return Outcome::Failed {
                                error: ManyError {
                                    cause: ManyCause::DelimiterFailed,
                                    expected_minimum: minimum,
                                    achieved_count: taken,
                                    inner_offset: start.distance_to(&iter),
                                    prior: Some(Box::new(error)),
                                }
                                .into(),
                                cursor: at,
                            };
                        }
                        trace!("many stopped after {} values: delimiter did not match", taken);
                        break;
                    }
                    Outcome::EndOfInput(eoi) => {
                        if taken < minimum {
                            return Outcome::EndOfInput(eoi.within(format!(
                                "many delimiter before position {}",
                                taken + 1
                            )));
                        }
                        trace!("many stopped after {} values: end of input", taken);
                        break;
                    }
                }
            }

            match self.parser.parse(attempt) {
                Outcome::Matched { value, cursor } => {
                    if !self.condition.holds(&value) {
                        if taken < minimum {
                            return Outcome::Failed {
                                error: ManyError {
                                    cause: ManyCause::ConditionFailed,
                                    expected_minimum: minimum,
                                    achieved_count: taken,
                                    inner_offset: start.distance_to(&iter),
                                    prior: None,
                                }
                                .into(),
                                cursor: iter,
                            };
                        }
                        trace!("many stopped after {} values: condition not met", taken);
                        break;
                    }
                    values.push(value);
                    iter = cursor;
                    if self.bounds.reached_maximum(values.len()) {
                        break;
                    }
                }
                Outcome::Failed { error, cursor: at } => {
                    if taken < minimum {
                        return Outcome::Failed {
                            error: ManyError {
                                cause: ManyCause::ParserFailed,
                                expected_minimum: minimum,
                                achieved_count: taken,
                                inner_offset: start.distance_to(&attempt),
                                prior: Some(Box::new(error)),
                            }
                            .into(),
                            cursor: at,
                        };
                    }
                    trace!("many stopped after {} values: element did not match", taken);
                    break;
                }
                Outcome::EndOfInput(eoi) => {
                    if taken < minimum {
                        return Outcome::EndOfInput(
                            eoi.within(format!("many position {}", taken + 1)),
                        );
                    }
                    trace!("many stopped after {} values: end of input", taken);
                    break;
                }
            }
        }

        Outcome::Matched {
            value: values,
            cursor: iter,
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P, Nop<P::Cursor>>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
