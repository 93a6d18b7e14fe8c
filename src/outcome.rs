use std::borrow::Cow;
use std::fmt;

/// Input ran out before a required match
///
/// Not an error value: it is the third outcome of a parse. Every composite it
/// passes through adds one label naming its own position in the parse tree.
/// Labels are stored innermost first and rendered outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfInput {
    labels: Vec<Cow<'static, str>>,
}

impl EndOfInput {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        EndOfInput {
            labels: vec![label.into()],
        }
    }

    /// Record that the enclosing parser `label` was in progress
    pub fn within(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Labels, outermost first
    pub fn trace(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().rev().map(|label| label.as_ref())
    }

    /// Labels in the order they were added, innermost first
    pub fn labels(&self) -> &[Cow<'static, str>] {
        &self.labels
    }

    pub fn innermost(&self) -> Option<&str> {
        self.labels.first().map(|label| label.as_ref())
    }
}

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "end of input")?;
        for label in self.trace() {
            write!(f, "\n  in {}", label)?;
        }
        Ok(())
    }
}

impl std::error::Error for EndOfInput {}

/// The result of running a parser
///
/// `Matched` and `Failed` carry a cursor: the first unconsumed position, or
/// where the failure was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E, C> {
    Matched { value: T, cursor: C },
    Failed { error: E, cursor: C },
    EndOfInput(EndOfInput),
}

impl<T, E, C> Outcome<T, E, C> {
    pub fn eoi(label: impl Into<Cow<'static, str>>) -> Self {
        Outcome::EndOfInput(EndOfInput::new(label))
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Outcome::EndOfInput(_))
    }

    pub fn map_value<U, F>(self, f: F) -> Outcome<U, E, C>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Matched { value, cursor } => Outcome::Matched {
                value: f(value),
                cursor,
            },
            Outcome::Failed { error, cursor } => Outcome::Failed { error, cursor },
            Outcome::EndOfInput(eoi) => Outcome::EndOfInput(eoi),
        }
    }

    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2, C>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Matched { value, cursor } => Outcome::Matched { value, cursor },
            Outcome::Failed { error, cursor } => Outcome::Failed {
                error: f(error),
                cursor,
            },
            Outcome::EndOfInput(eoi) => Outcome::EndOfInput(eoi),
        }
    }

    /// Continue from a match with a dependent parse starting at its cursor
    ///
    /// Failures and end of input are returned as they are.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E, C>
    where
        F: FnOnce(T, C) -> Outcome<U, E, C>,
    {
        match self {
            Outcome::Matched { value, cursor } => f(value, cursor),
            Outcome::Failed { error, cursor } => Outcome::Failed { error, cursor },
            Outcome::EndOfInput(eoi) => Outcome::EndOfInput(eoi),
        }
    }

    /// Add `label` to the trace if this is an end of input
    pub fn within(self, label: impl Into<Cow<'static, str>>) -> Self {
        match self {
            Outcome::EndOfInput(eoi) => Outcome::EndOfInput(eoi.within(label)),
            other => other,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Matched { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn cursor(&self) -> Option<&C> {
        match self {
            Outcome::Matched { cursor, .. } | Outcome::Failed { cursor, .. } => Some(cursor),
            Outcome::EndOfInput(_) => None,
        }
    }

    pub fn matched(self) -> Option<(T, C)> {
        match self {
            Outcome::Matched { value, cursor } => Some((value, cursor)),
            _ => None,
        }
    }

    pub fn failed(self) -> Option<(E, C)> {
        match self {
            Outcome::Failed { error, cursor } => Some((error, cursor)),
            _ => None,
        }
    }

    pub fn end_of_input(self) -> Option<EndOfInput> {
        match self {
            Outcome::EndOfInput(eoi) => Some(eoi),
            _ => None,
        }
    }

    /// Split into a match and everything else, so `?` can be used between steps
    pub fn into_result(self) -> Result<(T, C), Failure<E, C>> {
        match self {
            Outcome::Matched { value, cursor } => Ok((value, cursor)),
            Outcome::Failed { error, cursor } => Err(Failure::Failed { error, cursor }),
            Outcome::EndOfInput(eoi) => Err(Failure::EndOfInput(eoi)),
        }
    }
}

impl<T, E, C> From<Failure<E, C>> for Outcome<T, E, C> {
    fn from(failure: Failure<E, C>) -> Self {
        match failure {
            Failure::Failed { error, cursor } => Outcome::Failed { error, cursor },
            Failure::EndOfInput(eoi) => Outcome::EndOfInput(eoi),
        }
    }
}

impl<T, E, C> From<Result<(T, C), Failure<E, C>>> for Outcome<T, E, C> {
    fn from(result: Result<(T, C), Failure<E, C>>) -> Self {
        match result {
            Ok((value, cursor)) => Outcome::Matched { value, cursor },
            Err(failure) => failure.into(),
        }
    }
}

/// An outcome that did not match
#[derive(Debug, Clone, PartialEq)]
pub enum Failure<E, C> {
    Failed { error: E, cursor: C },
    EndOfInput(EndOfInput),
}

impl<E, C> Failure<E, C> {
    pub fn map_error<E2, F>(self, f: F) -> Failure<E2, C>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Failure::Failed { error, cursor } => Failure::Failed {
                error: f(error),
                cursor,
            },
            Failure::EndOfInput(eoi) => Failure::EndOfInput(eoi),
        }
    }
}

impl<E: fmt::Display, C> fmt::Display for Failure<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Failed { error, .. } => write!(f, "{}", error),
            Failure::EndOfInput(eoi) => write!(f, "{}", eoi),
        }
    }
}

impl<E, C> std::error::Error for Failure<E, C>
where
    E: fmt::Display + fmt::Debug,
    C: fmt::Debug,
{
}
