use crate::atomic::Atomic;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by cursor operations that run past the end of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cannot read a value at end of input (position {position})")]
    CannotReadAtEnd { position: usize },
    #[error("already at end of input (position {position})")]
    AlreadyAtEnd { position: usize },
}

/// A node in a chain of parse errors
///
/// Every error reports a one-line description, the distance from the start of
/// the parser that produced it to the start of the child that caused it, and
/// that child error. Walking the chain and summing `inner_offset`s turns the
/// relative offsets into absolute ones, see [`ErrorNode::trace`].
pub trait ErrorNode: fmt::Display + fmt::Debug {
    fn description(&self) -> String {
        self.to_string()
    }

    fn inner_offset(&self) -> usize {
        0
    }

    fn cause(&self) -> Option<&dyn ErrorNode> {
        None
    }

    /// Walk this error and its causes, outermost first
    ///
    /// `base` is the absolute position where the parser that produced `self`
    /// started.
    fn trace(&self, base: usize) -> ErrorTrace<'_>
    where
        Self: Sized,
    {
        ErrorTrace::new(self, base)
    }
}

/// One step of an [`ErrorTrace`]: what failed, and where that parser started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub description: String,
    pub offset: usize,
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.description, self.offset)
    }
}

/// Iterator over the causal chain of an error
pub struct ErrorTrace<'a> {
    node: Option<&'a dyn ErrorNode>,
    offset: usize,
}

impl<'a> ErrorTrace<'a> {
    pub fn new(node: &'a dyn ErrorNode, base: usize) -> Self {
        ErrorTrace {
            node: Some(node),
            offset: base,
        }
    }
}

impl<'a> Iterator for ErrorTrace<'a> {
    type Item = TraceFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        let frame = TraceFrame {
            description: node.description(),
            offset: self.offset,
        };
        self.offset += node.inner_offset();
        self.node = node.cause();
        Some(frame)
    }
}

/// A single token did not match
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected {expected:?} but got {got:?}")]
pub struct UnitError<T: Atomic> {
    pub expected: T,
    pub got: T,
}

impl<T: Atomic> ErrorNode for UnitError<T> {}

/// A literal mismatched `inner_offset` tokens after its start
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "expected literal \"{}\", mismatch after {} matching tokens",
    T::slice_to_string(.expected),
    .inner_offset
)]
pub struct LiteralError<T: Atomic> {
    pub expected: Arc<[T]>,
    pub inner_offset: usize,
}

impl<T: Atomic> ErrorNode for LiteralError<T> {
    fn inner_offset(&self) -> usize {
        self.inner_offset
    }
}

/// Which part of a sequence step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceCause {
    Parser,
    Delimiter,
}

impl SequenceCause {
    fn label(&self) -> &'static str {
        match self {
            SequenceCause::Parser => "sequence step",
            SequenceCause::Delimiter => "delimiter before sequence step",
        }
    }
}

/// A sequence failed at step `failing_index` (0-based)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} {} failed", .cause.label(), .failing_index + 1)]
pub struct SequenceError<T: Atomic> {
    pub failing_index: usize,
    pub cause: SequenceCause,
    /// Distance from the sequence start to where the failing step started
    pub inner_offset: usize,
    pub prior: Box<ParseError<T>>,
}

impl<T: Atomic> ErrorNode for SequenceError<T> {
    fn inner_offset(&self) -> usize {
        self.inner_offset
    }

    fn cause(&self) -> Option<&dyn ErrorNode> {
        Some(&*self.prior)
    }
}

/// Why a repetition gave up before reaching its minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManyCause {
    ParserFailed,
    ConditionFailed,
    DelimiterFailed,
}

fn many_failure(cause: &ManyCause, achieved_count: &usize) -> String {
    let element = achieved_count + 1;
    match cause {
        ManyCause::ParserFailed => format!("repetition element {} failed", element),
        ManyCause::ConditionFailed => {
            format!("repetition element {} did not satisfy the condition", element)
        }
        ManyCause::DelimiterFailed => {
            format!("delimiter before repetition element {} failed", element)
        }
    }
}

fn values(count: &usize) -> &'static str {
    if *count == 1 { "value" } else { "values" }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "{}, expected at least {} {}",
    many_failure(.cause, .achieved_count),
    .expected_minimum,
    values(.expected_minimum)
)]
pub struct ManyError<T: Atomic> {
    pub cause: ManyCause,
    pub expected_minimum: usize,
    pub achieved_count: usize,
    /// Distance from the repetition start to where the failing attempt started
    pub inner_offset: usize,
    pub prior: Option<Box<ParseError<T>>>,
}

impl<T: Atomic> ErrorNode for ManyError<T> {
    fn inner_offset(&self) -> usize {
        self.inner_offset
    }

    fn cause(&self) -> Option<&dyn ErrorNode> {
        self.prior.as_deref().map(|prior| prior as &dyn ErrorNode)
    }
}

/// No alternative matched
///
/// Only the counts are kept. Individual branch errors are dropped so the
/// error stays small however many arms an alternation has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", alt_summary(.failed_count, .eoi_count))]
pub struct AltError {
    pub failed_count: usize,
    pub eoi_count: usize,
}

fn alternatives(count: usize) -> &'static str {
    if count == 1 {
        "alternative"
    } else {
        "alternatives"
    }
}

fn alt_summary(failed_count: &usize, eoi_count: &usize) -> String {
    if *eoi_count == 0 {
        format!("all {} alternatives failed", failed_count)
    } else {
        format!(
            "{} {} failed and {} {} met end of input",
            failed_count,
            alternatives(*failed_count),
            eoi_count,
            alternatives(*eoi_count)
        )
    }
}

impl ErrorNode for AltError {}

/// Every failure a parser in this crate can report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError<T: Atomic> {
    #[error(transparent)]
    Unit(UnitError<T>),
    #[error(transparent)]
    Literal(LiteralError<T>),
    #[error(transparent)]
    Sequence(SequenceError<T>),
    #[error(transparent)]
    Many(ManyError<T>),
    #[error(transparent)]
    Alt(AltError),
}

impl<T: Atomic> ParseError<T> {
    fn node(&self) -> &dyn ErrorNode {
        match self {
            ParseError::Unit(e) => e,
            ParseError::Literal(e) => e,
            ParseError::Sequence(e) => e,
            ParseError::Many(e) => e,
            ParseError::Alt(e) => e,
        }
    }
}

impl<T: Atomic> ErrorNode for ParseError<T> {
    fn description(&self) -> String {
        self.node().description()
    }

    fn inner_offset(&self) -> usize {
        self.node().inner_offset()
    }

    fn cause(&self) -> Option<&dyn ErrorNode> {
        self.node().cause()
    }
}

impl<T: Atomic> From<UnitError<T>> for ParseError<T> {
    fn from(error: UnitError<T>) -> Self {
        ParseError::Unit(error)
    }
}

impl<T: Atomic> From<LiteralError<T>> for ParseError<T> {
    fn from(error: LiteralError<T>) -> Self {
        ParseError::Literal(error)
    }
}

impl<T: Atomic> From<SequenceError<T>> for ParseError<T> {
    fn from(error: SequenceError<T>) -> Self {
        ParseError::Sequence(error)
    }
}

impl<T: Atomic> From<ManyError<T>> for ParseError<T> {
    fn from(error: ManyError<T>) -> Self {
        ParseError::Many(error)
    }
}

impl<T: Atomic> From<AltError> for ParseError<T> {
    fn from(error: AltError) -> Self {
        ParseError::Alt(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_error() -> ParseError<char> {
        UnitError {
            expected: 'b',
            got: 'x',
        }
        .into()
    }

    #[test]
    fn test_unit_error_display() {
        assert_eq!(unit_error().to_string(), "expected 'b' but got 'x'");
    }

    #[test]
    fn test_literal_error_display() {
        let error = LiteralError {
            expected: Arc::from(&b"let"[..]),
            inner_offset: 2,
        };
        assert_eq!(
            error.to_string(),
            "expected literal \"let\", mismatch after 2 matching tokens"
        );
    }

    #[test]
    fn test_sequence_error_display_is_one_based() {
        let error = SequenceError {
            failing_index: 0,
            cause: SequenceCause::Parser,
            inner_offset: 0,
            prior: Box::new(unit_error()),
        };
        assert_eq!(error.to_string(), "sequence step 1 failed");

        let error = SequenceError {
            cause: SequenceCause::Delimiter,
            failing_index: 2,
            ..error
        };
        assert_eq!(error.to_string(), "delimiter before sequence step 3 failed");
    }

    #[test]
    fn test_many_error_display() {
        let error: ManyError<char> = ManyError {
            cause: ManyCause::ConditionFailed,
            expected_minimum: 1,
            achieved_count: 0,
            inner_offset: 0,
            prior: None,
        };
        assert_eq!(
            error.to_string(),
            "repetition element 1 did not satisfy the condition, expected at least 1 value"
        );
    }

    #[test]
    fn test_alt_error_display() {
        let all_failed = AltError {
            failed_count: 3,
            eoi_count: 0,
        };
        assert_eq!(all_failed.to_string(), "all 3 alternatives failed");

        let mixed = AltError {
            failed_count: 1,
            eoi_count: 2,
        };
        assert_eq!(
            mixed.to_string(),
            "1 alternative failed and 2 alternatives met end of input"
        );
    }

    #[test]
    fn test_trace_sums_offsets_outermost_first() {
        // sequence at 10 -> step starting 3 later -> repetition attempt 2 later -> unit
        let error: ParseError<char> = SequenceError {
            failing_index: 1,
            cause: SequenceCause::Parser,
            inner_offset: 3,
            prior: Box::new(
                ManyError {
                    cause: ManyCause::ParserFailed,
                    expected_minimum: 4,
                    achieved_count: 2,
                    inner_offset: 2,
                    prior: Some(Box::new(unit_error())),
                }
                .into(),
            ),
        }
        .into();

        let frames: Vec<TraceFrame> = error.trace(10).collect();
        let offsets: Vec<usize> = frames.iter().map(|frame| frame.offset).collect();

        assert_eq!(offsets, vec![10, 13, 15]);
        assert_eq!(frames[0].description, "sequence step 2 failed");
        assert_eq!(frames[2].to_string(), "expected 'b' but got 'x' (at 15)");
    }

    #[test]
    fn test_leaf_errors_have_no_cause() {
        let alt: ParseError<u8> = AltError {
            failed_count: 2,
            eoi_count: 0,
        }
        .into();

        assert!(alt.cause().is_none());
        assert_eq!(alt.trace(0).count(), 1);
    }

    #[test]
    fn test_parse_error_displays_its_variant() {
        let error: ParseError<char> = ManyError {
            cause: ManyCause::DelimiterFailed,
            expected_minimum: 3,
            achieved_count: 1,
            inner_offset: 1,
            prior: Some(Box::new(unit_error())),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "delimiter before repetition element 2 failed, expected at least 3 values"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert!(boxed.source().is_none());
    }
}
