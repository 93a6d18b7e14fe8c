//! # TraceComb - Parser Combinator Library
//!
//! Small parsers over any token type combine into recursive-descent parsers
//! whose failures can be traced back to the exact sub-parser that caused them.
//!
//! Every parser returns one of three outcomes:
//!
//! - **Matched**: a value and the first unconsumed position
//! - **Failed**: a structured [`ParseError`] and where the failure was detected
//! - **EndOfInput**: the input ran out, with a trace of the parsers in progress
//!
//! Composite errors record which step failed and how far from their own start
//! it began, so [`ErrorNode::trace`] can rebuild absolute offsets for the whole
//! causal chain.
//!
//! ```
//! use tracecomb::{CharCursor, HideExt, Outcome, Parser, many, sequence, unit};
//!
//! let input: Vec<char> = "aab".chars().collect();
//! let parser = sequence((
//!     many(unit::<CharCursor>('a')).at_least(2).at_most(4),
//!     unit::<CharCursor>('b').hide(),
//! ));
//!
//! match parser.parse(CharCursor::new(&input)) {
//!     Outcome::Matched { value, cursor } => {
//!         assert_eq!(value, vec!['a', 'a']);
//!         assert_eq!(tracecomb::Cursor::position(&cursor), 3);
//!     }
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! ```

pub mod alt;
pub mod any;
pub mod atomic;
pub mod boxed;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod flatten;
pub mod hide;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod nop;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod sequence;
pub mod unit;

pub use alt::{Alt, alt};
pub use any::{Any, any};
pub use atomic::Atomic;
pub use boxed::{Boxed, BoxedExt};
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor, CharCursor};
pub use error::{
    AltError, CursorError, ErrorNode, LiteralError, ManyCause, ManyError, ParseError,
    SequenceCause, SequenceError, TraceFrame, UnitError,
};
pub use flatten::Empty;
pub use hide::{Hide, HideExt, hide};
pub use lazy::{Lazy, lazy};
pub use literal::{Literal, bytes, literal, text};
pub use many::{Bounds, Many, many};
pub use map::{Map, MapExt, map};
pub use nop::{Nop, nop};
pub use outcome::{EndOfInput, Failure, Outcome};
pub use parser::{ParseResult, Parser};
pub use position::{Position, PositionExt, Span, position};
pub use sequence::{Sequence, sequence};
pub use unit::{Unit, unit};
