use crate::flatten::{Empty, Skipped};
use crate::parser::{ParseResult, Parser};

/// Runs a parser and throws its value away
///
/// The cursor still advances, and failures come back exactly as the inner
/// parser reported them. Inside a [`Sequence`](crate::sequence::Sequence) a
/// hidden step contributes nothing to the composite value.
#[derive(Clone)]
pub struct Hide<P> {
    parser: P,
}

impl<P> Hide<P> {
    pub fn new(parser: P) -> Self {
        Hide { parser }
    }
}

impl<'code, P> Parser<'code> for Hide<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Empty;
    type Slot = Skipped;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Empty, Self::Cursor> {
        self.parser.parse(cursor).map_value(|_| Empty)
    }
}

pub fn hide<'code, P>(parser: P) -> Hide<P>
where
    P: Parser<'code>,
{
    Hide::new(parser)
}

pub trait HideExt<'code>: Parser<'code> + Sized {
    fn hide(self) -> Hide<Self> {
        Hide::new(self)
    }
}

impl<'code, P> HideExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::error::ParseError;
    use crate::literal::text;
    use crate::unit::unit;
    use crate::CharCursor;

    #[test]
    fn test_hide_keeps_position() {
        let data: Vec<char> = "let x".chars().collect();
        let cursor = CharCursor::new(&data);

        let (value, cursor) = text("let").hide().parse(cursor).matched().unwrap();
        assert_eq!(value, Empty);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_hide_passes_inner_error_unchanged() {
        let data = ['x'];
        let cursor = CharCursor::new(&data);
        let parser = unit::<CharCursor>('a');

        let hidden = hide(&parser).parse(cursor);
        let plain = parser.parse(cursor);

        assert!(matches!(hidden.error(), Some(ParseError::Unit(_))));
        assert_eq!(hidden.error(), plain.error());
        assert_eq!(hidden.cursor(), plain.cursor());
    }

    #[test]
    fn test_hide_passes_end_of_input() {
        let data: [char; 0] = [];
        let cursor = CharCursor::new(&data);

        let eoi = unit::<CharCursor>('a')
            .hide()
            .parse(cursor)
            .end_of_input()
            .unwrap();
        assert_eq!(eoi.labels().len(), 1);
    }
}
