use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is what lets a grammar refer to itself.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Slot = P::Slot;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::alt;
    use crate::boxed::{Boxed, BoxedExt};
    use crate::cursor::Cursor;
    use crate::flatten::Kept;
    use crate::hide::HideExt;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::sequence::sequence;
    use crate::unit::unit;
    use crate::CharCursor;
    use std::cell::Cell;

    fn chars(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    /// Nesting depth of parentheses around an `x`: `"((x))"` is 2, `"x"` is 0
    fn depth<'code>() -> Boxed<'code, CharCursor<'code>, usize, Kept> {
        alt((
            sequence((
                unit::<CharCursor>('(').hide(),
                lazy(depth),
                unit::<CharCursor>(')').hide(),
            ))
            .map(|inner: usize| inner + 1),
            unit::<CharCursor>('x').map(|_| 0usize),
        ))
        .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let data = chars("aaaa");
        let cursor = CharCursor::new(&data);

        let lazy_parser = lazy(|| unit::<CharCursor>('a'));
        let (output, remaining) = lazy_parser.parse(cursor).matched().unwrap();

        assert_eq!(output, 'a');
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let data = chars("aaaa");
        let cursor = CharCursor::new(&data);

        let lazy_parser = lazy(|| many(unit::<CharCursor>('a')));
        let (output, remaining) = lazy_parser.parse(cursor).matched().unwrap();

        assert_eq!(output.len(), 4);
        assert!(remaining.eos());
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let lazy_parser = lazy(|| {
            built.set(built.get() + 1);
            unit::<CharCursor>('x')
        });
        assert_eq!(built.get(), 0);

        let data = chars("xyz");
        let cursor = CharCursor::new(&data);
        assert!(lazy_parser.parse(cursor).is_matched());
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let data = chars("((x))");
        let cursor = CharCursor::new(&data);

        let (value, cursor) = depth().parse(cursor).matched().unwrap();
        assert_eq!(value, 2);
        assert!(cursor.eos());
    }

    #[test]
    fn test_lazy_recursive_grammar_failure() {
        let data = chars("((x]");
        let cursor = CharCursor::new(&data);

        let (_, at) = depth().parse(cursor).failed().unwrap();
        assert_eq!(at.position(), 0);
    }
}
