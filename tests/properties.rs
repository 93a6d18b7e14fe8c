//! Property-based tests for the combinator laws
//!
//! Inputs are short strings over a tiny alphabet so that matches, failures and
//! end of input all show up often.

use proptest::prelude::*;
use tracecomb::{
    CharCursor, Cursor, Empty, HideExt, MapExt, Outcome, Parser, alt, any, many, sequence, text,
    unit,
};

fn input_strategy() -> impl Strategy<Value = Vec<char>> {
    "[ab,]{0,12}".prop_map(|input| input.chars().collect())
}

/// An input together with a sub-range of it
fn ranged_input_strategy() -> impl Strategy<Value = (Vec<char>, usize, usize)> {
    input_strategy().prop_flat_map(|data| {
        let len = data.len();
        (Just(data), 0..=len, 0..=len).prop_map(|(data, a, b)| (data, a.min(b), a.max(b)))
    })
}

fn assert_in_range<T, E>(outcome: &Outcome<T, E, CharCursor<'_>>, start: usize, end: usize) {
    if let Some(cursor) = outcome.cursor() {
        assert!(cursor.position() >= start);
        assert!(cursor.position() <= end);
    }
}

proptest! {
    #[test]
    fn test_positions_stay_within_range((data, start, end) in ranged_input_strategy()) {
        let cursor = CharCursor::between(&data, start, end);

        let list = many(unit::<CharCursor>('a')).with_delim(text(","));
        let pair = sequence((unit::<CharCursor>('a'), any::<CharCursor>()));
        let either = alt((text("ab"), text("ba"), text(",")));
        let bounded = many(alt((unit::<CharCursor>('a'), unit::<CharCursor>('b')))).at_least(1).at_most(3);

        assert_in_range(&list.parse(cursor), start, end);
        assert_in_range(&pair.parse(cursor), start, end);
        assert_in_range(&either.parse(cursor), start, end);
        assert_in_range(&bounded.parse(cursor), start, end);
    }

    #[test]
    fn test_map_identity_preserves_outcome(data in input_strategy()) {
        let cursor = CharCursor::new(&data);
        let parser = many(unit::<CharCursor>('a')).at_least(1).with_delim(text(","));
        let mapped = (&parser).map(|values| values);

        prop_assert_eq!(mapped.parse(cursor), parser.parse(cursor));
    }

    #[test]
    fn test_hide_keeps_position_and_drops_value(data in input_strategy()) {
        let cursor = CharCursor::new(&data);
        let parser = sequence((unit::<CharCursor>('a'), many(unit::<CharCursor>('b'))));

        match (parser.parse(cursor), (&parser).hide().parse(cursor)) {
            (Outcome::Matched { cursor: plain, .. }, Outcome::Matched { value, cursor: hidden }) => {
                prop_assert_eq!(value, Empty);
                prop_assert_eq!(plain, hidden);
            }
            (plain, hidden) => {
                prop_assert!(!plain.is_matched());
                prop_assert_eq!(plain.is_failed(), hidden.is_failed());
                prop_assert_eq!(plain.error(), hidden.error());
            }
        }
    }

    #[test]
    fn test_alt_prefers_first_arm(data in input_strategy()) {
        let cursor = CharCursor::new(&data);
        let first = any::<CharCursor>().map(|ch| (0u8, ch));
        let second = unit::<CharCursor>('a').map(|ch| (1u8, ch));

        let outcome = alt((first, second)).parse(cursor);
        match data.first() {
            Some(ch) => prop_assert_eq!(outcome.value(), Some(&(0u8, *ch))),
            None => prop_assert!(outcome.is_end_of_input()),
        }
    }

    #[test]
    fn test_sequence_of_hidden_steps_is_empty(data in input_strategy()) {
        let cursor = CharCursor::new(&data);
        let parser = sequence((any::<CharCursor>().hide(), any::<CharCursor>().hide()));

        let outcome = parser.parse(cursor);
        if data.len() >= 2 {
            prop_assert_eq!(outcome.matched(), Some((Empty, cursor.advance(2))));
        } else {
            prop_assert!(outcome.is_end_of_input());
        }
    }

    #[test]
    fn test_single_visible_step_is_bare(data in input_strategy()) {
        let cursor = CharCursor::new(&data);
        let parser = sequence((any::<CharCursor>().hide(), any::<CharCursor>()));

        if let Some((value, _)) = parser.parse(cursor).matched() {
            prop_assert_eq!(value, data[1]);
        }
    }

    #[test]
    fn test_many_respects_bounds(data in input_strategy(), minimum in 0usize..4, maximum in 0usize..4) {
        let cursor = CharCursor::new(&data);
        let parser = many(any::<CharCursor>()).at_least(minimum).at_most(maximum);

        match parser.parse(cursor) {
            Outcome::Matched { value, cursor } => {
                prop_assert!(value.len() >= minimum);
                prop_assert!(value.len() <= maximum.max(minimum).max(1));
                prop_assert_eq!(cursor.position(), value.len());
            }
            Outcome::EndOfInput(_) => prop_assert!(data.len() < minimum || data.is_empty()),
            Outcome::Failed { error, .. } => prop_assert!(false, "any never fails: {}", error),
        }
    }
}
