use crate::AtomicCursor;

/// A cursor over decoded characters
///
/// Collect the input first (`text.chars().collect::<Vec<_>>()`); positions
/// then count characters rather than bytes.
pub type CharCursor<'code> = AtomicCursor<'code, char>;
