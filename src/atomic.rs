use std::fmt;

/// Trait for atomic elements (tokens) that can be used in parsing
/// This enables generic error formatting for any comparable token type
pub trait Atomic: Clone + PartialEq + fmt::Debug {
    /// Convert a slice of elements to a displayable string for error reporting
    fn slice_to_string(slice: &[Self]) -> String {
        format!("{:?}", slice)
    }
}

impl Atomic for u8 {
    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).into_owned()
    }
}

impl Atomic for char {
    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

macro_rules! impl_atomic {
    ($($ty:ty),+) => {
        $(impl Atomic for $ty {})+
    };
}

impl_atomic!(u16, u32, u64, usize, i8, i16, i32, i64, isize, bool);
