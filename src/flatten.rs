//! Composite value flattening
//!
//! A [`Sequence`](crate::sequence::Sequence) collects the values of its steps
//! into a tuple. Steps whose parser is marked [`Skipped`] (a hidden parser, a
//! [`Nop`](crate::nop::Nop), or a sequence that itself produced nothing)
//! contribute nothing. Once all steps ran, the tuple is flattened: no values
//! become [`Empty`], a single value is returned bare, and two or more stay a
//! tuple in step order.
//!
//! All of this is resolved by the type system when the sequence is built.

/// The value of a parser that matched but contributes nothing to a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Empty;

/// Marks a parser whose value takes part in a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kept;

/// Marks a parser whose value is dropped from a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped;

pub trait Slot {
    const KEPT: bool;
}

impl Slot for Kept {
    const KEPT: bool = true;
}

impl Slot for Skipped {
    const KEPT: bool = false;
}

/// Adds one more value to the right of a tuple
pub trait Append<T> {
    type Output;

    fn append(self, value: T) -> Self::Output;
}

/// Folds one step's value into the composite built so far, honouring its slot
pub trait Collect<S: Slot, T> {
    type Output;

    fn collect_step(self, value: T) -> Self::Output;
}

impl<A, T> Collect<Skipped, T> for A {
    type Output = A;

    fn collect_step(self, _value: T) -> Self::Output {
        self
    }
}

impl<A, T> Collect<Kept, T> for A
where
    A: Append<T>,
{
    type Output = A::Output;

    fn collect_step(self, value: T) -> Self::Output {
        self.append(value)
    }
}

/// Turns the collected tuple into the composite's final value
pub trait Flatten {
    type Output;
    /// `Skipped` when nothing was collected
    type Slot: Slot;

    fn flatten(self) -> Self::Output;
}

impl Flatten for () {
    type Output = Empty;
    type Slot = Skipped;

    fn flatten(self) -> Self::Output {
        Empty
    }
}

impl<A> Flatten for (A,) {
    type Output = A;
    type Slot = Kept;

    fn flatten(self) -> Self::Output {
        self.0
    }
}

macro_rules! impl_append {
    ($($A:ident $a:ident),*) => {
        impl<$($A,)* T> Append<T> for ($($A,)*) {
            type Output = ($($A,)* T,);

            fn append(self, value: T) -> Self::Output {
                let ($($a,)*) = self;
                ($($a,)* value,)
            }
        }
    };
}

impl_append!();
impl_append!(A0 a0);
impl_append!(A0 a0, A1 a1);
impl_append!(A0 a0, A1 a1, A2 a2);
impl_append!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_append!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_append!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_append!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);

macro_rules! impl_flatten_tuple {
    ($($A:ident),+) => {
        impl<$($A),+> Flatten for ($($A),+) {
            type Output = Self;
            type Slot = Kept;

            fn flatten(self) -> Self::Output {
                self
            }
        }
    };
}

impl_flatten_tuple!(A0, A1);
impl_flatten_tuple!(A0, A1, A2);
impl_flatten_tuple!(A0, A1, A2, A3);
impl_flatten_tuple!(A0, A1, A2, A3, A4);
impl_flatten_tuple!(A0, A1, A2, A3, A4, A5);
impl_flatten_tuple!(A0, A1, A2, A3, A4, A5, A6);
impl_flatten_tuple!(A0, A1, A2, A3, A4, A5, A6, A7);
