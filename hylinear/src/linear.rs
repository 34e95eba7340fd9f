//! Linear handles and explicit duplication.
//!
//! Role
//! - [`Linear<T>`] is a move-only handle: reading it consumes it, so a second read is rejected
//!   by the compiler.
//! - [`Dup`] is the single sanctioned way to turn one value into two independent values
//!   denoting the same thing. Nothing in this crate clones a linear value implicitly.
//! - [`Pair<A, B>`] can only be taken apart as a unit ([`Pair::destructure`] or [`Pair::with`]).
//! - [`Tracked<T>`] is the runtime-checked fallback for handles that have to live in shared
//!   structures where aliasing cannot be ruled out statically; a second `take` panics.
//!
//! Example
//! ```
//! use hylinear::linear::{Linear, Pair, destructure, duplicate};
//!
//! let h = Linear::new(Pair::new(3u32, 4u32));
//! let (a, b) = duplicate(h);
//! let (x1, y1) = destructure(a);
//! let (x2, y2) = destructure(b);
//! assert_eq!((x1.consume(), x2.consume()), (3, 3));
//! assert_eq!((y1.consume(), y2.consume()), (4, 4));
//! ```
//!
//! Reusing a handle does not compile:
//! ```compile_fail
//! use hylinear::linear::Linear;
//!
//! let h = Linear::new(7u32);
//! let a = h.consume();
//! let b = h.consume(); // use of moved value
//! ```
use std::{cell::Cell, rc::Rc};

use crate::error::{ContractViolation, violate};

/// Explicit duplication.
///
/// Contract
/// - `dup` consumes `self` and returns two values that are observationally identical to it.
/// - The two results are independent: consuming or mutating one never affects the other.
pub trait Dup: Sized {
    fn dup(self) -> (Self, Self);
}

macro_rules! impl_dup_by_copy {
    ($($t:ty),* $(,)?) => {
        $(
            impl Dup for $t {
                #[inline]
                fn dup(self) -> (Self, Self) {
                    (self, self)
                }
            }
        )*
    };
}

impl_dup_by_copy!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    usize,
    i8,
    i16,
    i32,
    i64,
    isize
);

impl Dup for String {
    fn dup(self) -> (Self, Self) {
        (self.clone(), self)
    }
}

impl<A: Dup, B: Dup> Dup for (A, B) {
    fn dup(self) -> (Self, Self) {
        let (a, b) = self;
        let (a1, a2) = a.dup();
        let (b1, b2) = b.dup();
        ((a1, b1), (a2, b2))
    }
}

impl<A: Dup, B: Dup, C: Dup> Dup for (A, B, C) {
    fn dup(self) -> (Self, Self) {
        let (a, b, c) = self;
        let (a1, a2) = a.dup();
        let (b1, b2) = b.dup();
        let (c1, c2) = c.dup();
        ((a1, b1, c1), (a2, b2, c2))
    }
}

impl<T: Dup> Dup for Option<T> {
    fn dup(self) -> (Self, Self) {
        match self {
            Some(v) => {
                let (a, b) = v.dup();
                (Some(a), Some(b))
            }
            None => (None, None),
        }
    }
}

impl<T: Dup> Dup for Box<T> {
    fn dup(self) -> (Self, Self) {
        let (a, b) = (*self).dup();
        (Box::new(a), Box::new(b))
    }
}

impl<T: Dup> Dup for Vec<T> {
    fn dup(self) -> (Self, Self) {
        let mut left = Vec::with_capacity(self.len());
        let mut right = Vec::with_capacity(self.len());
        for value in self {
            let (a, b) = value.dup();
            left.push(a);
            right.push(b);
        }
        (left, right)
    }
}

/// Move-only handle to a value.
///
/// `Linear` is neither `Clone` nor `Copy`. The only ways to get two handles out of one are
/// [`Linear::duplicate`] and, for pairs, [`Linear::destructure`].
#[must_use = "a linear handle must be consumed or explicitly discarded"]
#[derive(Debug)]
pub struct Linear<T>(T);

impl<T> Linear<T> {
    /// Bind a value to a fresh handle.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Consume the handle and take the value out.
    #[inline]
    pub fn consume(self) -> T {
        self.0
    }

    /// Consume the handle, transform its value, and bind the result to a new handle.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Linear<U> {
        Linear(f(self.0))
    }

    /// Drop the handle without reading it. Values are affine, so discarding is allowed.
    #[inline]
    pub fn discard(self) {}
}

impl<T: Dup> Linear<T> {
    /// See [`duplicate`].
    #[inline]
    pub fn duplicate(self) -> (Self, Self) {
        let (a, b) = self.0.dup();
        (Linear(a), Linear(b))
    }
}

impl<A, B> Linear<Pair<A, B>> {
    /// See [`destructure`].
    #[inline]
    pub fn destructure(self) -> (Linear<A>, Linear<B>) {
        let (a, b) = self.0.destructure();
        (Linear(a), Linear(b))
    }
}

impl<T: Dup> Dup for Linear<T> {
    fn dup(self) -> (Self, Self) {
        self.duplicate()
    }
}

/// Consume `handle` and return two independent handles denoting the same value.
#[inline]
pub fn duplicate<T: Dup>(handle: Linear<T>) -> (Linear<T>, Linear<T>) {
    handle.duplicate()
}

/// Consume a pair handle and return handles to both components.
#[inline]
pub fn destructure<A, B>(handle: Linear<Pair<A, B>>) -> (Linear<A>, Linear<B>) {
    handle.destructure()
}

/// Ordered pair of owned values. Both components are released together.
#[derive(Debug, PartialEq, Eq, Hash, Default)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Release both components.
    #[inline]
    pub fn destructure(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Scoped destructuring: bind both components for the duration of `f`.
    #[inline]
    pub fn with<R>(self, f: impl FnOnce(A, B) -> R) -> R {
        f(self.first, self.second)
    }

    /// Keep the first component, discarding the second.
    #[inline]
    pub fn fst(self) -> A {
        self.first
    }

    /// Keep the second component, discarding the first.
    #[inline]
    pub fn snd(self) -> B {
        self.second
    }

    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    #[inline]
    pub fn map_fst<C>(self, f: impl FnOnce(A) -> C) -> Pair<C, B> {
        Pair::new(f(self.first), self.second)
    }

    #[inline]
    pub fn map_snd<C>(self, f: impl FnOnce(B) -> C) -> Pair<A, C> {
        Pair::new(self.first, f(self.second))
    }
}

impl<A: Dup, B: Dup> Dup for Pair<A, B> {
    fn dup(self) -> (Self, Self) {
        let (a1, a2) = self.first.dup();
        let (b1, b2) = self.second.dup();
        (Pair::new(a1, b1), Pair::new(a2, b2))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

/// Runtime-checked linear slot.
///
/// Cloning a `Tracked` aliases the same slot (this is what makes it usable inside shared
/// structures). The first [`Tracked::take`] through any alias moves the value out; every later
/// `take` is a contract violation and panics.
///
/// ```should_panic
/// use hylinear::linear::Tracked;
///
/// let h = Tracked::new(1u32);
/// let alias = h.clone();
/// assert_eq!(h.take(), 1);
/// alias.take(); // contract violation: handle consumed twice
/// ```
pub struct Tracked<T> {
    slot: Rc<Cell<Option<T>>>,
}

impl<T> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(Cell::new(Some(value))),
        }
    }

    /// Move the value out. Panics if any alias already consumed it.
    #[track_caller]
    pub fn take(&self) -> T {
        match self.slot.take() {
            Some(value) => value,
            None => violate(ContractViolation::HandleReused),
        }
    }

    /// Whether the slot has already been consumed through some alias.
    pub fn is_consumed(&self) -> bool {
        // Cell<Option<T>> can't be peeked without T: Copy, so swap the value out and back.
        let value = self.slot.take();
        let consumed = value.is_none();
        self.slot.set(value);
        consumed
    }
}

impl<T: Dup> Tracked<T> {
    /// Consume the slot and return two fresh, unaliased slots.
    #[track_caller]
    pub fn duplicate(&self) -> (Self, Self) {
        let (a, b) = self.take().dup();
        (Tracked::new(a), Tracked::new(b))
    }
}

impl<T> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> std::fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracked")
            .field("consumed", &self.is_consumed())
            .finish()
    }
}
