//! Bounded iteration and sequence-driven traversal.
//!
//! Role
//! - [`bounded_for`] applies a step function a fixed number of times to an accumulator, strictly
//!   in sequence, then finalizes. The count is a [`Nat`], known before the first step runs.
//! - [`for_value`] is the same engine over dynamic [`Value`]s: the count is turned into an
//!   apply-N-times function ([`Nat::church`]) that composes `N` explicit duplicates of the step
//!   and is applied once.
//! - [`traverse`] is the unbounded counterpart: it walks a finite sequence one element per step
//!   until the sequence runs out or the step breaks.
//!
//! Neither form recurses natively, so deep counts and long sequences do not grow the stack.
//!
//! Example
//! ```
//! use std::ops::ControlFlow;
//! use hylinear::iterate::{Nat, bounded_for, traverse};
//!
//! let total = bounded_for(Nat::new(3), 1u32, |x| x * 2, |x| x + 1);
//! assert_eq!(total, 9);
//!
//! // Sum until the first zero.
//! let sum = traverse([4u32, 5, 0, 7], 0, |acc, x| {
//!     if x == 0 { ControlFlow::Break(acc) } else { ControlFlow::Continue(acc + x) }
//! });
//! assert_eq!(sum, 9);
//! ```
use std::ops::ControlFlow;

use log::trace;

use crate::{
    linear::Dup,
    value::{LinearFn, Value},
};

/// Repetition count: the capability to apply a transformation exactly `N` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nat(u32);

impl Nat {
    pub const ZERO: Nat = Nat(0);
    pub const ONE: Nat = Nat(1);

    #[inline]
    pub const fn new(n: u32) -> Self {
        Nat(n)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Successor. Saturates at `u32::MAX`.
    #[inline]
    pub const fn succ(self) -> Self {
        Nat(self.0.saturating_add(1))
    }

    /// The `N`-fold self-composition of `f`, as a one-shot function.
    pub fn compose<S>(self, mut f: impl FnMut(S) -> S) -> impl FnOnce(S) -> S {
        move |mut state| {
            for _ in 0..self.0 {
                state = f(state);
            }
            state
        }
    }

    /// The `N`-fold self-composition of a function value, built from `N` explicit duplicates
    /// of `f`. For `N = 0` this is the identity and `f` is discarded.
    pub fn compose_fn(self, f: LinearFn) -> LinearFn {
        let mut copies = Vec::new();
        let mut rest = f;
        for _ in 0..self.0 {
            let (now, later) = rest.dup();
            copies.push(now);
            rest = later;
        }
        LinearFn::chain(copies)
    }

    /// Church encoding: a function that maps a function value `f` to `f` composed `N` times.
    pub fn church(self) -> LinearFn {
        LinearFn::new(self, |n: Nat, f: Value| {
            Value::Function(n.compose_fn(f.into_function()))
        })
    }
}

impl Dup for Nat {
    #[inline]
    fn dup(self) -> (Self, Self) {
        (self, self)
    }
}

impl From<u32> for Nat {
    fn from(n: u32) -> Self {
        Nat(n)
    }
}

impl std::fmt::Display for Nat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Apply `step` to `init` exactly `count` times, then `finish`.
///
/// Step `k` consumes the output of step `k - 1`; with `count = 0`, `step` is never invoked and
/// the result is `finish(init)`.
pub fn bounded_for<S, R>(
    count: Nat,
    init: S,
    step: impl FnMut(S) -> S,
    finish: impl FnOnce(S) -> R,
) -> R {
    trace!("bounded_for: {} steps", count);
    let iterate = count.compose(step);
    finish(iterate(init))
}

/// [`bounded_for`] over dynamic values.
///
/// The step function is supplied once; the engine builds `count` duplicates of it through
/// [`Nat::church`], composes them, and applies the composition to `init` exactly once.
pub fn for_value(count: Nat, init: Value, step: LinearFn, finish: LinearFn) -> Value {
    trace!("for_value: {} steps", count);
    let iterate = count.church().call(Value::Function(step)).into_function();
    finish.call(iterate.call(init))
}

/// Walk `seq` front to back, threading `init` through `step`.
///
/// Terminates when the sequence is exhausted or when `step` returns [`ControlFlow::Break`];
/// either way the last state is returned.
pub fn traverse<I, S>(
    seq: I,
    init: S,
    mut step: impl FnMut(S, I::Item) -> ControlFlow<S, S>,
) -> S
where
    I: IntoIterator,
{
    let mut state = init;
    for item in seq {
        match step(state, item) {
            ControlFlow::Continue(next) => state = next,
            ControlFlow::Break(last) => return last,
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_skips_step() {
        let mut called = false;
        let r = bounded_for(
            Nat::ZERO,
            7u32,
            |s| {
                called = true;
                s
            },
            |s| s,
        );
        assert_eq!(r, 7);
        assert!(!called);
    }

    #[test]
    fn compose_fn_zero_is_identity() {
        let inc = LinearFn::pure(|x| Value::atom(x.into_atom() + 1));
        assert_eq!(Nat::ZERO.compose_fn(inc).call(Value::atom(4)).into_atom(), 4);
    }

    #[test]
    fn church_numeral_applies_function_n_times() {
        let double = LinearFn::pure(|x| Value::atom(x.into_atom() * 2));
        let eight = Nat::new(3)
            .church()
            .call(Value::Function(double))
            .apply(Value::atom(1));
        assert_eq!(eight.into_atom(), 8);
    }

    #[test]
    fn traverse_breaks_early() {
        let mut seen = Vec::new();
        let last = traverse(1..=10u32, 0u32, |_, x| {
            seen.push(x);
            if x == 3 {
                ControlFlow::Break(x)
            } else {
                ControlFlow::Continue(x)
            }
        });
        assert_eq!(last, 3);
        assert_eq!(seen, [1, 2, 3]);
    }
}
