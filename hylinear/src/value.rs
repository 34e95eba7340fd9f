//! Dynamic values of the calculus.
//!
//! Role
//! - [`Value`] is the untyped runtime value: an atom (`u32`), a pair of values, or a function.
//! - [`LinearFn`] is a function value. Applying it consumes it; to call it twice it has to be
//!   duplicated first, which duplicates its captured environment.
//!
//! Misuse (destructuring an atom, applying a pair, ...) is a contract violation and panics.
//!
//! Example
//! ```
//! use hylinear::linear::Dup;
//! use hylinear::value::{LinearFn, Value};
//!
//! // add = λx. x + k, with k captured
//! let add = LinearFn::new(10u32, |k, x: Value| Value::atom(x.into_atom() + k));
//! let (f, g) = add.dup();
//! assert_eq!(f.call(Value::atom(1)).into_atom(), 11);
//! assert_eq!(g.call(Value::atom(2)).into_atom(), 12);
//! ```
use std::fmt;

use strum::{EnumIs, IntoStaticStr};

use crate::{
    error::{ContractViolation, violate},
    linear::Dup,
};

/// Runtime value: atom, pair, or function.
#[derive(EnumIs, IntoStaticStr)]
pub enum Value {
    Atom(u32),
    Pair(Box<Value>, Box<Value>),
    Function(LinearFn),
}

impl Value {
    pub const TRUE: u32 = 1;
    pub const FALSE: u32 = 0;

    #[inline]
    pub fn atom(value: u32) -> Self {
        Value::Atom(value)
    }

    #[inline]
    pub fn pair(first: Value, second: Value) -> Self {
        Value::Pair(Box::new(first), Box::new(second))
    }

    #[inline]
    pub fn function(f: LinearFn) -> Self {
        Value::Function(f)
    }

    /// Boolean encoded as an atom (`1` / `0`).
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Atom(if b { Self::TRUE } else { Self::FALSE })
    }

    /// Variant name, used in diagnostics.
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Consume an atom.
    #[track_caller]
    pub fn into_atom(self) -> u32 {
        match self {
            Value::Atom(v) => v,
            other => violate(ContractViolation::NotAnAtom(other.kind())),
        }
    }

    /// Consume a function value.
    #[track_caller]
    pub fn into_function(self) -> LinearFn {
        match self {
            Value::Function(f) => f,
            other => violate(ContractViolation::NotAFunction(other.kind())),
        }
    }

    /// Consume a pair and release both components.
    #[track_caller]
    pub fn destructure(self) -> (Value, Value) {
        match self {
            Value::Pair(a, b) => (*a, *b),
            other => violate(ContractViolation::NotAPair(other.kind())),
        }
    }

    /// Apply this function value to `arg`, consuming both.
    #[track_caller]
    pub fn apply(self, arg: Value) -> Value {
        self.into_function().call(arg)
    }

    /// Consume a boolean atom. Any non-zero atom is true.
    #[track_caller]
    pub fn is_true(self) -> bool {
        self.into_atom() != Self::FALSE
    }

    #[track_caller]
    pub fn fst(self) -> Value {
        self.destructure().0
    }

    #[track_caller]
    pub fn snd(self) -> Value {
        self.destructure().1
    }

    #[track_caller]
    pub fn swap(self) -> Value {
        let (a, b) = self.destructure();
        Value::pair(b, a)
    }

    /// Right-nested tuple `(a, (b, (c, ...)))`. A single element is returned as is; an empty
    /// iterator yields the unit atom `0`.
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Value {
        let mut items: Vec<Value> = items.into_iter().collect();
        let Some(mut acc) = items.pop() else {
            return Value::atom(0);
        };
        while let Some(item) = items.pop() {
            acc = Value::pair(item, acc);
        }
        acc
    }

    /// Inverse of [`Value::tuple`] for a tuple of exactly `arity` components.
    #[track_caller]
    pub fn untuple(self, arity: usize) -> Vec<Value> {
        let mut out = Vec::with_capacity(arity);
        let mut rest = self;
        for _ in 1..arity {
            match rest {
                Value::Pair(head, tail) => {
                    out.push(*head);
                    rest = *tail;
                }
                _ => violate(ContractViolation::TupleTooShort),
            }
        }
        if arity > 0 {
            out.push(rest);
        }
        out
    }
}

impl Dup for Value {
    fn dup(self) -> (Self, Self) {
        match self {
            Value::Atom(v) => (Value::Atom(v), Value::Atom(v)),
            Value::Pair(a, b) => {
                let (a1, a2) = a.dup();
                let (b1, b2) = b.dup();
                (Value::Pair(a1, b1), Value::Pair(a2, b2))
            }
            Value::Function(f) => {
                let (f1, f2) = f.dup();
                (Value::Function(f1), Value::Function(f2))
            }
        }
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Atom(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<LinearFn> for Value {
    fn from(f: LinearFn) -> Self {
        Value::Function(f)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Atom(v) => write!(f, "{v}"),
            Value::Pair(a, b) => f.debug_tuple("").field(a).field(b).finish(),
            Value::Function(func) => fmt::Debug::fmt(func, f),
        }
    }
}

// ======================== Boolean helpers ========================

#[track_caller]
pub fn and(a: Value, b: Value) -> Value {
    Value::bool(a.is_true() & b.is_true())
}

#[track_caller]
pub fn or(a: Value, b: Value) -> Value {
    Value::bool(a.is_true() | b.is_true())
}

#[track_caller]
pub fn not(a: Value) -> Value {
    Value::bool(!a.is_true())
}

/// `if cond then then_branch else else_branch`. The branch not taken is discarded.
#[track_caller]
pub fn select(cond: Value, then_branch: Value, else_branch: Value) -> Value {
    if cond.is_true() {
        then_branch
    } else {
        else_branch
    }
}

// ======================== Functions ========================

trait Closure {
    fn call_once(self: Box<Self>, arg: Value) -> Value;
    fn dup_boxed(self: Box<Self>) -> (Box<dyn Closure>, Box<dyn Closure>);
}

/// Code plus captured environment. The code is freely copyable; the environment is linear.
struct Env<C, F> {
    env: C,
    body: F,
}

impl<C, F> Closure for Env<C, F>
where
    C: Dup + 'static,
    F: Fn(C, Value) -> Value + Clone + 'static,
{
    fn call_once(self: Box<Self>, arg: Value) -> Value {
        let Env { env, body } = *self;
        body(env, arg)
    }

    fn dup_boxed(self: Box<Self>) -> (Box<dyn Closure>, Box<dyn Closure>) {
        let Env { env, body } = *self;
        let (e1, e2) = env.dup();
        (
            Box::new(Env {
                env: e1,
                body: body.clone(),
            }),
            Box::new(Env { env: e2, body }),
        )
    }
}

/// Function value: consumed by [`LinearFn::call`], duplicated through [`Dup`].
pub struct LinearFn {
    closure: Box<dyn Closure>,
}

impl LinearFn {
    /// Close `body` over the environment `env`.
    ///
    /// `body` receives the environment by value on every call. Duplicating the function
    /// duplicates `env`, so two copies never share captured state.
    pub fn new<C, F>(env: C, body: F) -> Self
    where
        C: Dup + 'static,
        F: Fn(C, Value) -> Value + Clone + 'static,
    {
        Self {
            closure: Box::new(Env { env, body }),
        }
    }

    /// Function without captured state.
    pub fn pure<F>(body: F) -> Self
    where
        F: Fn(Value) -> Value + Clone + 'static,
    {
        Self::new((), move |(), arg| body(arg))
    }

    pub fn identity() -> Self {
        Self::pure(|x| x)
    }

    /// `self` then `next`: `x ↦ next(self(x))`.
    pub fn then(self, next: LinearFn) -> Self {
        Self::chain(vec![self, next])
    }

    /// Apply `fns` left to right. An empty chain is the identity.
    pub fn chain(fns: Vec<LinearFn>) -> Self {
        Self::new(fns, |fns: Vec<LinearFn>, arg| {
            fns.into_iter().fold(arg, |acc, f| f.call(acc))
        })
    }

    /// Apply the function, consuming it.
    #[inline]
    pub fn call(self, arg: Value) -> Value {
        self.closure.call_once(arg)
    }
}

impl Dup for LinearFn {
    fn dup(self) -> (Self, Self) {
        let (a, b) = self.closure.dup_boxed();
        (LinearFn { closure: a }, LinearFn { closure: b })
    }
}

impl fmt::Debug for LinearFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_roundtrip() {
        let t = Value::tuple([1u32, 2, 3].map(Value::atom));
        let parts: Vec<u32> = t.untuple(3).into_iter().map(Value::into_atom).collect();
        assert_eq!(parts, [1, 2, 3]);
    }

    #[test]
    fn untuple_single_and_empty() {
        assert_eq!(Value::atom(9).untuple(1).len(), 1);
        assert!(Value::atom(9).untuple(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn destructure_atom_panics() {
        let _ = Value::atom(1).destructure();
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn apply_pair_panics() {
        let p = Value::pair(Value::atom(1), Value::atom(2));
        let _ = p.apply(Value::atom(3));
    }

    #[test]
    fn boolean_helpers() {
        assert!(and(true.into(), true.into()).is_true());
        assert!(!and(true.into(), false.into()).is_true());
        assert!(or(false.into(), true.into()).is_true());
        assert!(not(false.into()).is_true());
        assert_eq!(
            select(Value::bool(false), Value::atom(1), Value::atom(2)).into_atom(),
            2
        );
    }

    #[test]
    fn chain_applies_in_order() {
        let double = LinearFn::pure(|x| Value::atom(x.into_atom() * 2));
        let inc = LinearFn::pure(|x| Value::atom(x.into_atom() + 1));
        assert_eq!(double.then(inc).call(Value::atom(5)).into_atom(), 11);
        assert_eq!(LinearFn::chain(Vec::new()).call(Value::atom(5)).into_atom(), 5);
    }
}
