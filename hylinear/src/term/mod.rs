//! Minimal term syntax for displaying programs and their results.
//!
//! Role
//! - [`Term`] is the printable surface form: variables, lambdas, applications, numbers, strings,
//!   pairs, explicit duplications, lists, erasure and opaque functions.
//! - Values are read back into terms with `Term::from(&value)`; reading back only inspects, it
//!   does not consume the value.
//! - [`pretty`] renders terms with width-aware layout and terminal colors.
//!
//! Example
//! ```
//! use hylinear::term::{Term, pretty::PrettyTerm};
//!
//! let t = Term::dup("a", "b", Term::var("x"), Term::pair(Term::var("a"), Term::var("b")));
//! assert_eq!(t.pretty_string(), "let {a b} = x; (a, b)");
//! ```
pub mod pretty;

use strum::{EnumDiscriminants, EnumIs, EnumIter};

use crate::{
    codec::PackedStr,
    list::{CatList, List},
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(TermType), derive(Hash, EnumIter))]
pub enum Term {
    Var(String),
    Lam {
        binder: String,
        body: Box<Term>,
    },
    App {
        func: Box<Term>,
        arg: Box<Term>,
    },
    Num(u32),
    Str(String),
    Pair(Box<Term>, Box<Term>),
    /// `let {left right} = value; body`
    Dup {
        left: String,
        right: String,
        value: Box<Term>,
        body: Box<Term>,
    },
    List(Vec<Term>),
    /// Erased value, printed as `*`.
    Era,
    /// Function whose code can't be read back.
    Opaque,
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn lam(binder: impl Into<String>, body: Term) -> Self {
        Term::Lam {
            binder: binder.into(),
            body: Box::new(body),
        }
    }

    pub fn app(func: Term, arg: Term) -> Self {
        Term::App {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    /// `self(arg)`
    pub fn apply(self, arg: Term) -> Self {
        Term::app(self, arg)
    }

    pub fn num(n: u32) -> Self {
        Term::Num(n)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Term::Str(text.into())
    }

    pub fn pair(first: Term, second: Term) -> Self {
        Term::Pair(Box::new(first), Box::new(second))
    }

    pub fn dup(left: impl Into<String>, right: impl Into<String>, value: Term, body: Term) -> Self {
        Term::Dup {
            left: left.into(),
            right: right.into(),
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        Term::List(items.into_iter().collect())
    }

    #[inline]
    pub fn r#type(&self) -> TermType {
        TermType::from(self)
    }
}

impl From<&Value> for Term {
    fn from(value: &Value) -> Self {
        match value {
            Value::Atom(n) => Term::Num(*n),
            Value::Pair(a, b) => Term::pair(Term::from(&**a), Term::from(&**b)),
            Value::Function(_) => Term::Opaque,
        }
    }
}

impl From<u32> for Term {
    fn from(n: u32) -> Self {
        Term::Num(n)
    }
}

impl From<&PackedStr> for Term {
    fn from(s: &PackedStr) -> Self {
        Term::Str(s.to_string_lossy())
    }
}

impl From<&List<u32>> for Term {
    fn from(list: &List<u32>) -> Self {
        Term::list(list.iter().map(|&n| Term::Num(n)))
    }
}

impl From<&List<u8>> for Term {
    fn from(list: &List<u8>) -> Self {
        Term::list(list.iter().map(|&unit| Term::Num(unit as u32)))
    }
}

impl<T: Into<Term>> From<CatList<T>> for Term {
    fn from(list: CatList<T>) -> Self {
        Term::list(list.into_iter().map(Into::into))
    }
}
