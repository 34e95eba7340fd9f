//! Worked example programs.
//!
//! Each program builds its inputs, runs them through the crate's combinators, and reads the
//! result back as a [`Term`] for display.
use log::debug;

use crate::{
    codec::PackedStr,
    iterate::{Nat, bounded_for, for_value},
    linear::{Dup, Linear, Pair},
    list::{CatList, List},
    term::Term,
    value::{self, LinearFn, Value},
};

/// A named example and its result.
pub struct Program {
    pub name: &'static str,
    pub run: fn() -> Term,
}

/// All example programs, in presentation order.
pub const PROGRAMS: &[Program] = &[
    Program {
        name: "list_concat",
        run: list_concat,
    },
    Program {
        name: "catlist_fold",
        run: catlist_fold,
    },
    Program {
        name: "pair_swap",
        run: pair_swap,
    },
    Program {
        name: "tuple_access",
        run: tuple_access,
    },
    Program {
        name: "booleans",
        run: booleans,
    },
    Program {
        name: "count_up",
        run: count_up_five,
    },
    Program {
        name: "church_double",
        run: church_double,
    },
    Program {
        name: "squares",
        run: squares,
    },
    Program {
        name: "string_concat",
        run: string_concat,
    },
    Program {
        name: "packed_words",
        run: packed_words,
    },
];

/// Look up a program by name.
pub fn find(name: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.name == name)
}

/// Run every program, in order.
pub fn run_all() -> Vec<(&'static str, Term)> {
    PROGRAMS
        .iter()
        .map(|p| {
            debug!("running program {}", p.name);
            (p.name, (p.run)())
        })
        .collect()
}

/// `[1, 2, 3] ++ [4, 5]`
pub fn list_concat() -> Term {
    let xs: List<u32> = [1, 2, 3].into_iter().collect();
    let ys: List<u32> = [4, 5].into_iter().collect();
    Term::from(&xs.concat(ys))
}

/// Sum of an alternate list built by concatenation and unfolding.
pub fn catlist_fold() -> Term {
    let front = CatList::from_iter([1u32, 2, 3]);
    let back = CatList::unfold(4u32, |n| (n <= 6).then_some((n, n + 1)));
    let all = front.concat(back);
    let (for_sum, for_show) = all.dup();
    Term::pair(Term::from(for_show), Term::num(for_sum.fold(0, |a, b| a + b)))
}

/// Swap the components of a pair, going through linear handles.
pub fn pair_swap() -> Term {
    let (a, b) = Linear::new(Pair::new(1u32, 2u32)).destructure();
    let swapped = Value::pair(Value::atom(b.consume()), Value::atom(a.consume()));
    Term::from(&swapped)
}

/// Build a 4-tuple and take its third component.
pub fn tuple_access() -> Term {
    let t = Value::tuple([10u32, 20, 30, 40].map(Value::atom));
    let mut parts = t.untuple(4);
    Term::from(&parts.swap_remove(2))
}

/// Truth table of `a && !b || !a && b` (exclusive or).
pub fn booleans() -> Term {
    let xor = |a: bool, b: bool| {
        let (a1, a2) = Value::bool(a).dup();
        let (b1, b2) = Value::bool(b).dup();
        value::or(
            value::and(a1, value::not(b1)),
            value::and(value::not(a2), b2),
        )
    };
    Term::list(
        [(false, false), (false, true), (true, false), (true, true)]
            .map(|(a, b)| Term::from(&xor(a, b))),
    )
}

/// `for(count, start, λx. x + 1, λx. x)` over dynamic values.
pub fn count_up(count: Nat, start: u32) -> Term {
    let succ = LinearFn::pure(|x| Value::atom(x.into_atom().wrapping_add(1)));
    let result = for_value(count, Value::atom(start), succ, LinearFn::identity());
    Term::from(&result)
}

fn count_up_five() -> Term {
    count_up(Nat::new(5), 0)
}

/// `3(double)(1)` with a Church numeral.
pub fn church_double() -> Term {
    let double = LinearFn::pure(|x| Value::atom(x.into_atom() * 2));
    let result = Nat::new(3)
        .church()
        .call(Value::function(double))
        .apply(Value::atom(1));
    Term::from(&result)
}

/// The first six squares, accumulated with the bounded engine over `(index, squares)`.
pub fn squares() -> Term {
    bounded_for(
        Nat::new(6),
        Pair::new(1u32, List::new()),
        |state| {
            let (i, mut acc) = state.destructure();
            acc.push_front(i * i);
            Pair::new(i + 1, acc)
        },
        |state| Term::from(&state.snd().reverse()),
    )
}

/// `"ksjkajf" ++ " and more"` through the packed codec.
pub fn string_concat() -> Term {
    let joined = PackedStr::from("ksjkajf").concat(PackedStr::from(" and more"));
    Term::from(&joined)
}

/// The packed words of `"ksjkajf"`.
pub fn packed_words() -> Term {
    let s = PackedStr::from("ksjkajf");
    Term::list(s.words().iter().map(|w| Term::num(w.raw())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::pretty::PrettyTerm;

    #[test]
    fn names_are_unique() {
        for (i, p) in PROGRAMS.iter().enumerate() {
            assert!(PROGRAMS[i + 1..].iter().all(|q| q.name != p.name));
        }
    }

    #[test]
    fn program_results() {
        let show = |name| (find(name).unwrap().run)().pretty_string();
        assert_eq!(show("list_concat"), "[1, 2, 3, 4, 5]");
        assert_eq!(show("catlist_fold"), "([1, 2, 3, 4, 5, 6], 21)");
        assert_eq!(show("pair_swap"), "(2, 1)");
        assert_eq!(show("tuple_access"), "30");
        assert_eq!(show("booleans"), "[0, 1, 1, 0]");
        assert_eq!(show("count_up"), "5");
        assert_eq!(show("church_double"), "8");
        assert_eq!(show("squares"), "[1, 4, 9, 16, 25, 36]");
        assert_eq!(show("string_concat"), "\"ksjkajf and more\"");
        assert_eq!(show("packed_words"), "[1802138475, 6711905]");
    }

    #[test]
    fn count_up_wraps_at_word_width() {
        assert_eq!(count_up(Nat::new(1), u32::MAX), Term::num(0));
        assert_eq!(count_up(Nat::new(3), u32::MAX - 1), Term::num(1));
        assert_eq!(count_up(Nat::ZERO, u32::MAX), Term::num(u32::MAX));
    }
}
