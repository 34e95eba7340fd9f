use std::{cell::RefCell, rc::Rc};

use hylinear::linear::{Dup, Linear, Pair, Tracked, destructure, duplicate};
use hylinear::value::{LinearFn, Value};

#[test]
fn duplicate_atom_is_a_plain_copy() {
    let (a, b) = duplicate(Linear::new(42u32));
    assert_eq!((a.consume(), b.consume()), (42, 42));
}

#[test]
fn duplicated_pair_destructures_to_matching_components() {
    let (left, right) = duplicate(Linear::new(Pair::new(7u32, 9u32)));
    let (x1, y1) = destructure(left);
    let (x2, y2) = destructure(right);
    assert_eq!(
        [x1.consume(), x2.consume(), y1.consume(), y2.consume()],
        [7, 7, 9, 9]
    );
}

#[test]
fn duplicated_value_pair_destructures_to_matching_components() {
    let v = Value::pair(Value::atom(3), Value::pair(Value::atom(4), Value::atom(5)));
    let (a, b) = v.dup();
    let (a0, a1) = a.destructure();
    let (b0, b1) = b.destructure();
    assert_eq!(a0.into_atom(), 3);
    assert_eq!(b0.into_atom(), 3);
    let (a10, a11) = a1.destructure();
    let (b10, b11) = b1.destructure();
    assert_eq!([a10, a11, b10, b11].map(Value::into_atom), [4, 5, 4, 5]);
}

/// A captured counter whose duplicates are independent cells.
struct Counter(RefCell<u32>);

impl Dup for Counter {
    fn dup(self) -> (Self, Self) {
        let n = self.0.into_inner();
        (Counter(RefCell::new(n)), Counter(RefCell::new(n)))
    }
}

#[test]
fn duplicated_functions_do_not_share_captured_state() {
    let f = LinearFn::new(Counter(RefCell::new(100)), |c: Counter, x: Value| {
        *c.0.borrow_mut() += x.into_atom();
        Value::atom(c.0.into_inner())
    });
    let (f1, f2) = f.dup();
    assert_eq!(f1.call(Value::atom(1)).into_atom(), 101);
    // f2 sees the original environment, not the one f1 mutated.
    assert_eq!(f2.call(Value::atom(2)).into_atom(), 102);
}

#[test]
fn duplicated_function_behaves_like_original() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let make = |tag: u32| {
        let calls = Rc::clone(&calls);
        move |x: Value| {
            let x = x.into_atom();
            calls.borrow_mut().push(tag);
            Value::atom(x * 3)
        }
    };
    let original = LinearFn::pure(make(1));
    let (f, g) = original.dup();
    assert_eq!(f.call(Value::atom(2)).into_atom(), 6);
    assert_eq!(g.call(Value::atom(5)).into_atom(), 15);
    assert_eq!(*calls.borrow(), [1, 1]);
}

#[test]
fn linear_map_and_destructure() {
    let h = Linear::new(20u32).map(|n| Pair::new(n, n + 1));
    let (a, b) = h.destructure();
    assert_eq!(a.consume() + b.consume(), 41);
}

#[test]
#[should_panic(expected = "contract violation")]
fn reading_a_consumed_tracked_handle_fails() {
    let handle = Tracked::new(Pair::new(1u32, 2u32));
    let alias = handle.clone();
    let (x, _) = handle.take().destructure();
    assert_eq!(x, 1);
    let _ = alias.take();
}

#[test]
#[should_panic(expected = "contract violation")]
fn destructure_on_non_pair_value_fails() {
    let f = Value::function(LinearFn::identity());
    let _ = f.destructure();
}
