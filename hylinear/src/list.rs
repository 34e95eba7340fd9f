//! Owned sequences used by the calculus.
//!
//! - [`List<T>`]: singly-linked cons list. Consumed front to back; the natural input of
//!   [`traverse`](crate::iterate::traverse).
//! - [`CatList<T>`]: the alternate representation, a concatenation tree with O(1) `concat`.
//!   Folding visits leaves left to right.
//!
//! Neither type is `Clone`: copies go through [`Dup`]. Dropping, folding and iterating are all
//! iterative, so long lists and deep trees do not overflow the stack.
//!
//! Example
//! ```
//! use hylinear::list::{CatList, List};
//!
//! let xs: List<u32> = [1, 2, 3].into_iter().collect();
//! let ys: List<u32> = [4, 5].into_iter().collect();
//! assert_eq!(xs.concat(ys).into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//!
//! let t = CatList::singleton(1).concat(CatList::from_iter([2, 3])).push_back(4);
//! assert_eq!(t.fold(0, |acc, x| acc * 10 + x), 1234);
//! ```
use std::fmt;

use smallvec::SmallVec;

use crate::linear::Dup;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly-linked cons list.
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// `value : tail`
    pub fn cons(value: T, mut tail: List<T>) -> Self {
        tail.push_front(value);
        tail
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Split into head and tail, or `None` for the empty list.
    pub fn uncons(mut self) -> Option<(T, List<T>)> {
        let head = self.pop_front()?;
        Some((head, self))
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn reverse(mut self) -> Self {
        let mut out = List::new();
        while let Some(value) = self.pop_front() {
            out.push_front(value);
        }
        out
    }

    /// `self ++ other`. Linear in the length of `self`.
    pub fn concat(self, mut other: List<T>) -> Self {
        let mut rev = self.reverse();
        while let Some(value) = rev.pop_front() {
            other.push_front(value);
        }
        other
    }

    /// Left fold, consuming the list.
    pub fn fold<S>(self, init: S, mut f: impl FnMut(S, T) -> S) -> S {
        let mut acc = init;
        for value in self {
            acc = f(acc, value);
        }
        acc
    }

    /// Build a list from a seed. `f` returns the next element and seed, or `None` to stop.
    pub fn unfold<S>(seed: S, mut f: impl FnMut(S) -> Option<(T, S)>) -> Self {
        let mut rev = List::new();
        let mut seed = seed;
        while let Some((value, next)) = f(seed) {
            rev.push_front(value);
            seed = next;
        }
        rev.reverse()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> List<U> {
        self.fold(List::new(), |mut acc, x| {
            acc.push_front(f(x));
            acc
        })
        .reverse()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Dup> Dup for List<T> {
    fn dup(self) -> (Self, Self) {
        let (mut left, mut right) = (List::new(), List::new());
        for value in self {
            let (a, b) = value.dup();
            left.push_front(a);
            right.push_front(b);
        }
        (left.reverse(), right.reverse())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut rev = List::new();
        for value in iter {
            rev.push_front(value);
        }
        rev.reverse()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Consuming iterator over a [`List`].
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ======================== Concatenation tree ========================

enum Tree<T> {
    Leaf(T),
    Cat(Box<Tree<T>>, Box<Tree<T>>),
}

/// Alternate list: a concatenation tree.
///
/// `concat`, `push_back` and `push_front` are O(1); element order is the left-to-right order
/// of the leaves.
pub struct CatList<T> {
    root: Option<Tree<T>>,
    len: usize,
}

impl<T> CatList<T> {
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn singleton(value: T) -> Self {
        Self {
            root: Some(Tree::Leaf(value)),
            len: 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn concat(mut self, mut other: CatList<T>) -> Self {
        let root = match (self.root.take(), other.root.take()) {
            (None, r) | (r, None) => r,
            (Some(a), Some(b)) => Some(Tree::Cat(Box::new(a), Box::new(b))),
        };
        CatList {
            root,
            len: self.len + other.len,
        }
    }

    pub fn push_back(self, value: T) -> Self {
        self.concat(CatList::singleton(value))
    }

    pub fn push_front(self, value: T) -> Self {
        CatList::singleton(value).concat(self)
    }

    /// Left fold over the leaves, in order.
    pub fn fold<S>(self, init: S, mut f: impl FnMut(S, T) -> S) -> S {
        let mut acc = init;
        for value in self {
            acc = f(acc, value);
        }
        acc
    }

    /// Build from a seed; see [`List::unfold`].
    pub fn unfold<S>(seed: S, mut f: impl FnMut(S) -> Option<(T, S)>) -> Self {
        let mut out = CatList::new();
        let mut seed = seed;
        while let Some((value, next)) = f(seed) {
            out = out.push_back(value);
            seed = next;
        }
        out
    }

    /// Flatten into a cons list, preserving order.
    pub fn into_list(self) -> List<T> {
        self.into_iter().collect()
    }
}

impl<T> Drop for CatList<T> {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            drop(CatIntoIter::new(Some(root)));
        }
    }
}

impl<T> Default for CatList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Dup> Dup for CatList<T> {
    fn dup(self) -> (Self, Self) {
        let (mut left, mut right) = (CatList::new(), CatList::new());
        for value in self {
            let (a, b) = value.dup();
            left = left.push_back(a);
            right = right.push_back(b);
        }
        (left, right)
    }
}

impl<T> FromIterator<T> for CatList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(CatList::new(), CatList::push_back)
    }
}

impl<T> From<List<T>> for CatList<T> {
    fn from(list: List<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CatList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut stack: SmallVec<[&Tree<T>; 16]> = SmallVec::new();
        stack.extend(self.root.as_ref());
        while let Some(tree) = stack.pop() {
            match tree {
                Tree::Leaf(value) => {
                    list.entry(value);
                }
                Tree::Cat(a, b) => {
                    stack.push(&**b);
                    stack.push(&**a);
                }
            }
        }
        list.finish()
    }
}

/// Consuming in-order iterator over a [`CatList`].
pub struct CatIntoIter<T> {
    stack: SmallVec<[Tree<T>; 16]>,
}

impl<T> CatIntoIter<T> {
    fn new(root: Option<Tree<T>>) -> Self {
        let mut stack = SmallVec::new();
        stack.extend(root);
        Self { stack }
    }
}

impl<T> Iterator for CatIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut tree = self.stack.pop()?;
        loop {
            match tree {
                Tree::Leaf(value) => return Some(value),
                Tree::Cat(a, b) => {
                    self.stack.push(*b);
                    tree = *a;
                }
            }
        }
    }
}

impl<T> Drop for CatIntoIter<T> {
    fn drop(&mut self) {
        // Leaves are dropped one at a time; nested boxes are never dropped recursively.
        for _ in self.by_ref() {}
    }
}

impl<T> IntoIterator for CatList<T> {
    type Item = T;
    type IntoIter = CatIntoIter<T>;

    fn into_iter(mut self) -> CatIntoIter<T> {
        CatIntoIter::new(self.root.take())
    }
}
