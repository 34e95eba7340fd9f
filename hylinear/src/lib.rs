//! Hylinear: linear values with explicit duplication, bounded iteration, and a packed string
//! codec built on top of them.
//!
//! Values may be consumed at most once. The only way to use a value twice is to duplicate it
//! explicitly ([`linear::Dup`]); implicit aliasing is ruled out by move semantics
//! ([`linear::Linear`]) or, where a handle has to be shared, by a runtime check
//! ([`linear::Tracked`]).
//!
//! Layers
//!  - [`linear`] and [`value`]: handles, pairs, dynamic values and consumable functions.
//!  - [`iterate`]: the bounded iteration engine (`for` with a count known up front) and the
//!    sequence-driven traversal.
//!  - [`codec`]: packs 8-bit code units four to a 32-bit word and back, with a zero sentinel.
//!  - [`list`], [`term`], [`programs`]: sequences, printable terms and worked examples.
//!
//! Example
//! ```
//! use hylinear::prelude::*;
//!
//! // Apply a step five times to an accumulator, then finish.
//! let n = bounded_for(Nat::new(5), 0u32, |x| x + 2, |x| x);
//! assert_eq!(n, 10);
//!
//! // Round trip through the codec.
//! let s = PackedStr::from("ksjkajf");
//! assert_eq!(s.len_words(), 2);
//! assert_eq!(s.to_string(), "ksjkajf");
//! ```

/// Packed string codec: code units to words and back.
pub mod codec;
/// Runtime configuration (TOML).
pub mod config;
/// Recoverable errors and contract violations.
pub mod error;
/// Bounded iteration engine and sequence traversal.
pub mod iterate;
/// Linear handles, pairs and explicit duplication.
pub mod linear;
/// Cons lists and concatenation-tree lists.
pub mod list;
/// Worked example programs.
pub mod programs;
/// Printable term syntax and pretty-printer.
pub mod term;
/// Dynamic values and consumable functions.
pub mod value;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::codec::{
        CodeUnit, PackedStr, PackedWord, SENTINEL, decode, encode, string_concat,
    };
    pub use crate::error::{LinError, LinResult};
    pub use crate::iterate::{Nat, bounded_for, for_value, traverse};
    pub use crate::linear::{Dup, Linear, Pair, Tracked, destructure, duplicate};
    pub use crate::list::{CatList, List};
    pub use crate::term::{Term, pretty::PrettyTerm};
    pub use crate::value::{LinearFn, Value};
}
