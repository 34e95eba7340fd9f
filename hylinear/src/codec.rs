//! Byte/word string codec.
//!
//! Role
//! - [`encode`] packs a sequence of 8-bit [`CodeUnit`]s four to a [`PackedWord`], in
//!   little-endian unit order: the first unit lands in bits `[0, 8)`, the fourth in `[24, 32)`.
//!   A trailing partial word is padded with zero units.
//! - [`decode`] unpacks words in the same order and stops at the first zero unit (the
//!   sentinel), even in the middle of a word and even if more words follow.
//! - [`string_concat`] decodes two packed strings, concatenates them, and re-encodes.
//!
//! Preconditions
//! - Zero is the end-of-stream sentinel. A zero unit in the input to [`encode`] is not
//!   detected and silently truncates the string on [`decode`]. [`PackedStr::checked`] is the
//!   only entry point that rejects embedded zeros.
//!
//! Example
//! ```
//! use hylinear::codec::{decode, encode};
//!
//! let words = encode(b"ksjkajf".iter().copied().collect());
//! let raw: Vec<u32> = words.iter().map(|w| w.raw()).collect();
//! assert_eq!(raw, [0x6b6a_736b, 0x0066_6a61]);
//!
//! let units: Vec<u8> = decode(words).into_iter().collect();
//! assert_eq!(units, b"ksjkajf");
//! ```
use std::{fmt, ops::ControlFlow};

use log::trace;

use crate::{
    error::{LinError, LinResult},
    iterate::{Nat, bounded_for, traverse},
    linear::{Dup, Pair},
    list::List,
};

/// One element of the external representation. Zero is reserved as the sentinel.
pub type CodeUnit = u8;

/// End-of-stream marker.
pub const SENTINEL: CodeUnit = 0;

/// Number of code units held by one [`PackedWord`].
pub const UNITS_PER_WORD: u32 = 4;

/// Up to four code units packed into 32 bits; unit `i` occupies bits `[8i, 8i + 8)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PackedWord(u32);

impl PackedWord {
    pub const EMPTY: PackedWord = PackedWord(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        PackedWord(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Code unit at position `index` (0 is the low byte).
    #[inline]
    pub const fn unit(self, index: u32) -> CodeUnit {
        debug_assert!(index < UNITS_PER_WORD);
        ((self.0 >> (8 * index)) & 0xff) as CodeUnit
    }

    /// Copy of this word with the unit at `index` replaced.
    #[inline]
    pub const fn with_unit(self, index: u32, unit: CodeUnit) -> Self {
        debug_assert!(index < UNITS_PER_WORD);
        let shift = 8 * index;
        PackedWord((self.0 & !(0xff << shift)) | ((unit as u32) << shift))
    }

    #[inline]
    pub const fn from_units(units: [CodeUnit; 4]) -> Self {
        PackedWord(u32::from_le_bytes(units))
    }

    #[inline]
    pub const fn units(self) -> [CodeUnit; 4] {
        self.0.to_le_bytes()
    }
}

impl Dup for PackedWord {
    #[inline]
    fn dup(self) -> (Self, Self) {
        (self, self)
    }
}

impl From<u32> for PackedWord {
    fn from(raw: u32) -> Self {
        PackedWord(raw)
    }
}

impl fmt::Debug for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedWord({:#010x})", self.0)
    }
}

impl fmt::Display for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::LowerHex for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Partial state of [`encode`]: finished words (most recent first) and the word being filled.
#[derive(Default)]
struct Packing {
    words: List<PackedWord>,
    current: PackedWord,
    filled: u32,
}

/// Pack `units` four to a word. Produces `ceil(len / 4)` words.
pub fn encode(units: List<CodeUnit>) -> List<PackedWord> {
    trace!("encode: {} code units", units.len());
    let Packing {
        mut words,
        current,
        filled,
    } = traverse(units, Packing::default(), |mut packing, unit| {
        packing.current = packing.current.with_unit(packing.filled, unit);
        packing.filled += 1;
        if packing.filled == UNITS_PER_WORD {
            packing.words.push_front(packing.current);
            packing.current = PackedWord::EMPTY;
            packing.filled = 0;
        }
        ControlFlow::Continue(packing)
    });
    if filled > 0 {
        words.push_front(current);
    }
    words.reverse()
}

/// Unpack the four units of `word` onto `out` (most recent first).
///
/// The state threaded through the four steps is `(index, (out, halted))`. Once the sentinel is
/// seen the remaining steps leave the state untouched. Returns whether the sentinel was hit.
fn unpack_word(word: PackedWord, out: List<CodeUnit>) -> (List<CodeUnit>, bool) {
    bounded_for(
        Nat::new(UNITS_PER_WORD),
        Pair::new(0u32, (out, false)),
        |state| {
            let (index, (mut out, mut halted)) = state.destructure();
            if !halted {
                match word.unit(index) {
                    SENTINEL => halted = true,
                    unit => out.push_front(unit),
                }
            }
            Pair::new(index + 1, (out, halted))
        },
        Pair::snd,
    )
}

/// Unpack `words` into code units, stopping at the first zero unit.
pub fn decode(words: List<PackedWord>) -> List<CodeUnit> {
    trace!("decode: {} packed words", words.len());
    traverse(words, List::new(), |out, word| {
        let (out, halted) = unpack_word(word, out);
        if halted {
            ControlFlow::Break(out)
        } else {
            ControlFlow::Continue(out)
        }
    })
    .reverse()
}

/// `encode(decode(a) ++ decode(b))`.
pub fn string_concat(a: List<PackedWord>, b: List<PackedWord>) -> List<PackedWord> {
    encode(decode(a).concat(decode(b)))
}

/// Owned packed string.
///
/// Equality compares the packed words, so two strings that decode identically but differ after
/// the sentinel compare unequal.
#[derive(PartialEq, Eq, Default)]
pub struct PackedStr {
    words: List<PackedWord>,
}

impl PackedStr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `units` without checking for embedded zeros.
    pub fn from_units(units: impl IntoIterator<Item = CodeUnit>) -> Self {
        Self {
            words: encode(units.into_iter().collect()),
        }
    }

    /// Encode `text`, rejecting embedded NUL bytes instead of truncating at them.
    pub fn checked(text: &str) -> LinResult<Self> {
        match text.bytes().position(|b| b == SENTINEL) {
            Some(position) => Err(LinError::EmbeddedSentinel { position }),
            None => Ok(Self::from_units(text.bytes())),
        }
    }

    /// Number of packed words.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Number of code units before the sentinel.
    pub fn len_units(&self) -> usize {
        self.units().count()
    }

    pub fn is_empty(&self) -> bool {
        self.units().next().is_none()
    }

    pub fn words(&self) -> &List<PackedWord> {
        &self.words
    }

    pub fn into_words(self) -> List<PackedWord> {
        self.words
    }

    /// Consume and decode into code units.
    pub fn decode(self) -> List<CodeUnit> {
        decode(self.words)
    }

    /// See [`string_concat`].
    pub fn concat(self, other: PackedStr) -> PackedStr {
        PackedStr {
            words: string_concat(self.words, other.words),
        }
    }

    /// Borrowing view of the decoded units, with the same sentinel rule as [`decode`].
    pub fn units(&self) -> impl Iterator<Item = CodeUnit> + '_ {
        self.words
            .iter()
            .flat_map(|word| word.units())
            .take_while(|&unit| unit != SENTINEL)
    }

    /// Decoded text; invalid UTF-8 is replaced.
    pub fn to_string_lossy(&self) -> String {
        let bytes: Vec<u8> = self.units().collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl From<&str> for PackedStr {
    fn from(text: &str) -> Self {
        Self::from_units(text.bytes())
    }
}

impl From<List<PackedWord>> for PackedStr {
    fn from(words: List<PackedWord>) -> Self {
        Self { words }
    }
}

impl Dup for PackedStr {
    fn dup(self) -> (Self, Self) {
        let (a, b) = self.words.dup();
        (PackedStr { words: a }, PackedStr { words: b })
    }
}

impl fmt::Display for PackedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for PackedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedStr")
            .field("text", &self.to_string_lossy())
            .field("words", &self.words)
            .finish()
    }
}
