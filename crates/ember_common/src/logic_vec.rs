//! Bit-plane storage for runs of four-state values.

use crate::logic::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;

const WORD_BITS: u32 = 64;

/// A growable run of [`Logic`] values, index 0 least significant.
///
/// Storage is split into two planes holding the low and high bit of each
/// value's code, 64 positions per word.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicVec {
    width: u32,
    lo: Vec<u64>,
    hi: Vec<u64>,
}

impl LogicVec {
    /// `width` positions, all `Zero`.
    pub fn new(width: u32) -> Self {
        let words = words_for(width);
        Self {
            width,
            lo: vec![0; words],
            hi: vec![0; words],
        }
    }

    /// Number of positions.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn get(&self, index: u32) -> Logic {
        self.check(index);
        let (word, bit) = locate(index);
        let lo = (self.lo[word] >> bit) & 1;
        let hi = (self.hi[word] >> bit) & 1;
        Logic::from_code((lo | hi << 1) as u8)
    }

    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn set(&mut self, index: u32, value: Logic) {
        self.check(index);
        let (word, bit) = locate(index);
        let code = value.code();
        assign(&mut self.lo[word], bit, code & 1 != 0);
        assign(&mut self.hi[word], bit, code & 2 != 0);
    }

    /// Appends `value` above the current most significant position.
    pub fn push(&mut self, value: Logic) {
        self.resize(self.width + 1, value);
    }

    /// Grows or shrinks to `width`. New positions hold `value`.
    pub fn resize(&mut self, width: u32, value: Logic) {
        let old = self.width;
        let words = words_for(width);
        self.lo.resize(words, 0);
        self.hi.resize(words, 0);
        self.width = width;
        if width < old {
            self.trim_tail();
        }
        for index in old..width {
            self.set(index, value);
        }
    }

    /// Parses an msb-first binary string such as `"10xz"`.
    ///
    /// `_` separators are skipped. Any other unknown character yields `None`.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        let mut bits = s
            .chars()
            .rev()
            .filter(|c| *c != '_')
            .map(Logic::from_char)
            .collect::<Option<Vec<_>>>()?;
        let mut v = Self::new(bits.len() as u32);
        for (index, value) in bits.drain(..).enumerate() {
            v.set(index as u32, value);
        }
        Some(v)
    }

    /// Values from index 0 upward.
    pub fn iter(&self) -> impl Iterator<Item = Logic> + '_ {
        (0..self.width).map(move |i| self.get(i))
    }

    fn check(&self, index: u32) {
        assert!(
            index < self.width,
            "position {index} is past the end of a {}-wide vector",
            self.width
        );
    }

    /// Clears plane bits above `width` so equality and hashing see only live
    /// positions.
    fn trim_tail(&mut self) {
        let live = self.width % WORD_BITS;
        if live == 0 {
            return;
        }
        let mask = (1u64 << live) - 1;
        if let Some(w) = self.lo.last_mut() {
            *w &= mask;
        }
        if let Some(w) = self.hi.last_mut() {
            *w &= mask;
        }
    }
}

impl Default for LogicVec {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FromIterator<Logic> for LogicVec {
    fn from_iter<T: IntoIterator<Item = Logic>>(iter: T) -> Self {
        let mut v = LogicVec::default();
        v.extend(iter);
        v
    }
}

impl Extend<Logic> for LogicVec {
    fn extend<T: IntoIterator<Item = Logic>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Msb first, uppercase X/Z.
impl fmt::Display for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.width)
            .rev()
            .try_for_each(|i| write!(f, "{}", self.get(i)))
    }
}

impl fmt::Debug for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicVec({}'b{self})", self.width)
    }
}

fn words_for(width: u32) -> usize {
    width.div_ceil(WORD_BITS) as usize
}

fn locate(index: u32) -> (usize, u32) {
    ((index / WORD_BITS) as usize, index % WORD_BITS)
}

fn assign(word: &mut u64, bit: u32, on: bool) {
    if on {
        *word |= 1 << bit;
    } else {
        *word &= !(1 << bit);
    }
}
