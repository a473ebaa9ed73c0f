//! Per-bit cells: the source/sink traits the codec talks to, and an
//! in-memory network implementing both.
//!
//! The codec never owns cells. It reads them through [`CellSource`] and
//! writes them through [`CellSink`], addressing each bit of a signal by its
//! index within the signal's [`CellRange`].

use ember_common::{ArenaId, Logic, LogicVec};
use serde::{Deserialize, Serialize};

/// Opaque ID of one cell in the simulation network.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CellId(u32);

impl ArenaId for CellId {
    fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

/// A contiguous run of cells bound to one signal, index 0 first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CellRange {
    base: u32,
    width: u32,
}

impl CellRange {
    /// Creates a range of `width` cells starting at `base`.
    pub fn new(base: CellId, width: u32) -> Self {
        Self {
            base: base.as_raw(),
            width,
        }
    }

    /// Number of cells in the range.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The cell holding bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn cell(&self, index: u32) -> CellId {
        assert!(
            index < self.width,
            "bit {index} out of range for {} cells",
            self.width
        );
        CellId(self.base + index)
    }
}

/// Drive strength accompanying a poked value.
///
/// The codec passes these through untouched; resolving them is the
/// network's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthTag {
    /// Strong 0.
    St0,
    /// Strong 1.
    St1,
    /// Strong unknown.
    StX,
    /// High-impedance.
    HiZ,
}

impl StrengthTag {
    /// The conventional strength for a value driven without an explicit one.
    pub fn for_logic(value: Logic) -> Self {
        match value {
            Logic::Zero => StrengthTag::St0,
            Logic::One => StrengthTag::St1,
            Logic::X => StrengthTag::StX,
            Logic::Z => StrengthTag::HiZ,
        }
    }

    /// The logic value this strength carries.
    pub fn logic(self) -> Logic {
        match self {
            StrengthTag::St0 => Logic::Zero,
            StrengthTag::St1 => Logic::One,
            StrengthTag::StX => Logic::X,
            StrengthTag::HiZ => Logic::Z,
        }
    }
}

/// Read access to cell state.
pub trait CellSource {
    /// Returns the current state of bit `index` of `range`.
    fn cell_state(&self, range: &CellRange, index: u32) -> Logic;
}

/// Write access to cells.
pub trait CellSink {
    /// Forces `value` with `strength` into bit `index` of `range`.
    ///
    /// `immediate == false` asks for a scheduled write. The codec never
    /// requests one.
    fn poke(
        &mut self,
        range: &CellRange,
        index: u32,
        value: Logic,
        strength: StrengthTag,
        immediate: bool,
    );
}

/// An in-memory cell store.
///
/// Cells are allocated in runs, one run per signal, and never freed. Each
/// cell keeps its value and the strength of the last poke.
#[derive(Debug, Clone, Default)]
pub struct CellNetwork {
    values: LogicVec,
    strengths: Vec<StrengthTag>,
    pokes: u64,
}

impl CellNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            values: LogicVec::new(0),
            strengths: Vec::new(),
            pokes: 0,
        }
    }

    /// Allocates `width` cells initialized to `init`.
    pub fn alloc(&mut self, width: u32, init: Logic) -> CellRange {
        let base = CellId(self.values.width());
        self.values.resize(base.0 + width, init);
        self.strengths
            .resize(self.strengths.len() + width as usize, StrengthTag::for_logic(init));
        CellRange::new(base, width)
    }

    /// Allocates cells holding `pattern`, index 0 first.
    pub fn alloc_pattern(&mut self, pattern: &LogicVec) -> CellRange {
        let range = self.alloc(pattern.width(), Logic::Zero);
        self.deposit(&range, pattern);
        range
    }

    /// Overwrites the cells of `range` with `pattern` without counting pokes.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn deposit(&mut self, range: &CellRange, pattern: &LogicVec) {
        assert_eq!(
            range.width(),
            pattern.width(),
            "deposit width mismatch"
        );
        for (i, value) in pattern.iter().enumerate() {
            let cell = range.cell(i as u32).as_raw();
            self.values.set(cell, value);
            self.strengths[cell as usize] = StrengthTag::for_logic(value);
        }
    }

    /// Snapshot of the cells of `range`.
    pub fn read(&self, range: &CellRange) -> LogicVec {
        (0..range.width())
            .map(|i| self.cell_state(range, i))
            .collect()
    }

    /// Strength of the last write to bit `index` of `range`.
    pub fn strength(&self, range: &CellRange, index: u32) -> StrengthTag {
        self.strengths[range.cell(index).as_raw() as usize]
    }

    /// Number of pokes applied so far.
    pub fn poke_count(&self) -> u64 {
        self.pokes
    }

    /// Total number of allocated cells.
    pub fn len(&self) -> u32 {
        self.values.width()
    }

    /// Returns `true` if no cells have been allocated.
    pub fn is_empty(&self) -> bool {
        self.values.width() == 0
    }
}

impl CellSource for CellNetwork {
    fn cell_state(&self, range: &CellRange, index: u32) -> Logic {
        self.values.get(range.cell(index).as_raw())
    }
}

impl CellSink for CellNetwork {
    fn poke(
        &mut self,
        range: &CellRange,
        index: u32,
        value: Logic,
        strength: StrengthTag,
        immediate: bool,
    ) {
        let cell = range.cell(index);
        if !immediate {
            log::warn!(
                "scheduled poke of cell {} refused: delayed writes are not supported",
                cell.as_raw()
            );
            return;
        }
        self.values.set(cell.as_raw(), value);
        self.strengths[cell.as_raw() as usize] = strength;
        self.pokes += 1;
    }
}
