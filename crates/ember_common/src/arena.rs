//! Append-only tables keyed by typed IDs.

use std::marker::PhantomData;
use std::ops::Index;

/// A `u32`-backed handle into an [`Arena`] or another dense table.
pub trait ArenaId: Copy {
    /// The handle for slot `index`.
    fn from_raw(index: u32) -> Self;

    /// The slot this handle names.
    fn as_raw(self) -> u32;
}

/// Dense storage where an ID handed out by [`Arena::alloc`] stays valid for
/// the arena's lifetime.
///
/// Entries are never removed. Tables built once during elaboration, such as
/// scope trees, fit this shape.
#[derive(Debug, Clone)]
pub struct Arena<I, T> {
    items: Vec<T>,
    _id: PhantomData<fn(I) -> I>,
}

impl<I: ArenaId, T> Arena<I, T> {
    /// An empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _id: PhantomData,
        }
    }

    /// Stores `item` in the next slot.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
///
/// Panics if `id` was not issued by this arena.
impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }
}
