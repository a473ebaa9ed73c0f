//! Interned signal and scope names.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Key of an interned name.
///
/// Stored off by one so `Option<Ident>` is the same size as `Ident`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(NonZeroU32);

// SAFETY: `into_usize` returns the index `try_from_usize` was given, and
// `try_from_usize` rejects indices whose successor does not fit in a u32.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0.get() as usize - 1
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        let raw = u32::try_from(int).ok()?.checked_add(1)?;
        NonZeroU32::new(raw).map(Ident)
    }
}

/// Name table shared by a scope tree and everything elaborated under it.
///
/// Interning takes `&self`, so signals can be named while the tree is
/// borrowed.
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// The key for `name`, interning it on first use.
    pub fn get_or_intern(&self, name: &str) -> Ident {
        self.rodeo.get_or_intern(name)
    }

    /// # Panics
    ///
    /// Panics if `ident` came from a different interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }

    /// `a.b.c` for the names `[a, b, c]`, empty for no names.
    pub fn join_path(&self, segments: &[Ident]) -> String {
        segments
            .iter()
            .map(|s| self.resolve(*s))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
