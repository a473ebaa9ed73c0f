//! Shared foundational types for the Ember simulation runtime.
//!
//! This crate provides four-state logic values, packed logic vectors,
//! interned names, and append-only arenas.

#![warn(missing_docs)]

pub mod arena;
pub mod ident;
pub mod logic;
pub mod logic_vec;

pub use arena::{Arena, ArenaId};
pub use ident::{Ident, Interner};
pub use logic::Logic;
pub use logic_vec::LogicVec;
