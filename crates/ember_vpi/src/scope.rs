//! Scope resolution for signal names.
//!
//! Signals capture the current scope when they are constructed and consult
//! the resolver again only for name queries, never while encoding values.

use ember_common::{Arena, ArenaId, Ident, Interner};
use serde::{Deserialize, Serialize};

/// Opaque ID of a lexical scope.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ScopeId(u32);

impl ArenaId for ScopeId {
    fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

/// Elaboration-time scope context.
pub trait ScopeResolver {
    /// The scope currently being elaborated.
    fn current_scope(&self) -> ScopeId;

    /// Dot-separated path of `scope` from the root.
    fn scope_full_path(&self, scope: ScopeId) -> String;

    /// Text of an interned name.
    fn resolve_name(&self, name: Ident) -> &str;
}

#[derive(Debug, Clone)]
struct Scope {
    name: Ident,
    parent: Option<ScopeId>,
}

/// A tree of named scopes with a current-scope stack.
///
/// The root scope is unnamed and cannot be popped.
pub struct ScopeTree {
    interner: Interner,
    scopes: Arena<ScopeId, Scope>,
    stack: Vec<ScopeId>,
}

impl ScopeTree {
    /// Creates a tree holding only the root scope.
    pub fn new() -> Self {
        let interner = Interner::new();
        let mut scopes = Arena::new();
        let root = scopes.alloc(Scope {
            name: interner.get_or_intern(""),
            parent: None,
        });
        Self {
            interner,
            scopes,
            stack: vec![root],
        }
    }

    /// The unnamed root scope.
    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Interns a signal or scope name.
    pub fn intern(&self, name: &str) -> Ident {
        self.interner.get_or_intern(name)
    }

    /// Creates a child of the current scope and makes it current.
    pub fn push_scope(&mut self, name: &str) -> ScopeId {
        let parent = self.current_scope();
        let id = self.scopes.alloc(Scope {
            name: self.interner.get_or_intern(name),
            parent: Some(parent),
        });
        self.stack.push(id);
        id
    }

    /// Leaves the current scope. Returns the scope left, or `None` at the root.
    pub fn pop_scope(&mut self) -> Option<ScopeId> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Parent of `scope`, `None` for the root.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope].parent
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeResolver for ScopeTree {
    fn current_scope(&self) -> ScopeId {
        self.stack.last().copied().unwrap_or(ScopeId(0))
    }

    fn scope_full_path(&self, scope: ScopeId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(scope);
        while let Some(id) = cursor {
            let entry = &self.scopes[id];
            if entry.parent.is_some() {
                segments.push(entry.name);
            }
            cursor = entry.parent;
        }
        segments.reverse();
        self.interner.join_path(&segments)
    }

    fn resolve_name(&self, name: Ident) -> &str {
        self.interner.resolve(name)
    }
}
