//! Lexically nested symbol scopes.
//!
//! Scopes are ribs in a tree held by a [`ScopeTree`]; the analyzer keeps a
//! single current-rib handle, pushing on function/block entry and popping
//! on exit. Lookup walks parent links to the root.

use indexmap::IndexMap;

use lilc_util::{define_idx, IndexVec, Symbol};

use crate::obj::ObjRef;

define_idx!(
    /// Identity of one rib in the scope tree.
    pub RibId
);

/// What kind of construct opened the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibKind {
    /// Root scope holding the built-in type names.
    Universe,
    /// Top level of a source file.
    File,
    /// Function literal body (parameters live here).
    Function,
    /// Plain block.
    Block,
    /// Body of a `while` or `for`; `break`/`continue` resolve against
    /// these.
    Loop,
}

/// A single scope.
#[derive(Debug)]
pub struct Rib {
    /// Bindings in this scope, in declaration order.
    pub bindings: IndexMap<Symbol, ObjRef>,
    /// Enclosing scope.
    pub parent: Option<RibId>,
    /// Kind of rib.
    pub kind: RibKind,
}

/// Scope tree for name resolution.
pub struct ScopeTree {
    ribs: IndexVec<RibId, Rib>,
    current: RibId,
}

impl ScopeTree {
    /// Creates a tree holding only the universe scope.
    pub fn new() -> Self {
        let mut ribs = IndexVec::new();
        let root = ribs.push(Rib {
            bindings: IndexMap::new(),
            parent: None,
            kind: RibKind::Universe,
        });
        Self {
            ribs,
            current: root,
        }
    }

    /// Enters a new child scope.
    pub fn enter(&mut self, kind: RibKind) -> RibId {
        let rib = self.ribs.push(Rib {
            bindings: IndexMap::new(),
            parent: Some(self.current),
            kind,
        });
        self.current = rib;
        rib
    }

    /// Leaves the current scope. Leaving the universe scope is a no-op.
    pub fn exit(&mut self) {
        if let Some(parent) = self.ribs[self.current].parent {
            self.current = parent;
        }
    }

    /// Adds a binding to the current scope, shadowing outer scopes.
    pub fn bind(&mut self, name: Symbol, obj: ObjRef) {
        self.ribs[self.current].bindings.insert(name, obj);
    }

    /// Resolves a name by walking parents until found or root.
    pub fn resolve(&self, name: Symbol) -> Option<ObjRef> {
        let mut rib_id = self.current;
        loop {
            let rib = &self.ribs[rib_id];
            if let Some(obj) = rib.bindings.get(&name) {
                return Some(obj.clone());
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return None,
            }
        }
    }

    /// True if `name` is bound directly in the current scope (used for
    /// redeclaration checks; shadowing an outer binding is fine).
    pub fn declared_in_current(&self, name: Symbol) -> bool {
        self.ribs[self.current].bindings.contains_key(&name)
    }

    /// True inside a loop body of the current function. The walk stops at
    /// function boundaries so a nested function literal does not inherit
    /// the enclosing loop.
    pub fn in_loop(&self) -> bool {
        let mut rib_id = self.current;
        loop {
            let rib = &self.ribs[rib_id];
            match rib.kind {
                RibKind::Loop => return true,
                RibKind::Function => return false,
                _ => {}
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return false,
            }
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
