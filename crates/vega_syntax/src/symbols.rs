//! Scope-stack symbol table.
//!
//! A [`SymbolTable`] is a [`Stack`] of named [`Scope`]s, each backed by its own [`HashTable`]. The global
//! scope is pushed at construction and can never be left. Lookups walk from the innermost scope outward
//! and the first hit wins, which gives lexical shadowing.
//!
//! Redeclaration checks are the caller's job: use [`SymbolTable::lookup_local`] before
//! [`SymbolTable::store`].

use std::fmt;

use thiserror::Error;
use tracing::debug;
use vega_core::collections::{HashTable, Stack};
use vega_core::lang::tags::Tag;
use vega_core::lang::types::Type;

/// Name of the outermost scope.
pub const GLOBAL_SCOPE: &str = "global";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("no scope to leave: only the global scope remains")]
    GlobalScope,
    #[error("no scope to store into")]
    NoScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Basic,
    Function,
    /// Variable with an array type.
    Indexed,
}

impl SymbolKind {
    pub fn tag(self) -> Tag {
        match self {
            SymbolKind::Basic => Tag::Basic,
            SymbolKind::Function => Tag::Function,
            SymbolKind::Indexed => Tag::Index,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolKind::Basic => "basic",
            SymbolKind::Function => "function",
            SymbolKind::Indexed => "indexed",
        })
    }
}

/// A declared name.
///
/// `ty` stays `None` until the declaring statement reaches its type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub constant: bool,
    pub ty: Option<Type>,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constant: false,
            ty: None,
            kind: SymbolKind::Basic,
        }
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self {
            kind: SymbolKind::Function,
            ..Self::new(name)
        }
    }

    pub fn is_callable(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    /// Bind the declared type. A non-function symbol with an array type becomes [`SymbolKind::Indexed`].
    pub fn set_type(&mut self, ty: Type) {
        if ty.is_array() && self.kind == SymbolKind::Basic {
            self.kind = SymbolKind::Indexed;
        }
        self.ty = Some(ty);
    }
}

#[derive(Debug, Clone)]
pub struct Scope {
    name: String,
    symbols: HashTable<Symbol>,
}

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: HashTable::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().map(|(_, symbol)| symbol)
    }
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Stack<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table holding only the global scope.
    pub fn new() -> Self {
        let mut scopes = Stack::new();
        scopes.push(Scope::new(GLOBAL_SCOPE));
        Self { scopes }
    }

    pub fn enter_scope(&mut self, name: impl Into<String>) {
        let scope = Scope::new(name);
        debug!(scope = scope.name(), depth = self.scopes.len() + 1, "enter scope");
        self.scopes.push(scope);
    }

    /// Pop the innermost scope, discarding its symbols.
    ///
    /// ## Errors
    /// [`ScopeError::GlobalScope`] if only the global scope is left.
    pub fn leave_scope(&mut self) -> Result<Scope, ScopeError> {
        if self.scopes.len() <= 1 {
            return Err(ScopeError::GlobalScope);
        }
        let scope = self.scopes.pop().map_err(|_| ScopeError::NoScope)?;
        debug!(scope = scope.name(), symbols = scope.len(), "leave scope");
        Ok(scope)
    }

    /// Insert `symbol` into the innermost scope, replacing a same-named entry there.
    pub fn store(&mut self, symbol: Symbol) -> Result<(), ScopeError> {
        let scope = self.scopes.peek_mut().ok_or(ScopeError::NoScope)?;
        debug!(scope = scope.name(), name = %symbol.name, kind = ?symbol.kind, "store symbol");
        scope.symbols.put(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Whether `name` is visible from the innermost scope.
    pub fn lookup(&self, name: &str) -> bool {
        self.retrieve(name).is_some()
    }

    /// Whether `name` is declared in the innermost scope itself.
    pub fn lookup_local(&self, name: &str) -> bool {
        self.scopes.peek().is_some_and(|scope| scope.symbols.contains_key(name))
    }

    /// Find the nearest visible `name`, together with the name of the scope that declares it.
    pub fn retrieve(&self, name: &str) -> Option<(&Symbol, &str)> {
        self.scopes
            .iter()
            .find_map(|scope| scope.get(name).map(|symbol| (symbol, scope.name())))
    }

    pub fn retrieve_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        let depth = self.scopes.iter().position(|scope| scope.symbols.contains_key(name))?;
        self.scopes.get_mut(depth)?.symbols.get_mut(name)
    }

    /// `name` as declared directly in the scope just outside the innermost one.
    pub fn enclosing_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.scopes.get_mut(1)?.symbols.get_mut(name)
    }

    /// Number of open scopes, global included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost scope.
    pub fn current(&self) -> Option<&Scope> {
        self.scopes.peek()
    }

    /// Open scopes from innermost to global.
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }
}
