//! Interned token spellings.
//!
//! A [`Symbol`] pairs canonical text with a [`TokenKind`]. Symbols handed out
//! by one [`SymbolTable`] are shared allocations, so two tokens with the same
//! spelling compare by pointer rather than by string contents.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::token::{RESERVED_SPELLINGS, TokenKind};

#[derive(Debug)]
struct SymbolData {
    text: Box<str>,
    kind: TokenKind,
}

/// Immutable (text, kind) pair with identity equality.
#[derive(Clone)]
pub struct Symbol(Rc<SymbolData>);

impl Symbol {
    fn new(text: &str, kind: TokenKind) -> Self {
        Self(Rc::new(SymbolData {
            text: text.into(),
            kind,
        }))
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }

    pub fn kind(&self) -> TokenKind {
        self.0.kind
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind(), self.text())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Symbol", 2)?;
        state.serialize_field("text", self.text())?;
        state.serialize_field("kind", &self.kind())?;
        state.end()
    }
}

/// Registry of every spelling the scanner has seen, keyed by text.
///
/// A fresh table already holds all reserved words and operator spellings, so
/// interning an identifier whose text is reserved returns the reserved symbol.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<Box<str>, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(RESERVED_SPELLINGS.len() * 2);
        for &(text, kind) in RESERVED_SPELLINGS {
            entries.insert(text.into(), Symbol::new(text, kind));
        }
        Self { entries }
    }

    /// Returns the symbol for `text`, inserting it with `kind` if unseen.
    pub fn intern(&mut self, text: &str, kind: TokenKind) -> Symbol {
        if let Some(existing) = self.entries.get(text) {
            return existing.clone();
        }
        let symbol = Symbol::new(text, kind);
        self.entries.insert(text.into(), symbol.clone());
        symbol
    }

    /// Looks up `text` without inserting it.
    pub fn lookup(&self, text: &str) -> Option<Symbol> {
        self.entries.get(text).cloned()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
