use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::ops;
use std::rc::Rc;

use crate::Symbol;

/// Wrapper for a string holding a symbol's name. Cheap to clone.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SymbolName {
    name: Rc<str>,
}

impl ops::Deref for SymbolName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.name[..]
    }
}

impl<'a> From<&'a str> for SymbolName {
    fn from(value: &'a str) -> Self {
        SymbolName {
            name: Rc::from(value),
        }
    }
}

impl From<String> for SymbolName {
    fn from(value: String) -> Self {
        SymbolName {
            name: Rc::from(&value[..]),
        }
    }
}

impl Borrow<str> for SymbolName {
    fn borrow(&self) -> &str {
        &self.name[..]
    }
}

/// Interns textual names to [`Symbol`]s and back.
///
/// Every symbol that a grammar or its analyses refer to is minted here,
/// whether named (parsed from a grammar's text) or anonymous (a gensym
/// created by augmentation). Names are unique: interning the same name
/// twice always returns the same `Symbol`.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    next: Symbol,
    names: Vec<Option<SymbolName>>,
    by_name: HashMap<SymbolName, Symbol>,
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource {
    /// Creates an empty symbol source.
    pub fn new() -> Self {
        SymbolSource {
            next: Symbol::first(),
            names: vec![],
            by_name: HashMap::new(),
        }
    }

    /// Returns the symbol already interned for `name`, if any.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Returns `true` if `name` is already in use by some symbol.
    pub fn is_taken(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the symbol for `name`, interning a fresh one if this is the
    /// first time `name` is seen.
    pub fn intern<'a, S: Into<Cow<'a, str>>>(&mut self, name: S) -> Symbol {
        let name = name.into();
        if let Some(&sym) = self.by_name.get(&*name) {
            return sym;
        }
        let sym = self.generate_fresh(Some(SymbolName::from(name.into_owned())));
        sym
    }

    /// Mints a brand-new symbol with no name (a gensym).
    pub fn generate_anonymous(&mut self) -> Symbol {
        self.generate_fresh(None)
    }

    fn generate_fresh(&mut self, name: Option<SymbolName>) -> Symbol {
        let sym = self.next;
        self.next = self.next.next();
        debug_assert_eq!(sym.usize(), self.names.len());
        if let Some(ref name) = name {
            self.by_name.insert(name.clone(), sym);
        }
        self.names.push(name);
        sym
    }

    /// Returns the formatted name of a gensym, or the symbol's exact name
    /// if it has one.
    pub fn name_of(&self, sym: Symbol) -> Cow<'_, str> {
        match self.names.get(sym.usize()) {
            Some(Some(name)) => Cow::Borrowed(&name[..]),
            Some(None) | None => Cow::Owned(format!("g{}", sym.usize())),
        }
    }

    /// Returns the exact name, or `None` if `sym` is a gensym.
    pub fn original_name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|n| n.as_deref())
    }

    /// Number of symbols minted so far.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }
}
