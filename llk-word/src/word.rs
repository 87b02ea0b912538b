use std::fmt;
use std::rc::Rc;

use llk_symbol::{Symbol, SymbolSource};

/// An immutable, ordered sequence of symbols.
///
/// Cloning a `Word` is cheap: the symbol sequence lives behind an `Rc`, so
/// clones share storage. Equality and hashing depend only on the symbol
/// sequence, never on which clone produced the value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Word(Rc<[Symbol]>);

impl Word {
    /// The empty word, ε.
    pub fn epsilon() -> Self {
        Word(Rc::from(&[][..]))
    }

    /// Returns `true` if this word is ε.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of symbols in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A one-symbol word.
    pub fn single(sym: Symbol) -> Self {
        Word(Rc::from(vec![sym].into_boxed_slice()))
    }

    /// Builds a word from an explicit symbol sequence.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        Word(Rc::from(symbols.into_iter().collect::<Vec<_>>().into_boxed_slice()))
    }

    /// The symbols making up this word.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// The first symbol, or `None` if the word is ε.
    pub fn head(&self) -> Option<Symbol> {
        self.0.first().copied()
    }

    /// Everything after the first symbol. ε if the word has at most one symbol.
    pub fn tail(&self) -> Word {
        if self.0.is_empty() {
            self.clone()
        } else {
            Word(Rc::from(&self.0[1..]))
        }
    }

    /// The prefix of length `min(|w|, k)`.
    pub fn prefix(&self, k: usize) -> Word {
        if self.0.len() <= k {
            self.clone()
        } else {
            Word(Rc::from(&self.0[..k]))
        }
    }

    /// Index of the first occurrence of `sym`, or `self.len()` if absent.
    pub fn index_of(&self, sym: Symbol) -> usize {
        self.0.iter().position(|&s| s == sym).unwrap_or(self.0.len())
    }

    /// The subsequence `self[range]`.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Word {
        Word(Rc::from(&self.0[range]))
    }

    /// The symbols in reverse order.
    pub fn reverse(&self) -> Word {
        let mut symbols: Vec<Symbol> = self.0.iter().copied().collect();
        symbols.reverse();
        Word::from_symbols(symbols)
    }

    /// Concatenation `self · other`.
    pub fn concat(&self, other: &Word) -> Word {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut symbols = Vec::with_capacity(self.len() + other.len());
        symbols.extend_from_slice(&self.0);
        symbols.extend_from_slice(&other.0);
        Word::from_symbols(symbols)
    }

    /// `self` repeated `k` times, i.e. `self · self · ... · self`.
    pub fn repeat(&self, k: usize) -> Word {
        if k == 0 || self.is_empty() {
            return Word::epsilon();
        }
        let mut symbols = Vec::with_capacity(self.len() * k);
        for _ in 0..k {
            symbols.extend_from_slice(&self.0);
        }
        Word::from_symbols(symbols)
    }

    /// Renders this word in human-readable form: symbols space-joined,
    /// ε for the empty word.
    pub fn render(&self, source: &SymbolSource) -> String {
        if self.is_empty() {
            return "\u{03b5}".to_string();
        }
        self.0
            .iter()
            .map(|&sym| source.name_of(sym).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Word {
    /// A context-free rendering using raw symbol IDs; prefer [`Word::render`]
    /// with a `SymbolSource` for human-readable names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "\u{03b5}");
        }
        for (i, sym) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "#{}", sym.usize())?;
        }
        Ok(())
    }
}

impl FromIterator<Symbol> for Word {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Word::from_symbols(iter)
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = Symbol;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
