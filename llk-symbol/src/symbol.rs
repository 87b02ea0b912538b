use std::num::NonZeroU32;

/// The numeric representation backing a [`Symbol`].
pub type SymbolRepr = u32;

/// An opaque grammar symbol.
///
/// A `Symbol` carries no textual payload of its own; it is distinguished
/// from other symbols by its numeric ID alone. Two symbols compare equal
/// iff they were generated (or interned) from the same [`SymbolSource`],
/// or from sources that happen to agree on IDs. Best not to mix symbols
/// minted by different sources.
///
/// [`SymbolSource`]: crate::SymbolSource
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol(NonZeroU32);

impl Symbol {
    /// The symbol with the lowest numeric value a `SymbolSource` ever hands out.
    pub fn first() -> Self {
        Symbol(NonZeroU32::new(1).unwrap())
    }

    /// Casts the symbol's ID to `usize`, for dense array indexing.
    #[inline]
    pub fn usize(self) -> usize {
        self.0.get() as usize - 1
    }

    /// Returns the symbol one past this one, the way a `SymbolSource` hands
    /// out the next fresh symbol.
    pub(crate) fn next(self) -> Self {
        Symbol(self.0.checked_add(1).expect("ran out of symbol space"))
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol(NonZeroU32::new(id as u32 + 1).expect("symbol id overflow"))
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::first()
    }
}

#[cfg(feature = "serialize")]
mod miniserde_impls {
    use super::Symbol;
    use miniserde::de::{Visitor};
    use miniserde::{make_place, Deserialize, Error, Result, Serialize};
    use std::num::NonZeroU32;

    make_place!(Place);

    impl Visitor for Place<Symbol> {
        fn nonnegative(&mut self, n: u64) -> Result<()> {
            match NonZeroU32::new(n as u32 + 1) {
                Some(nz) if n < u32::MAX as u64 => {
                    self.out = Some(Symbol(nz));
                    Ok(())
                }
                _ => Err(Error),
            }
        }
    }

    impl Deserialize for Symbol {
        fn begin(out: &mut Option<Self>) -> &mut dyn Visitor {
            Place::new(out)
        }
    }

    impl Serialize for Symbol {
        fn begin(&self) -> miniserde::ser::Fragment<'_> {
            miniserde::ser::Fragment::U64((self.0.get() - 1) as u64)
        }
    }
}
