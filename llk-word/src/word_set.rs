use std::collections::HashSet;
use std::iter::FromIterator;

use llk_symbol::SymbolSource;

use crate::Word;

/// An unordered collection of [`Word`]s with unique membership.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordSet(HashSet<Word>);

impl WordSet {
    /// The empty set.
    pub fn new() -> Self {
        WordSet(HashSet::new())
    }

    /// A set containing exactly `word`.
    pub fn singleton(word: Word) -> Self {
        let mut set = HashSet::with_capacity(1);
        set.insert(word);
        WordSet(set)
    }

    /// Inserts `word`, returning `true` if it was not already present.
    pub fn insert(&mut self, word: Word) -> bool {
        self.0.insert(word)
    }

    /// `true` if `word` is a member.
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unions `other` into `self` in place.
    pub fn union_with(&mut self, other: &WordSet) {
        for word in &other.0 {
            self.0.insert(word.clone());
        }
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &WordSet) -> WordSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersection(&self, other: &WordSet) -> WordSet {
        WordSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// Iterates over the words in the set, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }

    /// Renders the set as `{ w1, w2, ... }`, with words sorted
    /// lexicographically by their rendering.
    pub fn render(&self, source: &SymbolSource) -> String {
        let mut rendered: Vec<String> = self.0.iter().map(|w| w.render(source)).collect();
        rendered.sort();
        format!("{{ {} }}", rendered.join(", "))
    }
}

impl std::ops::BitOrAssign<&WordSet> for WordSet {
    fn bitor_assign(&mut self, rhs: &WordSet) {
        self.union_with(rhs);
    }
}

impl std::ops::BitOr for &WordSet {
    type Output = WordSet;

    fn bitor(self, rhs: &WordSet) -> WordSet {
        self.union(rhs)
    }
}

impl std::ops::BitAnd for &WordSet {
    type Output = WordSet;

    fn bitand(self, rhs: &WordSet) -> WordSet {
        self.intersection(rhs)
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        WordSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::collections::hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for WordSet {
    type Item = Word;
    type IntoIter = std::collections::hash_set::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
