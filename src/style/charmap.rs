//! Immutable character substitution tables.

use std::collections::HashMap;

/// Maps a single source code point to its styled replacement.
///
/// Replacements are `&'static str` slices of the literal tables, normally a
/// single code point. Maps are assembled once by the registry and only read
/// afterwards.
///
/// # Example
///
/// ```rust
/// use boldtext::style::CharacterMap;
///
/// let map = CharacterMap::new().zip("ab", "ⓐⓑ").with('!', "❗");
/// assert_eq!(map.get('a'), Some("ⓐ"));
/// assert_eq!(map.get('!'), Some("❗"));
/// assert_eq!(map.get('z'), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: HashMap<char, &'static str>,
}

impl CharacterMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs each code point of `source` with the code point at the same
    /// position in `target`.
    ///
    /// Extra code points on either side are ignored. A later entry for the
    /// same source character replaces an earlier one.
    pub fn zip(mut self, source: &str, target: &'static str) -> Self {
        for (from, (start, to)) in source.chars().zip(target.char_indices()) {
            self.entries
                .insert(from, &target[start..start + to.len_utf8()]);
        }
        self
    }

    /// Adds explicit `(source, replacement)` pairs.
    pub fn pairs(mut self, pairs: &[(char, &'static str)]) -> Self {
        self.entries.extend(pairs.iter().copied());
        self
    }

    /// Adds a single entry.
    pub fn with(mut self, from: char, to: &'static str) -> Self {
        self.entries.insert(from, to);
        self
    }

    /// Returns the replacement for `c`, if the map has one.
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_astral_targets() {
        let map = CharacterMap::new().zip("AB", "𝐀𝐁");
        assert_eq!(map.get('A'), Some("𝐀"));
        assert_eq!(map.get('B'), Some("𝐁"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_zip_uneven_lengths() {
        let map = CharacterMap::new().zip("ABC", "ⓐ");
        assert_eq!(map.len(), 1);
        assert!(!map.contains('B'));
    }

    #[test]
    fn test_later_entries_win() {
        let map = CharacterMap::new().zip("a", "x").with('a', "y");
        assert_eq!(map.get('a'), Some("y"));
    }

    #[test]
    fn test_pairs_allow_multi_code_point_targets() {
        let map = CharacterMap::new().pairs(&[('a', "a\u{0332}")]);
        assert_eq!(map.get('a').map(|s| s.chars().count()), Some(2));
    }

    #[test]
    fn test_empty() {
        let map = CharacterMap::new();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }
}
