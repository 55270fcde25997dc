//! Token frequency table.
//!
//! Counts are kept in first-seen order so that ranking can break ties
//! deterministically without depending on hash iteration order.

use rustc_hash::FxHashMap;

/// Mapping from token to occurrence count, ordered by first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Token -> position in `entries`
    index: FxHashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Occurrences of `token`, zero if never recorded.
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Consume the table, yielding entries in first-seen order.
    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.record(token);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting() {
        let table: FrequencyTable = ["the", "cat", "the", "dog", "the"].into_iter().collect();

        assert_eq!(table.len(), 3);
        assert_eq!(table.count("the"), 3);
        assert_eq!(table.count("cat"), 1);
        assert_eq!(table.count("bird"), 0);
        assert_eq!(table.total(), 5);
        assert!(table.contains("dog"));
    }

    #[test]
    fn test_first_seen_order() {
        let table: FrequencyTable = ["b", "a", "c", "a", "b"].into_iter().collect();
        let order: Vec<&str> = table.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.into_entries().is_empty());
    }

    #[test]
    fn test_final_state_independent_of_order() {
        let forward: FrequencyTable = ["x", "y", "x"].into_iter().collect();
        let backward: FrequencyTable = ["x", "y", "x"].into_iter().rev().collect();

        for (token, count) in forward.iter() {
            assert_eq!(backward.count(token), count);
        }
        assert_eq!(forward.len(), backward.len());
    }
}
