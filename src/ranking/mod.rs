//! Top-N word ranking
//!
//! Entries are ordered by count, descending. The sort is stable over the
//! first-seen order kept by [`FrequencyTable`], so tokens with equal counts
//! appear in the order they first occurred in the text. The same input always
//! produces the same ranking.

use serde::{Deserialize, Serialize};

use crate::stats::FrequencyTable;

/// A word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// At most N ranked entries, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopNResult {
    entries: Vec<RankedEntry>,
}

impl TopNResult {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    /// Words in rank order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }

    /// Counts in rank order.
    pub fn values(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.count).collect()
    }

    /// `(word, count)` pairs in rank order.
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TopNResult {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank the `n` most frequent tokens of `table`.
///
/// `n == 0` yields an empty result; `n` larger than the table returns every
/// entry.
pub fn top_n(table: &FrequencyTable, n: usize) -> TopNResult {
    if n == 0 {
        return TopNResult::default();
    }

    let mut ranked: Vec<(&str, usize)> = table.iter().collect();
    // stable: ties keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);

    TopNResult {
        entries: ranked
            .into_iter()
            .map(|(word, count)| RankedEntry::new(word, count))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(tokens: &[&str]) -> FrequencyTable {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_orders_by_count_descending() {
        let t = table(&["a", "b", "b", "c", "c", "c"]);
        let top = top_n(&t, 3);

        assert_eq!(top.pairs(), vec![("c", 3), ("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let t = table(&["the", "cat", "sat", "the", "dog", "ran"]);
        let top = top_n(&t, 10);

        assert_eq!(top.labels(), vec!["the", "cat", "sat", "dog", "ran"]);
    }

    #[test]
    fn test_truncates() {
        let t = table(&["x", "y", "z", "x"]);
        let top = top_n(&t, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top.entries()[0], RankedEntry::new("x", 2));
    }

    #[test]
    fn test_zero_returns_empty() {
        let t = table(&["x", "y", "x"]);
        assert!(top_n(&t, 0).is_empty());
    }

    #[test]
    fn test_n_larger_than_table() {
        let t = table(&["x", "y"]);
        assert_eq!(top_n(&t, usize::MAX).len(), 2);
        assert!(top_n(&FrequencyTable::new(), 5).is_empty());
    }

    #[test]
    fn test_labels_and_values_align() {
        let t = table(&["b", "a", "a"]);
        let top = top_n(&t, 5);

        assert_eq!(top.labels(), vec!["a", "b"]);
        assert_eq!(top.values(), vec![2, 1]);
    }

    #[test]
    fn test_serializes_as_list() {
        let t = table(&["a", "a", "b"]);
        let json = serde_json::to_value(top_n(&t, 2)).unwrap();

        assert_eq!(json[0]["word"], "a");
        assert_eq!(json[0]["count"], 2);
        assert_eq!(json.as_array().unwrap().len(), 2);
    }
}
