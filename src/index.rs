//! Length-keyed word index
//!
//! Accepted words grouped by length, preserving arrival order within each
//! bucket. Populated by the filter stage while the pipeline runs and read
//! only after it joins.

use std::collections::BTreeMap;

/// Accepted words grouped by word length
#[derive(Debug, Default)]
pub struct WordIndex {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word to the bucket for its length.
    pub fn insert(&mut self, word: String) {
        self.buckets.entry(word.len()).or_default().push(word);
    }

    /// Words of a given length, in arrival order. Empty when none matched.
    pub fn words_of(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of words across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Iterate non-empty buckets in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(|(&len, words)| (len, words.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_groups_by_length() {
        let mut index = WordIndex::new();
        index.insert("garden".to_string());
        index.insert("strange".to_string());
        index.insert("grange".to_string());

        assert_eq!(index.words_of(6), ["garden", "grange"]);
        assert_eq!(index.words_of(7), ["strange"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_missing_bucket_is_empty() {
        let index = WordIndex::new();
        assert!(index.words_of(6).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_arrival_order_preserved() {
        let mut index = WordIndex::new();
        for word in ["zebras", "apples", "mangos"] {
            index.insert(word.to_string());
        }

        assert_eq!(index.words_of(6), ["zebras", "apples", "mangos"]);
    }

    #[test]
    fn test_iter_ascending_lengths() {
        let mut index = WordIndex::new();
        index.insert("evening".to_string());
        index.insert("garden".to_string());

        let lengths: Vec<usize> = index.iter().map(|(len, _)| len).collect();
        assert_eq!(lengths, [6, 7]);
    }
}
