//! Per-class word frequency distributions
//!
//! A distribution is built by counting every non-stop word of every
//! document in a corpus directory, then keeping only the `top_k` most
//! frequent words.
//!
//! Counting starts each word at 1 the first time it is seen and then
//! increments it, so a word that occurs once in the whole corpus ends with
//! a count of 2. Truncation sorts stably by descending count: words with
//! equal counts keep the order in which they were first seen, and corpus
//! files are read in file-name order, which makes the words surviving at
//! the `top_k` boundary reproducible.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::extractor::WordExtractor;
use crate::error::{Result, SpamError};

/// Starting count of a word before its first occurrence is added
pub const INITIAL_COUNT: u64 = 1;

/// Default number of entries kept per class
pub const DEFAULT_TOP_K: usize = 500;

/// Word counts for one class, truncated to the most frequent words
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyDistribution {
    ranked: Vec<(String, u64)>,
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyDistribution {
    /// Build from explicit counts, applying the same ranking and truncation
    /// as corpus builds
    ///
    /// Zero counts are dropped: a word in a distribution always has a
    /// positive count.
    pub fn from_counts<I, S>(counts: I, top_k: usize) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut ordered: IndexMap<String, u64> = IndexMap::new();
        for (word, count) in counts.into_iter().filter(|(_, count)| *count > 0) {
            ordered.insert(word.into(), count);
        }
        Self::rank(ordered, top_k)
    }

    fn rank(counts: IndexMap<String, u64>, top_k: usize) -> Self {
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        // sort_by is stable: ties keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(top_k);

        let counts: HashMap<String, u64> = ranked.iter().cloned().collect();
        let total: u64 = ranked.iter().map(|(_, count)| count).sum();

        Self {
            ranked,
            counts,
            total,
        }
    }

    /// Count of `word`, if it was kept
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Check if `word` was kept
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Sum of all kept counts
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of kept words
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Entries by descending count
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.ranked.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Builds [`FrequencyDistribution`]s from corpus directories
#[derive(Debug, Clone)]
pub struct DistributionBuilder {
    extractor: WordExtractor,
    top_k: usize,
}

impl DistributionBuilder {
    /// Create a new builder keeping `top_k` entries per distribution
    pub fn new(extractor: WordExtractor, top_k: usize) -> Self {
        Self { extractor, top_k }
    }

    /// Count every document under `corpus` and keep the `top_k` entries
    ///
    /// Fails with [`SpamError::EmptyCorpus`] when the directory holds no
    /// files, and propagates the first unreadable document.
    pub fn build<P: AsRef<Path>>(&self, corpus: P) -> Result<FrequencyDistribution> {
        let corpus = corpus.as_ref();
        let documents = corpus_documents(corpus)?;
        if documents.is_empty() {
            return Err(SpamError::EmptyCorpus(corpus.to_path_buf()));
        }
        debug!("Counting {} documents in {}", documents.len(), corpus.display());

        let mut counts = IndexMap::new();
        for document in &documents {
            let words = self.extractor.extract(document)?;
            count_words(&mut counts, &words);
        }

        let seen = counts.len();
        let distribution = FrequencyDistribution::rank(counts, self.top_k);
        info!(
            "Built distribution from {}: {} documents, {} distinct words, {} kept",
            corpus.display(),
            documents.len(),
            seen,
            distribution.len()
        );

        Ok(distribution)
    }

    /// Same as [`build`](Self::build) over in-memory documents
    pub fn build_from_texts<'a, I>(&self, texts: I) -> FrequencyDistribution
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = IndexMap::new();
        for text in texts {
            count_words(&mut counts, &self.extractor.extract_text(text));
        }
        FrequencyDistribution::rank(counts, self.top_k)
    }
}

fn count_words(counts: &mut IndexMap<String, u64>, words: &[String]) {
    for word in words {
        *counts.entry(word.clone()).or_insert(INITIAL_COUNT) += 1;
    }
}

/// Files of a corpus directory, sorted by file name
///
/// Symlinks are followed, so a linked document counts like a regular one.
pub fn corpus_documents(corpus: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(corpus).map_err(|e| SpamError::read(corpus, e))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SpamError::read(corpus, e))?;
        let path = entry.path();
        let metadata = std::fs::metadata(&path).map_err(|e| SpamError::read(&path, e))?;
        if metadata.is_file() {
            documents.push(path);
        }
    }
    documents.sort();

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spam::StopWords;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn builder(top_k: usize) -> DistributionBuilder {
        let stop_words = StopWords::from_words(["the", "a"]);
        DistributionBuilder::new(WordExtractor::new(Arc::new(stop_words)), top_k)
    }

    #[test]
    fn test_single_occurrence_counts_two() {
        let distribution = builder(10).build_from_texts(["hello"]);
        assert_eq!(distribution.get("hello"), Some(2));
        assert_eq!(distribution.total(), 2);
    }

    #[test]
    fn test_counts_across_documents() {
        let distribution = builder(10).build_from_texts(["win the prize", "win a car win"]);
        assert_eq!(distribution.get("win"), Some(4));
        assert_eq!(distribution.get("prize"), Some(2));
        assert_eq!(distribution.get("car"), Some(2));
        assert!(!distribution.contains("the"));
        assert!(!distribution.contains("a"));
    }

    #[test]
    fn test_truncation_keeps_first_seen_on_ties() {
        let distribution = builder(3).build_from_texts(["delta alpha charlie bravo bravo"]);
        let words: Vec<&str> = distribution.iter().map(|(w, _)| w).collect();
        // bravo leads, then the tied words in scan order
        assert_eq!(words, vec!["bravo", "delta", "alpha"]);
    }

    #[test]
    fn test_never_exceeds_top_k() {
        let text = (0..50).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let distribution = builder(20).build_from_texts([text.as_str()]);
        assert_eq!(distribution.len(), 20);
        assert!(distribution.iter().all(|(_, count)| count >= 2));
    }

    #[test]
    fn test_from_counts_ranks_and_truncates() {
        let distribution =
            FrequencyDistribution::from_counts([("free", 5), ("hello", 10), ("spare", 1)], 2);
        let entries: Vec<(&str, u64)> = distribution.iter().collect();
        assert_eq!(entries, vec![("hello", 10), ("free", 5)]);
        assert_eq!(distribution.total(), 15);
    }

    #[test]
    fn test_build_corpus_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "money money").unwrap();
        fs::write(dir.path().join("a.txt"), "free the money").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let distribution = builder(500).build(dir.path()).unwrap();
        assert_eq!(distribution.get("money"), Some(4));
        assert_eq!(distribution.get("free"), Some(2));
        assert_eq!(distribution.len(), 2);
    }

    #[test]
    fn test_from_counts_drops_zero_counts() {
        let distribution = FrequencyDistribution::from_counts([("free", 0), ("win", 3)], 500);
        assert!(!distribution.contains("free"));
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution.total(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_build_follows_symlinked_documents() {
        let source = TempDir::new().unwrap();
        let target = source.path().join("a.txt");
        fs::write(&target, "money money").unwrap();

        let corpus = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&target, corpus.path().join("a.txt")).unwrap();

        let distribution = builder(500).build(corpus.path()).unwrap();
        assert_eq!(distribution.get("money"), Some(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_reports_its_path() {
        let corpus = TempDir::new().unwrap();
        let link = corpus.path().join("gone.txt");
        std::os::unix::fs::symlink(corpus.path().join("missing.txt"), &link).unwrap();

        match builder(500).build(corpus.path()) {
            Err(SpamError::Read { path, .. }) => assert_eq!(path, link),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_build_empty_corpus_fails() {
        let dir = TempDir::new().unwrap();
        let err = builder(500).build(dir.path()).unwrap_err();
        assert!(matches!(err, SpamError::EmptyCorpus(_)));
    }

    #[test]
    fn test_build_missing_corpus_fails() {
        let dir = TempDir::new().unwrap();
        let err = builder(500).build(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, SpamError::Read { .. }));
    }

    #[test]
    fn test_corpus_documents_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let names: Vec<String> = corpus_documents(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
