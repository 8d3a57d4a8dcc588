//! Document classification
//!
//! Only the `selection_size` most discriminating distinct words of a
//! document are combined, so hundreds of near-neutral words cannot wash out
//! the signal and the products stay within a usable range.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::distribution::FrequencyDistribution;
use super::extractor::WordExtractor;
use super::likelihood::{discrimination, LikelihoodEstimator};
use super::types::Verdict;
use crate::error::Result;

/// Default number of words combined per document
pub const DEFAULT_SELECTION_SIZE: usize = 200;

/// Combined scores of one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScore {
    /// Product of p over the selected words
    pub spam_score: f64,
    /// Product of (1 - p) over the selected words
    pub ham_score: f64,
    /// Selected words with their likelihoods, most discriminating first
    pub selected: Vec<(String, f64)>,
}

impl DocumentScore {
    /// Ties are ham
    pub fn is_spam(&self) -> bool {
        self.spam_score > self.ham_score
    }
}

/// Spam/ham classifier over a pair of trained distributions
#[derive(Debug, Clone)]
pub struct Classifier {
    extractor: WordExtractor,
    selection_size: usize,
}

impl Classifier {
    /// Create a new classifier combining at most `selection_size` words
    pub fn new(extractor: WordExtractor, selection_size: usize) -> Self {
        Self {
            extractor,
            selection_size,
        }
    }

    /// True when the document at `path` is spam
    pub fn classify<P: AsRef<Path>>(
        &self,
        path: P,
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> Result<bool> {
        Ok(self.verdict(path, ham, spam)?.is_spam)
    }

    /// Classify the document at `path`, keeping both scores
    pub fn verdict<P: AsRef<Path>>(
        &self,
        path: P,
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> Result<Verdict> {
        let path = path.as_ref();
        let words = self.extractor.extract(path)?;
        let score = self.score_words(&words, ham, spam);

        debug!(
            "{}: {} words, {} selected, spam={:e} ham={:e}",
            path.display(),
            words.len(),
            score.selected.len(),
            score.spam_score,
            score.ham_score
        );

        Ok(Verdict {
            document: path.to_path_buf(),
            is_spam: score.is_spam(),
            spam_score: score.spam_score,
            ham_score: score.ham_score,
        })
    }

    /// Classify in-memory text
    pub fn classify_text(
        &self,
        text: &str,
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> bool {
        let words = self.extractor.extract_text(text);
        self.score_words(&words, ham, spam).is_spam()
    }

    /// Score an already extracted word list
    pub fn score_words(
        &self,
        words: &[String],
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> DocumentScore {
        let estimator = LikelihoodEstimator::new(ham, spam);

        // Repeated words are scored once
        let mut seen = HashSet::new();
        let mut candidates: Vec<(&str, f64)> = words
            .iter()
            .map(String::as_str)
            .filter(|word| seen.insert(*word))
            .map(|word| (word, estimator.spam_likelihood(word)))
            .collect();

        // Stable: equally discriminating words keep document order
        candidates.sort_by(|a, b| discrimination(b.1).total_cmp(&discrimination(a.1)));
        candidates.truncate(self.selection_size);

        let mut spam_score = 1.0_f64;
        let mut ham_score = 1.0_f64;
        for (_, p) in &candidates {
            spam_score *= p;
            ham_score *= 1.0 - p;
        }

        DocumentScore {
            spam_score,
            ham_score,
            selected: candidates
                .into_iter()
                .map(|(word, p)| (word.to_string(), p))
                .collect(),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(WordExtractor::default(), DEFAULT_SELECTION_SIZE)
    }
}
