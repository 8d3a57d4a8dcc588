//! Per-word spam likelihood
//!
//! P(S|w) = P(w|S) / (P(w|S) + P(w|H)), with P(w|C) = count_C(w) / total_C.
//! Words missing from one or both distributions get fixed values instead.

use super::distribution::FrequencyDistribution;

/// Word seen only in the spam distribution
pub const SPAM_ONLY_LIKELIHOOD: f64 = 0.999;
/// Word seen only in the ham distribution
pub const HAM_ONLY_LIKELIHOOD: f64 = 0.001;
/// Word seen in neither distribution
pub const NEUTRAL_LIKELIHOOD: f64 = 0.5;

/// Estimates how strongly a word indicates spam
#[derive(Debug, Clone, Copy)]
pub struct LikelihoodEstimator<'a> {
    ham: &'a FrequencyDistribution,
    spam: &'a FrequencyDistribution,
}

impl<'a> LikelihoodEstimator<'a> {
    /// Create an estimator over a trained ham/spam pair
    pub fn new(ham: &'a FrequencyDistribution, spam: &'a FrequencyDistribution) -> Self {
        Self { ham, spam }
    }

    /// Probability in [0, 1] that `word` indicates spam
    pub fn spam_likelihood(&self, word: &str) -> f64 {
        let spam_count = self.spam.get(word);
        let ham_count = self.ham.get(word);

        match (spam_count, ham_count) {
            (Some(_), None) => SPAM_ONLY_LIKELIHOOD,
            (None, Some(_)) => HAM_ONLY_LIKELIHOOD,
            (None, None) => NEUTRAL_LIKELIHOOD,
            (Some(spam_count), Some(ham_count)) => {
                // Counts are positive, so both totals include a positive count
                let word_if_spam = spam_count as f64 / self.spam.total() as f64;
                let word_if_ham = ham_count as f64 / self.ham.total() as f64;
                word_if_spam / (word_if_spam + word_if_ham)
            }
        }
    }

    /// Distance from neutral, 0.0 (no signal) to 0.5 (certain either way)
    pub fn discrimination(&self, word: &str) -> f64 {
        discrimination(self.spam_likelihood(word))
    }
}

/// How far a likelihood sits from neutral
pub fn discrimination(likelihood: f64) -> f64 {
    (likelihood - NEUTRAL_LIKELIHOOD).abs()
}

/// Shorthand for a one-off [`LikelihoodEstimator::spam_likelihood`]
pub fn spam_likelihood(
    word: &str,
    ham: &FrequencyDistribution,
    spam: &FrequencyDistribution,
) -> f64 {
    LikelihoodEstimator::new(ham, spam).spam_likelihood(word)
}
