//! Accuracy evaluation over numbered test sets
//!
//! Test documents are named `<prefix> (<i>).txt` for `i` in
//! `1..=testing_size`. A missing document is an error, never a skip.

use std::path::{Path, PathBuf};
use tracing::info;

use super::classifier::Classifier;
use super::distribution::FrequencyDistribution;
use super::types::{EvaluationResult, Label, TestOutcome};
use crate::error::Result;

/// Default number of documents per test set
pub const DEFAULT_TESTING_SIZE: usize = 200;

/// Path of the `index`-th document of a test set
pub fn test_document_path(dir: &Path, prefix: &str, index: usize) -> PathBuf {
    dir.join(format!("{} ({}).txt", prefix, index))
}

/// Runs a classifier over labeled test sets
#[derive(Debug, Clone)]
pub struct Evaluator {
    classifier: Classifier,
    testing_size: usize,
}

impl Evaluator {
    /// Create a new evaluator over test sets of `testing_size` documents
    pub fn new(classifier: Classifier, testing_size: usize) -> Self {
        Self {
            classifier,
            testing_size,
        }
    }

    /// Every document in `dir` is expected to be spam
    pub fn test_spams(
        &self,
        dir: &Path,
        prefix: &str,
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> Result<EvaluationResult> {
        self.evaluate(Label::Spam, dir, prefix, ham, spam)
    }

    /// Every document in `dir` is expected to be ham
    pub fn test_hams(
        &self,
        dir: &Path,
        prefix: &str,
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> Result<EvaluationResult> {
        self.evaluate(Label::Ham, dir, prefix, ham, spam)
    }

    /// Classify every document of a test set and compare with `expected`
    pub fn evaluate(
        &self,
        expected: Label,
        dir: &Path,
        prefix: &str,
        ham: &FrequencyDistribution,
        spam: &FrequencyDistribution,
    ) -> Result<EvaluationResult> {
        let mut outcomes = Vec::with_capacity(self.testing_size);

        for index in 1..=self.testing_size {
            let document = test_document_path(dir, prefix, index);
            let predicted = Label::from_is_spam(self.classifier.classify(&document, ham, spam)?);
            outcomes.push(TestOutcome {
                index,
                document,
                predicted,
                correct: predicted == expected,
            });
        }

        let result = EvaluationResult::new(expected, outcomes);
        info!(
            "{} test set {}: {}/{} correct ({:.1}%)",
            expected,
            dir.display(),
            result.correct,
            result.total(),
            result.ratio()
        );

        Ok(result)
    }
}
