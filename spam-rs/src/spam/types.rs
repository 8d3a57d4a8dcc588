//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Class label of a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// Label for a classifier decision
    pub fn from_is_spam(is_spam: bool) -> Self {
        if is_spam {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Check if this is the spam label
    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// Classification result for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Document the verdict belongs to
    pub document: PathBuf,
    /// spam_score > ham_score
    pub is_spam: bool,
    /// Product of the selected words' spam likelihoods
    pub spam_score: f64,
    /// Product of the selected words' ham likelihoods
    pub ham_score: f64,
}

impl Verdict {
    /// Get the predicted label
    pub fn label(&self) -> Label {
        Label::from_is_spam(self.is_spam)
    }
}

/// Outcome of one numbered test document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    /// 1-based index within the test set
    pub index: usize,
    pub document: PathBuf,
    pub predicted: Label,
    pub correct: bool,
}

/// Outcomes of running the classifier over one labeled test set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Label every document in the set is known to have
    pub expected: Label,
    pub outcomes: Vec<TestOutcome>,
    pub correct: usize,
}

impl EvaluationResult {
    /// Create a result, counting the correct outcomes
    pub fn new(expected: Label, outcomes: Vec<TestOutcome>) -> Self {
        let correct = outcomes.iter().filter(|o| o.correct).count();
        Self {
            expected,
            outcomes,
            correct,
        }
    }

    /// Number of documents evaluated
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Accuracy as a percentage, 0.0 for an empty set
    pub fn ratio(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        (self.correct as f64 / self.total() as f64) * 100.0
    }
}

/// Results for both test sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub spam: EvaluationResult,
    pub ham: EvaluationResult,
}
