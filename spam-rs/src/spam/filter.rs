//! Trained spam filter
//!
//! Owns the ham and spam distributions for the lifetime of a run and
//! hands them by reference to the classifier and evaluator.

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::classifier::Classifier;
use super::distribution::{DistributionBuilder, FrequencyDistribution};
use super::evaluator::Evaluator;
use super::extractor::WordExtractor;
use super::stop_words::StopWords;
use super::types::{Evaluation, Verdict};
use crate::config::{Config, EvaluationConfig};
use crate::error::Result;

/// Classifier plus the trained ham and spam distributions
#[derive(Debug)]
pub struct SpamFilter {
    classifier: Classifier,
    ham: FrequencyDistribution,
    spam: FrequencyDistribution,
}

impl SpamFilter {
    /// Load stop words and train on the configured corpora
    pub fn train(config: &Config) -> Result<Self> {
        config.validate()?;

        let stop_words = Arc::new(StopWords::load(&config.paths.stop_words)?);
        let extractor = WordExtractor::new(stop_words);
        Self::train_with(extractor, config)
    }

    /// Train with an already configured extractor
    pub fn train_with(extractor: WordExtractor, config: &Config) -> Result<Self> {
        let builder = DistributionBuilder::new(extractor.clone(), config.classifier.top_k);

        info!("Training ham distribution");
        let ham = builder.build(&config.paths.ham_training)?;
        info!("Training spam distribution");
        let spam = builder.build(&config.paths.spam_training)?;

        Ok(Self::from_distributions(
            extractor,
            ham,
            spam,
            config.classifier.selection_size,
        ))
    }

    /// Create a filter from already built distributions
    pub fn from_distributions(
        extractor: WordExtractor,
        ham: FrequencyDistribution,
        spam: FrequencyDistribution,
        selection_size: usize,
    ) -> Self {
        Self {
            classifier: Classifier::new(extractor, selection_size),
            ham,
            spam,
        }
    }

    /// Get the ham distribution
    pub fn ham(&self) -> &FrequencyDistribution {
        &self.ham
    }

    /// Get the spam distribution
    pub fn spam(&self) -> &FrequencyDistribution {
        &self.spam
    }

    /// Check if the document at `path` is spam
    pub fn is_spam<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        self.classifier.classify(path, &self.ham, &self.spam)
    }

    /// Classify the document at `path`, keeping both scores
    pub fn verdict<P: AsRef<Path>>(&self, path: P) -> Result<Verdict> {
        self.classifier.verdict(path, &self.ham, &self.spam)
    }

    /// Run both numbered test sets
    pub fn evaluate(
        &self,
        ham_testing: &Path,
        spam_testing: &Path,
        config: &EvaluationConfig,
    ) -> Result<Evaluation> {
        let evaluator = Evaluator::new(self.classifier.clone(), config.testing_size);

        let spam = evaluator.test_spams(spam_testing, &config.spam_prefix, &self.ham, &self.spam)?;
        let ham = evaluator.test_hams(ham_testing, &config.ham_prefix, &self.ham, &self.spam)?;

        Ok(Evaluation { spam, ham })
    }
}
