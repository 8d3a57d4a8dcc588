//! Spam classification module
//!
//! Word-frequency spam filter: per-class frequency distributions are built
//! from two training corpora, each word gets a spam likelihood, and the most
//! discriminating words of a document are combined into a verdict.

pub mod classifier;
pub mod distribution;
pub mod evaluator;
pub mod extractor;
pub mod filter;
pub mod likelihood;
pub mod report;
pub mod stop_words;
pub mod types;

pub use classifier::{Classifier, DocumentScore};
pub use distribution::{DistributionBuilder, FrequencyDistribution};
pub use evaluator::{test_document_path, Evaluator};
pub use extractor::WordExtractor;
pub use filter::SpamFilter;
pub use likelihood::{spam_likelihood, LikelihoodEstimator};
pub use report::Report;
pub use stop_words::StopWords;
pub use types::*;
