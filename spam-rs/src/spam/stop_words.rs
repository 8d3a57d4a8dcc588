//! Stop-word filtering
//!
//! Stop words are loaded once at startup and shared read-only by every
//! [`WordExtractor`](super::WordExtractor). Tokens are compared literally.

use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Result, SpamError};

/// Immutable set of ignorable words
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Load a whitespace-separated stop-word list
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SpamError::read(path, e))?;
        let stop_words = Self::from_words(content.split_whitespace());

        if stop_words.is_empty() {
            warn!("Stop-word list {} is empty", path.display());
        } else {
            info!("Loaded {} stop words from {}", stop_words.len(), path.display());
        }

        Ok(stop_words)
    }

    /// Create a set from an in-memory word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if `word` is a stop word (literal comparison)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every stop word, keeping order and duplicates of the rest
    pub fn filter<'a, I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .filter(|word| !self.contains(word))
            .map(str::to_string)
            .collect()
    }
}
