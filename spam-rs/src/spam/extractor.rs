//! Document to word-list extraction

use std::path::Path;
use std::sync::Arc;

use super::stop_words::StopWords;
use crate::error::{Result, SpamError};

/// Splits documents on whitespace and drops stop words
#[derive(Debug, Clone)]
pub struct WordExtractor {
    stop_words: Arc<StopWords>,
}

impl WordExtractor {
    /// Create a new extractor sharing `stop_words`
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        Self { stop_words }
    }

    /// Read a document and return its non-stop-word tokens
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SpamError::read(path, e))?;
        Ok(self.extract_text(&text))
    }

    /// Split in-memory text and drop stop words
    pub fn extract_text(&self, text: &str) -> Vec<String> {
        self.stop_words.filter(text.split_whitespace())
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new(Arc::new(StopWords::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_text() {
        let extractor = WordExtractor::new(Arc::new(StopWords::from_words(["and"])));
        let words = extractor.extract_text("  cheap\tpills and\n\nCheap pills! ");
        assert_eq!(words, vec!["cheap", "pills", "Cheap", "pills!"]);
    }

    #[test]
    fn test_extract_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mail.txt");
        fs::write(&path, "hello and goodbye").unwrap();

        let extractor = WordExtractor::new(Arc::new(StopWords::from_words(["and"])));
        assert_eq!(extractor.extract(&path).unwrap(), vec!["hello", "goodbye"]);
    }

    #[test]
    fn test_extract_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = WordExtractor::default().extract(&missing).unwrap_err();
        assert!(matches!(err, SpamError::Read { ref path, .. } if path == &missing));
    }
}
