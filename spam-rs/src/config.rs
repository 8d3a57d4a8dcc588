//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamError};
use crate::spam::classifier::DEFAULT_SELECTION_SIZE;
use crate::spam::distribution::DEFAULT_TOP_K;
use crate::spam::evaluator::DEFAULT_TESTING_SIZE;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "spam-rs.toml";

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the stop-word list and the four corpora
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_stop_words")]
    pub stop_words: PathBuf,
    #[serde(default = "default_ham_training")]
    pub ham_training: PathBuf,
    #[serde(default = "default_spam_training")]
    pub spam_training: PathBuf,
    #[serde(default = "default_ham_testing")]
    pub ham_testing: PathBuf,
    #[serde(default = "default_spam_testing")]
    pub spam_testing: PathBuf,
}

/// Scoring parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Entries kept in each class's frequency table
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Most discriminating words combined per document
    #[serde(default = "default_selection_size")]
    pub selection_size: usize,
}

/// Numbered test-set layout
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationConfig {
    /// Informational only, training corpora are always read whole
    #[serde(default = "default_training_size")]
    pub training_size: usize,
    #[serde(default = "default_testing_size")]
    pub testing_size: usize,
    #[serde(default = "default_ham_prefix")]
    pub ham_prefix: String,
    #[serde(default = "default_spam_prefix")]
    pub spam_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_stop_words() -> PathBuf {
    PathBuf::from("stop-words")
}

fn default_ham_training() -> PathBuf {
    Path::new("emails").join("hamtraining")
}

fn default_spam_training() -> PathBuf {
    Path::new("emails").join("spamtraining")
}

fn default_ham_testing() -> PathBuf {
    Path::new("emails").join("hamtesting")
}

fn default_spam_testing() -> PathBuf {
    Path::new("emails").join("spamtesting")
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_selection_size() -> usize {
    DEFAULT_SELECTION_SIZE
}

fn default_training_size() -> usize {
    300
}

fn default_testing_size() -> usize {
    DEFAULT_TESTING_SIZE
}

fn default_ham_prefix() -> String {
    "hamtesting".to_string()
}

fn default_spam_prefix() -> String {
    "spamtesting".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            ham_training: default_ham_training(),
            spam_training: default_spam_training(),
            ham_testing: default_ham_testing(),
            spam_testing: default_spam_testing(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            selection_size: default_selection_size(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            training_size: default_training_size(),
            testing_size: default_testing_size(),
            ham_prefix: default_ham_prefix(),
            spam_prefix: default_spam_prefix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpamError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load the configuration for a run
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, and the built-in defaults otherwise. Relative corpus
    /// paths are resolved against the config file's directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::from_file(path)?.with_base_dir(base))
    }

    /// Resolve every relative path against `base`
    pub fn with_base_dir<P: AsRef<Path>>(mut self, base: P) -> Self {
        let base = base.as_ref();
        let paths = &mut self.paths;
        for path in [
            &mut paths.stop_words,
            &mut paths.ham_training,
            &mut paths.spam_training,
            &mut paths.ham_testing,
            &mut paths.spam_testing,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.classifier.top_k == 0 {
            return Err(SpamError::Config("classifier.top_k must be positive".to_string()));
        }
        if self.classifier.selection_size == 0 {
            return Err(SpamError::Config(
                "classifier.selection_size must be positive".to_string(),
            ));
        }
        if self.evaluation.testing_size == 0 {
            return Err(SpamError::Config(
                "evaluation.testing_size must be positive".to_string(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(SpamError::Config(format!(
                "Unknown logging.format '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}
