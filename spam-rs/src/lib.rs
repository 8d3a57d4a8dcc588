//! spam-rs: word-frequency spam filter
//!
//! Classifies text documents as spam or ham from two labeled training
//! corpora.
//!
//! # Features
//!
//! - **Training**: per-class word frequency tables, truncated to the most
//!   frequent words
//! - **Scoring**: per-word spam likelihoods with fixed values for words seen
//!   in only one class
//! - **Classification**: combines the most discriminating words of a document
//! - **Evaluation**: accuracy over numbered test sets, as text or JSON
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::config::Config;
//! use spam_rs::spam::SpamFilter;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let filter = SpamFilter::train(&config)?;
//!
//!     if filter.is_spam("inbox/message.txt")? {
//!         println!("spam");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Training, scoring and evaluation

pub mod config;
pub mod error;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
