//! Human-readable and JSON rendering of evaluation results

use serde::Serialize;
use std::fmt;

use super::types::{Evaluation, EvaluationResult};
use crate::error::Result;

const RULE_WIDTH: usize = 80;

/// Report over both test sets
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    spam: &'a EvaluationResult,
    ham: &'a EvaluationResult,
    spam_ratio: f64,
    ham_ratio: f64,
}

impl<'a> Report<'a> {
    /// Create a report over both test sets
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            spam: &evaluation.spam,
            ham: &evaluation.ham,
            spam_ratio: evaluation.spam.ratio(),
            ham_ratio: evaluation.ham.ratio(),
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn write_section(f: &mut fmt::Formatter<'_>, title: &str, result: &EvaluationResult) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        for outcome in &result.outcomes {
            writeln!(
                f,
                "Test result {} = {}",
                outcome.index,
                if outcome.correct { "Correct" } else { "Incorrect" }
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_section(f, "SPAM TEST RESULTS", self.spam)?;
        Self::write_section(f, "HAM TEST RESULTS:", self.ham)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Spam ratio: {:.1}", self.spam_ratio)?;
        writeln!(f, "Ham ratio: {:.1}", self.ham_ratio)
    }
}
