//! Advisory rule findings

use serde::{Deserialize, Serialize};

/// Outcome of the advisory rule checks
///
/// Both lists keep their append order: the evaluator runs its checks in a
/// fixed sequence and pushes each check's facts before that check's
/// warnings, so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Cautionary findings (threshold breaches, shortfalls)
    pub warnings: Vec<String>,
    /// Neutral computed findings
    pub facts: Vec<String>,
}

impl RuleResult {
    /// Check if no rule fired
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.facts.is_empty()
    }
}
