use super::Grade;

/// Label of the closing breakdown entry
pub const TOTAL_LABEL: &str = "Total";

/// One applied scoring term, as shown in the score explanation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub label: String,
    pub delta: i64,
}

impl BreakdownEntry {
    pub fn new(label: impl Into<String>, delta: i64) -> Self {
        Self {
            label: label.into(),
            delta,
        }
    }
}

/// Outcome of scoring one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub total_score: i64,
    pub grade: Grade,
    /// Terms in application order, ending with a `("Total", total_score)` entry.
    /// Only present when a breakdown was requested.
    pub breakdown: Option<Vec<BreakdownEntry>>,
}
