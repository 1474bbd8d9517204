use crate::package_scoring::domain::Grade;

/// ScoreRequest - Internal request DTO for the score package use case
#[derive(Debug, Clone, Default)]
pub struct ScoreRequest {
    /// Whether to return the per-term score explanation
    pub want_breakdown: bool,
    /// Recompute the all-dependency count and indirect vulnerability counts
    /// from the nested dependency reports instead of using the stored totals
    pub aggregate_dependencies: bool,
    /// Grades worse than this mark the response as below minimum
    pub min_grade: Option<Grade>,
}

impl ScoreRequest {
    pub fn new(want_breakdown: bool, aggregate_dependencies: bool, min_grade: Option<Grade>) -> Self {
        Self {
            want_breakdown,
            aggregate_dependencies,
            min_grade,
        }
    }
}
