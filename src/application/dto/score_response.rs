use crate::package_scoring::domain::{Grade, PackageReport, ReportMetadata, ScoreResult};
use crate::package_scoring::services::{Banner, GradeDistribution};

/// A package report together with its computed score and banner
#[derive(Debug, Clone)]
pub struct ScoredPackage {
    pub report: PackageReport,
    pub result: ScoreResult,
    pub banner: Option<Banner>,
}

/// ScoreResponse - Internal response DTO from the score package use case
#[derive(Debug, Clone)]
pub struct ScoreResponse {
    /// The top-level package
    pub package: ScoredPackage,
    /// Direct dependencies, in report order
    pub dependencies: Vec<ScoredPackage>,
    /// Grade histogram over the direct dependencies
    pub grade_distribution: GradeDistribution,
    pub metadata: ReportMetadata,
    /// Minimum grade the request asked for, if any
    pub min_grade: Option<Grade>,
}

impl ScoreResponse {
    /// True when a minimum grade was requested and the top-level grade is worse
    pub fn is_below_minimum(&self) -> bool {
        self.min_grade
            .is_some_and(|min| self.package.result.grade.is_worse_than(min))
    }
}
