use super::{Package, PackageScoreInput};

/// Descriptive report fields that do not feed the score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDetails {
    pub scoring_date: Option<String>,
    pub release_date: Option<String>,
    pub authors: Option<u64>,
    pub contributors: Option<u64>,
    pub immediate_dependency_count: Option<u64>,
}

/// A scanned package version with its normalized score input and the
/// reports of its direct dependencies
#[derive(Debug, Clone, PartialEq)]
pub struct PackageReport {
    package: Package,
    score_input: PackageScoreInput,
    details: ReportDetails,
    dependencies: Vec<PackageReport>,
}

impl PackageReport {
    pub fn new(package: Package, score_input: PackageScoreInput) -> Self {
        Self {
            package,
            score_input,
            details: ReportDetails::default(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: ReportDetails) -> Self {
        self.details = details;
        self
    }

    /// Replaces the score input, e.g. with totals aggregated from the
    /// dependency reports
    pub fn with_score_input(mut self, score_input: PackageScoreInput) -> Self {
        self.score_input = score_input;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<PackageReport>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn score_input(&self) -> &PackageScoreInput {
        &self.score_input
    }

    pub fn details(&self) -> &ReportDetails {
        &self.details
    }

    pub fn dependencies(&self) -> &[PackageReport] {
        &self.dependencies
    }

    /// Immediate dependency count as reported, falling back to the number of
    /// dependency reports attached
    pub fn immediate_dependency_count(&self) -> u64 {
        self.details
            .immediate_dependency_count
            .unwrap_or(self.dependencies.len() as u64)
    }
}
