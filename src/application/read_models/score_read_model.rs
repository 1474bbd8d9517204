//! Score read model for rendering
//!
//! Flat, render-ready views of a scored package report. Formatters only
//! read these structs; all scoring has already happened.

/// Main read model for a scored package report
#[derive(Debug, Clone)]
pub struct ScoreReadModel {
    pub metadata: MetadataView,
    pub package: PackageScoreView,
    pub dependencies: Vec<DependencyRowView>,
    pub grade_distribution: Vec<GradeCountView>,
    pub min_grade: Option<MinGradeView>,
}

#[derive(Debug, Clone)]
pub struct MetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// Score card of the top-level package
#[derive(Debug, Clone)]
pub struct PackageScoreView {
    pub name: String,
    pub version: String,
    pub total_score: i64,
    /// Upper-case letter, `A`..`E`
    pub grade: String,
    /// CSS class, `score-a`..`score-e`
    pub grade_class: String,
    /// Absent when there are no vulnerabilities
    pub banner: Option<BannerView>,
    pub freshness_score: f64,
    pub all_dependency_count: u64,
    pub immediate_dependency_count: u64,
    pub direct_vulnerabilities: VulnerabilityCountsView,
    pub indirect_vulnerabilities: VulnerabilityCountsView,
    pub authors: Option<u64>,
    pub contributors: Option<u64>,
    pub scoring_date: Option<String>,
    pub release_date: Option<String>,
    pub breakdown: Option<Vec<BreakdownRowView>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VulnerabilityCountsView {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRowView {
    pub label: String,
    pub delta: i64,
}

/// One row of the direct dependency table
#[derive(Debug, Clone)]
pub struct DependencyRowView {
    pub name: String,
    pub version: String,
    pub total_score: i64,
    pub grade: String,
    pub grade_class: String,
    pub all_dependency_count: u64,
    pub banner: Option<BannerView>,
}

/// Vulnerability alert level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    /// `fail`, `warn` or `info`
    pub class: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCountView {
    pub grade: String,
    pub count: usize,
}

/// Outcome of the `--min-grade` gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinGradeView {
    pub min_grade: String,
    pub passed: bool,
}
