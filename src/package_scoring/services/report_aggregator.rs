use crate::package_scoring::domain::{PackageReport, PackageScoreInput, VulnerabilityCounts};
use crate::shared::error::ScoreError;

/// ReportAggregator service
///
/// Rolls the reports of a package's direct dependencies up into the
/// package's own score input:
/// - all dependencies = Σ (1 + dependency's all dependencies)
/// - indirect vulnerabilities = Σ (dependency's direct + dependency's indirect)
pub struct ReportAggregator;

impl ReportAggregator {
    /// Builds the score input for a package from its own data and its
    /// direct dependency reports
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidInput`] when `freshness_score` is not finite.
    pub fn aggregate(
        freshness_score: f64,
        direct_vulnerabilities: VulnerabilityCounts,
        dependency_reports: &[PackageReport],
    ) -> Result<PackageScoreInput, ScoreError> {
        PackageScoreInput::new(
            freshness_score,
            Self::all_dependency_count(dependency_reports),
            direct_vulnerabilities,
            Self::indirect_vulnerabilities(dependency_reports),
        )
    }

    pub fn all_dependency_count(dependency_reports: &[PackageReport]) -> u64 {
        dependency_reports.iter().fold(0u64, |acc, report| {
            acc.saturating_add(1)
                .saturating_add(report.score_input().all_dependency_count())
        })
    }

    pub fn indirect_vulnerabilities(dependency_reports: &[PackageReport]) -> VulnerabilityCounts {
        dependency_reports
            .iter()
            .fold(VulnerabilityCounts::default(), |acc, report| {
                let input = report.score_input();
                acc + *input.direct_vulnerabilities() + *input.indirect_vulnerabilities()
            })
    }
}
