use crate::application::dto::{ScoreRequest, ScoreResponse, ScoredPackage};
use crate::package_scoring::domain::{PackageReport, PackageScoreInput};
use crate::package_scoring::services::{
    GradeDistribution, ReportAggregator, ReportGenerator, ScoreEngine, SeverityBanner,
};
use crate::ports::outbound::{ProgressReporter, ReportProvider};
use crate::shared::Result;

/// ScorePackageUseCase - Core use case for scoring a package report
///
/// Loads one report, scores the top-level package and each direct
/// dependency with the same engine, and collects banners and the grade
/// distribution for rendering.
///
/// # Type Parameters
/// * `P` - ReportProvider implementation (file or HTTP)
/// * `R` - ProgressReporter implementation
pub struct ScorePackageUseCase<P, R> {
    report_provider: P,
    progress_reporter: R,
}

impl<P, R> ScorePackageUseCase<P, R>
where
    P: ReportProvider,
    R: ProgressReporter,
{
    pub fn new(report_provider: P, progress_reporter: R) -> Self {
        Self {
            report_provider,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Propagates provider errors (read, fetch, parse, negative counts)
    /// and rejects a non-finite freshness score when aggregating.
    pub fn execute(&self, request: ScoreRequest) -> Result<ScoreResponse> {
        let report = self.load_report()?;

        let input = self.resolve_input(&report, &request)?;
        let package = Self::score(
            report.clone().with_score_input(input),
            request.want_breakdown,
        );

        let dependencies: Vec<ScoredPackage> = report
            .dependencies()
            .iter()
            .map(|dep| Self::score(dep.clone(), false))
            .collect();

        let grade_distribution =
            GradeDistribution::from_grades(dependencies.iter().map(|dep| dep.result.grade));

        self.progress_reporter.report(&format!(
            "📊 Scored {} (grade {}) and {} direct dependenc{}",
            report.package(),
            package.result.grade,
            dependencies.len(),
            if dependencies.len() == 1 { "y" } else { "ies" }
        ));

        Ok(ScoreResponse {
            package,
            dependencies,
            grade_distribution,
            metadata: ReportGenerator::generate_default_metadata(),
            min_grade: request.min_grade,
        })
    }

    fn load_report(&self) -> Result<PackageReport> {
        self.progress_reporter.start_waiting(&format!(
            "📖 Loading package report from: {}",
            self.report_provider.source_description()
        ));
        let loaded = self.report_provider.load_report();
        self.progress_reporter.finish_waiting();

        let report = loaded?;
        self.progress_reporter.report(&format!(
            "✅ Loaded report for {} ({} direct dependenc{})",
            report.package(),
            report.dependencies().len(),
            if report.dependencies().len() == 1 { "y" } else { "ies" }
        ));
        Ok(report)
    }

    /// Picks the stored totals, or rolls them up from the nested reports
    /// when requested and available
    fn resolve_input(
        &self,
        report: &PackageReport,
        request: &ScoreRequest,
    ) -> Result<PackageScoreInput> {
        let stored = *report.score_input();
        if !request.aggregate_dependencies {
            return Ok(stored);
        }

        if report.dependencies().is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: --aggregate requested but the report has no dependency reports; using stored totals.",
            );
            return Ok(stored);
        }

        let aggregated = ReportAggregator::aggregate(
            stored.freshness_score(),
            *stored.direct_vulnerabilities(),
            report.dependencies(),
        )?;

        if aggregated.all_dependency_count() != stored.all_dependency_count() {
            self.progress_reporter.report(&format!(
                "🔁 Aggregated dependency count {} differs from stored count {}",
                aggregated.all_dependency_count(),
                stored.all_dependency_count()
            ));
        }
        Ok(aggregated)
    }

    fn score(report: PackageReport, want_breakdown: bool) -> ScoredPackage {
        let input = report.score_input();
        ScoredPackage {
            result: ScoreEngine::compute_score(input, want_breakdown),
            banner: SeverityBanner::classify_input(input),
            report,
        }
    }
}
