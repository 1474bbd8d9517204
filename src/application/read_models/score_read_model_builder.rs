//! Builder for constructing ScoreReadModel from the use case response

use super::score_read_model::{
    BannerView, BreakdownRowView, DependencyRowView, GradeCountView, MetadataView, MinGradeView,
    PackageScoreView, ScoreReadModel, VulnerabilityCountsView,
};
use crate::application::dto::{ScoreResponse, ScoredPackage};
use crate::package_scoring::domain::{Grade, ReportMetadata, Severity, VulnerabilityCounts};
use crate::package_scoring::services::{Banner, GradeDistribution};

pub struct ScoreReadModelBuilder;

impl ScoreReadModelBuilder {
    pub fn build(response: &ScoreResponse) -> ScoreReadModel {
        ScoreReadModel {
            metadata: Self::build_metadata(&response.metadata),
            package: Self::build_package(&response.package),
            dependencies: response
                .dependencies
                .iter()
                .map(Self::build_dependency_row)
                .collect(),
            grade_distribution: Self::build_distribution(&response.grade_distribution),
            min_grade: response.min_grade.map(|min| MinGradeView {
                min_grade: min.as_str().to_string(),
                passed: !response.is_below_minimum(),
            }),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> MetadataView {
        MetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_package(scored: &ScoredPackage) -> PackageScoreView {
        let report = &scored.report;
        let input = report.score_input();
        let details = report.details();

        PackageScoreView {
            name: report.package().name().to_string(),
            version: report.package().version().to_string(),
            total_score: scored.result.total_score,
            grade: scored.result.grade.as_str().to_string(),
            grade_class: Self::grade_class(scored.result.grade),
            banner: scored.banner.map(Self::build_banner),
            freshness_score: input.freshness_score(),
            all_dependency_count: input.all_dependency_count(),
            immediate_dependency_count: report.immediate_dependency_count(),
            direct_vulnerabilities: Self::build_counts(input.direct_vulnerabilities()),
            indirect_vulnerabilities: Self::build_counts(input.indirect_vulnerabilities()),
            authors: details.authors,
            contributors: details.contributors,
            scoring_date: details.scoring_date.clone(),
            release_date: details.release_date.clone(),
            breakdown: scored.result.breakdown.as_ref().map(|entries| {
                entries
                    .iter()
                    .map(|entry| BreakdownRowView {
                        label: entry.label.clone(),
                        delta: entry.delta,
                    })
                    .collect()
            }),
        }
    }

    fn build_dependency_row(scored: &ScoredPackage) -> DependencyRowView {
        let report = &scored.report;
        DependencyRowView {
            name: report.package().name().to_string(),
            version: report.package().version().to_string(),
            total_score: scored.result.total_score,
            grade: scored.result.grade.as_str().to_string(),
            grade_class: Self::grade_class(scored.result.grade),
            all_dependency_count: report.score_input().all_dependency_count(),
            banner: scored.banner.map(Self::build_banner),
        }
    }

    fn build_banner(banner: Banner) -> BannerView {
        BannerView {
            class: banner.css_class().to_string(),
            icon: banner.icon().to_string(),
        }
    }

    fn build_counts(counts: &VulnerabilityCounts) -> VulnerabilityCountsView {
        VulnerabilityCountsView {
            critical: counts.get(Severity::Critical),
            high: counts.get(Severity::High),
            medium: counts.get(Severity::Medium),
            low: counts.get(Severity::Low),
        }
    }

    fn build_distribution(distribution: &GradeDistribution) -> Vec<GradeCountView> {
        distribution
            .buckets()
            .into_iter()
            .map(|(grade, count)| GradeCountView {
                grade: grade.as_str().to_string(),
                count,
            })
            .collect()
    }

    fn grade_class(grade: Grade) -> String {
        format!("score-{}", grade.css_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_scoring::domain::{Package, PackageReport, PackageScoreInput, ScoreResult};
    use crate::package_scoring::services::ReportGenerator;

    fn scored(name: &str, score: i64, grade: Grade, banner: Option<Banner>) -> ScoredPackage {
        ScoredPackage {
            report: PackageReport::new(
                Package::new(name.to_string(), "1.0.0".to_string()).unwrap(),
                PackageScoreInput::new(
                    0.5,
                    12,
                    VulnerabilityCounts::new(0, 1, 0, 0),
                    VulnerabilityCounts::default(),
                )
                .unwrap(),
            ),
            result: ScoreResult {
                total_score: score,
                grade,
                breakdown: None,
            },
            banner,
        }
    }

    fn response(min_grade: Option<Grade>) -> ScoreResponse {
        ScoreResponse {
            package: scored("@hapi/hapi", 50, Grade::C, Some(Banner::Fail)),
            dependencies: vec![
                scored("@hapi/boom", 85, Grade::A, None),
                scored("@hapi/hoek", 12, Grade::E, Some(Banner::Warn)),
            ],
            grade_distribution: GradeDistribution::from_grades(vec![Grade::A, Grade::E]),
            metadata: ReportGenerator::generate_default_metadata(),
            min_grade,
        }
    }

    #[test]
    fn test_build_package_view() {
        let model = ScoreReadModelBuilder::build(&response(None));
        assert_eq!(model.package.name, "@hapi/hapi");
        assert_eq!(model.package.grade, "C");
        assert_eq!(model.package.grade_class, "score-c");
        assert_eq!(
            model.package.banner,
            Some(BannerView {
                class: "fail".to_string(),
                icon: "❌".to_string(),
            })
        );
        assert_eq!(model.package.direct_vulnerabilities.high, 1);
        assert_eq!(model.package.immediate_dependency_count, 0);
        assert!(model.package.breakdown.is_none());
        assert!(model.min_grade.is_none());
    }

    #[test]
    fn test_build_dependency_rows_in_order() {
        let model = ScoreReadModelBuilder::build(&response(None));
        let names: Vec<_> = model.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["@hapi/boom", "@hapi/hoek"]);
        assert_eq!(model.dependencies[1].grade_class, "score-e");
        let banner = model.dependencies[1].banner.as_ref().unwrap();
        assert_eq!(banner.class, "warn");
        assert_eq!(banner.icon, "⚠️");
        assert_eq!(model.dependencies[0].banner, None);
    }

    #[test]
    fn test_build_distribution_lists_all_grades() {
        let model = ScoreReadModelBuilder::build(&response(None));
        let grades: Vec<_> = model
            .grade_distribution
            .iter()
            .map(|g| (g.grade.as_str(), g.count))
            .collect();
        assert_eq!(grades, vec![("A", 1), ("B", 0), ("C", 0), ("D", 0), ("E", 1)]);
    }

    #[test]
    fn test_build_min_grade_gate() {
        let failing = ScoreReadModelBuilder::build(&response(Some(Grade::B)));
        assert_eq!(
            failing.min_grade,
            Some(MinGradeView {
                min_grade: "B".to_string(),
                passed: false
            })
        );

        let passing = ScoreReadModelBuilder::build(&response(Some(Grade::C)));
        assert!(passing.min_grade.unwrap().passed);
    }
}
