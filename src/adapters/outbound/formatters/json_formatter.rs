use crate::application::read_models::{
    DependencyRowView, MetadataView, PackageScoreView, ScoreReadModel, VulnerabilityCountsView,
};
use crate::ports::outbound::ScoreFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreDocument<'a> {
    metadata: Metadata<'a>,
    package: PackageScore<'a>,
    dependencies: Vec<DependencyScore<'a>>,
    /// Keyed by grade letter; `BTreeMap` keeps A..E order
    grade_distribution: BTreeMap<&'a str, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_grade: Option<MinGrade<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    report_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageScore<'a> {
    name: &'a str,
    version: &'a str,
    total_score: i64,
    grade: &'a str,
    grade_class: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<&'a str>,
    freshness_score: f64,
    all_dependency_count: u64,
    immediate_dependency_count: u64,
    direct_vulnerability_counts: Counts,
    indirect_vulnerability_counts: Counts,
    #[serde(skip_serializing_if = "Option::is_none")]
    authors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contributors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scoring_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<BreakdownTerm<'a>>>,
}

#[derive(Debug, Serialize)]
struct Counts {
    critical: u64,
    high: u64,
    medium: u64,
    low: u64,
}

#[derive(Debug, Serialize)]
struct BreakdownTerm<'a> {
    label: &'a str,
    delta: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencyScore<'a> {
    name: &'a str,
    version: &'a str,
    total_score: i64,
    grade: &'a str,
    grade_class: &'a str,
    all_dependency_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct MinGrade<'a> {
    grade: &'a str,
    passed: bool,
}

/// JsonFormatter adapter for machine-readable score reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn metadata(view: &MetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &view.timestamp,
            tool: Tool {
                name: &view.tool_name,
                version: &view.tool_version,
            },
            report_id: &view.report_id,
        }
    }

    fn counts(view: &VulnerabilityCountsView) -> Counts {
        Counts {
            critical: view.critical,
            high: view.high,
            medium: view.medium,
            low: view.low,
        }
    }

    fn package(view: &PackageScoreView) -> PackageScore<'_> {
        PackageScore {
            name: &view.name,
            version: &view.version,
            total_score: view.total_score,
            grade: &view.grade,
            grade_class: &view.grade_class,
            banner: view.banner.as_ref().map(|b| b.class.as_str()),
            freshness_score: view.freshness_score,
            all_dependency_count: view.all_dependency_count,
            immediate_dependency_count: view.immediate_dependency_count,
            direct_vulnerability_counts: Self::counts(&view.direct_vulnerabilities),
            indirect_vulnerability_counts: Self::counts(&view.indirect_vulnerabilities),
            authors: view.authors,
            contributors: view.contributors,
            scoring_date: view.scoring_date.as_deref(),
            release_date: view.release_date.as_deref(),
            breakdown: view.breakdown.as_ref().map(|rows| {
                rows.iter()
                    .map(|row| BreakdownTerm {
                        label: &row.label,
                        delta: row.delta,
                    })
                    .collect()
            }),
        }
    }

    fn dependency(view: &DependencyRowView) -> DependencyScore<'_> {
        DependencyScore {
            name: &view.name,
            version: &view.version,
            total_score: view.total_score,
            grade: &view.grade,
            grade_class: &view.grade_class,
            all_dependency_count: view.all_dependency_count,
            banner: view.banner.as_ref().map(|b| b.class.as_str()),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreFormatter for JsonFormatter {
    fn format(&self, model: &ScoreReadModel) -> Result<String> {
        let document = ScoreDocument {
            metadata: Self::metadata(&model.metadata),
            package: Self::package(&model.package),
            dependencies: model.dependencies.iter().map(Self::dependency).collect(),
            grade_distribution: model
                .grade_distribution
                .iter()
                .map(|bucket| (bucket.grade.as_str(), bucket.count))
                .collect(),
            min_grade: model.min_grade.as_ref().map(|gate| MinGrade {
                grade: &gate.min_grade,
                passed: gate.passed,
            }),
        };

        let json = serde_json::to_string_pretty(&document)?;
        Ok(json)
    }
}
