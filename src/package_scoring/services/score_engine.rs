use crate::package_scoring::domain::{
    BreakdownEntry, Grade, PackageScoreInput, ScoreResult, VulnerabilityCounts, TOTAL_LABEL,
};
use crate::package_scoring::policies::{DependencyTier, VulnerabilityPenalty, VulnerabilityScope};

/// Label of the freshness base term
pub const FRESHNESS_LABEL: &str = "Freshness score × 100";

/// ScoreEngine service computing package risk scores
///
/// Pure and stateless: the same input always yields the same result, so it
/// is applied independently to a top-level package and to every dependency row.
pub struct ScoreEngine;

impl ScoreEngine {
    /// Scores one package
    ///
    /// Terms are applied in a fixed order: freshness base, dependency-count
    /// tier, direct vulnerability penalties, indirect vulnerability penalties.
    /// The order only matters for the breakdown; the total is their sum.
    ///
    /// # Arguments
    /// * `input` - Normalized package score input
    /// * `want_breakdown` - Whether to record each applied term
    ///
    /// # Returns
    /// ScoreResult with total, grade and (if requested) a breakdown ending in `("Total", total)`
    pub fn compute_score(input: &PackageScoreInput, want_breakdown: bool) -> ScoreResult {
        let mut terms: Vec<BreakdownEntry> = Vec::new();

        terms.push(BreakdownEntry::new(
            FRESHNESS_LABEL,
            Self::freshness_points(input.freshness_score()),
        ));

        if let Some(tier) = DependencyTier::classify(input.all_dependency_count()) {
            terms.push(BreakdownEntry::new(tier.label(), tier.points()));
        }

        Self::push_penalties(&mut terms, VulnerabilityScope::Direct, input.direct_vulnerabilities());
        Self::push_penalties(
            &mut terms,
            VulnerabilityScope::Indirect,
            input.indirect_vulnerabilities(),
        );

        let total_score = terms
            .iter()
            .fold(0i64, |acc, term| acc.saturating_add(term.delta));

        let breakdown = want_breakdown.then(|| {
            terms.push(BreakdownEntry::new(TOTAL_LABEL, total_score));
            terms
        });

        ScoreResult {
            total_score,
            grade: Self::grade_for(total_score),
            breakdown,
        }
    }

    /// Maps a total score to its letter grade
    ///
    /// `≥80` A, `≥60` B, `≥40` C, `≥20` D, anything lower E.
    pub fn grade_for(total_score: i64) -> Grade {
        if total_score >= 80 {
            Grade::A
        } else if total_score >= 60 {
            Grade::B
        } else if total_score >= 40 {
            Grade::C
        } else if total_score >= 20 {
            Grade::D
        } else {
            Grade::E
        }
    }

    /// `round(freshness * 100)`, rounding half away from zero.
    /// The float-to-int cast truncates toward zero and saturates at the i64 bounds.
    fn freshness_points(freshness_score: f64) -> i64 {
        (freshness_score * 100.0).round() as i64
    }

    fn push_penalties(
        terms: &mut Vec<BreakdownEntry>,
        scope: VulnerabilityScope,
        counts: &VulnerabilityCounts,
    ) {
        for severity in VulnerabilityPenalty::PENALIZED {
            if counts.get(severity) == 0 {
                continue;
            }
            if let Some(points) = VulnerabilityPenalty::points(scope, severity) {
                terms.push(BreakdownEntry::new(
                    VulnerabilityPenalty::label(scope, severity),
                    points,
                ));
            }
        }
    }
}
