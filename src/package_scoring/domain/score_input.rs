use super::VulnerabilityCounts;
use crate::shared::error::ScoreError;

/// Everything the score engine needs to know about one package version
///
/// Built by the input provider after normalizing the report wire format.
/// `freshness_score` is nominally in [0, 1]; values outside that range are
/// kept and simply produce an out-of-range base term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageScoreInput {
    freshness_score: f64,
    all_dependency_count: u64,
    direct_vulnerabilities: VulnerabilityCounts,
    indirect_vulnerabilities: VulnerabilityCounts,
}

impl PackageScoreInput {
    /// # Errors
    /// Returns [`ScoreError::InvalidInput`] when `freshness_score` is NaN or infinite.
    pub fn new(
        freshness_score: f64,
        all_dependency_count: u64,
        direct_vulnerabilities: VulnerabilityCounts,
        indirect_vulnerabilities: VulnerabilityCounts,
    ) -> Result<Self, ScoreError> {
        if !freshness_score.is_finite() {
            return Err(ScoreError::invalid_input(
                "freshnessScore",
                format!("must be a finite number, got {}", freshness_score),
            ));
        }

        Ok(Self {
            freshness_score,
            all_dependency_count,
            direct_vulnerabilities,
            indirect_vulnerabilities,
        })
    }

    pub fn freshness_score(&self) -> f64 {
        self.freshness_score
    }

    pub fn all_dependency_count(&self) -> u64 {
        self.all_dependency_count
    }

    pub fn direct_vulnerabilities(&self) -> &VulnerabilityCounts {
        &self.direct_vulnerabilities
    }

    pub fn indirect_vulnerabilities(&self) -> &VulnerabilityCounts {
        &self.indirect_vulnerabilities
    }
}
