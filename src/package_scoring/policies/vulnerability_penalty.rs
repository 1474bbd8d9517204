use crate::package_scoring::domain::Severity;

/// Whether a vulnerability affects the package itself or one of its dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VulnerabilityScope {
    Direct,
    Indirect,
}

/// VulnerabilityPenalty policy
///
/// A severity is penalized once when its count is non-zero; the count itself
/// does not scale the penalty. Low severity never carries a penalty.
///
/// | Severity | Direct | Indirect |
/// |----------|--------|----------|
/// | critical | −20    | −10      |
/// | high     | −10    | −7       |
/// | medium   | −5     | −3       |
pub struct VulnerabilityPenalty;

impl VulnerabilityPenalty {
    /// Severities that carry a penalty, in the order they are applied
    pub const PENALIZED: [Severity; 3] = [Severity::Critical, Severity::High, Severity::Medium];

    pub fn points(scope: VulnerabilityScope, severity: Severity) -> Option<i64> {
        match (scope, severity) {
            (_, Severity::Low) => None,
            (VulnerabilityScope::Direct, Severity::Critical) => Some(-20),
            (VulnerabilityScope::Direct, Severity::High) => Some(-10),
            (VulnerabilityScope::Direct, Severity::Medium) => Some(-5),
            (VulnerabilityScope::Indirect, Severity::Critical) => Some(-10),
            (VulnerabilityScope::Indirect, Severity::High) => Some(-7),
            (VulnerabilityScope::Indirect, Severity::Medium) => Some(-3),
        }
    }

    pub fn label(scope: VulnerabilityScope, severity: Severity) -> String {
        match scope {
            VulnerabilityScope::Direct => {
                format!("{} vulnerabilities", severity.capitalized())
            }
            VulnerabilityScope::Indirect => {
                format!("{} vulnerabilities in dependencies", severity.capitalized())
            }
        }
    }
}
