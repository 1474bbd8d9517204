use crate::package_scoring::domain::{PackageScoreInput, Severity, VulnerabilityCounts};
use std::fmt;

/// Display-only alert level derived from raw vulnerability counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Fail,
    Warn,
    Info,
}

impl Banner {
    /// Lower-case name used as the banner's CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            Banner::Fail => "fail",
            Banner::Warn => "warn",
            Banner::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Banner::Fail => "❌",
            Banner::Warn => "⚠️",
            Banner::Info => "ℹ️",
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

/// SeverityBanner service
///
/// Classifies vulnerability counts independently of the numeric score:
/// any critical or high ⇒ fail, else any medium ⇒ warn, else any low ⇒ info.
pub struct SeverityBanner;

impl SeverityBanner {
    pub fn classify(counts: &VulnerabilityCounts) -> Option<Banner> {
        if counts.get(Severity::Critical) > 0 || counts.get(Severity::High) > 0 {
            Some(Banner::Fail)
        } else if counts.get(Severity::Medium) > 0 {
            Some(Banner::Warn)
        } else if counts.get(Severity::Low) > 0 {
            Some(Banner::Info)
        } else {
            None
        }
    }

    /// Classifies a package over its direct and indirect counts combined
    pub fn classify_input(input: &PackageScoreInput) -> Option<Banner> {
        Self::classify(&(*input.direct_vulnerabilities() + *input.indirect_vulnerabilities()))
    }
}
