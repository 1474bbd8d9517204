use super::Severity;
use std::ops::Add;

/// Per-severity vulnerability counts for one package
///
/// A severity that was never recorded counts as zero; that is the default
/// for counts missing from a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VulnerabilityCounts {
    critical: u64,
    high: u64,
    medium: u64,
    low: u64,
}

impl VulnerabilityCounts {
    pub fn new(critical: u64, high: u64, medium: u64, low: u64) -> Self {
        Self {
            critical,
            high,
            medium,
            low,
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Returns a copy with `count` set for `severity`
    pub fn with(mut self, severity: Severity, count: u64) -> Self {
        *self.slot(severity) = count;
        self
    }

    /// Adds `count` to the tally for `severity`, saturating on overflow
    pub fn record(&mut self, severity: Severity, count: u64) {
        let slot = self.slot(severity);
        *slot = slot.saturating_add(count);
    }

    pub fn total(&self) -> u64 {
        Severity::ALL
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(self.get(*s)))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn slot(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }
}

impl Add for VulnerabilityCounts {
    type Output = VulnerabilityCounts;

    fn add(mut self, rhs: VulnerabilityCounts) -> Self::Output {
        for severity in Severity::ALL {
            self.record(severity, rhs.get(severity));
        }
        self
    }
}

impl FromIterator<(Severity, u64)> for VulnerabilityCounts {
    fn from_iter<I: IntoIterator<Item = (Severity, u64)>>(iter: I) -> Self {
        let mut counts = VulnerabilityCounts::default();
        for (severity, count) in iter {
            counts.record(severity, count);
        }
        counts
    }
}
