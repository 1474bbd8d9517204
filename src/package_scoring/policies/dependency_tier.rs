/// DependencyTier policy for the transitive dependency count term
///
/// Tiers are mutually exclusive and checked in this order; the first match wins:
/// 1. `≤ 5` → +20
/// 2. `≤ 20` → +10
/// 3. `≥ 500` → −20
/// 4. `≥ 100` → −10
///
/// Counts in 21..=99 add no term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyTier {
    Tiny,
    Small,
    Huge,
    Large,
}

impl DependencyTier {
    /// Returns the tier matching `all_dependency_count`, or `None` for the neutral band
    pub fn classify(all_dependency_count: u64) -> Option<Self> {
        if all_dependency_count <= 5 {
            Some(DependencyTier::Tiny)
        } else if all_dependency_count <= 20 {
            Some(DependencyTier::Small)
        } else if all_dependency_count >= 500 {
            Some(DependencyTier::Huge)
        } else if all_dependency_count >= 100 {
            Some(DependencyTier::Large)
        } else {
            None
        }
    }

    pub fn points(&self) -> i64 {
        match self {
            DependencyTier::Tiny => 20,
            DependencyTier::Small => 10,
            DependencyTier::Huge => -20,
            DependencyTier::Large => -10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DependencyTier::Tiny => "All dependencies ≤ 5",
            DependencyTier::Small => "All dependencies ≤ 20",
            DependencyTier::Huge => "All dependencies ≥ 500",
            DependencyTier::Large => "All dependencies ≥ 100",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(DependencyTier::classify(0), Some(DependencyTier::Tiny));
        assert_eq!(DependencyTier::classify(5), Some(DependencyTier::Tiny));
        assert_eq!(DependencyTier::classify(6), Some(DependencyTier::Small));
        assert_eq!(DependencyTier::classify(20), Some(DependencyTier::Small));
        assert_eq!(DependencyTier::classify(21), None);
        assert_eq!(DependencyTier::classify(99), None);
        assert_eq!(DependencyTier::classify(100), Some(DependencyTier::Large));
        assert_eq!(DependencyTier::classify(499), Some(DependencyTier::Large));
        assert_eq!(DependencyTier::classify(500), Some(DependencyTier::Huge));
        assert_eq!(DependencyTier::classify(u64::MAX), Some(DependencyTier::Huge));
    }

    #[test]
    fn test_points() {
        assert_eq!(DependencyTier::Tiny.points(), 20);
        assert_eq!(DependencyTier::Small.points(), 10);
        assert_eq!(DependencyTier::Large.points(), -10);
        assert_eq!(DependencyTier::Huge.points(), -20);
    }
}
