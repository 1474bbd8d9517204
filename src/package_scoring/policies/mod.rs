mod dependency_tier;
mod vulnerability_penalty;

pub use dependency_tier::DependencyTier;
pub use vulnerability_penalty::{VulnerabilityPenalty, VulnerabilityScope};
