use crate::package_scoring::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for score report metadata
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates metadata with the current timestamp and a fresh report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates metadata for this tool, using the compile-time crate version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("depscore", env!("CARGO_PKG_VERSION"))
    }
}
