pub mod grade;
pub mod package;
pub mod package_report;
pub mod report_metadata;
pub mod score_input;
pub mod score_result;
pub mod severity;
pub mod vulnerability_counts;

pub use grade::Grade;
pub use package::{Package, PackageName, Version};
pub use package_report::{PackageReport, ReportDetails};
pub use report_metadata::ReportMetadata;
pub use score_input::PackageScoreInput;
pub use score_result::{BreakdownEntry, ScoreResult, TOTAL_LABEL};
pub use severity::Severity;
pub use vulnerability_counts::VulnerabilityCounts;
