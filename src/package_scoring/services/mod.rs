mod grade_distribution;
mod report_aggregator;
mod report_generator;
mod score_engine;
mod severity_banner;

pub use grade_distribution::GradeDistribution;
pub use report_aggregator::ReportAggregator;
pub use report_generator::ReportGenerator;
pub use score_engine::{ScoreEngine, FRESHNESS_LABEL};
pub use severity_banner::{Banner, SeverityBanner};
