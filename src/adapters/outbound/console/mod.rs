/// Console adapters for stderr output
mod grade_summary;
mod progress_reporter;

pub use grade_summary::{format_grade_summary, should_use_colors};
pub use progress_reporter::StderrProgressReporter;
