/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, scoring API, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_provider;

pub use formatter::ScoreFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_provider::ReportProvider;
