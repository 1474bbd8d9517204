//! depscore - risk scoring for npm packages
//!
//! This library turns a dependency-scan package report (freshness score,
//! transitive dependency count, direct and indirect vulnerability counts)
//! into a numeric score and an A-E grade, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`package_scoring`): score engine, banner, aggregation
//! - **Application Layer** (`application`): use case, DTOs, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file and HTTP report sources, formatters
//! - **Shared** (`shared`): error types and file security checks
//!
//! # Example
//!
//! ```
//! use depscore::prelude::*;
//!
//! let input = PackageScoreInput::new(
//!     0.77,
//!     12,
//!     VulnerabilityCounts::new(0, 2, 1, 5),
//!     VulnerabilityCounts::new(3, 0, 0, 0),
//! )
//! .unwrap();
//!
//! let result = ScoreEngine::compute_score(&input, true);
//! assert_eq!(result.total_score, 62);
//! assert_eq!(result.grade, Grade::B);
//! assert_eq!(ScoreEngine::grade_for(result.total_score), Grade::B);
//! ```

pub mod adapters;
pub mod application;
pub mod package_scoring;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::ApiReportClient;
    pub use crate::adapters::outbound::wire_format::parse_package_report;
    pub use crate::application::dto::{OutputFormat, ScoreRequest, ScoreResponse, ScoredPackage};
    pub use crate::application::read_models::{ScoreReadModel, ScoreReadModelBuilder};
    pub use crate::application::use_cases::ScorePackageUseCase;
    pub use crate::package_scoring::domain::{
        BreakdownEntry, Grade, Package, PackageReport, PackageScoreInput, ScoreResult, Severity,
        VulnerabilityCounts,
    };
    pub use crate::package_scoring::services::{
        Banner, GradeDistribution, ReportAggregator, ScoreEngine, SeverityBanner,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportProvider, ScoreFormatter,
    };
    pub use crate::shared::error::{ExitCode, ScoreError};
    pub use crate::shared::Result;
}
