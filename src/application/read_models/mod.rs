//! Read models for rendering score reports
//!
//! View-optimized structs shared by the Markdown and JSON formatters.

mod score_read_model;
mod score_read_model_builder;

pub use score_read_model::{
    BannerView, BreakdownRowView, DependencyRowView, GradeCountView, MetadataView, MinGradeView,
    PackageScoreView, ScoreReadModel, VulnerabilityCountsView,
};
pub use score_read_model_builder::ScoreReadModelBuilder;
