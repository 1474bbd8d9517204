/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod output_format;
mod score_request;
mod score_response;

pub use output_format::OutputFormat;
pub use score_request::ScoreRequest;
pub use score_response::{ScoreResponse, ScoredPackage};
