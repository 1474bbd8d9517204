use crate::application::read_models::ScoreReadModel;
use crate::shared::Result;

/// ScoreFormatter port for rendering a scored report
///
/// This port abstracts the output format (Markdown, JSON).
pub trait ScoreFormatter {
    /// Formats the scored report
    ///
    /// # Arguments
    /// * `model` - Read model with the package score, dependency rows,
    ///   grade distribution and optional breakdown
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ScoreReadModel) -> Result<String>;
}
