/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: report sources
/// (file, HTTP), formatters, presenters and the stderr progress reporter.
pub mod outbound;
