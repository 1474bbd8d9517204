/// Type alias for Result with anyhow::Error as the error type.
/// Domain errors ([`crate::shared::error::ScoreError`]) convert into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
