/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are raised as `DepInfoError` and converted on propagation.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
