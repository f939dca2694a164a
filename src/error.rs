use thiserror::Error;

/// Convenience result type for execution engine setup.
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// Error type returned when configuring an [`crate::execution::ExecutionEngine`].
///
/// Callback failures are never wrapped in this type; they are returned to the caller as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// The provided [`crate::execution::ExecutionOptions`] cannot be used.
    #[error("invalid execution options: {message}")]
    InvalidOptions { message: String },
}
