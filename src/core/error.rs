use thiserror::Error;

/// Errors that can occur while building billing data or computing a statement.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatementError {
    /// A performance references a play identifier absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// A play category tag outside the recognized set was encountered.
    #[error("unknown play type: {0}")]
    UnknownPlayType(String),

    /// Builder encountered invalid or conflicting input.
    #[error("builder error: {0}")]
    Builder(String),
}
