// error.rs - Error types for the simulation engine

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    #[error("Must be between 20 and 5000")]
    OutOfRange(i64),

    #[error("Must be between 20 and 5000")]
    Blank,

    #[error("Not a number: {0:?}")]
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Engine task has stopped")]
    Closed,
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for EngineError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        EngineError::Closed
    }
}
