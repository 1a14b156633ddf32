use thiserror::Error;

/// Poll validation errors
///
/// Toggling a vote never errors: an unknown poll or option means another
/// client deleted it first, handled as a silent no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("poll question must not be empty")]
    EmptyQuestion,

    #[error("a poll needs at least 2 options, got {0}")]
    NotEnoughOptions(usize),
}

impl From<PollError> for shared::AppError {
    fn from(err: PollError) -> Self {
        shared::AppError::validation(err.to_string())
    }
}
