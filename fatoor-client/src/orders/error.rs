use thiserror::Error;

/// Ledger errors
///
/// Only genuine validation failures are errors. A remove/note against a
/// line that no longer exists is a silent no-op: with several clients
/// writing over each other, stale references are expected, not exceptional.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("order is locked")]
    Locked,

    #[error("no employee selected for this order")]
    MissingUser,
}

impl From<LedgerError> for shared::AppError {
    fn from(err: LedgerError) -> Self {
        shared::AppError::validation(err.to_string())
    }
}
