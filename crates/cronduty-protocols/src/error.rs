//! Crontab store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The listing command could not run or reported a failure other than
    /// the valid "no crontab for this user" empty state.
    #[error("Crontab listing unavailable: {0}")]
    Unavailable(String),

    /// A step of the read-modify-write sequence failed: staging the holding
    /// file, submitting it, or releasing it.
    #[error("Crontab write failed: {0}")]
    WriteFailed(String),
}
