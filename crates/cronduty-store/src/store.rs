//! Crontab store trait.

use async_trait::async_trait;

use cronduty_protocols::{CrontabSnapshot, StoreError};

/// Sole interface to the operating system's crontab mechanism.
///
/// Implementations mutate user-wide persistent scheduler state and retain no
/// in-memory state between calls: every listing is a fresh read, since any
/// other process may have rewritten the crontab in the meantime.
#[async_trait]
pub trait CronStore: Send + Sync {
    /// Read the currently installed crontab as a fresh snapshot.
    ///
    /// "No crontab for this user" is a valid empty snapshot, not an error;
    /// only a listing that cannot run, or fails for any other reason, is
    /// [`StoreError::Unavailable`].
    async fn list_entries(&self) -> Result<CrontabSnapshot, StoreError>;

    /// Replace the crontab with `existing` plus `new_line` appended.
    ///
    /// `existing` is the verbatim listing text, blank lines and all, so the
    /// rewrite reproduces the prior file exactly. The entire text is taken
    /// rather than a delta: the underlying mechanism offers no line-level
    /// edit, only read-all and rewrite-all.
    async fn install_appended(&self, existing: &str, new_line: &str) -> Result<(), StoreError>;
}
