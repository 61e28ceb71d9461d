//! System crontab store shelling out to the OS `crontab` utility.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use cronduty_protocols::{CrontabSnapshot, StoreError};

use crate::store::CronStore;

/// Message the OS prints when the user has no crontab installed yet.
const NO_CRONTAB_MARKER: &str = "no crontab for";

/// Crontab store backed by the `crontab` and `sh` utilities.
///
/// Listing runs `crontab -l`; installation stages the replacement crontab in
/// a temporary holding file and submits it with `crontab <file>`.
#[derive(Debug, Clone)]
pub struct SystemCronStore {
    crontab_bin: String,
}

impl SystemCronStore {
    pub fn new() -> Self {
        Self {
            crontab_bin: "crontab".to_string(),
        }
    }

    /// Use a different `crontab` executable. Intended for tests.
    pub fn with_crontab_bin(mut self, crontab_bin: impl Into<String>) -> Self {
        self.crontab_bin = crontab_bin.into();
        self
    }
}

impl Default for SystemCronStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape embedded double quotes for interpolation into a double-quoted
/// shell word. Other metacharacters (`$`, backtick, backslash) pass through
/// unescaped; a command containing them can still corrupt the staged line.
fn escape_double_quotes(line: &str) -> String {
    line.replace('"', "\\\"")
}

#[async_trait]
impl CronStore for SystemCronStore {
    async fn list_entries(&self) -> Result<CrontabSnapshot, StoreError> {
        let output = Command::new(&self.crontab_bin)
            .arg("-l")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("running {} -l: {}", self.crontab_bin, e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains(NO_CRONTAB_MARKER) {
            tracing::debug!("no crontab installed for this user, treating as empty");
            return Ok(CrontabSnapshot::empty());
        }
        if !output.status.success() {
            return Err(StoreError::Unavailable(stderr.trim().to_string()));
        }

        let snapshot = CrontabSnapshot::new(String::from_utf8_lossy(&output.stdout));
        tracing::debug!(count = snapshot.entries().len(), "listed crontab entries");
        Ok(snapshot)
    }

    async fn install_appended(&self, existing: &str, new_line: &str) -> Result<(), StoreError> {
        // Stage the replacement crontab in a temporary holding file.
        let holding = tempfile::Builder::new()
            .prefix("cronduty-")
            .suffix(".crontab")
            .tempfile()
            .map_err(|e| StoreError::WriteFailed(format!("creating holding file: {}", e)))?;

        let mut text = existing.to_string();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        tokio::fs::write(holding.path(), &text)
            .await
            .map_err(|e| StoreError::WriteFailed(format!("staging existing entries: {}", e)))?;

        // Append the new line through the shell, as `echo "..." >> file`.
        // Only embedded double quotes are escaped.
        let append = format!(
            "echo \"{}\" >> \"{}\"",
            escape_double_quotes(new_line),
            holding.path().display()
        );
        let appended = Command::new("sh")
            .arg("-c")
            .arg(&append)
            .output()
            .await
            .map_err(|e| StoreError::WriteFailed(format!("staging new entry: {}", e)))?;
        if !appended.status.success() {
            return Err(StoreError::WriteFailed(format!(
                "staging new entry: {}",
                String::from_utf8_lossy(&appended.stderr).trim()
            )));
        }

        // Submit the holding file as the new crontab.
        let submitted = match Command::new(&self.crontab_bin)
            .arg(holding.path())
            .output()
            .await
        {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(StoreError::WriteFailed(format!(
                "crontab install: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
            Err(e) => Err(StoreError::WriteFailed(format!(
                "running {} install: {}",
                self.crontab_bin, e
            ))),
        };

        // Release the holding file. A failed removal is itself a write
        // failure, but never hides the submission outcome.
        match holding.close() {
            Ok(()) => submitted,
            Err(e) if submitted.is_err() => {
                tracing::warn!(error = %e, "leaked holding file after failed install");
                submitted
            }
            Err(e) => Err(StoreError::WriteFailed(format!(
                "removing holding file: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
