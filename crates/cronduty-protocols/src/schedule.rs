//! Scheduling request, result, and outcome types.

use serde::{Deserialize, Serialize};

/// Schedule used when the request carries no cron expression: daily at
/// midnight (UTC).
pub const DEFAULT_CRON_EXPRESSION: &str = "00 00 * * *";

/// A single crontab line: a cron expression plus the command it runs.
///
/// The serialized form is `"{schedule} {command}"` with exactly one
/// separating space. Duplicate detection compares this form verbatim; no
/// whitespace or field normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrontabEntry {
    /// Five-field cron expression, treated as an opaque token sequence.
    pub schedule: String,

    /// Shell command to run on that schedule.
    pub command: String,
}

impl CrontabEntry {
    pub fn new(schedule: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            schedule: schedule.into(),
            command: command.into(),
        }
    }

    /// The serialized crontab line.
    pub fn to_line(&self) -> String {
        format!("{} {}", self.schedule, self.command)
    }
}

/// The crontab installed for the executing user at one point in time.
///
/// Read fresh for every request and discarded after one duplicate check.
/// The listing text is kept verbatim so a later rewrite reproduces the file
/// byte for byte, blank lines included; the non-blank lines are derived from
/// it for membership tests only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrontabSnapshot {
    raw: String,
    entries: Vec<String>,
}

impl CrontabSnapshot {
    /// Build a snapshot from a verbatim `crontab -l` listing.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let entries = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self { raw, entries }
    }

    /// Snapshot of a user with no crontab installed.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// The listing text exactly as read, blank lines included.
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// The non-blank lines, kept verbatim.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Exact-string membership test against the non-blank lines.
    pub fn contains(&self, line: &str) -> bool {
        self.entries.iter().any(|entry| entry == line)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Input for the schedule operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Command to run using crontab. Required.
    #[serde(default)]
    pub command: Option<String>,

    /// Optional cron expression. Defaults to [`DEFAULT_CRON_EXPRESSION`]
    /// when absent or empty.
    #[serde(default)]
    pub cron_expression: Option<String>,
}

impl ScheduleRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            cron_expression: None,
        }
    }

    /// Set the cron expression.
    pub fn with_cron_expression(mut self, cron_expression: impl Into<String>) -> Self {
        self.cron_expression = Some(cron_expression.into());
        self
    }
}

/// Output of the schedule operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Human-readable status message.
    pub message: String,

    /// The installed crontab line. Present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crontab_entry: Option<String>,
}

/// Terminal state of one scheduling request.
///
/// Expected negative outcomes (conflict, missing input) are variants here
/// rather than errors; only crontab store faults travel as `Err` internally,
/// and the orchestration layer folds those into [`ScheduleOutcome::WriteFailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The entry was appended and the crontab installed.
    Success(CrontabEntry),

    /// An identical schedule+command line already exists; nothing written.
    Conflict,

    /// A required input field was missing or empty; the store was never
    /// consulted.
    ValidationFailed(&'static str),

    /// Listing or rewriting the crontab failed.
    WriteFailed,
}

impl ScheduleOutcome {
    /// Map the outcome to its one caller-facing result shape.
    pub fn into_result(self) -> ScheduleResult {
        match self {
            ScheduleOutcome::Success(entry) => ScheduleResult {
                message: "Process scheduled successfully.".to_string(),
                crontab_entry: Some(entry.to_line()),
            },
            ScheduleOutcome::Conflict => ScheduleResult {
                message: "Cron job already exists for same schedule.".to_string(),
                crontab_entry: None,
            },
            ScheduleOutcome::ValidationFailed(field) => ScheduleResult {
                message: format!("Required field: '{}'", field),
                crontab_entry: None,
            },
            ScheduleOutcome::WriteFailed => ScheduleResult {
                message: "Failed scheduling process.".to_string(),
                crontab_entry: None,
            },
        }
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
