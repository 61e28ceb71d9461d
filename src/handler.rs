//! Schedule request handling.

use std::sync::Arc;

use cronduty_protocols::{
    CrontabEntry, ProcessDescriptor, ScheduleOutcome, ScheduleRequest, ScheduleResult,
    DEFAULT_CRON_EXPRESSION,
};
use cronduty_store::{CronStore, SystemCronStore};

/// Validates input, detects duplicates, and orchestrates the crontab write.
///
/// The duplicate check and the write are not atomic: two concurrent requests
/// for the same schedule+command can both pass the check and install the
/// line twice. The crontab mechanism offers no compare-and-swap; callers
/// needing that guarantee must serialize [`ScheduleHandler::schedule`] calls
/// per user themselves.
pub struct ScheduleHandler {
    descriptor: ProcessDescriptor,
    store: Arc<dyn CronStore>,
}

impl ScheduleHandler {
    pub fn new(store: Arc<dyn CronStore>) -> Self {
        let inputs_schema = serde_json::json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "Command to run using crontab"
                },
                "cron_expression": {
                    "type": "string",
                    "description": "Optional cron expression for the periodic job. If not provided, the job will run every day at midnight (UTC)."
                }
            },
            "required": ["command"]
        });
        let outputs_schema = serde_json::json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Job scheduling status"
                },
                "crontab_entry": {
                    "type": "string",
                    "description": "The installed crontab line, present only on success"
                }
            },
            "required": ["message"]
        });

        Self {
            descriptor: ProcessDescriptor::new(
                "schedule",
                "Schedule",
                "Registers a periodic job in the per-user crontab",
            )
            .with_inputs_schema(inputs_schema)
            .with_outputs_schema(outputs_schema),
            store,
        }
    }

    /// Handler backed by the OS crontab utility.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemCronStore::new()))
    }

    /// Registration metadata for hosting frameworks.
    pub fn descriptor(&self) -> &ProcessDescriptor {
        &self.descriptor
    }

    /// Register `"{cron_expression} {command}"` in the crontab unless an
    /// identical line is already present.
    ///
    /// Every failure path is normalized into one of the four
    /// [`ScheduleResult`] message shapes; full detail goes to the log.
    pub async fn schedule(&self, request: ScheduleRequest) -> ScheduleResult {
        self.schedule_outcome(request).await.into_result()
    }

    /// As [`ScheduleHandler::schedule`], returning the outcome variant
    /// instead of the caller-facing result shape.
    pub async fn schedule_outcome(&self, request: ScheduleRequest) -> ScheduleOutcome {
        let Some(command) = request.command.filter(|c| !c.trim().is_empty()) else {
            return ScheduleOutcome::ValidationFailed("command");
        };
        let cron_expression = request
            .cron_expression
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CRON_EXPRESSION.to_string());

        let entry = CrontabEntry::new(cron_expression, command);
        let line = entry.to_line();

        let snapshot = match self.store.list_entries().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "failed listing crontab entries");
                return ScheduleOutcome::WriteFailed;
            }
        };

        if snapshot.contains(&line) {
            tracing::debug!(entry = %line, "crontab entry already present");
            return ScheduleOutcome::Conflict;
        }

        // Rewrite from the verbatim listing so existing content, blank
        // lines included, survives byte for byte.
        match self.store.install_appended(snapshot.raw_text(), &line).await {
            Ok(()) => {
                tracing::info!(entry = %line, "crontab entry installed");
                ScheduleOutcome::Success(entry)
            }
            Err(e) => {
                tracing::error!(error = %e, entry = %line, "failed installing crontab entry");
                ScheduleOutcome::WriteFailed
            }
        }
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
