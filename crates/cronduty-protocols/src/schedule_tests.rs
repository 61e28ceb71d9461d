use super::*;

#[test]
fn test_entry_to_line() {
    let entry = CrontabEntry::new("* * * * *", "echo Hello World!");
    assert_eq!(entry.to_line(), "* * * * * echo Hello World!");
}

#[test]
fn test_entry_to_line_no_normalization() {
    // Whitespace inside the fields is kept verbatim.
    let entry = CrontabEntry::new("*  *  * * *", "echo  spaced");
    assert_eq!(entry.to_line(), "*  *  * * * echo  spaced");
}

#[test]
fn test_entry_equality() {
    let a = CrontabEntry::new("* * * * *", "echo hi");
    let b = CrontabEntry::new("* * * * *", "echo hi");
    let c = CrontabEntry::new("0 * * * *", "echo hi");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_snapshot_entries_drop_blank_lines() {
    let snapshot = CrontabSnapshot::new("0 1 * * * a\n\n   \n0 2 * * * b\n");
    assert_eq!(snapshot.entries(), vec!["0 1 * * * a", "0 2 * * * b"]);
}

#[test]
fn test_snapshot_raw_text_is_verbatim() {
    let raw = "0 1 * * * a\n\n0 2 * * * b\n";
    assert_eq!(CrontabSnapshot::new(raw).raw_text(), raw);
}

#[test]
fn test_snapshot_keeps_entry_lines_verbatim() {
    let snapshot = CrontabSnapshot::new("  0 0 * * * backup\n");
    assert_eq!(snapshot.entries(), vec!["  0 0 * * * backup"]);
}

#[test]
fn test_snapshot_contains_exact_match_only() {
    let snapshot = CrontabSnapshot::new("0 1 * * * echo hi\n");
    assert!(snapshot.contains("0 1 * * * echo hi"));
    assert!(!snapshot.contains("0 1 * * *  echo hi"));
}

#[test]
fn test_snapshot_empty() {
    let snapshot = CrontabSnapshot::empty();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.raw_text(), "");
    assert!(snapshot.entries().is_empty());
}

#[test]
fn test_default_cron_expression() {
    assert_eq!(DEFAULT_CRON_EXPRESSION, "00 00 * * *");
}

#[test]
fn test_request_builder() {
    let request = ScheduleRequest::new("echo hi").with_cron_expression("*/5 * * * *");
    assert_eq!(request.command.as_deref(), Some("echo hi"));
    assert_eq!(request.cron_expression.as_deref(), Some("*/5 * * * *"));
}

#[test]
fn test_request_deserialize_missing_fields() {
    let request: ScheduleRequest = serde_json::from_str("{}").unwrap();
    assert!(request.command.is_none());
    assert!(request.cron_expression.is_none());
}

#[test]
fn test_request_deserialize_full() {
    let request: ScheduleRequest = serde_json::from_str(
        r#"{"command": "echo Hello World!", "cron_expression": "* * * * *"}"#,
    )
    .unwrap();
    assert_eq!(request.command.as_deref(), Some("echo Hello World!"));
    assert_eq!(request.cron_expression.as_deref(), Some("* * * * *"));
}

#[test]
fn test_success_result() {
    let outcome = ScheduleOutcome::Success(CrontabEntry::new("* * * * *", "echo Hello World!"));
    let result = outcome.into_result();
    assert_eq!(result.message, "Process scheduled successfully.");
    assert_eq!(
        result.crontab_entry.as_deref(),
        Some("* * * * * echo Hello World!")
    );
}

#[test]
fn test_conflict_result() {
    let result = ScheduleOutcome::Conflict.into_result();
    assert_eq!(result.message, "Cron job already exists for same schedule.");
    assert!(result.crontab_entry.is_none());
}

#[test]
fn test_validation_failed_result_names_field() {
    let result = ScheduleOutcome::ValidationFailed("command").into_result();
    assert_eq!(result.message, "Required field: 'command'");
    assert!(result.crontab_entry.is_none());
}

#[test]
fn test_write_failed_result() {
    let result = ScheduleOutcome::WriteFailed.into_result();
    assert_eq!(result.message, "Failed scheduling process.");
    assert!(result.crontab_entry.is_none());
}

#[test]
fn test_result_serialization_omits_absent_entry() {
    let result = ScheduleOutcome::Conflict.into_result();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("crontab_entry").is_none());
    assert_eq!(
        json.get("message").and_then(|m| m.as_str()),
        Some("Cron job already exists for same schedule.")
    );
}

#[test]
fn test_result_serialization_includes_entry_on_success() {
    let outcome = ScheduleOutcome::Success(CrontabEntry::new("00 00 * * *", "backup"));
    let json = serde_json::to_value(outcome.into_result()).unwrap();
    assert_eq!(
        json.get("crontab_entry").and_then(|e| e.as_str()),
        Some("00 00 * * * backup")
    );
}
