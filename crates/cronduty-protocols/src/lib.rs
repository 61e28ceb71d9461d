//! # Cronduty Protocols
//!
//! Contract types and errors for the cronduty scheduling service.
//! Contains only the request/result shapes and the store error taxonomy -
//! no implementations.
//!
//! ## Core Types
//!
//! - [`ScheduleRequest`] / [`ScheduleResult`] - the one-call contract
//! - [`ScheduleOutcome`] - explicit variant for each terminal state
//! - [`CrontabEntry`] - a single schedule+command crontab line
//! - [`CrontabSnapshot`] - one fresh read of the installed crontab
//! - [`ProcessDescriptor`] - registration metadata for hosting frameworks
//! - [`StoreError`] - failures of the crontab access layer

pub mod descriptor;
pub mod error;
pub mod schedule;

pub use descriptor::ProcessDescriptor;
pub use error::StoreError;
pub use schedule::{
    CrontabEntry, CrontabSnapshot, ScheduleOutcome, ScheduleRequest, ScheduleResult,
    DEFAULT_CRON_EXPRESSION,
};
