//! # Cronduty
//!
//! Idempotent crontab scheduling service core: a single synchronous
//! operation that registers a shell command with an optional cron schedule
//! in the per-user crontab, refusing duplicate schedule+command pairs.
//!
//! ## Surface
//!
//! - [`ScheduleHandler`] - validation, duplicate detection, orchestration
//! - [`CronStore`] / [`SystemCronStore`] - crontab access layer
//! - [`ScheduleRequest`] / [`ScheduleResult`] / [`ScheduleOutcome`] - the
//!   one-call contract
//!
//! The core exposes no network surface; hosting frameworks wrap
//! [`ScheduleHandler::schedule`] and can advertise the operation through
//! [`ScheduleHandler::descriptor`].

pub mod handler;

pub use cronduty_protocols::{
    CrontabEntry, CrontabSnapshot, ProcessDescriptor, ScheduleOutcome, ScheduleRequest,
    ScheduleResult, StoreError, DEFAULT_CRON_EXPRESSION,
};
pub use cronduty_store::{CronStore, SystemCronStore};
pub use handler::ScheduleHandler;
