//! # Cronduty Store
//!
//! Crontab access layer: the [`CronStore`] trait and the [`SystemCronStore`]
//! implementation wrapping the OS `crontab` utility.

pub mod store;
pub mod system;

pub use store::CronStore;
pub use system::SystemCronStore;
