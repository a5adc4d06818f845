//! Date source for default date arguments.

use chrono::{Local, NaiveDate};

/// Date source consulted when a date argument is absent.
///
/// Abstracted so tests can pin the date instead of reading the system
/// clock.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// System clock reading the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// Date returned by `today`.
    pub NaiveDate,
);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
