//! Time Source and ID Allocation
//!
//! Controllers read the current time through [`Clock`] so tests can pin it.

use std::cell::Cell;

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used to pre-fill blank date fields
    fn today(&self) -> NaiveDate;
}

/// Wall clock; `today` follows the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }
}

/// Allocate an ID from the clock's millisecond timestamp.
///
/// Bumps past any value already taken in the owning list, so two records
/// created within the same millisecond still get distinct IDs.
pub fn next_id<'a>(clock: &dyn Clock, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut candidate = clock.now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !existing.clone().any(|taken| taken == id) {
            return id;
        }
        candidate += 1;
    }
}
