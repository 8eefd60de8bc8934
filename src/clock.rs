//! Source of "now" and "today" for the whole crate.
//!
//! Everything that needs wall-clock time (question timing, completion
//! timestamps, catalog availability, streak math) asks a [`Clock`], so tests
//! can pin the date and step time forward by hand.

use chrono::{DateTime, Duration, Local, NaiveDate};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Local>;

    /// Local calendar date, time of day dropped.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The device clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self { now: Arc::new(Mutex::new(start)) }
    }

    /// Starts at noon on `date`, local time.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .and_then(|naive| naive.and_local_timezone(Local).earliest())
            .unwrap_or_else(Local::now);
        Self::new(noon)
    }

    pub fn advance_ms(&self, ms: i64) {
        if let Ok(mut now) = self.now.lock() {
            *now += Duration::milliseconds(ms);
        }
    }

    pub fn advance_days(&self, days: i64) {
        if let Ok(mut now) = self.now.lock() {
            *now += Duration::days(days);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.lock().map(|now| *now).unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_only_when_advanced() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 18).unwrap();
        let clock = ManualClock::at_date(date);
        let before = clock.now();

        assert_eq!(clock.now(), before);
        assert_eq!(clock.today(), date);

        clock.advance_ms(1500);
        assert_eq!((clock.now() - before).num_milliseconds(), 1500);

        clock.advance_days(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 4, 19).unwrap());
    }
}
