//! Calendar arithmetic on [`CivilDate`].
//!
//! Days, hours, minutes and seconds move the underlying instant by a fixed
//! number of milliseconds and read the fields back, so they roll across month
//! and year ends naturally. Months work on the calendar fields instead and
//! clamp to the last day that exists in the target month.

use crate::consts::{
    MAX_DAY, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
    MIN_DAYS_IN_MONTH, MIN_MONTH, MONTHS_PER_YEAR,
};
use crate::{CivilDate, DateFields};
use chrono::{TimeDelta, TimeZone, Utc};
use log::trace;

/// Days a month shift may need to walk back before the day exists in every
/// month (31 down to 28)
const MAX_CLAMP_STEPS: u32 = MAX_DAY - MIN_DAYS_IN_MONTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Arithmetic that would leave the range `chrono` can represent panics, the
/// same way `DateTime + TimeDelta` does.
impl<Tz: TimeZone> CivilDate<Tz> {
    #[must_use]
    pub fn plus_n_days(&self, n: u32) -> Self {
        self.shifted_by_millis(i64::from(n) * MILLIS_PER_DAY)
    }

    #[must_use]
    pub fn minus_n_days(&self, n: u32) -> Self {
        self.shifted_by_millis(-i64::from(n) * MILLIS_PER_DAY)
    }

    #[must_use]
    pub fn plus_n_hours(&self, n: u32) -> Self {
        self.shifted_by_millis(i64::from(n) * MILLIS_PER_HOUR)
    }

    #[must_use]
    pub fn minus_n_hours(&self, n: u32) -> Self {
        self.shifted_by_millis(-i64::from(n) * MILLIS_PER_HOUR)
    }

    #[must_use]
    pub fn plus_n_minutes(&self, n: u32) -> Self {
        self.shifted_by_millis(i64::from(n) * MILLIS_PER_MINUTE)
    }

    #[must_use]
    pub fn minus_n_minutes(&self, n: u32) -> Self {
        self.shifted_by_millis(-i64::from(n) * MILLIS_PER_MINUTE)
    }

    #[must_use]
    pub fn plus_n_seconds(&self, n: u32) -> Self {
        self.shifted_by_millis(i64::from(n) * MILLIS_PER_SECOND)
    }

    #[must_use]
    pub fn minus_n_seconds(&self, n: u32) -> Self {
        self.shifted_by_millis(-i64::from(n) * MILLIS_PER_SECOND)
    }

    /// Moves `n` months forward, keeping the day of month where it exists.
    ///
    /// When it does not (January 31 plus one month), the result is the last
    /// day of the target month. The result is at midnight.
    ///
    /// # Panics
    /// If the target year falls outside the range `chrono` can represent.
    #[must_use]
    pub fn plus_n_months(&self, n: u32) -> Self {
        self.shifted_by_months(n, Direction::Forward)
    }

    /// Moves `n` months back, keeping the day of month where it exists.
    ///
    /// When it does not (May 31 minus three months), the result is the last
    /// day of the target month. The result is at midnight.
    ///
    /// # Panics
    /// If the target year falls outside the range `chrono` can represent.
    #[must_use]
    pub fn minus_n_months(&self, n: u32) -> Self {
        self.shifted_by_months(n, Direction::Backward)
    }

    fn shifted_by_millis(&self, millis: i64) -> Self {
        let native = self.as_native().clone() + TimeDelta::milliseconds(millis);
        Self::from_native(&native)
    }

    /// Tries the target month with the current day in UTC. If that day does
    /// not exist there, steps the starting point back one day and tries again.
    fn shifted_by_months(&self, n: u32, direction: Direction) -> Self {
        let tz = self.timezone();
        let mut current = self.clone();
        let mut steps = 0;

        loop {
            let target = month_shift_target(current.year(), current.month(), current.day(), n, direction);
            match CivilDate::new_in(target, &Utc) {
                Err(err) if steps < MAX_CLAMP_STEPS => {
                    trace!("{err}, walking {current} back one day");
                    current = current.minus_n_days(1);
                    steps += 1;
                },
                _ => {
                    return match Self::new_in(target, &tz) {
                        Ok(date) => date,
                        Err(err) => panic!("month shift out of range: {err}"),
                    };
                },
            }
        }
    }
}

/// Year and month `n` months away, with the day carried over unchanged
fn month_shift_target(year: i32, month: u32, day: u32, n: u32, direction: Direction) -> DateFields {
    let whole_years = i32::try_from(n / MONTHS_PER_YEAR).unwrap_or(i32::MAX);
    let months = n % MONTHS_PER_YEAR;

    let (year, month) = match direction {
        Direction::Forward => {
            let (year, month) = (year.saturating_add(whole_years), month + months);
            if month > MONTHS_PER_YEAR {
                (year.saturating_add(1), month - MONTHS_PER_YEAR)
            } else {
                (year, month)
            }
        },
        Direction::Backward => {
            let year = year.saturating_sub(whole_years);
            if months >= month {
                (year.saturating_sub(1), month + MONTHS_PER_YEAR - months)
            } else {
                (year, month - months)
            }
        },
    };

    debug_assert!(month >= MIN_MONTH && month <= MONTHS_PER_YEAR);
    DateFields::date(year, month, day)
}
