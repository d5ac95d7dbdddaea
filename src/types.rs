use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    FRACTION_SEPARATOR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_HOUR, MAX_MILLISECOND,
    MAX_MINUTE, MAX_MONTH, MAX_SECOND, MIN_DAY, MIN_MONTH, TIME_SEPARATOR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The field set a [`CivilDate`](crate::CivilDate) is built from.
///
/// Months are 1-12. The time fields default to zero when omitted from
/// serialized input. Holding a `DateFields` says nothing about validity;
/// ranges and day existence are checked when a `CivilDate` is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
    year,
    month,
    day,
    hour,
    minute,
    second,
    millisecond
)]
pub struct DateFields {
    pub year:        i32,
    pub month:       u32,
    pub day:         u32,
    #[serde(default)]
    pub hour:        u32,
    #[serde(default)]
    pub minute:      u32,
    #[serde(default)]
    pub second:      u32,
    #[serde(default)]
    pub millisecond: u32,
}

impl DateFields {
    /// Fields for midnight at the start of the given day
    pub const fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Replaces the time of day
    #[must_use]
    pub const fn with_time(self, hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            ..self
        }
    }

    /// Checks every field against its numeric range.
    /// Day existence within the month is not checked here.
    pub const fn is_in_range(&self) -> bool {
        matches!(self.month, MIN_MONTH..=MAX_MONTH)
            && matches!(self.day, MIN_DAY..=MAX_DAY)
            && self.hour <= MAX_HOUR
            && self.minute <= MAX_MINUTE
            && self.second <= MAX_SECOND
            && self.millisecond <= MAX_MILLISECOND
    }

    /// Helper to parse an unsigned decimal component with better error messages
    fn parse_component<T: FromStr>(s: &str, whole: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(whole.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(whole.to_owned()))
    }

    /// Reads one to three fractional digits as milliseconds ("5" is 500)
    fn parse_fraction(s: &str, whole: &str) -> Result<u32, ParseError> {
        if s.len() > 3 {
            return Err(ParseError::InvalidFormat(whole.to_owned()));
        }
        let value: u32 = Self::parse_component(s, whole)?;
        let scale = match s.len() {
            1 => 100,
            2 => 10,
            _ => 1,
        };
        Ok(value * scale)
    }

    fn parse_time(self, time: &str, whole: &str) -> Result<Self, ParseError> {
        let (clock, fraction) = match time.split_once(FRACTION_SEPARATOR) {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (time, None),
        };

        let parts: Vec<&str> = clock.split(TIME_SEPARATOR).collect();
        let (hour, minute, second) = match parts.as_slice() {
            [hour, minute] if fraction.is_none() => (
                Self::parse_component(hour, whole)?,
                Self::parse_component(minute, whole)?,
                0,
            ),
            [hour, minute, second] => (
                Self::parse_component(hour, whole)?,
                Self::parse_component(minute, whole)?,
                Self::parse_component(second, whole)?,
            ),
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected hh:mm, hh:mm:ss or hh:mm:ss.fff: {whole}"
                )));
            },
        };

        let millisecond = match fraction {
            Some(fraction) => Self::parse_fraction(fraction, whole)?,
            None => 0,
        };

        Ok(self.with_time(hour, minute, second, millisecond))
    }
}

/// Parses `YYYY-MM-DD`, optionally followed by a space or `T` and
/// `hh:mm`, `hh:mm:ss` or `hh:mm:ss.fff`.
impl FromStr for DateFields {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (date, time) = match trimmed.split_once([' ', 'T']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (trimmed, None),
        };

        let parts: Vec<&str> = date.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} components: {s}",
                parts.len()
            )));
        };

        let fields = Self::date(
            Self::parse_component(year, s)?,
            Self::parse_component(month, s)?,
            Self::parse_component(day, s)?,
        );

        match time {
            Some(time) => fields.parse_time(time, s),
            None => Ok(fields),
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`, or `None` if `month` is not 1-12
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month < MIN_MONTH || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}
