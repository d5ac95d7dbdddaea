//! Shared constructors for unit tests. Everything here pins its zone, so no
//! test depends on the host timezone.

use crate::{CivilDate, DateFields};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub fn utc(year: i32, month: u32, day: u32) -> CivilDate<Utc> {
    CivilDate::new_in(DateFields::date(year, month, day), &Utc)
        .expect("test date should be valid")
}

pub fn utc_at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> CivilDate<Utc> {
    let fields = DateFields::date(year, month, day).with_time(hour, minute, second, 0);
    CivilDate::new_in(fields, &Utc).expect("test date-time should be valid")
}

/// Parses an RFC 3339 instant such as `2024-05-08T11:11:11.111Z`
pub fn instant(s: &str) -> DateTime<Utc> {
    s.parse().expect("test instant should be RFC 3339")
}

pub fn east(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).expect("offset should be in range")
}

pub fn west(hours: i32) -> FixedOffset {
    FixedOffset::west_opt(hours * 3600).expect("offset should be in range")
}

/// Central European time with only the two 2024 transitions: clocks go
/// forward 02:00 -> 03:00 on March 31 and back 03:00 -> 02:00 on October 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralEurope2024;

impl CentralEurope2024 {
    fn standard() -> FixedOffset {
        east(1)
    }

    fn summer() -> FixedOffset {
        east(2)
    }

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("transition time should be valid")
    }
}

impl TimeZone for CentralEurope2024 {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        Self
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        if *local < Self::at(3, 31, 2) {
            LocalResult::Single(Self::standard())
        } else if *local < Self::at(3, 31, 3) {
            LocalResult::None
        } else if *local < Self::at(10, 27, 2) {
            LocalResult::Single(Self::summer())
        } else if *local < Self::at(10, 27, 3) {
            LocalResult::Ambiguous(Self::summer(), Self::standard())
        } else {
            LocalResult::Single(Self::standard())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < Self::at(3, 31, 1) || *utc >= Self::at(10, 27, 1) {
            Self::standard()
        } else {
            Self::summer()
        }
    }
}
