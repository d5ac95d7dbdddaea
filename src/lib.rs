mod consts;
mod convert;
mod error;
mod math;
mod month;
mod prelude;
mod splice;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use convert::{
    native_month_to_natural, native_weekday_to_natural, natural_month_to_native,
    natural_weekday_to_native,
};
pub use error::{InvalidDate, ParseError};
pub use month::all_days_in_month;
pub use splice::{replace_time, timezone_offset_minutes};
pub use types::{DateFields, days_in_month, is_leap_year};

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
    Timelike,
};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A calendar date-time in local civil time.
///
/// The fields are validated at construction and never change afterwards;
/// every operation that looks like a mutation returns a new value. The
/// equivalent absolute instant is computed once, in the zone `Tz`, and kept
/// alongside the fields. It is what weekday lookup and day/hour/minute/second
/// arithmetic work from.
///
/// Equality, ordering and hashing only look at `(year, month, day)`: two
/// values on the same calendar day compare equal whatever their time of day.
#[derive(Debug, Clone)]
pub struct CivilDate<Tz: TimeZone = Local> {
    fields: DateFields,
    native: DateTime<Tz>,
}

impl CivilDate<Local> {
    /// Builds a date in the host's local timezone.
    ///
    /// # Errors
    /// Returns `InvalidDate` if any field is out of range or the day does not
    /// exist in that month.
    pub fn new(fields: DateFields) -> Result<Self, InvalidDate> {
        Self::new_in(fields, &Local)
    }
}

impl<Tz: TimeZone> CivilDate<Tz> {
    /// Builds a date whose civil fields are read in `tz`.
    ///
    /// The fields are turned into an instant in `tz` and the day of month is
    /// read back from it. Anything the timestamp layer would have rolled over
    /// (February 30 becoming March 1 or 2) is rejected instead.
    ///
    /// # Errors
    /// Returns `InvalidDate` if any field is out of range or the day does not
    /// exist in that month.
    pub fn new_in(fields: DateFields, tz: &Tz) -> Result<Self, InvalidDate> {
        let native = fields
            .is_in_range()
            .then(|| naive_from_fields(&fields))
            .flatten()
            .and_then(|wall| resolve_local(tz, &wall))
            .filter(|native| native.day() == fields.day);

        match native {
            Some(native) => Ok(Self { fields, native }),
            None => {
                debug!("rejecting {fields}: not a valid date");
                Err(InvalidDate(fields))
            },
        }
    }

    /// Reads the civil fields of `native` in its own zone.
    ///
    /// Precision below one millisecond is dropped, so for any
    /// millisecond-precision instant `t`, `from_native(&t).to_native() == t`.
    pub fn from_native(native: &DateTime<Tz>) -> Self {
        let sub_millis = native.nanosecond() % 1_000_000;
        let native = native.clone() - TimeDelta::nanoseconds(i64::from(sub_millis));
        let fields = DateFields::date(
            native.year(),
            native_month_to_natural(native.month0()),
            native.day(),
        )
        .with_time(
            native.hour(),
            native.minute(),
            native.second(),
            (native.nanosecond() / 1_000_000).min(MAX_MILLISECOND),
        );
        Self { fields, native }
    }

    /// Parses `YYYY-MM-DD[ hh:mm[:ss[.fff]]]` and builds the date in `tz`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` for malformed text and
    /// `ParseError::InvalidDate` for text naming a date that does not exist.
    pub fn parse_in(s: &str, tz: &Tz) -> Result<Self, ParseError> {
        let fields = s.parse::<DateFields>()?;
        Ok(Self::new_in(fields, tz)?)
    }

    /// The equivalent instant, exactly as computed at construction
    pub fn to_native(&self) -> DateTime<Tz> {
        self.native.clone()
    }

    /// Borrows the equivalent instant
    pub const fn as_native(&self) -> &DateTime<Tz> {
        &self.native
    }

    /// The zone this date's civil fields are read in
    pub fn timezone(&self) -> Tz {
        self.native.timezone()
    }

    pub const fn year(&self) -> i32 {
        self.fields.year
    }

    /// Month of year, 1-12
    pub const fn month(&self) -> u32 {
        self.fields.month
    }

    /// Day of month, 1-31
    pub const fn day(&self) -> u32 {
        self.fields.day
    }

    pub const fn hour(&self) -> u32 {
        self.fields.hour
    }

    pub const fn minute(&self) -> u32 {
        self.fields.minute
    }

    pub const fn second(&self) -> u32 {
        self.fields.second
    }

    pub const fn millisecond(&self) -> u32 {
        self.fields.millisecond
    }

    /// Day of week with Monday=0 .. Sunday=6
    pub fn weekday(&self) -> u32 {
        native_weekday_to_natural(self.native.weekday().num_days_from_sunday())
    }

    /// All fields, including time of day
    pub const fn to_fields(&self) -> DateFields {
        self.fields
    }

    /// Same calendar day, regardless of time of day. Equivalent to `==`.
    pub const fn is_same_day(&self, other: &Self) -> bool {
        self.fields.year == other.fields.year
            && self.fields.month == other.fields.month
            && self.fields.day == other.fields.day
    }

    /// The part of the value that takes part in comparisons
    const fn calendar_key(&self) -> (i32, u32, u32) {
        (self.fields.year, self.fields.month, self.fields.day)
    }
}

// --- helpers for turning civil fields into instants ---

/// Builds the wall-clock reading for in-range fields, or `None` if the day
/// does not exist.
fn naive_from_fields(fields: &DateFields) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)?.and_hms_milli_opt(
        fields.hour,
        fields.minute,
        fields.second,
        fields.millisecond,
    )
}

/// Maps a wall-clock reading in `tz` to an instant.
///
/// A reading that occurs twice (clocks turned back) resolves to the earlier
/// instant. A reading that never occurs (clocks turned forward) is read with
/// the offset in force before the transition, which lands later on the wall
/// clock by the size of the gap.
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, wall: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(wall) {
        LocalResult::Single(native) => Some(native),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let day_before = wall.checked_sub_signed(TimeDelta::days(1))?;
            let before = tz.offset_from_utc_datetime(&day_before).fix();
            let utc =
                wall.checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
            Some(tz.from_utc_datetime(&utc))
        },
    }
}

impl<Tz: TimeZone> PartialEq for CivilDate<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_day(other)
    }
}

impl<Tz: TimeZone> Eq for CivilDate<Tz> {}

impl<Tz: TimeZone> PartialOrd for CivilDate<Tz> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tz: TimeZone> Ord for CivilDate<Tz> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.calendar_key().cmp(&other.calendar_key())
    }
}

impl<Tz: TimeZone> Hash for CivilDate<Tz> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.calendar_key().hash(state);
    }
}

impl<Tz: TimeZone> fmt::Display for CivilDate<Tz> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fields, f)
    }
}

impl FromStr for CivilDate<Local> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_in(s, &Local)
    }
}

impl TryFrom<DateFields> for CivilDate<Local> {
    type Error = InvalidDate;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

/// Serializes as the field set, the same shape [`DateFields`] deserializes from.
impl<Tz: TimeZone> serde::Serialize for CivilDate<Tz> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.fields, serializer)
    }
}
