use crate::consts::{MILLIS_PER_DAY, MILLIS_PER_SECOND};
use crate::resolve_local;
use chrono::{DateTime, Offset, TimeZone};

/// Offset of `t`'s zone at `t`, in minutes, positive when local time is
/// behind UTC (UTC-5 is `300`, UTC+2 is `-120`). Seconds left over in
/// an offset such as local mean time are truncated.
pub fn timezone_offset_minutes<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    -i64::from(t.offset().fix().local_minus_utc()) / 60
}

/// Milliseconds since the epoch of `t`'s wall-clock reading, as if that
/// reading were UTC. Uses the full offset, seconds included.
fn wall_clock_millis<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    t.timestamp_millis() + i64::from(t.offset().fix().local_minus_utc()) * MILLIS_PER_SECOND
}

/// Keeps the local calendar date of `of` and takes the local time of day
/// from `with_time_from`.
///
/// Both day boundaries are local midnights: `of` at 01:30 in UTC+2 still
/// counts as that local day, not the previous UTC one. The result is in
/// `of`'s zone.
///
/// # Panics
/// If the spliced wall-clock time falls outside the range `chrono` can
/// represent.
pub fn replace_time<Tz: TimeZone, Tz2: TimeZone>(
    of: &DateTime<Tz>,
    with_time_from: &DateTime<Tz2>,
) -> DateTime<Tz> {
    let local_midnight = wall_clock_millis(of).div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY;
    let time_of_day = wall_clock_millis(with_time_from).rem_euclid(MILLIS_PER_DAY);
    let spliced = local_midnight + time_of_day;

    DateTime::from_timestamp_millis(spliced)
        .and_then(|wall| resolve_local(&of.timezone(), &wall.naive_utc()))
        .unwrap_or_else(|| panic!("spliced time {spliced}ms is out of range"))
}
