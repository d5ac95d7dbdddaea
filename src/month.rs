use crate::{CivilDate, DateFields, InvalidDate, consts::MIN_DAY};
use chrono::TimeZone;

/// Every day of `year`-`month` in `tz`, in ascending order from the 1st.
///
/// Days are built one after another until the next one fails validation,
/// so the result always holds 28, 29, 30 or 31 dates, each at midnight.
///
/// # Errors
/// Returns `InvalidDate` if the month itself is out of range (the 1st cannot
/// be built).
pub fn all_days_in_month<Tz: TimeZone>(
    year: i32,
    month: u32,
    tz: &Tz,
) -> Result<Vec<CivilDate<Tz>>, InvalidDate> {
    let first = CivilDate::new_in(DateFields::date(year, month, MIN_DAY), tz)?;
    let mut days = vec![first];

    while let Some(last) = days.last() {
        match CivilDate::new_in(DateFields::date(year, month, last.day() + 1), tz) {
            Ok(next) => days.push(next),
            Err(_) => break,
        }
    }

    Ok(days)
}
