/// First valid month (January), natural indexing
pub const MIN_MONTH: u32 = 1;
/// Last valid month (December), natural indexing
pub const MAX_MONTH: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;
/// Longest month length; a day above this never exists
pub const MAX_DAY: u32 = 31;
/// Shortest month length; every month has at least this many days
pub const MIN_DAYS_IN_MONTH: u32 = 28;

/// Largest valid hour of day
pub const MAX_HOUR: u32 = 23;
/// Largest valid minute of hour
pub const MAX_MINUTE: u32 = 59;
/// Largest valid second of minute (leap seconds are not representable)
pub const MAX_SECOND: u32 = 59;
/// Largest valid millisecond of second
pub const MAX_MILLISECOND: u32 = 999;

pub const JANUARY: u32 = 1;
pub const FEBRUARY: u32 = 2;
pub const MARCH: u32 = 3;
pub const APRIL: u32 = 4;
pub const MAY: u32 = 5;
pub const JUNE: u32 = 6;
pub const JULY: u32 = 7;
pub const AUGUST: u32 = 8;
pub const SEPTEMBER: u32 = 9;
pub const OCTOBER: u32 = 10;
pub const NOVEMBER: u32 = 11;
pub const DECEMBER: u32 = 12;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u32 = 12;

// Natural weekday numbering: Monday=0 .. Sunday=6
pub const MONDAY: u32 = 0;
pub const TUESDAY: u32 = 1;
pub const WEDNESDAY: u32 = 2;
pub const THURSDAY: u32 = 3;
pub const FRIDAY: u32 = 4;
pub const SATURDAY: u32 = 5;
pub const SUNDAY: u32 = 6;

/// Number of days in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between seconds and milliseconds
pub const FRACTION_SEPARATOR: char = '.';
