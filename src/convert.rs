//! Conversions between natural indexing (months 1-12, Monday=0 .. Sunday=6)
//! and the 0-based native indexing of the timestamp layer (months 0-11,
//! Sunday=0 .. Saturday=6).

use crate::consts::{DAYS_PER_WEEK, MIN_MONTH};

/// Natural weekday (Monday=0) to native weekday (Sunday=0)
#[inline]
pub const fn natural_weekday_to_native(natural: u32) -> u32 {
    (natural + 1) % DAYS_PER_WEEK
}

/// Native weekday (Sunday=0) to natural weekday (Monday=0)
#[inline]
pub const fn native_weekday_to_natural(native: u32) -> u32 {
    (native + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
}

/// Natural month (1-12) to native month (0-11)
#[inline]
pub const fn natural_month_to_native(natural: u32) -> u32 {
    debug_assert!(natural >= MIN_MONTH);
    natural - 1
}

/// Native month (0-11) to natural month (1-12)
#[inline]
pub const fn native_month_to_natural(native: u32) -> u32 {
    native + 1
}
