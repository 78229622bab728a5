//! Navitia timestamp decoding.
//!
//! Navitia sends local wall-clock times as `YYYYMMDDTHHMMSS` strings with
//! no offset attached. Decoding is best-effort: seconds are ignored,
//! out-of-range fields roll over into the next unit rather than being
//! rejected, and anything that cannot be read falls back to the current
//! local time. Callers never see a decode error.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

/// Shortest decodable input: `YYYYMMDDTHHMM`.
const MIN_LEN: usize = 13;

/// Decode a Navitia timestamp, falling back to "now" on bad input.
///
/// Calendar correctness is not checked. Month 13 of 2024 is January 2025,
/// day 0 is the last day of the previous month, and so on.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use transit_server::domain::decode_navitia_datetime;
///
/// let t = decode_navitia_datetime(Some("20240115T143000"));
/// assert_eq!((t.year(), t.month(), t.day()), (2024, 1, 15));
/// assert_eq!((t.hour(), t.minute()), (14, 30));
///
/// // Never fails, even on garbage.
/// let _ = decode_navitia_datetime(Some("bad"));
/// let _ = decode_navitia_datetime(None);
/// ```
pub fn decode_navitia_datetime(s: Option<&str>) -> NaiveDateTime {
    s.and_then(try_decode)
        .unwrap_or_else(|| Local::now().naive_local())
}

/// Strict half of the decoder: `None` whenever a field is missing or not numeric.
fn try_decode(s: &str) -> Option<NaiveDateTime> {
    if s.len() < MIN_LEN {
        return None;
    }

    let year = field(s, 0, 4)?;
    let month = field(s, 4, 6)?;
    let day = field(s, 6, 8)?;
    let hour = field(s, 9, 11)?;
    let minute = field(s, 11, 13)?;

    // Normalise the month first so that e.g. month 00 lands in December
    // of the year before.
    let total_months = year * 12 + (month - 1);
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(total_months.div_euclid(12)).ok()?,
        u32::try_from(total_months.rem_euclid(12) + 1).ok()?,
        1,
    )?
    .and_hms_opt(0, 0, 0)?;

    first_of_month
        .checked_add_signed(TimeDelta::try_days(day - 1)?)?
        .checked_add_signed(TimeDelta::try_hours(hour)?)?
        .checked_add_signed(TimeDelta::try_minutes(minute)?)
}

/// Parse `s[start..end]` as an unsigned decimal number.
fn field(s: &str, start: usize, end: usize) -> Option<i64> {
    let part = s.get(start..end)?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn valid_timestamps_decode_exactly(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) {
            let s = format!("{year:04}{month:02}{day:02}T{hour:02}{minute:02}{second:02}");
            let t = try_decode(&s).unwrap();
            prop_assert_eq!(t.year(), year);
            prop_assert_eq!(t.month(), month);
            prop_assert_eq!(t.day(), day);
            prop_assert_eq!(t.hour(), hour);
            prop_assert_eq!(t.minute(), minute);
        }

        #[test]
        fn arbitrary_input_never_panics(s in ".*") {
            let _ = decode_navitia_datetime(Some(&s));
        }
    }
}
