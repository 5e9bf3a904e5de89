use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::types::SolarError;

/// Returns the UTC offset, in seconds east of UTC, that `timezone` applies
/// at the naive UTC noon of `date`.
///
/// Sampling the offset at noon captures the DST state in effect for the
/// bulk of that calendar day without consulting a full transition calendar,
/// which is all the one-minute-accurate event times warrant. On a
/// transition day the offset observed at noon wins.
///
/// # Errors
///
/// [`SolarError::UnknownTimezone`] when `timezone` is not an IANA
/// identifier known to the bundled tz database. The failure is surfaced
/// rather than defaulted; a guessed offset would silently corrupt every
/// local time derived from it.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use solar_event_calculator::utc_offset_seconds;
///
/// let date = NaiveDate::from_ymd_opt(2008, 11, 1).unwrap();
/// // DST still in effect on 2008-11-01 (it ends the next day)
/// assert_eq!(utc_offset_seconds("America/New_York", date).unwrap(), -4 * 3600);
/// ```
pub fn utc_offset_seconds(timezone: &str, date: NaiveDate) -> Result<i32, SolarError> {
    let tz = Tz::from_str(timezone).map_err(|_| SolarError::UnknownTimezone(timezone.to_owned()))?;
    let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
    Ok(tz.offset_from_utc_datetime(&noon).fix().local_minus_utc())
}

/// Splits a decimal hour count in `[0, 24)` into whole hours and truncated
/// minutes.
///
/// The minute is truncated toward zero, never rounded; the fractional part
/// is taken in decimal so that a stage output like `11.1` yields minute 6
/// rather than the 5 its binary representation would produce.
pub(crate) fn decimal_hours_to_clock(hours: f64) -> Option<(u32, u32)> {
    let hours = Decimal::from_f64(hours)?;
    let whole = hours.trunc();
    let minutes = ((hours - whole) * Decimal::from(60)).trunc();
    Some((whole.to_u32()?, minutes.to_u32()?))
}

/// Re-labels a UTC instant with a fixed offset, keeping the original
/// calendar date.
///
/// This reproduces the legacy conversion: the clock reading is shifted by
/// the offset modulo 24 hours, but the year/month/day of the UTC event are
/// retained even when the shifted clock crosses midnight. No date rollover
/// is performed.
pub(crate) fn to_fixed_offset(utc: DateTime<Utc>, offset_seconds: i32) -> Result<DateTime<FixedOffset>, SolarError> {
    let offset =
        FixedOffset::east_opt(offset_seconds).ok_or(SolarError::OffsetOutOfRange(offset_seconds))?;
    let shift = Duration::seconds(i64::from(offset_seconds));
    let local_clock = utc.date_naive().and_time((utc + shift).time());
    Ok(DateTime::from_naive_utc_and_offset(local_clock - shift, offset))
}
