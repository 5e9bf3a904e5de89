//! The solar event pipeline: a fixed chain of low-order approximations
//! taking a date and coordinate to the UTC clock time of a horizon
//! crossing, or to `None` when the sun never reaches the requested zenith
//! on that date (polar day or night).
//!
//! Angles are in degrees unless a name says otherwise; trigonometry is
//! done in radians on `f64`. Each stage rounds its output to four decimal
//! places and the *rounded* value feeds the next stage, which keeps the
//! chain reproducible against the reference fixtures.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::math::{put_in_range, round4};
use crate::time::decimal_hours_to_clock;
use crate::types::EventKind;

// ============================================================================
// Constants of the approximation
// ============================================================================

/// Earth's rotation rate: degrees of longitude per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Mean angular motion of the Sun in degrees per hour of the year.
const MEAN_ANOMALY_RATE: f64 = 0.9856;

/// Mean anomaly at the start of the year, in degrees.
const MEAN_ANOMALY_EPOCH: f64 = 3.289;

/// First-order equation-of-center coefficient (degrees).
const EQUATION_OF_CENTER_FIRST: f64 = 1.916;

/// Second-order equation-of-center coefficient (degrees).
const EQUATION_OF_CENTER_SECOND: f64 = 0.020;

/// Ecliptic longitude of perihelion plus 180°, in degrees.
const PERIHELION_LONGITUDE: f64 = 282.634;

/// Cosine of the ecliptic obliquity, projecting ecliptic longitude onto
/// right ascension.
const COSINE_OBLIQUITY: f64 = 0.91764;

/// Sine of the ecliptic obliquity, projecting ecliptic longitude onto
/// declination.
const SINE_OBLIQUITY: f64 = 0.39782;

/// Drift of mean solar time against clock time, hours per day-of-year unit.
const SOLAR_DRIFT_RATE: f64 = 0.06571;

/// Constant term of the local-mean-time correction, in hours.
const SOLAR_TIME_CONSTANT: f64 = 6.622;

// ============================================================================
// Stages
// ============================================================================

/// Stage 1: geographic longitude as an hour offset (15° per hour).
pub(crate) fn longitude_hour(longitude: f64) -> f64 {
    round4(longitude / DEGREES_PER_HOUR)
}

/// Stage 2: approximate time of the event, in day-of-year units.
///
/// The seed is 6h for sunrise and 18h for sunset: a first guess at the
/// local clock time of the event, refined by the rest of the chain.
pub(crate) fn event_longitude_hour(date: NaiveDate, longitude_hour: f64, kind: EventKind) -> f64 {
    let seed = match kind {
        EventKind::Sunrise => 6.0,
        EventKind::Sunset => 18.0,
    };
    round4(f64::from(date.ordinal()) + (seed - longitude_hour) / 24.0)
}

/// Stage 3: the Sun's mean anomaly at the approximate event time.
pub(crate) fn sun_mean_anomaly(event_longitude_hour: f64) -> f64 {
    round4(event_longitude_hour * MEAN_ANOMALY_RATE - MEAN_ANOMALY_EPOCH)
}

/// Stage 4: the Sun's true ecliptic longitude, normalized into [0, 360).
pub(crate) fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    let anomaly = mean_anomaly.to_radians();
    let longitude = mean_anomaly
        + EQUATION_OF_CENTER_FIRST * anomaly.sin()
        + EQUATION_OF_CENTER_SECOND * (2.0 * anomaly).sin()
        + PERIHELION_LONGITUDE;
    round4(put_in_range(longitude, 0.0, 360.0, 360.0))
}

/// Stage 5: the Sun's right ascension in degrees, normalized into [0, 360).
///
/// Raw `atan` output; the quadrant is fixed up in
/// [`right_ascension_hours`].
pub(crate) fn right_ascension(true_longitude: f64) -> f64 {
    let ascension = (COSINE_OBLIQUITY * true_longitude.to_radians().tan())
        .atan()
        .to_degrees();
    round4(put_in_range(ascension, 0.0, 360.0, 360.0))
}

/// Stage 6: right ascension converted to hours, quadrant-aligned with the
/// true longitude.
///
/// `atan` is only determined modulo 180°, so the quadrant is re-derived
/// from the true longitude itself and the ascension is shifted into it
/// before the division by 15.
pub(crate) fn right_ascension_hours(true_longitude: f64) -> f64 {
    let ascension = right_ascension(true_longitude);
    let longitude_quadrant = 90.0 * (true_longitude / 90.0).floor();
    let ascension_quadrant = 90.0 * (ascension / 90.0).floor();
    round4((ascension + longitude_quadrant - ascension_quadrant) / DEGREES_PER_HOUR)
}

/// Stage 7a: sine of the Sun's declination.
pub(crate) fn sine_declination(true_longitude: f64) -> f64 {
    round4(true_longitude.to_radians().sin() * SINE_OBLIQUITY)
}

/// Stage 7b: cosine of the Sun's declination, from the rounded sine.
pub(crate) fn cosine_declination(sine_declination: f64) -> f64 {
    round4(sine_declination.asin().cos())
}

/// Stage 8: cosine of the Sun's local hour angle at the event threshold.
///
/// Values outside [-1, 1] mean the sun never crosses the requested zenith
/// on this date at this latitude; the caller turns that into `None`.
pub(crate) fn cosine_local_hour_angle(true_longitude: f64, zenith: f64, latitude: f64) -> f64 {
    let sine_dec = sine_declination(true_longitude);
    let cosine_dec = cosine_declination(sine_dec);
    let latitude = latitude.to_radians();
    let numerator = zenith.to_radians().cos() - sine_dec * latitude.sin();
    round4(numerator / (cosine_dec * latitude.cos()))
}

/// Stage 10: local hour angle converted to hours.
///
/// `acos` lands on the evening side of the meridian; sunrise mirrors it to
/// the morning side.
pub(crate) fn local_hour_angle(cosine_local_hour: f64, kind: EventKind) -> f64 {
    let angle = cosine_local_hour.acos().to_degrees();
    let angle = match kind {
        EventKind::Sunrise => 360.0 - angle,
        EventKind::Sunset => angle,
    };
    round4(angle / DEGREES_PER_HOUR)
}

/// Stage 11: local mean time of the event as UTC decimal hours in [0, 24).
pub(crate) fn local_mean_time(
    local_hour_angle: f64,
    right_ascension_hours: f64,
    event_longitude_hour: f64,
    longitude_hour: f64,
) -> f64 {
    let mean_time = local_hour_angle + right_ascension_hours
        - SOLAR_DRIFT_RATE * event_longitude_hour
        - SOLAR_TIME_CONSTANT;
    round4(put_in_range(mean_time - longitude_hour, 0.0, 24.0, 24.0))
}

// ============================================================================
// Driver
// ============================================================================

/// Runs the full pipeline for one (date, coordinate, zenith, kind) input.
///
/// Returns the event as a UTC instant on the input date, or `None` when
/// the stage-8 cosine falls outside [-1, 1] (polar day or night). This is
/// the pipeline's only branch; every other stage is total.
pub(crate) fn compute_utc_event(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    kind: EventKind,
) -> Option<DateTime<Utc>> {
    let longitude_hour = longitude_hour(longitude);
    let event_hour = event_longitude_hour(date, longitude_hour, kind);
    let mean_anomaly = sun_mean_anomaly(event_hour);
    let true_longitude = sun_true_longitude(mean_anomaly);

    // Degenerate latitudes produce a NaN cosine here; `contains` rejects
    // NaN along with the polar out-of-range values.
    let cosine_local_hour = cosine_local_hour_angle(true_longitude, zenith, latitude);
    if !(-1.0..=1.0).contains(&cosine_local_hour) {
        return None;
    }

    let hour_angle = local_hour_angle(cosine_local_hour, kind);
    let ascension_hours = right_ascension_hours(true_longitude);
    let mean_time = local_mean_time(hour_angle, ascension_hours, event_hour, longitude_hour);

    let (hour, minute) = decimal_hours_to_clock(mean_time)?;
    let clock = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(DateTime::from_naive_utc_and_offset(date.and_time(clock), Utc))
}
