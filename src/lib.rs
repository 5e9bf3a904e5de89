//! # Solar Event Calculator
//!
//! Sunrise, sunset and twilight times from the classic spherical-astronomy
//! approximation: the Sun's mean anomaly leads to its ecliptic longitude,
//! then to right ascension and declination, then to the local hour angle at
//! the requested zenith, and finally to a UTC clock time. The algorithm is
//! a low-order approximation, accurate to about one minute; it is not an
//! almanac.
//!
//! Events are defined by a zenith angle — how far past the observer's
//! overhead point the Sun's center must be. The four standard definitions
//! ([`OFFICIAL_ZENITH`], [`CIVIL_ZENITH`], [`NAUTICAL_ZENITH`],
//! [`ASTRONOMICAL_ZENITH`]) are exposed by name and any other angle can be
//! passed directly. At polar latitudes an event may simply not occur on a
//! given date; that outcome is `None`, kept distinct from any clock time.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use solar_event_calculator::{EventKind, SolarEventCalculator, CIVIL_ZENITH};
//!
//! // Coatesville, PA on 1 November 2008
//! let date = NaiveDate::from_ymd_opt(2008, 11, 1).unwrap();
//! let calculator = SolarEventCalculator::new(date, 39.9537, -75.7850);
//!
//! // UTC civil sunrise
//! let sunrise = calculator.utc_event(CIVIL_ZENITH, EventKind::Sunrise).unwrap();
//! assert_eq!(sunrise.format("%H:%M").to_string(), "11:04");
//!
//! // The same event on the local clock
//! let local = calculator
//!     .local_event(CIVIL_ZENITH, EventKind::Sunrise, "America/New_York")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(local.format("%H:%M %:z").to_string(), "07:04 -04:00");
//! ```

pub(crate) mod math;
pub(crate) mod pipeline;
pub(crate) mod time;
pub(crate) mod types;


use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

pub use crate::time::utc_offset_seconds;
pub use crate::types::{
    EventKind, SolarError, ASTRONOMICAL_ZENITH, CIVIL_ZENITH, NAUTICAL_ZENITH, OFFICIAL_ZENITH,
};

/// Computes solar event times for one calendar date at one coordinate.
///
/// The calculator holds the three immutable inputs and nothing else; every
/// computation re-runs the pipeline from scratch, so a value may be shared
/// and invoked concurrently without coordination.
///
/// Latitude and longitude are plain degrees (north and east positive).
/// They are not validated: out-of-range coordinates are the caller's
/// responsibility, matching the reference behavior, and at the poles the
/// degenerate geometry collapses to `None` rather than a panic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarEventCalculator {
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
}

impl SolarEventCalculator {
    /// Creates a calculator for the given date and coordinate.
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64) -> Self {
        Self {
            date,
            latitude,
            longitude,
        }
    }

    /// The calendar date events are computed for.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Computes the UTC time of the horizon crossing at an arbitrary
    /// zenith angle.
    ///
    /// # Arguments
    ///
    /// * `zenith` - Event threshold in degrees; see the named constants
    ///   for the standard definitions
    /// * `kind` - [`EventKind::Sunrise`] or [`EventKind::Sunset`]
    ///
    /// # Returns
    ///
    /// The event as a UTC instant on the calculator's date, or `None` when
    /// the sun never reaches `zenith` on that date at that latitude (polar
    /// day or night).
    pub fn utc_event(&self, zenith: f64, kind: EventKind) -> Option<DateTime<Utc>> {
        pipeline::compute_utc_event(self.date, self.latitude, self.longitude, zenith, kind)
    }

    /// Computes the event time on the clock of an IANA timezone.
    ///
    /// The offset applied is the one `timezone` observes at the naive UTC
    /// noon of the calculator's date, and the conversion keeps the
    /// original calendar date: only the hour, minute and offset label
    /// change, with no rollover when the shifted clock crosses midnight.
    ///
    /// # Errors
    ///
    /// [`SolarError::UnknownTimezone`] when the identifier is not in the
    /// tz database — including when the event itself would have been
    /// `None`; a bad zone is never swallowed.
    pub fn local_event(
        &self,
        zenith: f64,
        kind: EventKind,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        let offset_seconds = utc_offset_seconds(timezone, self.date)?;
        self.utc_event(zenith, kind)
            .map(|utc| time::to_fixed_offset(utc, offset_seconds))
            .transpose()
    }

    /// UTC official sunrise (zenith 90.8333°).
    pub fn utc_official_sunrise(&self) -> Option<DateTime<Utc>> {
        self.utc_event(OFFICIAL_ZENITH, EventKind::Sunrise)
    }

    /// Official sunrise on the given timezone's clock.
    pub fn official_sunrise(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(OFFICIAL_ZENITH, EventKind::Sunrise, timezone)
    }

    /// UTC civil sunrise (zenith 96°).
    pub fn utc_civil_sunrise(&self) -> Option<DateTime<Utc>> {
        self.utc_event(CIVIL_ZENITH, EventKind::Sunrise)
    }

    /// Civil sunrise on the given timezone's clock.
    pub fn civil_sunrise(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(CIVIL_ZENITH, EventKind::Sunrise, timezone)
    }

    /// UTC nautical sunrise (zenith 102°).
    pub fn utc_nautical_sunrise(&self) -> Option<DateTime<Utc>> {
        self.utc_event(NAUTICAL_ZENITH, EventKind::Sunrise)
    }

    /// Nautical sunrise on the given timezone's clock.
    pub fn nautical_sunrise(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(NAUTICAL_ZENITH, EventKind::Sunrise, timezone)
    }

    /// UTC astronomical sunrise (zenith 108°).
    pub fn utc_astronomical_sunrise(&self) -> Option<DateTime<Utc>> {
        self.utc_event(ASTRONOMICAL_ZENITH, EventKind::Sunrise)
    }

    /// Astronomical sunrise on the given timezone's clock.
    pub fn astronomical_sunrise(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(ASTRONOMICAL_ZENITH, EventKind::Sunrise, timezone)
    }

    /// UTC official sunset (zenith 90.8333°).
    pub fn utc_official_sunset(&self) -> Option<DateTime<Utc>> {
        self.utc_event(OFFICIAL_ZENITH, EventKind::Sunset)
    }

    /// Official sunset on the given timezone's clock.
    pub fn official_sunset(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(OFFICIAL_ZENITH, EventKind::Sunset, timezone)
    }

    /// UTC civil sunset (zenith 96°).
    pub fn utc_civil_sunset(&self) -> Option<DateTime<Utc>> {
        self.utc_event(CIVIL_ZENITH, EventKind::Sunset)
    }

    /// Civil sunset on the given timezone's clock.
    pub fn civil_sunset(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(CIVIL_ZENITH, EventKind::Sunset, timezone)
    }

    /// UTC nautical sunset (zenith 102°).
    pub fn utc_nautical_sunset(&self) -> Option<DateTime<Utc>> {
        self.utc_event(NAUTICAL_ZENITH, EventKind::Sunset)
    }

    /// Nautical sunset on the given timezone's clock.
    pub fn nautical_sunset(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(NAUTICAL_ZENITH, EventKind::Sunset, timezone)
    }

    /// UTC astronomical sunset (zenith 108°).
    pub fn utc_astronomical_sunset(&self) -> Option<DateTime<Utc>> {
        self.utc_event(ASTRONOMICAL_ZENITH, EventKind::Sunset)
    }

    /// Astronomical sunset on the given timezone's clock.
    pub fn astronomical_sunset(
        &self,
        timezone: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        self.local_event(ASTRONOMICAL_ZENITH, EventKind::Sunset, timezone)
    }
}

/// Computes the UTC time of a solar event without constructing a
/// calculator.
///
/// Equivalent to
/// [`SolarEventCalculator::utc_event`] on a freshly built calculator.
pub fn compute_utc_event(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    kind: EventKind,
) -> Option<DateTime<Utc>> {
    SolarEventCalculator::new(date, latitude, longitude).utc_event(zenith, kind)
}

/// Computes a solar event on the clock of an IANA timezone without
/// constructing a calculator.
///
/// Equivalent to [`SolarEventCalculator::local_event`]; see there for the
/// offset and no-rollover semantics.
///
/// # Errors
///
/// [`SolarError::UnknownTimezone`] for identifiers missing from the tz
/// database.
pub fn compute_local_event(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    kind: EventKind,
    timezone: &str,
) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
    SolarEventCalculator::new(date, latitude, longitude).local_event(zenith, kind, timezone)
}
