use thiserror::Error;

/// Zenith angle in degrees for official sunrise/sunset: the geometric
/// horizon plus corrections for atmospheric refraction and the apparent
/// solar radius.
pub const OFFICIAL_ZENITH: f64 = 90.8333;

/// Zenith angle in degrees for civil twilight (sun 6° below the horizon).
pub const CIVIL_ZENITH: f64 = 96.0;

/// Zenith angle in degrees for nautical twilight (sun 12° below the horizon).
pub const NAUTICAL_ZENITH: f64 = 102.0;

/// Zenith angle in degrees for astronomical twilight (sun 18° below the horizon).
pub const ASTRONOMICAL_ZENITH: f64 = 108.0;

/// Which horizon crossing to compute.
///
/// The event kind changes two constants in the pipeline: the 6/18 hour
/// seed of the approximate event time and the branch that maps the local
/// hour angle onto the morning or evening side of the meridian.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Sun crossing the zenith threshold on its way up.
    Sunrise,
    /// Sun crossing the zenith threshold on its way down.
    Sunset,
}

/// Errors from the timezone conversion layer.
///
/// The pipeline itself is total over its numeric inputs; the only fallible
/// surface is mapping an IANA identifier onto a UTC offset.
#[derive(Error, Debug)]
pub enum SolarError {
    #[error("unknown timezone identifier: {0}")]
    UnknownTimezone(String),

    #[error("UTC offset out of range: {0} seconds")]
    OffsetOutOfRange(i32),
}
