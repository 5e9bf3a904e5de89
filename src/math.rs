use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to four fractional decimal digits, half away from zero.
///
/// Every stage of the pipeline feeds its successor the *rounded* value, so
/// the rounding has to happen in decimal rather than binary: rounding the
/// nearest-double representation directly would disagree with the reference
/// fixtures on values that sit close to a half at the fourth decimal.
///
/// # Arguments
///
/// * `value` - The stage output to round
///
/// # Returns
///
/// The nearest 4-decimal fixed-point value, ties away from zero. Non-finite
/// inputs (and magnitudes beyond the decimal range) are returned unchanged;
/// they only arise from degenerate latitudes and are caught by the
/// hour-angle range check.
pub(crate) fn round4(value: f64) -> f64 {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };
    decimal
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value)
}

/// Normalizes a value into `[lower, upper]` by applying `adjuster` at most
/// once in either direction.
///
/// The pipeline's angle and hour normalizations never need more than one
/// wraparound, so a single conditional adjustment is deliberate; a modulo
/// here would hide an out-of-model input instead of surfacing it.
pub(crate) fn put_in_range(value: f64, lower: f64, upper: f64, adjuster: f64) -> f64 {
    if value > upper {
        value - adjuster
    } else if value < lower {
        value + adjuster
    } else {
        value
    }
}
