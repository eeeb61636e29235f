//! Fixed-point mapping between degrees and 32-bit fractions of an axis.
//!
//! A fraction `f` stands for the position `min + f / 2^32 * (max - min)`.
//! Mapping floors, so every fraction names the lower edge of a cell that is
//! `(max - min) / 2^32` degrees wide.

/// `2^32` as a float, the size of the fraction space.
const FRACTION_SPACE: f64 = 4_294_967_296.0;

/// Maps `value` in `[min, max]` onto the full `u32` range.
///
/// Computes `floor(2^32 * (value - min) / (max - min))`. The upper bound
/// itself would be `2^32`, one past `u32::MAX`; the float-to-int cast
/// saturates, so `max` lands on `u32::MAX` rather than wrapping to zero.
///
/// Values outside `[min, max]` are the caller's problem; they saturate to
/// `0` or `u32::MAX`.
///
/// # Examples
///
/// ```
/// use geohash_core::codec::mapper::map_to_fraction;
///
/// assert_eq!(map_to_fraction(-90.0, -90.0, 90.0), 0);
/// assert_eq!(map_to_fraction(0.0, -90.0, 90.0), 0x8000_0000);
/// assert_eq!(map_to_fraction(90.0, -90.0, 90.0), u32::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn map_to_fraction(value: f64, min: f64, max: f64) -> u32 {
    (FRACTION_SPACE * ((value - min) / (max - min))).floor() as u32
}

/// Inverse of [`map_to_fraction`]: `min + fraction / 2^32 * (max - min)`.
///
/// The result is the lower edge of the fraction's cell, so a round trip
/// loses at most `(max - min) / 2^32` degrees.
#[must_use]
pub fn unmap_from_fraction(fraction: u32, min: f64, max: f64) -> f64 {
    f64::from(fraction) / FRACTION_SPACE * (max - min) + min
}
