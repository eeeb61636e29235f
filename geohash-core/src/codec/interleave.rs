//! Bit interleaving of two 32-bit fractions into one 64-bit key.
//!
//! Latitude bit `i` lands on key bit `2i` (even positions), longitude bit
//! `i` on key bit `2i + 1` (odd positions). Every stored geohash depends on
//! this layout, so swapping the axes silently changes every encoded value.

/// Spreads the 32 bits of `x` over the even bit positions of a `u64`.
const fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Gathers the even bit positions of `x` back into a `u32`.
#[allow(clippy::cast_possible_truncation)]
const fn squash(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Interleaves a latitude and a longitude fraction into a 64-bit key.
///
/// # Examples
///
/// ```
/// use geohash_core::codec::interleave::interleave;
///
/// assert_eq!(interleave(1, 0), 0b01);
/// assert_eq!(interleave(0, 1), 0b10);
/// assert_eq!(interleave(u32::MAX, u32::MAX), u64::MAX);
/// ```
#[must_use]
pub const fn interleave(lat: u32, lng: u32) -> u64 {
    (spread(lng) << 1) | spread(lat)
}

/// Splits a 64-bit key back into `(lat, lng)` fractions.
///
/// Exact inverse of [`interleave`].
#[must_use]
pub const fn deinterleave(key: u64) -> (u32, u32) {
    (squash(key), squash(key >> 1))
}
