//! Geohash codec.
//!
//! Converts a (latitude, longitude) pair into a 12-character geohash and
//! back:
//!
//! ```text
//! "lat, lng" → Coordinate → (u32, u32) fractions → u64 key → "w7er87fpgd52"
//! ```
//!
//! - [`mapper`] rescales each axis onto the full `u32` range
//! - [`interleave`] merges the two fractions (latitude on even bits,
//!   longitude on odd bits)
//! - [`base32`] renders the key with the alphabet
//!   `0123456789bcdefghjkmnpqrstuvwxyz`, most-significant chunk first
//!
//! Decoding runs the same steps backwards after [`validate`] has checked
//! every character, so a malformed string never reaches the bit twiddling.
//!
//! # Precision
//!
//! Twelve characters keep 60 of the 64 key bits, i.e. 30 bits per axis.
//! A decoded point is the south-west corner of its cell and lies within
//! `range / 2^30` of the encoded one: about 1.7e-7 degrees of latitude and
//! 3.4e-7 degrees of longitude.
//!
//! # Example Usage
//!
//! ```
//! use geohash_core::codec::{decode, encode, Coordinate};
//!
//! let hanoi: Coordinate = "21.0278, 105.8342".parse().unwrap();
//! let hash = encode(hanoi);
//! assert_eq!(hash, "w7er87fpgd52");
//!
//! let back = decode(&hash).unwrap();
//! assert!((back.latitude() - 21.0278).abs() < 1e-4);
//! assert!((back.longitude() - 105.8342).abs() < 1e-4);
//! ```

pub mod base32;
pub mod error;
pub mod interleave;
pub mod mapper;
pub mod types;

pub use base32::{validate, ALPHABET, MAX_LENGTH};
pub use error::{CodecError, Result};
pub use types::{Axis, Coordinate, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

use log::trace;

use self::interleave::{deinterleave, interleave};
use self::mapper::{map_to_fraction, unmap_from_fraction};

/// Encodes a coordinate as a full-length (12 character) geohash.
#[must_use]
pub fn encode(coord: Coordinate) -> String {
    encode_with_length(coord, MAX_LENGTH)
}

/// Encodes a coordinate and keeps the first `len` characters.
///
/// `len` is clamped to `1..=12`. A shorter hash is always a prefix of the
/// full one, so it names the enclosing coarser cell.
///
/// # Examples
///
/// ```
/// use geohash_core::codec::{encode_with_length, Coordinate};
///
/// let coord = Coordinate::new(21.0278, 105.8342).unwrap();
/// assert_eq!(encode_with_length(coord, 5), "w7er8");
/// ```
#[must_use]
pub fn encode_with_length(coord: Coordinate, len: usize) -> String {
    let lat = map_to_fraction(coord.latitude(), MIN_LAT, MAX_LAT);
    let lng = map_to_fraction(coord.longitude(), MIN_LNG, MAX_LNG);
    let key = interleave(lat, lng);
    let hash = base32::key_to_string(key, len);
    trace!("encoded {coord} as {hash} (key {key:#018x})");
    hash
}

/// Encodes raw degrees, validating them first.
///
/// # Errors
///
/// Returns [`CodecError::Range`] if either value is outside its axis range
/// or not finite.
pub fn encode_lat_lng(latitude: f64, longitude: f64) -> Result<String> {
    Coordinate::new(latitude, longitude).map(encode)
}

/// Decodes a geohash of 1 to 12 characters into the south-west corner of
/// its cell.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] for the first character outside
/// the alphabet, or [`CodecError::InvalidLength`] for an empty or over-long
/// string. Nothing is decoded when validation fails.
pub fn decode(hash: &str) -> Result<Coordinate> {
    let key = base32::string_to_key(hash)?;
    let (lat, lng) = deinterleave(key);
    let latitude = unmap_from_fraction(lat, MIN_LAT, MAX_LAT);
    let longitude = unmap_from_fraction(lng, MIN_LNG, MAX_LNG);
    trace!("decoded {hash} (key {key:#018x}) as {latitude}, {longitude}");
    // Fractions below 2^32 always unmap inside the axis ranges.
    Coordinate::new(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn encode_known_vector() {
        assert_eq!(encode(coord(21.0278, 105.8342)), "w7er87fpgd52");
    }

    #[test]
    fn encode_san_francisco() {
        assert_eq!(encode(coord(37.7749, -122.4194)), "9q8yyk8ytpxr");
    }

    #[test]
    fn decode_known_vector() {
        let decoded = decode("w7er87fpgd52").unwrap();
        assert!((decoded.latitude() - 21.0278).abs() < 1e-4);
        assert!((decoded.longitude() - 105.8342).abs() < 1e-4);
    }

    #[test]
    fn encode_origin() {
        assert_eq!(encode(coord(0.0, 0.0)), "s00000000000");
    }

    #[test]
    fn encode_corners() {
        assert_eq!(encode(coord(-90.0, -180.0)), "000000000000");
        assert_eq!(encode(coord(90.0, 180.0)), "zzzzzzzzzzzz");
    }

    #[test]
    fn decode_corners_stay_near_corners() {
        let south_west = decode("000000000000").unwrap();
        assert_eq!(south_west, coord(-90.0, -180.0));

        let north_east = decode(&encode(coord(90.0, 180.0))).unwrap();
        assert!((north_east.latitude() - 90.0).abs() < 1e-6);
        assert!((north_east.longitude() - 180.0).abs() < 1e-6);
    }

    #[test]
    fn prefix_decodes_to_cell_corner() {
        assert_eq!(decode("s").unwrap(), coord(0.0, 0.0));
        assert_eq!(decode("w").unwrap(), coord(0.0, 90.0));
    }

    #[test]
    fn shorter_hash_is_prefix_of_longer() {
        let c = coord(-33.8688, 151.2093);
        let full = encode(c);
        for len in 1..MAX_LENGTH {
            assert!(full.starts_with(&encode_with_length(c, len)));
        }
    }

    #[test]
    fn encode_lat_lng_validates() {
        assert_eq!(encode_lat_lng(21.0278, 105.8342).unwrap(), "w7er87fpgd52");
        assert!(matches!(
            encode_lat_lng(-90.5, 0.0),
            Err(CodecError::Range { .. })
        ));
    }

    #[test]
    fn decode_rejects_invalid_character_before_decoding() {
        assert_eq!(
            decode("w7er87fpgd5i"),
            Err(CodecError::InvalidCharacter {
                character: 'i',
                index: 11
            })
        );
    }

    #[test]
    fn reencoding_a_decoded_hash_is_stable() {
        let hash = encode(coord(48.8566, 2.3522));
        assert_eq!(encode(decode(&hash).unwrap()), hash);
    }
}
