//! Base-32 rendering of interleaved keys.
//!
//! Characters are taken most-significant 5-bit chunk first. Twelve
//! characters cover the top 60 bits of the key; the low 4 bits (bits 0 and
//! 1 of each axis fraction) are dropped on encode and read back as zero.

use super::error::{CodecError, Result};

/// The geohash alphabet: digits and lowercase letters minus `a`, `i`, `l`, `o`.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Maximum (and canonical) geohash length.
pub const MAX_LENGTH: usize = 12;

/// Bits carried by one geohash character.
const BITS_PER_CHAR: usize = 5;

/// Reverse lookup from ASCII byte to alphabet index, `0xFF` for invalid.
#[allow(clippy::cast_possible_truncation)]
const DECODE_TABLE: [u8; 128] = {
    let mut table = [0xFF_u8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the alphabet index of `c`, if it belongs to the alphabet.
#[must_use]
pub fn index_of(c: char) -> Option<u8> {
    let code = usize::try_from(u32::from(c)).ok()?;
    DECODE_TABLE.get(code).copied().filter(|&i| i != 0xFF)
}

/// Renders the top `5 * len` bits of `key` as `len` characters.
///
/// `len` is clamped to `1..=12`.
#[must_use]
pub fn key_to_string(key: u64, len: usize) -> String {
    let len = len.clamp(1, MAX_LENGTH);
    let mut value = key;
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let chunk = (value >> (64 - BITS_PER_CHAR)) as usize;
        out.push(char::from(ALPHABET[chunk]));
        value <<= BITS_PER_CHAR;
    }
    out
}

/// Checks that `hash` has a usable length and only alphabet characters.
///
/// Fails on the first character outside the alphabet, reporting its
/// character index.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] for a bad character, or
/// [`CodecError::InvalidLength`] if `hash` is empty or longer than 12.
///
/// # Examples
///
/// ```
/// use geohash_core::codec::{validate, CodecError};
///
/// assert!(validate("w7er87fpgd52").is_ok());
/// assert_eq!(
///     validate("w7ea"),
///     Err(CodecError::InvalidCharacter { character: 'a', index: 3 })
/// );
/// ```
pub fn validate(hash: &str) -> Result<()> {
    let mut len = 0;
    for (index, character) in hash.chars().enumerate() {
        if index_of(character).is_none() {
            return Err(CodecError::InvalidCharacter { character, index });
        }
        len = index + 1;
    }
    if len == 0 || len > MAX_LENGTH {
        return Err(CodecError::InvalidLength(len));
    }
    Ok(())
}

/// Parses a geohash back into a left-aligned 64-bit key.
///
/// The accumulated `5 * len` bits are shifted left by `64 - 5 * len` (4 for
/// a full-length hash), so unread low bits are zero.
///
/// # Errors
///
/// Same as [`validate`].
pub fn string_to_key(hash: &str) -> Result<u64> {
    validate(hash)?;

    let mut key = 0_u64;
    let mut len = 0;
    for character in hash.chars() {
        // validate() guarantees every character is in the alphabet
        let index = index_of(character).unwrap_or_default();
        key = (key << BITS_PER_CHAR) | u64::from(index);
        len += 1;
    }
    Ok(key << (64 - BITS_PER_CHAR * len))
}
