//! Internal implementation of the UUID value type and text codec.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Length of the canonical text form, in characters.
pub(crate) const CANONICAL_LEN: usize = 36;

/// Zero-based offsets of the four hyphens in the canonical form.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// The Bluetooth base UUID, `00000000-0000-1000-8000-00805f9b34fb`.
///
/// Identifiers assigned by the Bluetooth SIG occupy bytes 0–3 of a UUID
/// whose remaining bytes match this constant. See [`Uuid::from_u16`] and
/// [`Uuid::to_u16`].
pub const BASE_UUID: Uuid = Uuid([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0x80, 0x5f, 0x9b, 0x34,
    0xfb,
]);

/// A 128-bit Bluetooth UUID.
///
/// This is a plain 16-byte value in network byte order: byte 0 is rendered
/// first in the canonical text form and is the high-order byte of the 32-bit
/// short form. Equality, hashing and copying operate on the bytes exactly;
/// there is no identity beyond them.
///
/// The all-zero value is reserved as an "unset" sentinel and is available as
/// [`Uuid::EMPTY`]. It is an ordinary value, not a distinguished type; use
/// [`Uuid::is_empty`] to test for it.
///
/// # Construction
/// - [`Uuid::parse`] validates a canonical text form (see [`Uuid::parse_lossy`]
///   for the permissive variant).
/// - [`Uuid::from_u16`] / [`Uuid::from_u32`] embed a SIG-assigned short
///   identifier into the base UUID.
/// - [`Uuid::from_bytes`] wraps raw bytes as-is.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero UUID, reserved as an "unset" sentinel.
    pub const EMPTY: Uuid = Uuid([0; 16]);

    /// Wraps 16 raw bytes, in network byte order.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the 16 raw bytes, in network byte order.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Embeds a 16-bit SIG-assigned identifier into the base UUID.
    ///
    /// The identifier lands in bytes 2–3; bytes 0–1 are zero. This is the
    /// exact inverse of [`Uuid::to_u16`].
    pub const fn from_u16(value: u16) -> Self {
        Self::from_u32(value as u32)
    }

    /// Embeds a 32-bit SIG-assigned identifier into the base UUID.
    ///
    /// The identifier lands in bytes 0–3, high-order byte first. This is the
    /// exact inverse of [`Uuid::to_u32`].
    pub const fn from_u32(value: u32) -> Self {
        let mut bytes = BASE_UUID.0;
        bytes[0] = (value >> 24) as u8;
        bytes[1] = (value >> 16) as u8;
        bytes[2] = (value >> 8) as u8;
        bytes[3] = value as u8;
        Self(bytes)
    }

    /// Parses the canonical text form, rejecting malformed hex.
    ///
    /// The input must be at least 36 characters long with a literal `-` at
    /// offsets 8, 13, 18 and 23; anything after the 36th character is
    /// ignored. Each of the 16 bytes is read as two hex digits (either
    /// case), skipping the four fixed hyphens.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if the input is too short, has a
    /// misplaced hyphen, or contains a non-hex character inside a digit
    /// group.
    pub fn parse(input: &str) -> UuidResult<Self> {
        Self::parse_text(input, true)
    }

    /// Parses the canonical text form, tolerating malformed hex.
    ///
    /// Length and hyphen validation are identical to [`Uuid::parse`], but a
    /// digit pair containing a non-hex character contributes only its
    /// leading hex digits: `"4z"` reads as `0x04` and `"zz"` as `0x00`.
    /// This matches the prefix-parsing behaviour of older stacks and exists
    /// for compatibility with peers that rely on it; prefer [`Uuid::parse`]
    /// for untrusted input.
    pub fn parse_lossy(input: &str) -> UuidResult<Self> {
        Self::parse_text(input, false)
    }

    fn parse_text(input: &str, strict: bool) -> UuidResult<Self> {
        let text = input.as_bytes();

        if text.len() < CANONICAL_LEN {
            return Err(UuidError::InvalidInput(format!(
                "UUID text must be at least {} characters, got {}: '{}'",
                CANONICAL_LEN,
                text.len(),
                input
            )));
        }
        for &offset in &HYPHEN_OFFSETS {
            if text[offset] != b'-' {
                return Err(UuidError::InvalidInput(format!(
                    "UUID text must have '-' at offset {}, got: '{}'",
                    offset, input
                )));
            }
        }

        let mut bytes = [0u8; 16];
        let mut at = 0;
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = match (hex_value(text[at]), hex_value(text[at + 1])) {
                (Some(hi), Some(lo)) => (hi << 4) | lo,
                _ if strict => {
                    return Err(UuidError::InvalidInput(format!(
                        "UUID text has a non-hex digit at offset {}: '{}'",
                        at, input
                    )));
                }
                // Lossy mode keeps the leading run of hex digits in the pair.
                (Some(hi), None) => hi,
                (None, _) => 0,
            };
            at += 2;
            // The hyphens sit after byte groups 0..4, 4..6, 6..8 and 8..10.
            if matches!(i, 3 | 5 | 7 | 9) {
                at += 1;
            }
        }
        Ok(Self(bytes))
    }

    /// Returns true if every byte is zero (the "unset" sentinel).
    ///
    /// An absent UUID counts as unset too; the combined test is
    /// `opt.map_or(true, Uuid::is_empty)` for an `Option<&Uuid>`.
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Reduces a base-derived UUID to its 16-bit short form.
    ///
    /// Succeeds only when bytes 4–15 match [`BASE_UUID`]; the value is read
    /// from bytes 2–3 with byte 2 high. Bytes 0–1 do not affect
    /// reducibility and are not part of the result.
    ///
    /// # Returns
    ///
    /// `Some(short)` for a base-derived UUID, `None` otherwise.
    pub fn to_u16(&self) -> Option<u16> {
        if !self.is_base_derived() {
            return None;
        }
        Some(u16::from_be_bytes([self.0[2], self.0[3]]))
    }

    /// Reduces a base-derived UUID to its 32-bit short form.
    ///
    /// Succeeds only when bytes 4–15 match [`BASE_UUID`]; the value is read
    /// from bytes 0–3 with byte 0 high.
    ///
    /// # Returns
    ///
    /// `Some(short)` for a base-derived UUID, `None` otherwise.
    pub fn to_u32(&self) -> Option<u32> {
        if !self.is_base_derived() {
            return None;
        }
        Some(u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]))
    }

    /// Returns true if bytes 4–15 match the base UUID.
    fn is_base_derived(&self) -> bool {
        self.0[4..] == BASE_UUID.0[4..]
    }
}

/// Decodes one hex digit, either case.
fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Uuid {
    /// Formats the UUID in canonical form: 36 characters, lowercase hex,
    /// hyphens at offsets 8, 13, 18 and 23.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12],
            b[13], b[14], b[15]
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses a canonical UUID string. Equivalent to [`Uuid::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if the string is not a valid
    /// canonical form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    /// Serializes as the canonical 36-character string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    /// Deserializes from the canonical string form via the strict parser.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
