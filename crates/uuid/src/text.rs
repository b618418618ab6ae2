//! Fixed-capacity holder for one canonical UUID rendering.

use crate::uuid::{Uuid, CANONICAL_LEN};
use std::fmt;

/// Bytes backing a holder: the canonical form plus a NUL terminator.
const HOLDER_LEN: usize = CANONICAL_LEN + 1;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// An owned, fixed-capacity buffer dedicated to one canonical UUID string.
///
/// The buffer is exactly large enough for the 36-character canonical form
/// and a terminator, so rendering into it cannot truncate and never fails.
/// Callers read it only through [`UuidString::as_str`]; a freshly
/// constructed holder is zero-filled and reads as the empty string.
///
/// The holder exists for call sites that render repeatedly into the same
/// place. For one-off formatting, `Uuid`'s `Display` impl produces the same
/// 36 characters.
#[derive(Clone, PartialEq, Eq)]
pub struct UuidString {
    buf: [u8; HOLDER_LEN],
}

impl UuidString {
    /// Creates an empty, zero-filled holder.
    pub fn new() -> Self {
        Self {
            buf: [0; HOLDER_LEN],
        }
    }

    /// Renders `uuid` into the holder, replacing any previous contents.
    pub fn set(&mut self, uuid: &Uuid) {
        let mut at = 0;
        for (i, &byte) in uuid.as_bytes().iter().enumerate() {
            self.buf[at] = HEX_DIGITS[usize::from(byte >> 4)];
            self.buf[at + 1] = HEX_DIGITS[usize::from(byte & 0x0f)];
            at += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                self.buf[at] = b'-';
                at += 1;
            }
        }
        self.buf[at] = 0;
    }

    /// Returns the rendered text, without the terminator.
    pub fn as_str(&self) -> &str {
        let len = self
            .buf
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(CANONICAL_LEN);
        // set only ever writes ASCII hex digits and hyphens
        std::str::from_utf8(&self.buf[..len]).expect("holder contains ASCII only")
    }
}

impl Default for UuidString {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for UuidString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UuidString").field(&self.as_str()).finish()
    }
}
