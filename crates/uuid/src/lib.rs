//! Bluetooth UUID value type and codec.
//!
//! Services and attributes in the Bluetooth protocol stack are identified by
//! 128-bit UUIDs. Identifiers assigned by the Bluetooth SIG are 16-bit or
//! 32-bit values embedded into the 128-bit space through a fixed base UUID,
//! as described in the SDP specification.
//!
//! This crate provides:
//! - A fixed 16-byte value type ([`Uuid`]) with exact byte-wise equality and
//!   an all-zero "empty" sentinel.
//! - Reduction of base-derived UUIDs to their 16-bit and 32-bit short forms,
//!   and embedding of short identifiers into the base ([`Uuid::to_u16`],
//!   [`Uuid::from_u16`], and the 32-bit counterparts).
//! - The canonical textual representation, with a validating parser and a
//!   fixed-capacity render buffer ([`UuidString`]).
//!
//! ## Canonical text form
//! - Length: 36
//! - Pattern: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` — lowercase hex digits
//!   grouped 8-4-4-4-12, hyphens at offsets 8, 13, 18 and 23
//! - Example: `00001101-0000-1000-8000-00805f9b34fb` (the Serial Port
//!   service, 16-bit identifier `0x1101`)
//!
//! Notes:
//! - Rendering always produces lowercase hex. Parsing accepts hex digits of
//!   either case and ignores anything after the 36th character; shorter
//!   input or misplaced hyphens are rejected.
//! - [`Uuid::parse`] rejects non-hex characters inside the digit groups.
//!   [`Uuid::parse_lossy`] instead keeps the permissive prefix-parsing
//!   behaviour of older stacks; see its documentation before using it on
//!   untrusted input.
//!
//! ## Short forms
//! A UUID is *base-derived* when its last 12 bytes equal the last 12 bytes
//! of [`BASE_UUID`]. Only base-derived UUIDs carry a short form; reduction
//! of any other UUID fails rather than approximating.

mod text;
mod uuid;

// Re-export public types
pub use text::UuidString;
pub use uuid::{Uuid, BASE_UUID};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
