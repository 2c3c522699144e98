//! Helpers for explicit wire byte-order conversions.
//!
//! Every multi-byte integer in the message format is little-endian. These
//! helpers keep Clippy expectations scoped to the conversion points so codec
//! code stays explicit about wire endianness without repeating lint
//! annotations.

/// Size in bytes of a string length prefix.
pub const LENGTH_PREFIX_SIZE: usize = std::mem::size_of::<u16>();

/// Serialise a `u16` in wire byte order (little-endian).
///
/// # Examples
///
/// ```
/// use binary_signal::byte_order::write_wire_u16;
///
/// assert_eq!(write_wire_u16(0x1234), [0x34, 0x12]);
/// ```
#[must_use]
pub fn write_wire_u16(value: u16) -> [u8; 2] {
    #[expect(
        clippy::little_endian_bytes,
        reason = "The message wire format stores lengths little-endian."
    )]
    value.to_le_bytes()
}

/// Parse a wire-order `u16` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use binary_signal::byte_order::read_wire_u16;
///
/// assert_eq!(read_wire_u16([0x34, 0x12]), 0x1234);
/// ```
#[must_use]
pub fn read_wire_u16(bytes: [u8; 2]) -> u16 {
    #[expect(
        clippy::little_endian_bytes,
        reason = "The message wire format stores lengths little-endian."
    )]
    u16::from_le_bytes(bytes)
}
