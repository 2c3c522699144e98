//! Hand-assembled encoded buffers.
//!
//! [`WireBuilder`] writes bytes exactly as given, without validation, so
//! tests can produce corrupt or out-of-limit buffers the codec would never
//! emit.

use binary_signal::byte_order::write_wire_u16;

/// Builder for raw encoded message buffers.
#[derive(Clone, Debug, Default)]
pub struct WireBuilder {
    bytes: Vec<u8>,
}

impl WireBuilder {
    /// Start a buffer whose leading byte declares `header_count` headers.
    #[must_use]
    pub fn new(header_count: u8) -> Self {
        Self {
            bytes: vec![header_count],
        }
    }

    /// Append a length-prefixed string field.
    ///
    /// # Panics
    ///
    /// Panics if `field` is longer than `u16::MAX` bytes.
    #[must_use]
    pub fn field(mut self, field: &[u8]) -> Self {
        let len = u16::try_from(field.len()).expect("field length must fit in u16");
        self.bytes.extend_from_slice(&write_wire_u16(len));
        self.bytes.extend_from_slice(field);
        self
    }

    /// Append a header as a name field followed by a value field.
    #[must_use]
    pub fn header(self, name: &str, value: &str) -> Self {
        self.field(name.as_bytes()).field(value.as_bytes())
    }

    /// Append bytes verbatim.
    #[must_use]
    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Return the assembled buffer.
    #[must_use]
    pub fn build(self) -> Vec<u8> { self.bytes }
}
