//! Size bounds applied to messages before encoding.
//!
//! The wire format fixes hard ceilings of 63 headers, 1023 bytes per header
//! name or value, and 256 KiB of payload. [`MessageLimits`] lets a host
//! application tighten these bounds, but values are always clamped back to
//! the ceilings.

use serde::{Deserialize, Serialize};

/// Maximum number of headers in a single message.
pub const MAX_HEADERS: usize = 63;

/// Maximum size in bytes of a header name or value.
pub const MAX_HEADER_SIZE: usize = 1023;

/// Maximum payload size in bytes (256 KiB).
pub const MAX_PAYLOAD_SIZE: usize = 256 * 1024;

/// Bounds enforced on a message before it is encoded.
///
/// Deserialised values pass through the same clamping as the builder
/// methods, so a configuration file can never widen the wire ceilings.
///
/// # Examples
///
/// ```
/// use binary_signal::limits::{MAX_PAYLOAD_SIZE, MessageLimits};
///
/// let limits = MessageLimits::default().with_max_payload_size(usize::MAX);
/// assert_eq!(limits.max_payload_size(), MAX_PAYLOAD_SIZE);
///
/// let limits = MessageLimits::default().with_max_headers(8);
/// assert_eq!(limits.max_headers(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLimits")]
pub struct MessageLimits {
    max_headers: usize,
    max_header_size: usize,
    max_payload_size: usize,
}

impl MessageLimits {
    /// Limits equal to the wire-format ceilings.
    pub const WIRE: Self = Self {
        max_headers: MAX_HEADERS,
        max_header_size: MAX_HEADER_SIZE,
        max_payload_size: MAX_PAYLOAD_SIZE,
    };

    /// Maximum number of headers accepted.
    #[must_use]
    pub const fn max_headers(&self) -> usize { self.max_headers }

    /// Maximum byte length of a header name or value.
    #[must_use]
    pub const fn max_header_size(&self) -> usize { self.max_header_size }

    /// Maximum payload length in bytes.
    #[must_use]
    pub const fn max_payload_size(&self) -> usize { self.max_payload_size }

    /// Set the header count bound, clamped to `0..=MAX_HEADERS`.
    #[must_use]
    pub fn with_max_headers(mut self, value: usize) -> Self {
        self.max_headers = value.min(MAX_HEADERS);
        self
    }

    /// Set the header field size bound, clamped to `1..=MAX_HEADER_SIZE`.
    #[must_use]
    pub fn with_max_header_size(mut self, value: usize) -> Self {
        self.max_header_size = value.clamp(1, MAX_HEADER_SIZE);
        self
    }

    /// Set the payload size bound, clamped to `1..=MAX_PAYLOAD_SIZE`.
    #[must_use]
    pub fn with_max_payload_size(mut self, value: usize) -> Self {
        self.max_payload_size = value.clamp(1, MAX_PAYLOAD_SIZE);
        self
    }
}

impl Default for MessageLimits {
    fn default() -> Self { Self::WIRE }
}

/// Unclamped mirror of [`MessageLimits`] used as the deserialisation target.
#[derive(Deserialize)]
#[serde(default)]
struct RawLimits {
    max_headers: usize,
    max_header_size: usize,
    max_payload_size: usize,
}

impl Default for RawLimits {
    fn default() -> Self {
        Self {
            max_headers: MAX_HEADERS,
            max_header_size: MAX_HEADER_SIZE,
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}

impl From<RawLimits> for MessageLimits {
    fn from(raw: RawLimits) -> Self {
        MessageLimits::WIRE
            .with_max_headers(raw.max_headers)
            .with_max_header_size(raw.max_header_size)
            .with_max_payload_size(raw.max_payload_size)
    }
}
