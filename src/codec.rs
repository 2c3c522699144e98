//! Binary codec for signalling messages.
//!
//! A message is encoded as a single header-count byte, then each header as a
//! length-prefixed name followed by a length-prefixed value, then the raw
//! payload:
//!
//! ```text
//! [u8 count][u16 name_len][name][u16 value_len][value] ... [payload]
//! ```
//!
//! Length prefixes are unsigned 16-bit little-endian integers. There is no
//! magic number or version byte; any buffer with this shape decodes.
//!
//! # Error Handling
//!
//! Both directions run the [`validator`](crate::validator) first and fail
//! fast with a [`CodecError`]. See the [`error`] module for the taxonomy.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    byte_order::{LENGTH_PREFIX_SIZE, read_wire_u16, write_wire_u16},
    limits::MessageLimits,
    message::{Headers, Message},
    validator::{validate_encoded, validate_message},
};

pub mod error;

pub use error::{CodecError, InputError, StructureError, ValidationError};

/// Size of the leading header-count field.
pub const HEADER_COUNT_SIZE: usize = 1;

/// Bidirectional conversion between [`Message`] values and their wire bytes.
///
/// Implementations hold no mutable state, so a single instance may be shared
/// across threads.
pub trait MessageCodec: Send + Sync {
    /// Encode `message` into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the message fails validation.
    fn encode(&self, message: &Message) -> Result<Bytes, CodecError>;

    /// Decode a message from `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the buffer is empty or structurally
    /// invalid.
    fn decode(&self, data: &[u8]) -> Result<Message, CodecError>;
}

/// Default [`MessageCodec`] implementation.
///
/// Limits only apply when encoding. Decoding trusts the structure of the
/// buffer and does not re-check header counts or sizes.
///
/// # Examples
///
/// ```
/// use binary_signal::{
///     codec::{MessageCodec, SimpleMessageCodec},
///     message::Message,
/// };
///
/// let codec = SimpleMessageCodec::default();
/// let message = Message::new(b"hello".as_slice()).with_header("to", "peer-7");
///
/// let bytes = codec.encode(&message).expect("valid message");
/// assert_eq!(bytes[0], 1);
/// assert_eq!(codec.decode(&bytes).expect("valid bytes"), message);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleMessageCodec {
    limits: MessageLimits,
}

impl SimpleMessageCodec {
    /// Construct a codec enforcing `limits` on encode.
    #[must_use]
    pub const fn new(limits: MessageLimits) -> Self { Self { limits } }

    /// Return the limits enforced by this codec.
    #[must_use]
    pub const fn limits(&self) -> &MessageLimits { &self.limits }

    /// Number of bytes `message` occupies once encoded.
    ///
    /// The result is meaningful only for messages that pass validation.
    #[must_use]
    pub fn encoded_len(message: &Message) -> usize {
        let headers: usize = message
            .headers()
            .iter()
            .map(|(name, value)| 2 * LENGTH_PREFIX_SIZE + name.len() + value.len())
            .sum();
        HEADER_COUNT_SIZE + headers + message.payload().len()
    }

    fn put_string(&self, buf: &mut BytesMut, value: &str) -> Result<(), ValidationError> {
        let len = u16::try_from(value.len()).map_err(|_| ValidationError::HeaderTooLarge {
            size: value.len(),
            max: self.limits.max_header_size(),
        })?;
        buf.put_slice(&write_wire_u16(len));
        buf.put_slice(value.as_bytes());
        Ok(())
    }
}

impl MessageCodec for SimpleMessageCodec {
    fn encode(&self, message: &Message) -> Result<Bytes, CodecError> {
        validate_message(Some(message), &self.limits)?;

        let headers = message.headers();
        let count = u8::try_from(headers.len()).map_err(|_| ValidationError::TooManyHeaders {
            count: headers.len(),
            max: self.limits.max_headers(),
        })?;

        let mut buf = BytesMut::with_capacity(Self::encoded_len(message));
        buf.put_u8(count);
        for (name, value) in headers.iter() {
            self.put_string(&mut buf, name)?;
            self.put_string(&mut buf, value)?;
        }
        buf.put_slice(message.payload());

        tracing::trace!(
            headers = headers.len(),
            payload_len = message.payload().len(),
            encoded_len = buf.len(),
            "encoded message"
        );
        Ok(buf.freeze())
    }

    fn decode(&self, data: &[u8]) -> Result<Message, CodecError> {
        validate_encoded(Some(data))?;

        let mut reader = WireReader::new(data);
        let header_count = usize::from(reader.read_u8()?);
        let mut headers = Headers::with_capacity(header_count);

        while !reader.is_exhausted() && headers.len() < header_count {
            let name = reader.read_string()?;
            let value = reader.read_string()?;
            if headers.contains(&name) {
                return Err(StructureError::DuplicateHeaderName { name }.into());
            }
            headers.insert(name, value);
        }

        if reader.is_exhausted() {
            return Err(ValidationError::MissingPayload.into());
        }
        let payload = Bytes::copy_from_slice(reader.remaining());

        tracing::trace!(
            headers = headers.len(),
            payload_len = payload.len(),
            encoded_len = data.len(),
            "decoded message"
        );
        Ok(Message::from_parts(headers, payload))
    }
}

/// Forward-only cursor over an encoded buffer.
struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    fn new(data: &'a [u8]) -> Self { Self { data, pos: 0 } }

    fn is_exhausted(&self) -> bool { self.pos >= self.data.len() }

    fn remaining(&self) -> &'a [u8] { self.data.get(self.pos..).unwrap_or_default() }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], StructureError> {
        let available = self.data.len().saturating_sub(self.pos);
        let Some(bytes) = self.data.get(self.pos..self.pos.saturating_add(needed)) else {
            return Err(StructureError::TruncatedHeader {
                offset: self.pos,
                needed,
                available,
            });
        };
        self.pos += needed;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, StructureError> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    fn read_string(&mut self) -> Result<String, StructureError> {
        let prefix = self.take(LENGTH_PREFIX_SIZE)?;
        let len = read_wire_u16([prefix[0], prefix[1]]);
        let bytes = self.take(usize::from(len))?;
        // Bytes above 0x7f decode as '?', matching an ASCII text decoder.
        Ok(bytes
            .iter()
            .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
            .collect())
    }
}

/// Encode `message` with the default [`MessageLimits`].
///
/// # Errors
///
/// See [`MessageCodec::encode`].
pub fn encode(message: &Message) -> Result<Bytes, CodecError> {
    SimpleMessageCodec::default().encode(message)
}

/// Decode a message from `data`.
///
/// # Errors
///
/// See [`MessageCodec::decode`].
pub fn decode(data: &[u8]) -> Result<Message, CodecError> {
    SimpleMessageCodec::default().decode(data)
}
