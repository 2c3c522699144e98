//! Pre-flight checks run before every encode and decode.
//!
//! [`validate_message`] enforces the message invariants against a set of
//! [`MessageLimits`]. [`validate_encoded`] only rejects absent or empty
//! buffers; structural corruption is detected while decoding.
//!
//! Both functions accept `Option` so that a transport handing over nothing
//! gets a classified error instead of a panic.

use crate::{
    codec::{CodecError, InputError, ValidationError},
    limits::MessageLimits,
    message::Message,
};

/// Check a message against `limits`.
///
/// Checks run in a fixed order and the first violation is returned:
/// absent message, empty payload, header count, payload size, then each
/// header name followed by its value (character set before size).
///
/// # Errors
///
/// Returns [`InputError::NullMessage`] when `message` is `None`, or the
/// first [`ValidationError`] the message triggers.
///
/// # Examples
///
/// ```
/// use binary_signal::{
///     codec::{CodecError, ValidationError},
///     limits::MessageLimits,
///     message::Message,
///     validator::validate_message,
/// };
///
/// let limits = MessageLimits::default();
/// let message = Message::new(b"ok".as_slice()).with_header("Ä", "v");
/// let err = validate_message(Some(&message), &limits).expect_err("non-ASCII name");
/// assert!(matches!(
///     err,
///     CodecError::Validation(ValidationError::NonAsciiCharacter { character: 'Ä', .. })
/// ));
/// ```
pub fn validate_message(
    message: Option<&Message>,
    limits: &MessageLimits,
) -> Result<(), CodecError> {
    let message = message.ok_or(InputError::NullMessage)?;

    let payload_len = message.payload().len();
    if payload_len == 0 {
        return Err(ValidationError::MissingPayload.into());
    }

    let header_count = message.headers().len();
    if header_count > limits.max_headers() {
        return Err(ValidationError::TooManyHeaders {
            count: header_count,
            max: limits.max_headers(),
        }
        .into());
    }

    if payload_len > limits.max_payload_size() {
        return Err(ValidationError::PayloadTooLarge {
            size: payload_len,
            max: limits.max_payload_size(),
        }
        .into());
    }

    for (name, value) in message.headers().iter() {
        validate_header_field(name, limits)?;
        validate_header_field(value, limits)?;
    }

    Ok(())
}

/// Check that an encoded buffer is present and non-empty.
///
/// # Errors
///
/// Returns [`InputError::NullData`] for `None` and [`InputError::EmptyData`]
/// for a zero-length buffer.
pub fn validate_encoded(data: Option<&[u8]>) -> Result<(), CodecError> {
    match data {
        None => Err(InputError::NullData.into()),
        Some([]) => Err(InputError::EmptyData.into()),
        Some(_) => Ok(()),
    }
}

fn validate_header_field(field: &str, limits: &MessageLimits) -> Result<(), ValidationError> {
    if let Some(character) = field.chars().find(|c| !c.is_ascii()) {
        return Err(ValidationError::NonAsciiCharacter {
            field: field.to_owned(),
            character,
        });
    }
    // ASCII text is one byte per character.
    if field.len() > limits.max_header_size() {
        return Err(ValidationError::HeaderTooLarge {
            size: field.len(),
            max: limits.max_header_size(),
        });
    }
    Ok(())
}
