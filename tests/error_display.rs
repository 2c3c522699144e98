//! Tests for Display and conversion implementations on codec errors.

use std::io;

use binary_signal::{CodecError, InputError, StructureError, ValidationError};

#[test]
fn input_error_messages() {
    assert_eq!(
        CodecError::from(InputError::NullMessage).to_string(),
        "input error: message is absent"
    );
    assert_eq!(
        CodecError::from(InputError::NullData).to_string(),
        "input error: encoded value is absent"
    );
    assert_eq!(
        CodecError::from(InputError::EmptyData).to_string(),
        "input error: encoded value is empty"
    );
}

#[test]
fn validation_error_messages() {
    assert_eq!(
        CodecError::from(ValidationError::MissingPayload).to_string(),
        "validation error: invalid message format: missing payload"
    );
    assert_eq!(
        CodecError::from(ValidationError::TooManyHeaders { count: 64, max: 63 }).to_string(),
        "validation error: too many headers: 64 > 63"
    );
}

#[test]
fn structure_error_messages() {
    assert_eq!(
        CodecError::from(StructureError::DuplicateHeaderName {
            name: "route".to_owned()
        })
        .to_string(),
        "structure error: duplicate header name: route"
    );
}

#[test]
fn io_error_preserves_source_message() {
    let err: io::Error = CodecError::from(StructureError::TruncatedHeader {
        offset: 1,
        needed: 2,
        available: 0,
    })
    .into();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(
        err.to_string(),
        "truncated header at offset 1: need 2 bytes, have 0"
    );
}
