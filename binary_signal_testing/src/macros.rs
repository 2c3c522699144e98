//! Assertion macros shared by test helpers and integration tests.

/// Encode a message and panic with contextual diagnostics on failure.
#[macro_export]
macro_rules! encode_expect {
    ($message:expr) => {{
        ::binary_signal::encode($message)
            .expect(concat!("encode failed at ", file!(), ":", line!()))
    }};
    ($codec:expr, $message:expr) => {{
        ::binary_signal::MessageCodec::encode($codec, $message)
            .expect(concat!("encode failed at ", file!(), ":", line!()))
    }};
}

/// Decode a buffer and panic with contextual diagnostics on failure.
#[macro_export]
macro_rules! decode_expect {
    ($data:expr) => {{
        ::binary_signal::decode($data)
            .expect(concat!("decode failed at ", file!(), ":", line!()))
    }};
    ($codec:expr, $data:expr) => {{
        ::binary_signal::MessageCodec::decode($codec, $data)
            .expect(concat!("decode failed at ", file!(), ":", line!()))
    }};
}

pub use crate::{decode_expect, encode_expect};
