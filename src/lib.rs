#![doc(html_root_url = "https://docs.rs/binary_signal/latest")]
//! Public API for the `binary_signal` library.
//!
//! This crate provides a compact binary wire format for signalling messages
//! made of ordered ASCII headers and an opaque payload, together with the
//! validation rules that bound header count, header size and payload size.
//!
//! ```
//! use binary_signal::{Message, decode, encode};
//!
//! let message = Message::new(b"offer".as_slice()).with_header("session", "42");
//! let bytes = encode(&message).expect("valid message");
//! assert_eq!(decode(&bytes).expect("valid bytes"), message);
//! ```

pub mod byte_order;
pub mod codec;
pub mod limits;
pub mod message;
pub mod validator;

pub use codec::{
    CodecError,
    InputError,
    MessageCodec,
    SimpleMessageCodec,
    StructureError,
    ValidationError,
    decode,
    encode,
};
pub use limits::{MAX_HEADER_SIZE, MAX_HEADERS, MAX_PAYLOAD_SIZE, MessageLimits};
pub use message::{Headers, Message};
