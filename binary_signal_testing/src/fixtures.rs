//! `rstest` fixtures producing representative messages.

use binary_signal::{MAX_HEADER_SIZE, MAX_HEADERS, MAX_PAYLOAD_SIZE, Message};
use rstest::fixture;

/// Three short headers and an ASCII payload.
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn sample_message() -> Message {
    Message::new(b"PayloadData".as_slice())
        .with_header("Header1", "Value1")
        .with_header("Header2", "Value2")
        .with_header("Header3", "Value3")
}

/// A message without headers.
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn empty_header_message() -> Message { Message::new(b"PayloadData".as_slice()) }

/// The largest message the wire format allows.
///
/// Carries [`MAX_HEADERS`] headers whose names and values are exactly
/// [`MAX_HEADER_SIZE`] bytes, and a zero-filled payload of
/// [`MAX_PAYLOAD_SIZE`] bytes.
#[fixture]
pub fn max_size_message() -> Message {
    let mut message = Message::new(vec![0_u8; MAX_PAYLOAD_SIZE]);
    for i in 1..=MAX_HEADERS {
        let suffix = i.to_string();
        let pad = MAX_HEADER_SIZE - suffix.len();
        message.headers_mut().insert(
            format!("{}{suffix}", "N".repeat(pad)),
            format!("{}{suffix}", "V".repeat(pad)),
        );
    }
    message
}

/// A message with `count` distinct `HeaderN`/`ValueN` pairs.
#[fixture]
pub fn message_with_header_count(#[default(3)] count: usize) -> Message {
    let mut message = Message::new(b"PayloadData".as_slice());
    for i in 1..=count {
        message
            .headers_mut()
            .insert(format!("Header{i}"), format!("Value{i}"));
    }
    message
}
