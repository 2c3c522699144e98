//! Integration tests for encoding and decoding complete messages.

use binary_signal::{
    CodecError,
    InputError,
    MAX_HEADER_SIZE,
    MAX_HEADERS,
    MAX_PAYLOAD_SIZE,
    Message,
    MessageCodec,
    MessageLimits,
    SimpleMessageCodec,
    StructureError,
    ValidationError,
    decode,
    encode,
};
use binary_signal_testing::{
    WireBuilder,
    decode_expect,
    empty_header_message,
    encode_expect,
    max_size_message,
    message_with_header_count,
    sample_message,
};
use rstest::rstest;

fn assert_same_message(decoded: &Message, original: &Message) {
    assert_eq!(
        decoded.headers().names().collect::<Vec<_>>(),
        original.headers().names().collect::<Vec<_>>()
    );
    assert_eq!(
        decoded.headers().values().collect::<Vec<_>>(),
        original.headers().values().collect::<Vec<_>>()
    );
    assert_eq!(decoded.payload(), original.payload());
}

#[rstest]
fn message_round_trips(sample_message: Message) {
    let bytes = encode_expect!(&sample_message);
    let decoded = decode_expect!(&bytes);
    assert_same_message(&decoded, &sample_message);
}

#[rstest]
fn message_without_headers_round_trips(empty_header_message: Message) {
    let bytes = encode_expect!(&empty_header_message);
    assert_eq!(bytes[0], 0);

    let decoded = decode_expect!(&bytes);
    assert!(decoded.headers().is_empty());
    assert_same_message(&decoded, &empty_header_message);
}

#[rstest]
fn maximum_size_message_round_trips(max_size_message: Message) {
    assert_eq!(max_size_message.headers().len(), MAX_HEADERS);
    assert!(
        max_size_message
            .headers()
            .iter()
            .all(|(name, value)| name.len() == MAX_HEADER_SIZE && value.len() == MAX_HEADER_SIZE)
    );

    let bytes = encode_expect!(&max_size_message);
    assert_eq!(
        bytes.len(),
        SimpleMessageCodec::encoded_len(&max_size_message)
    );

    let decoded = decode_expect!(&bytes);
    assert_same_message(&decoded, &max_size_message);
}

#[test]
fn header_order_survives_round_trip() {
    let message = Message::new(b"p".as_slice())
        .with_header("zeta", "1")
        .with_header("alpha", "2")
        .with_header("mid", "3");
    let decoded = decode_expect!(&encode_expect!(&message));
    assert_eq!(
        decoded.headers().names().collect::<Vec<_>>(),
        ["zeta", "alpha", "mid"]
    );
}

#[test]
fn encoding_matches_hand_assembled_bytes() {
    let expected = WireBuilder::new(2)
        .header("content-type", "sdp")
        .header("seq", "")
        .payload(&[0, 1, 2])
        .build();
    let message = Message::new(vec![0_u8, 1, 2])
        .with_header("content-type", "sdp")
        .with_header("seq", "");
    assert_eq!(encode_expect!(&message).as_ref(), expected.as_slice());
}

#[rstest]
#[case::empty_payload(Message::new(Vec::new()), ValidationError::MissingPayload)]
#[case::payload_checked_before_headers(
    Message::new(Vec::new()).with_header("Ä", "Value1"),
    ValidationError::MissingPayload
)]
#[case::non_ascii_header(
    Message::new(b"p".as_slice()).with_header("Ä", "Value1"),
    ValidationError::NonAsciiCharacter { field: "Ä".to_owned(), character: 'Ä' }
)]
#[case::too_many_headers(
    message_with_header_count(MAX_HEADERS + 1),
    ValidationError::TooManyHeaders { count: MAX_HEADERS + 1, max: MAX_HEADERS }
)]
#[case::payload_too_large(
    Message::new(vec![0_u8; MAX_PAYLOAD_SIZE + 1]),
    ValidationError::PayloadTooLarge { size: MAX_PAYLOAD_SIZE + 1, max: MAX_PAYLOAD_SIZE }
)]
#[case::header_too_large(
    Message::new(b"PayloadData".as_slice()).with_header("Header1", "A".repeat(MAX_HEADER_SIZE + 1)),
    ValidationError::HeaderTooLarge { size: MAX_HEADER_SIZE + 1, max: MAX_HEADER_SIZE }
)]
fn invalid_messages_are_rejected(#[case] message: Message, #[case] expected: ValidationError) {
    assert_eq!(encode(&message), Err(CodecError::Validation(expected)));
}

#[test]
fn empty_buffer_is_rejected() {
    assert_eq!(decode(&[]), Err(CodecError::Input(InputError::EmptyData)));
}

#[rstest]
fn corrupted_header_count_is_rejected(sample_message: Message) {
    let mut bytes = encode_expect!(&sample_message).to_vec();
    bytes[0] = 4;

    let err = decode(&bytes).expect_err("inflated header count");
    assert!(
        matches!(
            err,
            CodecError::Structure(StructureError::TruncatedHeader { .. })
        ),
        "expected TruncatedHeader, got {err:?}"
    );
    assert!(err.is_corrupt_data());
}

#[test]
fn duplicate_header_names_are_rejected() {
    let data = WireBuilder::new(2)
        .header("route", "a")
        .header("route", "b")
        .payload(b"x")
        .build();
    assert_eq!(
        decode(&data),
        Err(CodecError::Structure(StructureError::DuplicateHeaderName {
            name: "route".to_owned()
        }))
    );
}

#[test]
fn inflated_count_without_payload_reports_missing_payload() {
    // Header parsing stops at the end of the buffer, so an inflated count over
    // a header-only buffer surfaces as a missing payload.
    let data = WireBuilder::new(5).header("a", "b").build();
    assert_eq!(
        decode(&data),
        Err(CodecError::Validation(ValidationError::MissingPayload))
    );
}

#[test]
fn restricted_codec_rejects_what_default_accepts() {
    let codec = SimpleMessageCodec::new(MessageLimits::default().with_max_headers(2));
    let message = message_with_header_count(3);

    assert!(encode(&message).is_ok());
    assert_eq!(
        codec.encode(&message),
        Err(CodecError::Validation(ValidationError::TooManyHeaders {
            count: 3,
            max: 2
        }))
    );
}

#[test]
fn codec_works_through_trait_object() {
    let codec: Box<dyn MessageCodec> = Box::new(SimpleMessageCodec::default());
    let message = Message::new(b"dyn".as_slice()).with_header("via", "trait");
    let bytes = encode_expect!(codec.as_ref(), &message);
    assert_eq!(decode_expect!(codec.as_ref(), &bytes), message);
}
