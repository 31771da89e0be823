//! Tests for the token codec

use crate::{
    constants::{ALPHABET, HEADER_LEN, TAG_LEN},
    error::Error,
    token::TokenCodec,
    utils::{current_timestamp, Clock},
    VERSION,
};
use ct_codecs::{Decoder, Hex};

const KEY: &[u8] = b"supersecretkeyyoushouldnotcommit";

/// Nonce from the published test-vector corpus (a 12-byte pattern twice).
fn vector_nonce() -> [u8; 24] {
    let bytes = Hex::decode_to_vec("0102030405060708090a0b0c0102030405060708090a0b0c", None)
        .expect("Failed to decode nonce hex");
    let mut nonce = [0u8; 24];
    nonce.copy_from_slice(&bytes);
    nonce
}

fn vector_codec() -> TokenCodec {
    TokenCodec::new(KEY)
        .expect("Failed to construct codec")
        .with_deterministic_nonce(vector_nonce())
}

/// Clock pinned to a fixed instant for deterministic TTL checks.
struct FixedClock(u32);

impl Clock for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}

#[test]
fn test_hello_world_vector() {
    let codec = vector_codec();

    let token = codec
        .encode(b"Hello world!", Some(123206400))
        .expect("Failed to encode");
    assert_eq!(
        token,
        "875GH233T7IYrxtgXxlQBYiFobZMQdHAT51vChKsAIYCFxZtL1evV54vYqLyZtQ0ekPHt8kJHQp0a"
    );

    let payload = codec.decode(&token, None).expect("Failed to decode");
    assert_eq!(payload, b"Hello world!");
    assert_eq!(
        codec.timestamp(&token).expect("Failed to read timestamp"),
        123206400
    );
}

#[test]
fn test_leading_zero_payload_vector() {
    let codec = vector_codec();
    let payload = Hex::decode_to_vec("00000000000000ff", None).expect("Failed to decode hex");

    let token = codec
        .encode(&payload, Some(123206400))
        .expect("Failed to encode");
    assert_eq!(
        token,
        "1jJDJOEeG2FutA8g7NAOHK4Mh5RIE8jtbXd63uYbrFDSR06dtQl9o2gZYhBa36nZHXVfiGFz"
    );

    let decoded = codec.decode(&token, None).expect("Failed to decode");
    assert_eq!(decoded, payload);
}

#[test]
fn test_wrong_version_token_rejected() {
    // Same binary token as the hello-world vector but with version byte 0xBB.
    let token = "89mvl3RZe7RwH2x4azVg5V2B7X2NtG4V2YLxHAB3oFc6gyeICmCKAOCQ7Y0n08klY33eQWACd7cSZ";
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    match codec.decode(token, None) {
        Err(Error::UnsupportedVersion(version)) => assert_eq!(version, 0xBB),
        other => panic!("Expected UnsupportedVersion error, got {other:?}"),
    }
}

#[test]
fn test_vector_token_expired_with_ttl() {
    let codec = vector_codec();
    let token = codec
        .encode(b"Hello world!", Some(123206400))
        .expect("Failed to encode");

    // The vector timestamp is in 1973, so any reasonable TTL has lapsed.
    match codec.decode(&token, Some(3600)) {
        Err(Error::Expired) => {}
        other => panic!("Expected Expired error, got {other:?}"),
    }
}

#[test]
fn test_round_trip_with_random_nonce() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    let token = codec.encode(b"Hello world!", None).expect("Failed to encode");
    let payload = codec.decode(&token, None).expect("Failed to decode");
    assert_eq!(payload, b"Hello world!");

    // Fresh nonces make every encode distinct even for identical inputs.
    let other = codec.encode(b"Hello world!", None).expect("Failed to encode");
    assert_ne!(token, other);
}

#[test]
fn test_round_trip_non_utf8_payload() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");
    let payload = [0xff, 0xfe, 0x00, 0xba, 0x80, 0x01];

    let token = codec.encode(&payload, Some(0)).expect("Failed to encode");
    let decoded = codec.decode(&token, None).expect("Failed to decode");
    assert_eq!(decoded, payload);
}

#[test]
fn test_empty_payload() {
    let codec = vector_codec();

    let token = codec.encode(b"", Some(123206400)).expect("Failed to encode");
    let raw = base_x::decode(ALPHABET, &token).expect("Failed to decode base62");

    // An empty payload leaves exactly the authentication tag after the header.
    assert_eq!(raw.len(), HEADER_LEN + TAG_LEN);
    assert_eq!(codec.decode(&token, None).expect("Failed to decode"), b"");
}

#[test]
fn test_zero_timestamp_used_verbatim() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    let token = codec.encode(b"Hello world!", Some(0)).expect("Failed to encode");
    assert_eq!(codec.timestamp(&token).expect("Failed to read timestamp"), 0);
}

#[test]
fn test_default_timestamp_comes_from_clock() {
    let codec = TokenCodec::new(KEY)
        .expect("Failed to construct codec")
        .with_clock(FixedClock(1234567890));

    let token = codec.encode(b"payload", None).expect("Failed to encode");
    assert_eq!(
        codec.timestamp(&token).expect("Failed to read timestamp"),
        1234567890
    );
}

#[test]
fn test_key_size_validation() {
    for len in [0, 31, 33] {
        match TokenCodec::new(&vec![0u8; len]) {
            Err(Error::InvalidKeySize(got)) => assert_eq!(got, len),
            other => panic!("Expected InvalidKeySize for {len}-byte key, got {other:?}"),
        }
    }
    assert!(TokenCodec::new(&[0u8; 32]).is_ok());
}

#[test]
fn test_characters_outside_alphabet() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    let result = codec.decode("875GH233T7_not_base62_!", None);
    assert!(
        matches!(result, Err(Error::Encoding(_))),
        "Expected Encoding error, got {result:?}"
    );
}

#[test]
fn test_token_shorter_than_header() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    // 10 binary bytes cannot hold the 29-byte header.
    let short = base_x::encode(ALPHABET, &[0xBA; 10]);
    match codec.decode(&short, None) {
        Err(Error::MalformedToken) => {}
        other => panic!("Expected MalformedToken error, got {other:?}"),
    }
}

#[test]
fn test_version_gate_runs_before_decryption() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    // Structurally complete token with an unknown version and garbage
    // ciphertext. The version gate must fire, not the cipher.
    let mut raw = vec![0x00];
    raw.extend_from_slice(&123206400u32.to_be_bytes());
    raw.extend_from_slice(&[0x07; 24]);
    raw.extend_from_slice(&[0xAA; 16]);

    let token = base_x::encode(ALPHABET, &raw);
    match codec.decode(&token, None) {
        Err(Error::UnsupportedVersion(version)) => assert_eq!(version, 0x00),
        other => panic!("Expected UnsupportedVersion error, got {other:?}"),
    }
}

#[test]
fn test_tampering_with_version_byte() {
    let codec = vector_codec();
    let token = codec
        .encode(b"Hello world!", Some(123206400))
        .expect("Failed to encode");

    let mut raw = base_x::decode(ALPHABET, &token).expect("Failed to decode base62");
    raw[0] ^= 0x01;

    let tampered = base_x::encode(ALPHABET, &raw);
    match codec.decode(&tampered, None) {
        Err(Error::UnsupportedVersion(version)) => assert_eq!(version, VERSION ^ 0x01),
        other => panic!("Expected UnsupportedVersion error, got {other:?}"),
    }
}

#[test]
fn test_tampering_with_any_other_region() {
    let codec = vector_codec();
    let token = codec
        .encode(b"Hello world!", Some(123206400))
        .expect("Failed to encode");
    let raw = base_x::decode(ALPHABET, &token).expect("Failed to decode base62");

    // One offset in each authenticated region: timestamp, nonce, ciphertext
    // and tag.
    let offsets = [1, 4, 5, 28, HEADER_LEN, raw.len() - TAG_LEN, raw.len() - 1];
    for offset in offsets {
        let mut tampered_raw = raw.clone();
        tampered_raw[offset] ^= 0x01;

        let tampered = base_x::encode(ALPHABET, &tampered_raw);
        match codec.decode(&tampered, None) {
            Err(Error::InvalidToken) => {}
            other => panic!("Expected InvalidToken for flipped byte {offset}, got {other:?}"),
        }
    }
}

#[test]
fn test_wrong_key_rejected() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");
    let wrong = TokenCodec::new(b"00000000000000000000000000000000")
        .expect("Failed to construct codec");

    let token = codec.encode(b"Hello world!", None).expect("Failed to encode");
    match wrong.decode(&token, None) {
        Err(Error::InvalidToken) => {}
        other => panic!("Expected InvalidToken error, got {other:?}"),
    }
}

#[test]
fn test_ttl_boundary_is_inclusive() {
    let timestamp = 123206400;
    let ttl = 3600;

    // Exactly at the boundary: timestamp + ttl == now must succeed.
    let at_boundary = TokenCodec::new(KEY)
        .expect("Failed to construct codec")
        .with_clock(FixedClock(timestamp + ttl));
    let token = at_boundary
        .encode(b"Hello world!", Some(timestamp))
        .expect("Failed to encode");
    assert_eq!(
        at_boundary
            .decode(&token, Some(ttl))
            .expect("Boundary decode should succeed"),
        b"Hello world!"
    );

    // One second past the boundary must fail.
    let past_boundary = TokenCodec::new(KEY)
        .expect("Failed to construct codec")
        .with_clock(FixedClock(timestamp + ttl + 1));
    match past_boundary.decode(&token, Some(ttl)) {
        Err(Error::Expired) => {}
        other => panic!("Expected Expired error, got {other:?}"),
    }
}

#[test]
fn test_ttl_addition_does_not_overflow() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");

    // A huge TTL on a recent token wraps u32 but must still be accepted.
    let token = codec
        .encode(b"Hello world!", Some(current_timestamp()))
        .expect("Failed to encode");
    assert!(codec.decode(&token, Some(u32::MAX)).is_ok());
}

#[test]
fn test_timestamp_requires_authentication() {
    let codec = vector_codec();
    let token = codec
        .encode(b"Hello world!", Some(123206400))
        .expect("Failed to encode");

    let mut raw = base_x::decode(ALPHABET, &token).expect("Failed to decode base62");
    let last = raw.len() - 1;
    raw[last] ^= 0x01;

    // The header still parses, but the accessor must refuse to return an
    // unauthenticated timestamp.
    let tampered = base_x::encode(ALPHABET, &raw);
    match codec.timestamp(&tampered) {
        Err(Error::InvalidToken) => {}
        other => panic!("Expected InvalidToken error, got {other:?}"),
    }
}

#[test]
fn test_codecs_with_same_key_interoperate() {
    let issuer = TokenCodec::new(KEY).expect("Failed to construct codec");
    let verifier = TokenCodec::new(KEY).expect("Failed to construct codec");

    let token = issuer.encode(b"shared-secret", None).expect("Failed to encode");
    assert_eq!(
        verifier.decode(&token, None).expect("Failed to decode"),
        b"shared-secret"
    );
}

#[test]
fn test_debug_output_redacts_key() {
    let codec = TokenCodec::new(KEY).expect("Failed to construct codec");
    let debug = format!("{codec:?}");
    assert!(debug.contains("redacted"));
    assert!(!debug.contains("supersecret"));
}
