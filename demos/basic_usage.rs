use branca_token::{current_timestamp, Error, TokenCodec};

fn main() {
    // Secret key for encoding and decoding; must be exactly 32 bytes
    let key = b"supersecretkeyyoushouldnotcommit";

    let codec = TokenCodec::new(key).expect("Failed to construct codec");

    // Issue a token carrying an opaque payload, stamped with the current time
    let token = issue_session_token(&codec, "user:42");
    println!("Issued token ({} characters):", token.len());
    println!("  {token}");

    // A holder of the same key can recover the payload and creation time
    redeem_session_token(&codec, &token);

    // Binary payloads work just as well as text
    let binary_payload = [0x00, 0x00, 0xba, 0xff];
    let binary_token = codec
        .encode(&binary_payload, None)
        .expect("Failed to encode binary payload");
    let recovered = codec
        .decode(&binary_token, None)
        .expect("Failed to decode binary payload");
    println!("Binary payload round-tripped: {recovered:?}");

    // Tokens from an unknown key are rejected without detail
    let stranger = TokenCodec::new(b"anotherverysecret32bytekey......")
        .expect("Failed to construct codec");
    match stranger.decode(&token, None) {
        Err(Error::InvalidToken) => println!("Stranger's decode rejected, as expected"),
        other => println!("Unexpected result for stranger's decode: {other:?}"),
    }
}

/// Encode a payload with the current wall-clock timestamp
fn issue_session_token(codec: &TokenCodec, payload: &str) -> String {
    codec
        .encode(payload.as_bytes(), None)
        .expect("Failed to encode token")
}

/// Decode a token and print what it carries
fn redeem_session_token(codec: &TokenCodec, token: &str) {
    let payload = match codec.decode(token, None) {
        Ok(payload) => payload,
        Err(err) => {
            println!("Failed to decode token: {err}");
            return;
        }
    };

    let issued_at = codec
        .timestamp(token)
        .expect("Failed to read token timestamp");

    println!("Successfully decoded token");
    println!("  Payload: {}", String::from_utf8_lossy(&payload));
    println!(
        "  Issued at: {} ({} seconds ago)",
        issued_at,
        current_timestamp() - issued_at
    );
}
