use branca_token::{current_timestamp, Error, TokenCodec};

fn main() {
    let key = b"supersecretkeyyoushouldnotcommit";
    let codec = TokenCodec::new(key).expect("Failed to construct codec");
    let now = current_timestamp();

    // A token minted just now passes any reasonable TTL
    let fresh = codec
        .encode(b"fresh-session", Some(now))
        .expect("Failed to encode");
    check_with_ttl(&codec, &fresh, "fresh token", 3600);

    // A token minted an hour ago fails a 60-second TTL
    let stale = codec
        .encode(b"stale-session", Some(now - 3600))
        .expect("Failed to encode");
    check_with_ttl(&codec, &stale, "hour-old token", 60);

    // The same stale token passes when the caller allows a day
    check_with_ttl(&codec, &stale, "hour-old token", 86400);

    // Without a TTL, age is not checked at all
    match codec.decode(&stale, None) {
        Ok(payload) => println!(
            "Decoded hour-old token without TTL: {}",
            String::from_utf8_lossy(&payload)
        ),
        Err(err) => println!("Failed to decode hour-old token without TTL: {err}"),
    }
}

/// Decode a token with a TTL and report the outcome
fn check_with_ttl(codec: &TokenCodec, token: &str, label: &str, ttl: u32) {
    match codec.decode(token, Some(ttl)) {
        Ok(_) => println!("{label} accepted with {ttl}s TTL"),
        Err(Error::Expired) => println!("{label} rejected with {ttl}s TTL: expired"),
        Err(err) => println!("{label} failed with {ttl}s TTL: {err}"),
    }
}
