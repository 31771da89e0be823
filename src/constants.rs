//! # Constants for the token wire format
//!
//! This module centralizes the fixed field widths and magic values of the
//! binary token layout. Byte offsets before text encoding:
//!
//! ```text
//! [0]      version (0xBA)
//! [1..5)   timestamp, big-endian u32, seconds since the Unix epoch
//! [5..29)  nonce (24 bytes)
//! [29..)   ciphertext followed by the 16-byte authentication tag
//! ```

/// Magic version byte identifying the token format revision.
///
/// Exactly one version is accepted by a codec instance; any other value is
/// rejected before decryption is attempted.
pub const VERSION: u8 = 0xBA;

/// Required secret key length in bytes (XChaCha20-Poly1305 key size).
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes (XChaCha20-Poly1305 extended nonce size).
pub const NONCE_LEN: usize = 24;

/// Width of the big-endian creation timestamp field.
pub const TIMESTAMP_LEN: usize = 4;

/// Length of the authenticated header: version byte, timestamp, nonce.
pub const HEADER_LEN: usize = 1 + TIMESTAMP_LEN + NONCE_LEN;

/// Length of the Poly1305 authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Alphabet for the base62 text encoding of binary tokens.
///
/// Leading zero bytes in the binary token map to leading `0` symbols, so the
/// conversion is lossless in both directions.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
