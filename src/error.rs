//! Error types for the token library

use thiserror::Error;

/// Errors that can occur when constructing a codec or working with tokens
#[derive(Error, Debug)]
pub enum Error {
    /// Key length does not match the cipher's required key size
    #[error("invalid key size: expected 32 bytes, got {0}")]
    InvalidKeySize(usize),

    /// Token string contains characters outside the base62 alphabet
    #[error("base62 decoding error: {0}")]
    Encoding(#[from] base_x::DecodeError),

    /// Decoded binary is shorter than the 29-byte authenticated header
    #[error("malformed token: too short to contain a header")]
    MalformedToken,

    /// Header version byte does not match the supported format version
    #[error("unsupported token version: {0:#04x}")]
    UnsupportedVersion(u8),

    /// Authentication failed. This single kind covers tampering, a wrong key
    /// and truncated ciphertext alike, so error responses cannot be used as a
    /// decryption oracle.
    #[error("invalid token. The token's authentication tag does not verify")]
    InvalidToken,

    /// Token expired. The creation timestamp plus the requested TTL is in the past
    #[error("token is expired")]
    Expired,

    /// The cipher rejected its inputs during encryption
    #[error("encryption failed")]
    Cipher,

    /// The system random source failed to produce a nonce
    #[error("nonce generation failed: {0}")]
    Rng(#[from] getrandom::Error),
}
