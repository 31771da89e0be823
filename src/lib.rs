//! # Branca Tokens
//!
//! A Rust implementation of authenticated, timestamped bearer tokens: a
//! secret-key envelope that binds an opaque payload to its creation time,
//! encrypts and authenticates both together with XChaCha20-Poly1305, and
//! encodes the result as a printable base62 string.
//!
//! ## Overview
//!
//! Tokens are self-contained, so applications can issue session tokens,
//! signed links or short-lived credentials without a server-side lookup
//! table. The binary layout before text encoding is:
//!
//! ```text
//! [VERSION(1)][TIMESTAMP(4, big-endian)][NONCE(24)][CIPHERTEXT(N)][TAG(16)]
//! ```
//!
//! The first 29 bytes form the header. It travels in the clear but is fed to
//! the cipher as associated data, so tampering with the version, timestamp or
//! nonce invalidates the token just as surely as tampering with the
//! ciphertext.
//!
//! ## Features
//!
//! - XChaCha20-Poly1305 authenticated encryption (256-bit key, 192-bit
//!   nonce, 128-bit tag) with the full header as associated data
//! - Base62 text encoding safe for URLs, cookies and HTTP headers
//! - Embedded big-endian creation timestamp; binary tokens sort
//!   chronologically as raw bytes
//! - Optional per-decode TTL with an inclusive expiry bound
//! - Version gating before any cryptographic work
//! - A deliberately coarse [`Error::InvalidToken`] for all authentication
//!   failures, so callers cannot be turned into a decryption oracle
//!
//! ## Basic Example
//!
//! ```rust
//! use branca_token::TokenCodec;
//!
//! // The key must be exactly 32 bytes.
//! let codec = TokenCodec::new(b"supersecretkeyyoushouldnotcommit")
//!     .expect("Failed to construct codec");
//!
//! // Encode with the current wall-clock time.
//! let token = codec.encode(b"Hello world!", None).expect("Failed to encode");
//!
//! // Decode, accepting only tokens issued within the last hour.
//! let payload = codec.decode(&token, Some(3600)).expect("Failed to decode");
//! assert_eq!(payload, b"Hello world!");
//!
//! // The creation timestamp is available after authentication.
//! let issued_at = codec.timestamp(&token).expect("Failed to read timestamp");
//! assert!(issued_at > 0);
//! ```
//!
//! ## Nonce Policy
//!
//! Every encode draws a fresh random 24-byte nonce from the operating
//! system. The extended nonce makes random generation safe even at very high
//! volumes per key. [`TokenCodec::with_deterministic_nonce`] pins the nonce
//! for reproducing published test vectors and must never be used in
//! production, since nonce reuse under the same key breaks confidentiality.
//!
//! ## Error Handling
//!
//! `decode` is all-or-nothing and reports the first failure it hits, in
//! validation order: [`Error::Encoding`], [`Error::MalformedToken`],
//! [`Error::UnsupportedVersion`], [`Error::InvalidToken`], then
//! [`Error::Expired`]. Expiry is only reported for tokens that authenticate,
//! so legitimate holders get an actionable error while forgers learn
//! nothing. None of these are transient; the library never retries and never
//! logs.

pub mod constants;
pub mod error;
pub mod header;
pub mod token;
pub mod utils;

pub use constants::{ALPHABET, HEADER_LEN, KEY_LEN, NONCE_LEN, TAG_LEN, TIMESTAMP_LEN, VERSION};
pub use error::Error;
pub use header::Header;
pub use token::TokenCodec;
pub use utils::{current_timestamp, Clock, SystemClock};

#[cfg(test)]
mod tests;
