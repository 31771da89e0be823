//! # Token header
//!
//! This module provides the fixed-size authenticated header that prefixes
//! every token.
//!
//! The header is 29 bytes: a version byte, the creation timestamp as a
//! big-endian u32, and the 24-byte cipher nonce. It travels in the clear but
//! is fed to the cipher as associated data, so any modification invalidates
//! the authentication tag.
//!
//! The timestamp is fixed-width big-endian so binary tokens sort
//! chronologically as raw bytes and the layout is unambiguous regardless of
//! the platform's native integer endianness.

use crate::constants::{HEADER_LEN, NONCE_LEN, TIMESTAMP_LEN, VERSION};
use crate::error::Error;

/// The authenticated header of a token.
///
/// Serialization is deterministic: the same fields always produce the same
/// 29 bytes. Parsing enforces exact field widths but does not gate on the
/// version byte; version policy belongs to the codec.
///
/// # Example
///
/// ```
/// use branca_token::{Header, VERSION};
///
/// let header = Header::new(123206400, [0u8; 24]);
/// let bytes = header.to_bytes();
/// assert_eq!(bytes.len(), 29);
/// assert_eq!(bytes[0], VERSION);
///
/// let parsed = Header::from_bytes(&bytes).expect("roundtrip");
/// assert_eq!(parsed.timestamp, 123206400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Format revision byte, [`VERSION`] for locally built headers
    pub version: u8,
    /// Token creation time in seconds since the Unix epoch
    pub timestamp: u32,
    /// Cipher nonce, unique per encryption under a given key
    pub nonce: [u8; NONCE_LEN],
}

impl Header {
    /// Create a header for a new token, stamped with the supported version.
    pub fn new(timestamp: u32, nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            version: VERSION,
            timestamp,
            nonce,
        }
    }

    /// Serialize the header into its 29-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0] = self.version;
        bytes[1..1 + TIMESTAMP_LEN].copy_from_slice(&self.timestamp.to_be_bytes());
        bytes[1 + TIMESTAMP_LEN..].copy_from_slice(&self.nonce);
        bytes
    }

    /// Parse a header from the first 29 bytes of a binary token.
    ///
    /// Fails with [`Error::MalformedToken`] if the input is shorter than the
    /// header. Extra trailing bytes are ignored so callers may pass the whole
    /// binary token.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::MalformedToken);
        }

        let mut timestamp = [0u8; TIMESTAMP_LEN];
        timestamp.copy_from_slice(&bytes[1..1 + TIMESTAMP_LEN]);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[1 + TIMESTAMP_LEN..HEADER_LEN]);

        Ok(Self {
            version: bytes[0],
            timestamp: u32::from_be_bytes(timestamp),
            nonce,
        })
    }
}
