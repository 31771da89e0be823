//! Token codec implementation
//!
//! [`TokenCodec`] is the only type callers need: it owns the secret key and
//! the version and TTL policy, and orchestrates the header, the cipher and
//! the base62 transcoding. Encoding and decoding are pure synchronous
//! computations over in-memory buffers, so a codec can be shared freely
//! between threads.

use std::fmt;

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use zeroize::Zeroize;

use crate::constants::{ALPHABET, HEADER_LEN, KEY_LEN, NONCE_LEN, VERSION};
use crate::error::Error;
use crate::header::Header;
use crate::utils::{Clock, SystemClock};

/// Secret-key codec for authenticated, timestamped bearer tokens.
///
/// A codec binds an opaque payload to its creation time, encrypts and
/// authenticates both together with XChaCha20-Poly1305, and renders the
/// result as a printable base62 string. Tokens are self-contained: no
/// server-side lookup table is needed to validate them.
///
/// The only state is the immutable 32-byte key, an optional deterministic
/// nonce for test vectors, and the injected clock. The key buffer is wiped
/// when the codec is dropped.
///
/// # Example
///
/// ```
/// use branca_token::TokenCodec;
///
/// let codec = TokenCodec::new(b"supersecretkeyyoushouldnotcommit")?;
///
/// let token = codec.encode(b"Hello world!", None)?;
/// let payload = codec.decode(&token, None)?;
/// assert_eq!(payload, b"Hello world!");
/// # Ok::<(), branca_token::Error>(())
/// ```
pub struct TokenCodec {
    key: [u8; KEY_LEN],
    nonce: Option<[u8; NONCE_LEN]>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl TokenCodec {
    /// Create a codec from a 32-byte secret key.
    ///
    /// Fails with [`Error::InvalidKeySize`] for any other length; no token is
    /// ever produced or accepted with a mis-sized key.
    ///
    /// # Example
    ///
    /// ```
    /// use branca_token::{Error, TokenCodec};
    ///
    /// assert!(TokenCodec::new(&[0u8; 32]).is_ok());
    /// assert!(matches!(
    ///     TokenCodec::new(&[0u8; 31]),
    ///     Err(Error::InvalidKeySize(31))
    /// ));
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        if key.len() != KEY_LEN {
            return Err(Error::InvalidKeySize(key.len()));
        }

        let mut key_bytes = [0u8; KEY_LEN];
        key_bytes.copy_from_slice(key);

        Ok(Self {
            key: key_bytes,
            nonce: None,
            clock: Box::new(SystemClock),
        })
    }

    /// Pin every encode to a fixed nonce instead of drawing fresh randomness.
    ///
    /// This exists to reproduce published test vectors. Nonce reuse under the
    /// same key breaks confidentiality, so a codec configured this way must
    /// never be used in production.
    ///
    /// # Example
    ///
    /// ```
    /// use branca_token::TokenCodec;
    ///
    /// let nonce = [
    ///     0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
    ///     0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
    /// ];
    /// let codec =
    ///     TokenCodec::new(b"supersecretkeyyoushouldnotcommit")?.with_deterministic_nonce(nonce);
    ///
    /// let token = codec.encode(b"Hello world!", Some(123206400))?;
    /// assert_eq!(
    ///     token,
    ///     "875GH233T7IYrxtgXxlQBYiFobZMQdHAT51vChKsAIYCFxZtL1evV54vYqLyZtQ0ekPHt8kJHQp0a"
    /// );
    /// # Ok::<(), branca_token::Error>(())
    /// ```
    pub fn with_deterministic_nonce(mut self, nonce: [u8; NONCE_LEN]) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Replace the system wall clock with an injected time source.
    ///
    /// Affects default timestamps on [`encode`](Self::encode) and TTL checks
    /// on [`decode`](Self::decode).
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Encode a payload into a token string.
    ///
    /// When `timestamp` is `None` the current wall-clock time is used.
    /// Caller-supplied values are used verbatim, including `0`.
    ///
    /// Each call draws a fresh 24-byte nonce from the system random source
    /// (unless a deterministic nonce was installed), builds the header,
    /// seals the payload with the header as associated data, and base62
    /// encodes `header ‖ ciphertext`.
    ///
    /// # Example
    ///
    /// ```
    /// use branca_token::TokenCodec;
    ///
    /// let codec = TokenCodec::new(b"supersecretkeyyoushouldnotcommit")?;
    /// let token = codec.encode(b"session:42", Some(123206400))?;
    /// assert_eq!(codec.timestamp(&token)?, 123206400);
    /// # Ok::<(), branca_token::Error>(())
    /// ```
    pub fn encode(&self, payload: &[u8], timestamp: Option<u32>) -> Result<String, Error> {
        let timestamp = timestamp.unwrap_or_else(|| self.clock.now());
        let nonce = self.next_nonce()?;

        let header = Header::new(timestamp, nonce);
        let head = header.to_bytes();

        let cipher = XChaCha20Poly1305::new(Key::from_slice(&self.key));
        let ciphertext = cipher
            .encrypt(
                XNonce::from_slice(&nonce),
                Payload {
                    msg: payload,
                    aad: &head,
                },
            )
            .map_err(|_| Error::Cipher)?;

        let mut raw = Vec::with_capacity(head.len() + ciphertext.len());
        raw.extend_from_slice(&head);
        raw.extend_from_slice(&ciphertext);

        Ok(base_x::encode(ALPHABET, &raw))
    }

    /// Decode a token string back into its payload.
    ///
    /// Validation is strictly ordered and short-circuits on the first
    /// failure; decryption is never attempted on structurally invalid input:
    ///
    /// 1. base62-decode ([`Error::Encoding`] on characters outside the
    ///    alphabet),
    /// 2. require at least a full header and split it off
    ///    ([`Error::MalformedToken`]),
    /// 3. gate on the version byte before any cryptographic work
    ///    ([`Error::UnsupportedVersion`]),
    /// 4. open the ciphertext with the header as associated data; every
    ///    cipher failure folds into [`Error::InvalidToken`],
    /// 5. when `ttl` is given, require `timestamp + ttl >= now`
    ///    ([`Error::Expired`]). The bound is inclusive, and the check runs
    ///    only after successful authentication so forgeries cannot probe for
    ///    expiry.
    ///
    /// # Example
    ///
    /// ```
    /// use branca_token::TokenCodec;
    ///
    /// let codec = TokenCodec::new(b"supersecretkeyyoushouldnotcommit")?;
    /// let token = codec.encode(b"Hello world!", None)?;
    ///
    /// // Accept tokens no older than an hour.
    /// let payload = codec.decode(&token, Some(3600))?;
    /// assert_eq!(payload, b"Hello world!");
    /// # Ok::<(), branca_token::Error>(())
    /// ```
    pub fn decode(&self, token: &str, ttl: Option<u32>) -> Result<Vec<u8>, Error> {
        let (header, payload) = self.open(token)?;

        if let Some(ttl) = ttl {
            // u64 arithmetic so timestamp + ttl cannot wrap.
            let expiry = u64::from(header.timestamp) + u64::from(ttl);
            if expiry < u64::from(self.clock.now()) {
                return Err(Error::Expired);
            }
        }

        Ok(payload)
    }

    /// Return the authenticated creation timestamp of a token.
    ///
    /// This performs the full decode path minus the TTL check, so the
    /// returned value is covered by the authentication tag. There is no
    /// unauthenticated peek: a token that fails authentication yields an
    /// error, never a timestamp.
    pub fn timestamp(&self, token: &str) -> Result<u32, Error> {
        let (header, _) = self.open(token)?;
        Ok(header.timestamp)
    }

    /// Base62-decode, split, version-gate and authenticate a token.
    fn open(&self, token: &str) -> Result<(Header, Vec<u8>), Error> {
        let raw = base_x::decode(ALPHABET, token)?;
        if raw.len() < HEADER_LEN {
            return Err(Error::MalformedToken);
        }

        let (head, ciphertext) = raw.split_at(HEADER_LEN);
        let header = Header::from_bytes(head)?;

        // Only the current version is accepted, and the gate runs before any
        // cipher call.
        if header.version != VERSION {
            return Err(Error::UnsupportedVersion(header.version));
        }

        let cipher = XChaCha20Poly1305::new(Key::from_slice(&self.key));
        let payload = cipher
            .decrypt(
                XNonce::from_slice(&header.nonce),
                Payload {
                    msg: ciphertext,
                    aad: head,
                },
            )
            .map_err(|_| Error::InvalidToken)?;

        Ok((header, payload))
    }

    fn next_nonce(&self) -> Result<[u8; NONCE_LEN], Error> {
        if let Some(nonce) = self.nonce {
            return Ok(nonce);
        }
        let mut nonce = [0u8; NONCE_LEN];
        getrandom::getrandom(&mut nonce)?;
        Ok(nonce)
    }
}

impl Drop for TokenCodec {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        f.debug_struct("TokenCodec")
            .field("key", &"[redacted]")
            .field("deterministic_nonce", &self.nonce.is_some())
            .finish()
    }
}
