//! Deterministic digests for identicon generation.
//!
//! The same input always yields the same 32-byte digest on every platform.
//! Feature extraction reads the digest as 64 lowercase hex characters.

use std::fmt;

use sha2::Sha256;

use crate::error::{IdenticonError, IdenticonResult};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Digest length in lowercase hex characters.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

// =============================================================================
// DigestAlgorithm
// =============================================================================

/// Hash function used to derive the digest.
///
/// Both algorithms produce 256 bits, so every decoder offset stays valid
/// whichever one is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestAlgorithm {
    /// SHA-256 (the reference behavior)
    #[default]
    Sha256,
    /// BLAKE3 with 32-byte output
    Blake3,
}

impl DigestAlgorithm {
    /// Short lowercase name, used in log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Digest
// =============================================================================

/// A 256-bit digest together with its lowercase hex encoding.
///
/// Immutable once built. Decoders only ever borrow [`Digest::as_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LEN],
    hex: String,
}

impl Digest {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        let hex = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self { bytes, hex }
    }

    /// Parse a 64-character lowercase hex string.
    ///
    /// ```
    /// use glyphid::hash::Digest;
    ///
    /// let digest = Digest::from_hex(&"ab".repeat(32)).unwrap();
    /// assert_eq!(digest.as_bytes()[0], 0xab);
    /// ```
    pub fn from_hex(hex: &str) -> IdenticonResult<Self> {
        if hex.len() != DIGEST_HEX_LEN {
            return Err(IdenticonError::malformed(format!(
                "expected {} hex characters, found {}",
                DIGEST_HEX_LEN,
                hex.len()
            )));
        }
        if let Some(pos) = hex.bytes().position(|b| !matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(IdenticonError::malformed(format!(
                "non-lowercase-hex character at offset {}",
                pos
            )));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &hex[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| IdenticonError::InvalidHex { offset: i * 2 })?;
        }

        Ok(Self {
            bytes,
            hex: hex.to_string(),
        })
    }

    /// Get the raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Get the lowercase hex encoding (always 64 characters).
    #[inline]
    pub fn as_hex(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

// =============================================================================
// DigestHasher - Builder Pattern
// =============================================================================

enum HasherState {
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

/// Incremental digest builder over either supported algorithm.
pub struct DigestHasher {
    inner: HasherState,
}

impl DigestHasher {
    /// Create a new hasher for `algorithm`
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let inner = match algorithm {
            DigestAlgorithm::Sha256 => HasherState::Sha256(<Sha256 as sha2::Digest>::new()),
            DigestAlgorithm::Blake3 => HasherState::Blake3(Box::new(blake3::Hasher::new())),
        };
        Self { inner }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        match &mut self.inner {
            HasherState::Sha256(h) => sha2::Digest::update(h, data),
            HasherState::Blake3(h) => {
                h.update(data);
            }
        }
        self
    }

    /// Update with a string (UTF-8 bytes)
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update(s.as_bytes())
    }

    /// Finish and return the digest
    pub fn finish(self) -> Digest {
        let mut bytes = [0u8; DIGEST_LEN];
        match self.inner {
            HasherState::Sha256(h) => bytes.copy_from_slice(&sha2::Digest::finalize(h)),
            HasherState::Blake3(h) => bytes = *h.finalize().as_bytes(),
        }
        Digest::from_bytes(bytes)
    }
}

impl Default for DigestHasher {
    fn default() -> Self {
        Self::new(DigestAlgorithm::default())
    }
}

/// Hash `input` with SHA-256.
pub fn hash(input: &str) -> Digest {
    hash_with(DigestAlgorithm::Sha256, input)
}

/// Hash `input` with the given algorithm.
pub fn hash_with(algorithm: DigestAlgorithm, input: &str) -> Digest {
    DigestHasher::new(algorithm).update_str(input).finish()
}
