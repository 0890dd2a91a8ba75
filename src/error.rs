//! Error types for glyphid.
//!
//! Every failure is detected before the surface is touched, so an error
//! never leaves a partially drawn identicon behind.

use thiserror::Error;

/// Errors that can occur while configuring or generating an identicon.
#[derive(Debug, Error)]
pub enum IdenticonError {
    /// Grid size is zero or would read past the end of the digest
    #[error("invalid grid size {size}: {reason}")]
    InvalidGridSize {
        /// Requested side length
        size: usize,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A decoder read extends past the end of the hex digest
    #[error("digest read at offset {offset} (width {width}) exceeds digest length {len}")]
    DigestOutOfRange {
        /// First hex character read
        offset: usize,
        /// Number of hex characters read
        width: usize,
        /// Length of the hex digest
        len: usize,
    },

    /// A non-hex character was found where hex digits were expected
    #[error("invalid hex digit in digest at offset {offset}")]
    InvalidHex {
        /// Offset of the first character of the failed read
        offset: usize,
    },

    /// A hex digest string could not be accepted as a `Digest`
    #[error("malformed digest: {0}")]
    MalformedDigest(String),

    /// The drawing surface is empty or not square
    #[error("surface must be square and non-empty, got {width}x{height}")]
    InvalidSurface {
        /// Surface width in pixels
        width: u32,
        /// Surface height in pixels
        height: u32,
    },

    /// An explicit boundary cell lies outside the grid
    #[error("boundary cell ({row}, {col}) lies outside a {size}x{size} grid")]
    BoundaryOutsideGrid {
        /// Cell row
        row: usize,
        /// Cell column
        col: usize,
        /// Grid side length
        size: usize,
    },

    /// The hard-coded boundary set was combined with a grid it was not made for
    #[error("fixed boundary set is only defined for a 5x5 grid, got {size}x{size}")]
    FixedBoundaryGridSize {
        /// Grid side length
        size: usize,
    },
}

/// Result type alias for identicon operations.
pub type IdenticonResult<T> = Result<T, IdenticonError>;

impl IdenticonError {
    /// Create a malformed-digest error with a message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDigest(msg.into())
    }

    /// Whether this error stems from configuration rather than input data.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGridSize { .. }
                | Self::InvalidSurface { .. }
                | Self::BoundaryOutsideGrid { .. }
                | Self::FixedBoundaryGridSize { .. }
        )
    }
}
