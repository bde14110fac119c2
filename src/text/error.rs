//! Error types for decoding, encoding and transcoding.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of failure raised by a codec.
///
/// Every codec operation fails synchronously with one of these; nothing is
/// retried and nothing is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UtfError {
    /// A unit appeared in lead position that cannot start a symbol.
    ///
    /// UTF-8: `0x80-0xBF`, `0xFE`, `0xFF`. UTF-16: a low surrogate.
    InvalidLeadUnit,

    /// A unit following a multi-unit lead does not have the required pattern.
    ///
    /// UTF-8: not `10xx_xxxx`. UTF-16: not a low surrogate.
    InvalidContinuationUnit,

    /// The declared end of input was reached inside a multi-unit symbol.
    TruncatedInput,

    /// The code point is too large for the destination encoding.
    UnsupportedCodePoint,

    /// A surrogate code point was presented to the UTF-16 encoder.
    SurrogateCodePointRejected,
}

impl fmt::Display for UtfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLeadUnit => write!(f, "invalid lead code unit"),
            Self::InvalidContinuationUnit => write!(f, "invalid continuation code unit"),
            Self::TruncatedInput => write!(f, "not enough input to complete symbol"),
            Self::UnsupportedCodePoint => {
                write!(f, "code point not representable in target encoding")
            }
            Self::SurrogateCodePointRejected => write!(f, "surrogate code point in UTF-16 output"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UtfError {}

/// A [`UtfError`] together with the position of the symbol that caused it.
///
/// Returned by the slice-level helpers in [`select`](super::select).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedError {
    /// Offset (in source code units, 0-indexed) of the first unit of the
    /// failing symbol.
    pub offset: usize,
    /// The kind of error.
    pub kind: UtfError,
}

impl fmt::Display for LocatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at unit {}", self.kind, self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LocatedError {}
