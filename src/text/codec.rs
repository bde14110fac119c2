//! The encoding descriptor shared by the UTF-8, UTF-16 and UTF-32 codecs.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::code_point::{MAX_SUPPORTED_CODE_POINT, MAX_UNICODE_CODE_POINT};
use super::cursor::{Appender, BoundsCheck, Cursor};
use super::error::UtfError;
use super::unit::CodeUnit;

/// Runtime tag identifying an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
}

impl Encoding {
    /// Width of one code unit in bytes.
    pub const fn unit_width(self) -> usize {
        match self {
            Self::Utf8 => 1,
            Self::Utf16 => 2,
            Self::Utf32 => 4,
        }
    }

    /// The encoding whose code units are `width` bytes wide.
    pub const fn from_unit_width(width: usize) -> Option<Self> {
        match width {
            1 => Some(Self::Utf8),
            2 => Some(Self::Utf16),
            4 => Some(Self::Utf32),
            _ => None,
        }
    }

    /// Largest code point the encoding can represent.
    pub const fn max_code_point(self) -> u32 {
        match self {
            Self::Utf8 | Self::Utf32 => MAX_SUPPORTED_CODE_POINT,
            Self::Utf16 => MAX_UNICODE_CODE_POINT,
        }
    }

    /// Most units a single symbol can occupy.
    pub const fn max_supported_symbol_size(self) -> usize {
        match self {
            Self::Utf8 => 6,
            Self::Utf16 => 2,
            Self::Utf32 => 1,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16 => write!(f, "UTF-16"),
            Self::Utf32 => write!(f, "UTF-32"),
        }
    }
}

/// A stateless codec for one encoding.
///
/// Implementors are zero-sized marker types; all operations are associated
/// functions. Reading goes through a [`Cursor`] and consults a
/// [`BoundsCheck`] before every continuation unit, so one implementation
/// serves null-terminated, bounded and random-access input alike.
pub trait Utf {
    /// Code unit type of the encoding.
    type Unit: CodeUnit;

    /// Runtime tag of the encoding.
    const ENCODING: Encoding;

    /// Largest code point [`write`](Utf::write) accepts.
    const MAX_CODE_POINT: u32;

    /// Most units a symbol needs for code points up to U+10FFFF.
    const MAX_UNICODE_SYMBOL_SIZE: usize;

    /// Most units a symbol can occupy (extended range included).
    const MAX_SUPPORTED_SYMBOL_SIZE: usize;

    /// Skip over the symbol at `cursor` and return its length in units.
    ///
    /// Only the lead unit is inspected; `bounds` is consulted before each
    /// continuation unit is skipped.
    fn size_of_symbol<C, B>(cursor: &mut C, bounds: &mut B) -> Result<usize, UtfError>
    where
        C: Cursor<Unit = Self::Unit>,
        B: BoundsCheck<C> + ?Sized;

    /// Decode the symbol at `cursor`, leaving the cursor after it.
    fn read<C, B>(cursor: &mut C, bounds: &mut B) -> Result<u32, UtfError>
    where
        C: Cursor<Unit = Self::Unit>,
        B: BoundsCheck<C> + ?Sized;

    /// Encode `cp` and append its units to `out`.
    ///
    /// Nothing is appended when encoding fails.
    fn write<A>(cp: u32, out: &mut A) -> Result<(), UtfError>
    where
        A: Appender<Self::Unit> + ?Sized;

    /// Number of units [`write`](Utf::write) would append for `cp`.
    fn encoded_len(cp: u32) -> Result<usize, UtfError>;
}
