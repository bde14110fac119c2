//! UTF-32 codec.
//!
//! Every code point is one unit. Reading never fails; writing only rejects
//! values above [`MAX_SUPPORTED_CODE_POINT`]. Surrogates pass through.

use super::code_point::MAX_SUPPORTED_CODE_POINT;
use super::codec::{Encoding, Utf};
use super::cursor::{Appender, BoundsCheck, Cursor};
use super::error::UtfError;

/// The UTF-32 codec (native-endian `u32` units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

impl Utf for Utf32 {
    type Unit = u32;

    const ENCODING: Encoding = Encoding::Utf32;
    const MAX_CODE_POINT: u32 = MAX_SUPPORTED_CODE_POINT;
    const MAX_UNICODE_SYMBOL_SIZE: usize = 1;
    const MAX_SUPPORTED_SYMBOL_SIZE: usize = 1;

    #[inline(always)]
    fn size_of_symbol<C, B>(cursor: &mut C, _bounds: &mut B) -> Result<usize, UtfError>
    where
        C: Cursor<Unit = u32>,
        B: BoundsCheck<C> + ?Sized,
    {
        cursor.advance();
        Ok(1)
    }

    #[inline(always)]
    fn read<C, B>(cursor: &mut C, _bounds: &mut B) -> Result<u32, UtfError>
    where
        C: Cursor<Unit = u32>,
        B: BoundsCheck<C> + ?Sized,
    {
        Ok(cursor.next_unit())
    }

    #[inline]
    fn write<A>(cp: u32, out: &mut A) -> Result<(), UtfError>
    where
        A: Appender<u32> + ?Sized,
    {
        if cp > MAX_SUPPORTED_CODE_POINT {
            return Err(UtfError::UnsupportedCodePoint);
        }
        out.push(cp);
        Ok(())
    }

    #[inline]
    fn encoded_len(cp: u32) -> Result<usize, UtfError> {
        if cp > MAX_SUPPORTED_CODE_POINT {
            Err(UtfError::UnsupportedCodePoint)
        } else {
            Ok(1)
        }
    }
}
