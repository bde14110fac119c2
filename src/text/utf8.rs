//! UTF-8 codec.
//!
//! ## Encoding Rules
//!
//! UTF-8 is a variable-width encoding. This codec supports the original 1-6
//! byte forms, which cover every code point up to `0x7FFF_FFFF`:
//!
//! | Bytes | First byte    | Continuation bytes | Code point range           |
//! |-------|---------------|--------------------|----------------------------|
//! | 1     | `0xxxxxxx`    | -                  | U+0000 - U+007F            |
//! | 2     | `110xxxxx`    | `10xxxxxx`         | U+0080 - U+07FF            |
//! | 3     | `1110xxxx`    | `10xxxxxx` × 2     | U+0800 - U+FFFF            |
//! | 4     | `11110xxx`    | `10xxxxxx` × 3     | U+10000 - U+1FFFFF         |
//! | 5     | `111110xx`    | `10xxxxxx` × 4     | U+200000 - U+3FFFFFF       |
//! | 6     | `1111110x`    | `10xxxxxx` × 5     | U+4000000 - U+7FFFFFFF     |
//!
//! ## Validation
//!
//! Decoding rejects:
//! 1. **Invalid lead bytes**: `0x80-0xBF`, `0xFE`, `0xFF`
//! 2. **Invalid continuation bytes**: anything not matching `10xxxxxx`
//! 3. **Truncated sequences**: when the bounds check reports the end of input
//!
//! Overlong forms, surrogates and values above U+10FFFF are decoded as-is. The
//! codec is binary-safe over the whole extended range; use
//! [`is_unicode_scalar`](super::code_point::is_unicode_scalar) for strict
//! Unicode.
//!
//! Encoding always produces the shortest form.

use super::code_point::MAX_SUPPORTED_CODE_POINT;
use super::codec::{Encoding, Utf};
use super::cursor::{Appender, BoundsCheck, Cursor};
use super::error::UtfError;
use crate::table::{INVALID_LEAD, UTF8_CONTINUATION_COUNT, UTF8_LEAD_PAYLOAD_MASK};

/// The UTF-8 codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

/// Check if a byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline(always)]
pub fn is_continuation_unit(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Number of continuation bytes expected after `lead`.
///
/// Returns `None` for bytes that cannot start a symbol.
#[inline]
pub fn continuation_count(lead: u8) -> Option<usize> {
    match UTF8_CONTINUATION_COUNT[lead as usize] {
        INVALID_LEAD => None,
        count => Some(count as usize),
    }
}

impl Utf for Utf8 {
    type Unit = u8;

    const ENCODING: Encoding = Encoding::Utf8;
    const MAX_CODE_POINT: u32 = MAX_SUPPORTED_CODE_POINT;
    const MAX_UNICODE_SYMBOL_SIZE: usize = 4;
    const MAX_SUPPORTED_SYMBOL_SIZE: usize = 6;

    #[inline]
    fn size_of_symbol<C, B>(cursor: &mut C, bounds: &mut B) -> Result<usize, UtfError>
    where
        C: Cursor<Unit = u8>,
        B: BoundsCheck<C> + ?Sized,
    {
        let lead = cursor.next_unit();
        let count = continuation_count(lead).ok_or(UtfError::InvalidLeadUnit)?;
        for _ in 0..count {
            bounds.check(cursor)?;
            cursor.advance();
        }
        Ok(count + 1)
    }

    #[inline]
    fn read<C, B>(cursor: &mut C, bounds: &mut B) -> Result<u32, UtfError>
    where
        C: Cursor<Unit = u8>,
        B: BoundsCheck<C> + ?Sized,
    {
        let lead = cursor.next_unit();
        let count = UTF8_CONTINUATION_COUNT[lead as usize];
        if count == 0 {
            return Ok(lead as u32);
        }
        if count == INVALID_LEAD {
            return Err(UtfError::InvalidLeadUnit);
        }

        let mut cp = (lead & UTF8_LEAD_PAYLOAD_MASK[lead as usize]) as u32;
        for _ in 0..count {
            bounds.check(cursor)?;
            let unit = cursor.next_unit();
            if !is_continuation_unit(unit) {
                return Err(UtfError::InvalidContinuationUnit);
            }
            cp = (cp << 6) | (unit & 0x3F) as u32;
        }
        Ok(cp)
    }

    fn write<A>(cp: u32, out: &mut A) -> Result<(), UtfError>
    where
        A: Appender<u8> + ?Sized,
    {
        if cp < 0x80 {
            // 0xxx_xxxx
            out.push(cp as u8);
        } else if cp < 0x800 {
            // 110x_xxxx 10xx_xxxx
            out.push(0xC0 | (cp >> 6) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        } else if cp < 0x10000 {
            // 1110_xxxx 10xx_xxxx 10xx_xxxx
            out.push(0xE0 | (cp >> 12) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        } else if cp < 0x20_0000 {
            // 1111_0xxx 10xx_xxxx × 3
            out.push(0xF0 | (cp >> 18) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        } else if cp < 0x400_0000 {
            // 1111_10xx 10xx_xxxx × 4
            out.push(0xF8 | (cp >> 24) as u8);
            out.push(0x80 | ((cp >> 18) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        } else if cp < 0x8000_0000 {
            // 1111_110x 10xx_xxxx × 5
            out.push(0xFC | (cp >> 30) as u8);
            out.push(0x80 | ((cp >> 24) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 18) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        } else {
            return Err(UtfError::UnsupportedCodePoint);
        }
        Ok(())
    }

    #[inline]
    fn encoded_len(cp: u32) -> Result<usize, UtfError> {
        match cp {
            0..=0x7F => Ok(1),
            0x80..=0x7FF => Ok(2),
            0x800..=0xFFFF => Ok(3),
            0x1_0000..=0x1F_FFFF => Ok(4),
            0x20_0000..=0x3FF_FFFF => Ok(5),
            0x400_0000..=0x7FFF_FFFF => Ok(6),
            _ => Err(UtfError::UnsupportedCodePoint),
        }
    }
}
