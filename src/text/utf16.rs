//! UTF-16 codec.
//!
//! Code points below U+10000 (other than surrogates) take one unit. Code
//! points U+10000-U+10FFFF take a surrogate pair:
//!
//! ```text
//! high = 0xD800 + ((cp - 0x10000) >> 10)      [0xD800, 0xDBFF]
//! low  = 0xDC00 + ((cp - 0x10000) & 0x3FF)    [0xDC00, 0xDFFF]
//! ```
//!
//! Unlike UTF-8 and UTF-32, UTF-16 cannot carry surrogate code points or
//! anything above U+10FFFF, so [`Utf16::write`] rejects both.

use super::code_point::{
    is_surrogate, is_surrogate_low, MAX_UNICODE_CODE_POINT, MIN_SURROGATE_HIGH, MIN_SURROGATE_LOW,
};
use super::codec::{Encoding, Utf};
use super::cursor::{Appender, BoundsCheck, Cursor};
use super::error::UtfError;

/// The UTF-16 codec (native-endian `u16` units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

/// Classification of a unit in lead position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Single,
    High,
    Low,
}

#[inline(always)]
fn classify(unit: u16) -> Lead {
    match unit {
        0xD800..=0xDBFF => Lead::High,
        0xDC00..=0xDFFF => Lead::Low,
        _ => Lead::Single,
    }
}

impl Utf for Utf16 {
    type Unit = u16;

    const ENCODING: Encoding = Encoding::Utf16;
    const MAX_CODE_POINT: u32 = MAX_UNICODE_CODE_POINT;
    const MAX_UNICODE_SYMBOL_SIZE: usize = 2;
    const MAX_SUPPORTED_SYMBOL_SIZE: usize = 2;

    #[inline]
    fn size_of_symbol<C, B>(cursor: &mut C, bounds: &mut B) -> Result<usize, UtfError>
    where
        C: Cursor<Unit = u16>,
        B: BoundsCheck<C> + ?Sized,
    {
        match classify(cursor.next_unit()) {
            Lead::Single => Ok(1),
            Lead::High => {
                bounds.check(cursor)?;
                cursor.advance();
                Ok(2)
            }
            Lead::Low => Err(UtfError::InvalidLeadUnit),
        }
    }

    #[inline]
    fn read<C, B>(cursor: &mut C, bounds: &mut B) -> Result<u32, UtfError>
    where
        C: Cursor<Unit = u16>,
        B: BoundsCheck<C> + ?Sized,
    {
        let lead = cursor.next_unit();
        match classify(lead) {
            Lead::Single => Ok(lead as u32),
            Lead::High => {
                bounds.check(cursor)?;
                let trail = cursor.next_unit() as u32;
                if !is_surrogate_low(trail) {
                    return Err(UtfError::InvalidContinuationUnit);
                }
                Ok(((lead as u32 - MIN_SURROGATE_HIGH) << 10 | (trail - MIN_SURROGATE_LOW))
                    + 0x10000)
            }
            Lead::Low => Err(UtfError::InvalidLeadUnit),
        }
    }

    fn write<A>(cp: u32, out: &mut A) -> Result<(), UtfError>
    where
        A: Appender<u16> + ?Sized,
    {
        if is_surrogate(cp) {
            return Err(UtfError::SurrogateCodePointRejected);
        }
        if cp < 0x10000 {
            out.push(cp as u16);
        } else if cp <= MAX_UNICODE_CODE_POINT {
            let offset = cp - 0x10000;
            out.push((MIN_SURROGATE_HIGH + (offset >> 10)) as u16);
            out.push((MIN_SURROGATE_LOW + (offset & 0x3FF)) as u16);
        } else {
            return Err(UtfError::UnsupportedCodePoint);
        }
        Ok(())
    }

    #[inline]
    fn encoded_len(cp: u32) -> Result<usize, UtfError> {
        if is_surrogate(cp) {
            Err(UtfError::SurrogateCodePointRejected)
        } else if cp < 0x10000 {
            Ok(1)
        } else if cp <= MAX_UNICODE_CODE_POINT {
            Ok(2)
        } else {
            Err(UtfError::UnsupportedCodePoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::cursor::{SliceCursor, UntilEnd};
    use alloc::vec;
    use alloc::vec::Vec;

    fn decode(input: &[u16]) -> Result<(u32, usize), UtfError> {
        let mut cursor = SliceCursor::new(input);
        let cp = Utf16::read(&mut cursor, &mut UntilEnd(input.len()))?;
        Ok((cp, cursor.position()))
    }

    fn encode(cp: u32) -> Result<Vec<u16>, UtfError> {
        let mut out = Vec::new();
        Utf16::write(cp, &mut out)?;
        Ok(out)
    }

    fn size(input: &[u16]) -> Result<usize, UtfError> {
        Utf16::size_of_symbol(&mut SliceCursor::new(input), &mut UntilEnd(input.len()))
    }

    mod decode_tests {
        use super::*;

        #[test]
        fn single_units() {
            assert_eq!(decode(&[0x0000]), Ok((0x0000, 1)));
            assert_eq!(decode(&[0x0041]), Ok((0x41, 1)));
            assert_eq!(decode(&[0xD7FF]), Ok((0xD7FF, 1)));
            assert_eq!(decode(&[0xE000]), Ok((0xE000, 1)));
            assert_eq!(decode(&[0xFFFF]), Ok((0xFFFF, 1)));
        }

        #[test]
        fn surrogate_pairs() {
            assert_eq!(decode(&[0xD800, 0xDC00]), Ok((0x10000, 2)));
            assert_eq!(decode(&[0xD835, 0xDD18]), Ok((0x1D518, 2)));
            assert_eq!(decode(&[0xDBFF, 0xDFFF]), Ok((0x10FFFF, 2)));
        }

        #[test]
        fn low_surrogate_as_lead() {
            assert_eq!(decode(&[0xDC00]), Err(UtfError::InvalidLeadUnit));
            assert_eq!(decode(&[0xDFFF, 0x0041]), Err(UtfError::InvalidLeadUnit));
        }

        #[test]
        fn high_surrogate_without_low() {
            assert_eq!(decode(&[0xD800, 0x0041]), Err(UtfError::InvalidContinuationUnit));
            assert_eq!(decode(&[0xD800, 0xD800]), Err(UtfError::InvalidContinuationUnit));
            assert_eq!(decode(&[0xD800, 0xE000]), Err(UtfError::InvalidContinuationUnit));
        }

        #[test]
        fn truncated_pair() {
            assert_eq!(decode(&[0xD800]), Err(UtfError::TruncatedInput));
        }
    }

    mod encode_tests {
        use super::*;

        #[test]
        fn bmp() {
            assert_eq!(encode(0x41), Ok(vec![0x41]));
            assert_eq!(encode(0xD7FF), Ok(vec![0xD7FF]));
            assert_eq!(encode(0xE000), Ok(vec![0xE000]));
            assert_eq!(encode(0xFFFF), Ok(vec![0xFFFF]));
        }

        #[test]
        fn supplementary() {
            assert_eq!(encode(0x10000), Ok(vec![0xD800, 0xDC00]));
            assert_eq!(encode(0x1D518), Ok(vec![0xD835, 0xDD18]));
            assert_eq!(encode(0x10FFFF), Ok(vec![0xDBFF, 0xDFFF]));
        }

        #[test]
        fn matches_std() {
            for ch in ['A', 'é', '日', '🎉', '\u{10FFFF}'] {
                let mut buf = [0u16; 2];
                assert_eq!(encode(ch as u32).unwrap(), ch.encode_utf16(&mut buf));
            }
        }

        #[test]
        fn surrogates_rejected() {
            for cp in [0xD800, 0xDBFF, 0xDC00, 0xDFFF] {
                assert_eq!(encode(cp), Err(UtfError::SurrogateCodePointRejected));
                assert_eq!(Utf16::encoded_len(cp), Err(UtfError::SurrogateCodePointRejected));
            }
        }

        #[test]
        fn beyond_unicode_rejected() {
            assert_eq!(encode(0x110000), Err(UtfError::UnsupportedCodePoint));
            assert_eq!(encode(0x7FFF_FFFF), Err(UtfError::UnsupportedCodePoint));
            assert_eq!(Utf16::encoded_len(0x110000), Err(UtfError::UnsupportedCodePoint));
        }

        #[test]
        fn failed_write_appends_nothing() {
            let mut out = vec![0x41u16];
            assert!(Utf16::write(0xD800, &mut out).is_err());
            assert!(Utf16::write(0x110000, &mut out).is_err());
            assert_eq!(out, vec![0x41]);
        }
    }

    mod size_tests {
        use super::*;

        #[test]
        fn sizes() {
            assert_eq!(size(&[0x41]), Ok(1));
            assert_eq!(size(&[0xD835, 0xDD18]), Ok(2));
        }

        #[test]
        fn trail_not_inspected() {
            assert_eq!(size(&[0xD835, 0x0041]), Ok(2));
        }

        #[test]
        fn low_lead_fails_before_bounds() {
            assert_eq!(size(&[0xDC00]), Err(UtfError::InvalidLeadUnit));
        }

        #[test]
        fn truncated() {
            assert_eq!(size(&[0xD835]), Err(UtfError::TruncatedInput));
        }
    }
}
