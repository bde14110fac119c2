//! Conformance tests for the codec tables and driver behaviour.

use utfconv::text::code_point::{is_surrogate, MAX_UNICODE_CODE_POINT};
use utfconv::text::convert::{
    decode_one, encode_one, size_of_range, size_of_zstring, transcode_range, transcode_zstring,
};
use utfconv::text::cursor::{Cursor, SliceCursor, StreamCursor, UntilEnd};
use utfconv::text::{Utf, Utf16, Utf32, Utf8, UtfError};

// ============================================================================
// Helpers
// ============================================================================

fn encode<U: Utf>(cp: u32) -> Result<Vec<U::Unit>, UtfError> {
    let mut out = Vec::new();
    encode_one::<U, _>(cp, &mut out)?;
    Ok(out)
}

/// Decode a single symbol that must occupy all of `units`.
fn decode<U: Utf>(units: &[U::Unit]) -> Result<u32, UtfError> {
    let mut cursor = SliceCursor::new(units);
    let cp = decode_one::<U, _, _>(&mut cursor, &mut UntilEnd(units.len()))?;
    assert_eq!(cursor.position(), units.len(), "symbol did not consume all units");
    Ok(cp)
}

fn roundtrip<U: Utf>(cp: u32) -> Result<u32, UtfError> {
    decode::<U>(&encode::<U>(cp)?)
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_unicode_roundtrip_all_codecs() {
    // Every scalar value in the BMP and a stride through the supplementary planes
    let points = (0..0x10000u32).chain((0x10000..=MAX_UNICODE_CODE_POINT).step_by(97));
    for cp in points.filter(|&cp| !is_surrogate(cp)) {
        assert_eq!(roundtrip::<Utf8>(cp), Ok(cp), "utf8 cp={:#X}", cp);
        assert_eq!(roundtrip::<Utf16>(cp), Ok(cp), "utf16 cp={:#X}", cp);
        assert_eq!(roundtrip::<Utf32>(cp), Ok(cp), "utf32 cp={:#X}", cp);
    }
    assert_eq!(roundtrip::<Utf16>(MAX_UNICODE_CODE_POINT), Ok(MAX_UNICODE_CODE_POINT));
}

#[test]
fn test_extended_range() {
    for cp in [0x110000, 0x1F_FFFF, 0x20_0000, 0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF] {
        assert_eq!(roundtrip::<Utf8>(cp), Ok(cp), "cp={:#X}", cp);
        assert_eq!(roundtrip::<Utf32>(cp), Ok(cp), "cp={:#X}", cp);
        assert_eq!(encode::<Utf16>(cp), Err(UtfError::UnsupportedCodePoint), "cp={:#X}", cp);
    }
    for cp in [0x8000_0000, u32::MAX] {
        assert_eq!(encode::<Utf8>(cp), Err(UtfError::UnsupportedCodePoint));
        assert_eq!(encode::<Utf32>(cp), Err(UtfError::UnsupportedCodePoint));
    }
}

#[test]
fn test_surrogates() {
    for cp in 0xD800..=0xDFFFu32 {
        assert_eq!(encode::<Utf16>(cp), Err(UtfError::SurrogateCodePointRejected));
        assert_eq!(roundtrip::<Utf8>(cp), Ok(cp));
        assert_eq!(roundtrip::<Utf32>(cp), Ok(cp));
    }
}

// ============================================================================
// Encoding tables
// ============================================================================

#[test]
fn test_utf8_minimality() {
    assert_eq!(encode::<Utf8>(0x7F), Ok(vec![0x7F]));
    assert_eq!(encode::<Utf8>(0x80), Ok(vec![0xC2, 0x80]));
    assert_eq!(encode::<Utf8>(0x7FF).map(|v| v.len()), Ok(2));
    assert_eq!(encode::<Utf8>(0x800).map(|v| v.len()), Ok(3));
    assert_eq!(encode::<Utf8>(0xFFFF).map(|v| v.len()), Ok(3));
    assert_eq!(encode::<Utf8>(0x10000).map(|v| v.len()), Ok(4));
}

#[test]
fn test_utf8_agrees_with_std_on_scalars() {
    for cp in (0..=MAX_UNICODE_CODE_POINT).step_by(31) {
        if let Some(ch) = char::from_u32(cp) {
            let mut buf = [0u8; 4];
            assert_eq!(encode::<Utf8>(cp).unwrap(), ch.encode_utf8(&mut buf).as_bytes());
            let mut buf16 = [0u16; 2];
            assert_eq!(encode::<Utf16>(cp).unwrap(), ch.encode_utf16(&mut buf16));
        }
    }
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_truncated_four_byte_lead() {
    let input = [0xF0u8];
    let mut cursor = SliceCursor::new(&input);
    assert_eq!(
        decode_one::<Utf8, _, _>(&mut cursor, &mut UntilEnd(1)),
        Err(UtfError::TruncatedInput)
    );
    assert_eq!(
        size_of_range::<Utf8, _>(&mut SliceCursor::new(&input), 1),
        Err(UtfError::TruncatedInput)
    );
}

#[test]
fn test_invalid_continuation() {
    assert_eq!(decode::<Utf8>(&[0xC2, 0x00]), Err(UtfError::InvalidContinuationUnit));
}

#[test]
fn test_utf16_lead_errors() {
    let mut cursor = SliceCursor::new(&[0xDC00u16, 0x0041]);
    assert_eq!(
        decode_one::<Utf16, _, _>(&mut cursor, &mut UntilEnd(2)),
        Err(UtfError::InvalidLeadUnit)
    );
    let mut cursor = SliceCursor::new(&[0xD800u16, 0x0041]);
    assert_eq!(
        decode_one::<Utf16, _, _>(&mut cursor, &mut UntilEnd(2)),
        Err(UtfError::InvalidContinuationUnit)
    );
}

#[test]
fn test_same_encoding_copy_is_verbatim() {
    let malformed = [0x80u8, 0xC2, 0xFF, 0xF0];
    let mut out = Vec::new();
    transcode_range::<Utf8, Utf8, _, _>(&mut SliceCursor::new(&malformed), 4, &mut out).unwrap();
    assert_eq!(out, malformed);

    let lone = [0xDFFFu16, 0xD800];
    let mut out = Vec::new();
    transcode_range::<Utf16, Utf16, _, _>(&mut StreamCursor::new(lone), 2, &mut out).unwrap();
    assert_eq!(out, lone);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_end_to_end() {
    let utf8 = [0x41u8, 0xE2, 0x82, 0xAC, 0xF0, 0x9D, 0x94, 0x98];

    let mut utf16 = Vec::new();
    transcode_range::<Utf8, Utf16, _, _>(&mut SliceCursor::new(&utf8), utf8.len(), &mut utf16)
        .unwrap();
    assert_eq!(utf16, [0x0041, 0x20AC, 0xD835, 0xDD18]);

    let mut utf32 = Vec::new();
    transcode_range::<Utf16, Utf32, _, _>(&mut SliceCursor::new(&utf16), utf16.len(), &mut utf32)
        .unwrap();
    assert_eq!(utf32, [0x41, 0x20AC, 0x1D518]);

    let mut back = Vec::new();
    transcode_range::<Utf32, Utf8, _, _>(&mut SliceCursor::new(&utf32), utf32.len(), &mut back)
        .unwrap();
    assert_eq!(back, utf8);
}

#[test]
fn test_end_to_end_null_terminated() {
    let utf8 = [0x41u8, 0xE2, 0x82, 0xAC, 0xF0, 0x9D, 0x94, 0x98, 0x00];

    let mut utf16 = Vec::new();
    transcode_zstring::<Utf8, Utf16, _, _>(&mut StreamCursor::new(utf8), &mut utf16).unwrap();
    assert_eq!(utf16, [0x0041, 0x20AC, 0xD835, 0xDD18]);

    utf16.push(0);
    let mut utf32 = Vec::new();
    transcode_zstring::<Utf16, Utf32, _, _>(&mut SliceCursor::new(&utf16), &mut utf32).unwrap();
    assert_eq!(utf32, [0x41, 0x20AC, 0x1D518]);
}

#[test]
fn test_size_of_zstring() {
    assert_eq!(size_of_zstring::<Utf8, _>(&mut SliceCursor::new(&[0x41, 0x00])), Ok(1));
    assert_eq!(
        size_of_zstring::<Utf8, _>(&mut SliceCursor::new(&[0xE2, 0x82, 0xAC, 0x00])),
        Ok(1)
    );
    assert_eq!(
        size_of_zstring::<Utf16, _>(&mut StreamCursor::new([0xD835u16, 0xDD18, 0x41, 0])),
        Ok(2)
    );
}
