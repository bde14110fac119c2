//! Encoding selection by unit type, and slice-level convenience functions.
//!
//! [`UnitEncoding`] maps a code unit type to its codec (`u8` → [`Utf8`],
//! `u16` → [`Utf16`], `u32` → [`Utf32`]), which lets the functions here infer
//! the encodings from the slice types alone.
//!
//! ```
//! use utfconv::text::select::{count_code_points, transcode};
//!
//! let utf8 = "a€𝔘".as_bytes();
//! assert_eq!(count_code_points(utf8), Ok(3));
//!
//! let utf16: Vec<u16> = transcode(utf8).unwrap();
//! assert_eq!(utf16, [0x0061, 0x20AC, 0xD835, 0xDD18]);
//!
//! let utf32: Vec<u32> = transcode(&utf16).unwrap();
//! assert_eq!(utf32, [0x61, 0x20AC, 0x1D518]);
//! ```

use alloc::vec::Vec;

use super::codec::Utf;
use super::convert::{convert_range, count_range, Strategy};
use super::cursor::{SliceCursor, UnitCounter};
use super::error::LocatedError;
use super::unit::CodeUnit;
use super::{Utf16, Utf32, Utf8};

/// A code unit type with a designated encoding.
pub trait UnitEncoding: CodeUnit {
    /// The codec reading and writing this unit type.
    type Utf: Utf<Unit = Self>;
}

impl UnitEncoding for u8 {
    type Utf = Utf8;
}

impl UnitEncoding for u16 {
    type Utf = Utf16;
}

impl UnitEncoding for u32 {
    type Utf = Utf32;
}

/// Number of code points in `units`.
///
/// Continuation units are not validated; use [`transcode`] for that.
pub fn count_code_points<U: UnitEncoding>(units: &[U]) -> Result<usize, LocatedError> {
    count_range::<U::Utf, _>(&mut SliceCursor::new(units), units.len())
}

/// Transcode `src` into a newly allocated vector.
///
/// Identical source and destination unit types produce a verbatim copy.
pub fn transcode<S, D>(src: &[S]) -> Result<Vec<D>, LocatedError>
where
    S: UnitEncoding,
    D: UnitEncoding,
{
    let mut out = Vec::with_capacity(src.len());
    transcode_into(src, &mut out)?;
    Ok(out)
}

/// Transcode `src`, appending to `out`.
///
/// On error `out` keeps every symbol converted before the failing one.
pub fn transcode_into<S, D>(src: &[S], out: &mut Vec<D>) -> Result<(), LocatedError>
where
    S: UnitEncoding,
    D: UnitEncoding,
{
    let mut cursor = SliceCursor::new(src);
    let strategy = Strategy::select::<S::Utf, D::Utf, SliceCursor<'_, S>>();
    convert_range::<S::Utf, D::Utf, _, _>(strategy, &mut cursor, src.len(), out)
}

/// Number of `D` units that [`transcode`] would produce for `src`.
pub fn transcoded_len<S, D>(src: &[S]) -> Result<usize, LocatedError>
where
    S: UnitEncoding,
    D: UnitEncoding,
{
    let mut counter = UnitCounter::new();
    let mut cursor = SliceCursor::new(src);
    let strategy = Strategy::select::<S::Utf, D::Utf, SliceCursor<'_, S>>();
    convert_range::<S::Utf, D::Utf, _, _>(strategy, &mut cursor, src.len(), &mut counter)?;
    Ok(counter.count())
}

/// Encode a string as UTF-16.
///
/// A `str` holds only Unicode scalar values, so this cannot fail.
pub fn str_to_utf16(s: &str) -> Vec<u16> {
    let mut out = Vec::with_capacity(s.len());
    let mut buf = [0u16; 2];
    for ch in s.chars() {
        out.extend_from_slice(ch.encode_utf16(&mut buf));
    }
    out
}

/// Encode a string as UTF-32.
pub fn str_to_utf32(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}
