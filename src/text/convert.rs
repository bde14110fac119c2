//! Sizing and transcoding drivers.
//!
//! Every driver is generic over a source codec `S` (and, for transcoding, a
//! destination codec `D`), a [`Cursor`] and an [`Appender`]. Inputs come in
//! two shapes:
//!
//! - **Null-terminated** (`*_zstring`): read until a zero unit. No bounds
//!   check is performed, so a zero inside a multi-unit symbol is caught only
//!   as an invalid continuation (decode) or not at all (size).
//! - **Range** (`*_range`): read from the cursor's position up to an absolute
//!   `end` position, failing with [`UtfError::TruncatedInput`] if a symbol is
//!   cut short.
//!
//! Output is appended one complete symbol at a time, so after a failure the
//! appender holds exactly the symbols decoded before the failing one.
//!
//! # Examples
//!
//! ```
//! use utfconv::text::convert::transcode_range;
//! use utfconv::text::cursor::SliceCursor;
//! use utfconv::text::{Utf16, Utf8};
//!
//! let utf8 = [0x41u8, 0xE2, 0x82, 0xAC, 0xF0, 0x9D, 0x94, 0x98];
//! let mut utf16 = Vec::new();
//! transcode_range::<Utf8, Utf16, _, _>(&mut SliceCursor::new(&utf8), utf8.len(), &mut utf16)
//!     .unwrap();
//! assert_eq!(utf16, [0x0041, 0x20AC, 0xD835, 0xDD18]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::codec::Utf;
use super::cursor::{Appender, BoundsCheck, Cursor, Unchecked, UntilEnd};
use super::error::{LocatedError, UtfError};
use super::unit::CodeUnit;

// =============================================================================
// Strategy selection
// =============================================================================

/// How [`transcode_range`] walks its input.
///
/// Chosen once per call by [`Strategy::select`]; all strategies applicable to
/// a given pair of codecs produce identical output and identical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Source and destination encodings are the same: copy units verbatim,
    /// without validation.
    BinaryCopy,
    /// Decode without bounds checks while at least
    /// [`Utf::MAX_SUPPORTED_SYMBOL_SIZE`] units remain, then fall back to
    /// [`Sequential`](Strategy::Sequential) for the tail.
    RandomAccess,
    /// Bounds-check every continuation unit.
    Sequential,
}

impl Strategy {
    /// Pick the strategy for transcoding from `S` to `D` through cursor `C`.
    #[inline]
    pub fn select<S: Utf, D: Utf, C: Cursor>() -> Self {
        if S::ENCODING == D::ENCODING {
            Self::BinaryCopy
        } else if C::RANDOM_ACCESS {
            Self::RandomAccess
        } else {
            Self::Sequential
        }
    }
}

// =============================================================================
// Sizing
// =============================================================================

/// Length in units of the symbol at `cursor`.
///
/// The caller guarantees at least one unit is available; continuation units
/// are neither bounds-checked nor inspected. Fails only on an invalid lead
/// unit.
#[inline]
pub fn size_of_symbol<S, C>(mut cursor: C) -> Result<usize, UtfError>
where
    S: Utf,
    C: Cursor<Unit = S::Unit>,
{
    S::size_of_symbol(&mut cursor, &mut Unchecked)
}

/// Number of code points before the first zero unit.
///
/// The cursor is left on the terminator. A zero inside a multi-unit symbol
/// is not detected and yields an unspecified count.
///
/// # Examples
///
/// ```
/// use utfconv::text::convert::size_of_zstring;
/// use utfconv::text::cursor::SliceCursor;
/// use utfconv::text::Utf8;
///
/// let mut cursor = SliceCursor::new(&[0xE2, 0x82, 0xAC, 0x00]);
/// assert_eq!(size_of_zstring::<Utf8, _>(&mut cursor), Ok(1));
/// ```
pub fn size_of_zstring<S, C>(cursor: &mut C) -> Result<usize, UtfError>
where
    S: Utf,
    C: Cursor<Unit = S::Unit>,
{
    let mut count = 0;
    while cursor.current() != S::Unit::ZERO {
        S::size_of_symbol(cursor, &mut Unchecked)?;
        count += 1;
    }
    Ok(count)
}

/// Number of code points between the cursor and the absolute position `end`.
///
/// Fails with [`UtfError::TruncatedInput`] if the last symbol extends past
/// `end`. Continuation units are not validated.
pub fn size_of_range<S, C>(cursor: &mut C, end: usize) -> Result<usize, UtfError>
where
    S: Utf,
    C: Cursor<Unit = S::Unit>,
{
    count_range::<S, C>(cursor, end).map_err(|e| e.kind)
}

pub(crate) fn count_range<S, C>(cursor: &mut C, end: usize) -> Result<usize, LocatedError>
where
    S: Utf,
    C: Cursor<Unit = S::Unit>,
{
    let mut bounds = UntilEnd(end);
    let mut count = 0;
    while cursor.position() < end {
        let offset = cursor.position();
        S::size_of_symbol(cursor, &mut bounds).map_err(|kind| LocatedError { offset, kind })?;
        count += 1;
    }
    Ok(count)
}

// =============================================================================
// Single symbols
// =============================================================================

/// Decode one code point, consulting `bounds` before each continuation unit.
#[inline]
pub fn decode_one<S, C, B>(cursor: &mut C, bounds: &mut B) -> Result<u32, UtfError>
where
    S: Utf,
    C: Cursor<Unit = S::Unit>,
    B: BoundsCheck<C> + ?Sized,
{
    S::read(cursor, bounds)
}

/// Encode one code point into `out`.
#[inline]
pub fn encode_one<D, A>(cp: u32, out: &mut A) -> Result<(), UtfError>
where
    D: Utf,
    A: Appender<D::Unit> + ?Sized,
{
    D::write(cp, out)
}

// =============================================================================
// Transcoding
// =============================================================================

/// Transcode a null-terminated sequence from `S` to `D`.
///
/// The terminator is not copied; the cursor is left on it. When `S` and `D`
/// are the same encoding the units are copied verbatim without validation.
///
/// Only a zero *unit* in lead position terminates. A multi-unit symbol that
/// decodes to U+0000 (the overlong UTF-8 form `C0 80`) is transcoded like any
/// other code point and conversion continues after it.
///
/// # Examples
///
/// ```
/// use utfconv::text::convert::transcode_zstring;
/// use utfconv::text::cursor::StreamCursor;
/// use utfconv::text::{Utf16, Utf32};
///
/// let mut cursor = StreamCursor::new([0xD835u16, 0xDD18, 0x0000, 0x0041]);
/// let mut out = Vec::new();
/// transcode_zstring::<Utf16, Utf32, _, _>(&mut cursor, &mut out).unwrap();
/// assert_eq!(out, [0x1D518]);
/// ```
pub fn transcode_zstring<S, D, C, A>(cursor: &mut C, out: &mut A) -> Result<(), UtfError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    convert_zstring::<S, D, C, A>(cursor, out).map_err(|e| e.kind)
}

pub(crate) fn convert_zstring<S, D, C, A>(cursor: &mut C, out: &mut A) -> Result<(), LocatedError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    if S::ENCODING == D::ENCODING {
        while cursor.current() != S::Unit::ZERO {
            out.push(copy_unit::<S, D>(cursor.next_unit()));
        }
        return Ok(());
    }

    while cursor.current() != S::Unit::ZERO {
        let offset = cursor.position();
        S::read(cursor, &mut Unchecked)
            .and_then(|cp| D::write(cp, out))
            .map_err(|kind| LocatedError { offset, kind })?;
    }
    Ok(())
}

/// Transcode the units between the cursor and the absolute position `end`.
///
/// The strategy is picked by [`Strategy::select`].
pub fn transcode_range<S, D, C, A>(cursor: &mut C, end: usize, out: &mut A) -> Result<(), UtfError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    let strategy = Strategy::select::<S, D, C>();
    transcode_range_with::<S, D, C, A>(strategy, cursor, end, out)
}

/// [`transcode_range`] with an explicit strategy.
///
/// [`Strategy::BinaryCopy`] is only honoured when `S` and `D` are the same
/// encoding; otherwise it is treated as [`Strategy::Sequential`]. Forcing
/// a decoding strategy on identical encodings gives a validating copy.
pub fn transcode_range_with<S, D, C, A>(
    strategy: Strategy,
    cursor: &mut C,
    end: usize,
    out: &mut A,
) -> Result<(), UtfError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    convert_range::<S, D, C, A>(strategy, cursor, end, out).map_err(|e| e.kind)
}

pub(crate) fn convert_range<S, D, C, A>(
    strategy: Strategy,
    cursor: &mut C,
    end: usize,
    out: &mut A,
) -> Result<(), LocatedError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    match strategy {
        Strategy::BinaryCopy if S::ENCODING == D::ENCODING => {
            copy_range::<S, D, C, A>(cursor, end, out);
            Ok(())
        }
        Strategy::RandomAccess => convert_random_access::<S, D, C, A>(cursor, end, out),
        Strategy::BinaryCopy | Strategy::Sequential => {
            convert_sequential::<S, D, C, A>(cursor, end, out)
        }
    }
}

/// Reinterpret a unit of `S` as a unit of `D`; only valid when both share an
/// encoding, so the widths match.
#[inline(always)]
fn copy_unit<S: Utf, D: Utf>(unit: S::Unit) -> D::Unit {
    debug_assert_eq!(S::ENCODING, D::ENCODING);
    D::Unit::from_u32(unit.to_u32())
}

fn copy_range<S, D, C, A>(cursor: &mut C, end: usize, out: &mut A)
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    while cursor.position() < end {
        out.push(copy_unit::<S, D>(cursor.next_unit()));
    }
}

fn convert_random_access<S, D, C, A>(
    cursor: &mut C,
    end: usize,
    out: &mut A,
) -> Result<(), LocatedError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    // No symbol is longer than MAX_SUPPORTED_SYMBOL_SIZE, so none started here
    // can run past `end`
    while end.saturating_sub(cursor.position()) >= S::MAX_SUPPORTED_SYMBOL_SIZE {
        let offset = cursor.position();
        S::read(cursor, &mut Unchecked)
            .and_then(|cp| D::write(cp, out))
            .map_err(|kind| LocatedError { offset, kind })?;
    }
    convert_sequential::<S, D, C, A>(cursor, end, out)
}

fn convert_sequential<S, D, C, A>(
    cursor: &mut C,
    end: usize,
    out: &mut A,
) -> Result<(), LocatedError>
where
    S: Utf,
    D: Utf,
    C: Cursor<Unit = S::Unit>,
    A: Appender<D::Unit> + ?Sized,
{
    let mut bounds = UntilEnd(end);
    while cursor.position() < end {
        let offset = cursor.position();
        S::read(cursor, &mut bounds)
            .and_then(|cp| D::write(cp, out))
            .map_err(|kind| LocatedError { offset, kind })?;
    }
    Ok(())
}
