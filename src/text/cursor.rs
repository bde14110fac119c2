//! Cursors, bounds checks and appenders.
//!
//! The codecs never see slices or iterators directly. They read through a
//! [`Cursor`], ask a [`BoundsCheck`] before consuming each continuation unit
//! of a multi-unit symbol, and write through an [`Appender`]. The same codec
//! code then serves three consumption modes:
//!
//! - **Null-terminated**: [`Unchecked`] bounds, stop at a zero unit.
//! - **Bounded**: [`UntilEnd`] bounds, fail with
//!   [`TruncatedInput`](UtfError::TruncatedInput) at the declared end.
//! - **Random-access**: [`Unchecked`] bounds while the remaining length covers
//!   the widest possible symbol, then [`UntilEnd`] for the tail.
//!
//! ```
//! use utfconv::text::cursor::{Cursor, SliceCursor, StreamCursor};
//!
//! let mut slice = SliceCursor::new(&[0x41u8, 0x42]);
//! assert_eq!(slice.next_unit(), 0x41);
//! assert_eq!(slice.position(), 1);
//!
//! let mut stream = StreamCursor::new([0x41u8, 0x42].into_iter());
//! assert_eq!(stream.next_unit(), 0x41);
//! assert_eq!(stream.current(), 0x42);
//! ```

use alloc::vec::Vec;
use core::iter::Fuse;

use super::error::UtfError;
use super::unit::CodeUnit;

// =============================================================================
// Cursors
// =============================================================================

/// A position in an ordered sequence of code units.
pub trait Cursor {
    /// The code unit type read by this cursor.
    type Unit: CodeUnit;

    /// Whether the cursor is backed by a contiguous buffer.
    ///
    /// Drivers use this static fact to pick the random-access strategy.
    const RANDOM_ACCESS: bool = false;

    /// The unit at the current position.
    ///
    /// Past the end of the underlying data this is [`CodeUnit::ZERO`].
    fn current(&self) -> Self::Unit;

    /// Move to the next unit.
    fn advance(&mut self);

    /// Number of units advanced over since the start of the sequence.
    fn position(&self) -> usize;

    /// Read the current unit and advance past it.
    #[inline]
    fn next_unit(&mut self) -> Self::Unit {
        let unit = self.current();
        self.advance();
        unit
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Unit = C::Unit;
    const RANDOM_ACCESS: bool = C::RANDOM_ACCESS;

    #[inline]
    fn current(&self) -> Self::Unit {
        (**self).current()
    }

    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }

    #[inline]
    fn position(&self) -> usize {
        (**self).position()
    }
}

/// Random-access cursor over a borrowed slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceCursor<'a, U> {
    units: &'a [U],
    /// Current index into `units`
    position: usize,
}

impl<'a, U: CodeUnit> SliceCursor<'a, U> {
    /// Create a cursor at the start of `units`.
    #[inline]
    pub fn new(units: &'a [U]) -> Self {
        Self { units, position: 0 }
    }

    /// Create a cursor at an arbitrary index of `units`.
    #[inline]
    pub fn at(units: &'a [U], position: usize) -> Self {
        Self { units, position }
    }

    /// Total length of the underlying slice.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Is the underlying slice empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units left between the current position and the end of the slice.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.units.len().saturating_sub(self.position)
    }

    /// The not yet consumed part of the slice.
    #[inline]
    pub fn rest(&self) -> &'a [U] {
        self.units.get(self.position..).unwrap_or(&[])
    }
}

impl<'a, U: CodeUnit> Cursor for SliceCursor<'a, U> {
    type Unit = U;
    const RANDOM_ACCESS: bool = true;

    #[inline(always)]
    fn current(&self) -> U {
        self.units.get(self.position).copied().unwrap_or(U::ZERO)
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.position += 1;
    }

    #[inline(always)]
    fn position(&self) -> usize {
        self.position
    }
}

/// Forward-only cursor over any iterator of code units.
///
/// Holds one unit of look-ahead so that [`Cursor::current`] can be called
/// repeatedly without consuming.
#[derive(Clone, Debug)]
pub struct StreamCursor<I: Iterator> {
    iter: Fuse<I>,
    current: Option<I::Item>,
    position: usize,
}

impl<I: Iterator> StreamCursor<I>
where
    I::Item: CodeUnit,
{
    /// Create a cursor positioned at the first unit of `iter`.
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        let mut iter = iter.into_iter().fuse();
        let current = iter.next();
        Self {
            iter,
            current,
            position: 0,
        }
    }

    /// Has the underlying iterator been exhausted?
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I: Iterator> Cursor for StreamCursor<I>
where
    I::Item: CodeUnit,
{
    type Unit = I::Item;

    #[inline]
    fn current(&self) -> I::Item {
        self.current.unwrap_or(I::Item::ZERO)
    }

    #[inline]
    fn advance(&mut self) {
        self.current = self.iter.next();
        self.position += 1;
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }
}

// =============================================================================
// Bounds checks
// =============================================================================

/// "Is another unit available?" check, run before each continuation unit.
///
/// Closures `FnMut(&C) -> Result<(), UtfError>` implement this trait.
pub trait BoundsCheck<C: ?Sized> {
    /// Fail if the unit at `cursor` may not be consumed.
    fn check(&mut self, cursor: &C) -> Result<(), UtfError>;
}

impl<C: ?Sized, F> BoundsCheck<C> for F
where
    F: FnMut(&C) -> Result<(), UtfError>,
{
    #[inline]
    fn check(&mut self, cursor: &C) -> Result<(), UtfError> {
        self(cursor)
    }
}

/// No bounds check: the caller guarantees the symbol is complete.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unchecked;

impl<C: ?Sized> BoundsCheck<C> for Unchecked {
    #[inline(always)]
    fn check(&mut self, _cursor: &C) -> Result<(), UtfError> {
        Ok(())
    }
}

/// Fails with [`UtfError::TruncatedInput`] once the cursor reaches `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UntilEnd(pub usize);

impl<C: Cursor + ?Sized> BoundsCheck<C> for UntilEnd {
    #[inline(always)]
    fn check(&mut self, cursor: &C) -> Result<(), UtfError> {
        if cursor.position() >= self.0 {
            Err(UtfError::TruncatedInput)
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Appenders
// =============================================================================

/// Output sink for encoded code units.
pub trait Appender<U> {
    /// Append one unit.
    fn push(&mut self, unit: U);
}

impl<U> Appender<U> for Vec<U> {
    #[inline]
    fn push(&mut self, unit: U) {
        Vec::push(self, unit);
    }
}

impl<U, A: Appender<U> + ?Sized> Appender<U> for &mut A {
    #[inline]
    fn push(&mut self, unit: U) {
        (**self).push(unit);
    }
}

/// Appender that discards units and only counts them.
///
/// Running a conversion into a counter gives the exact output length, which
/// can be used to size a buffer before the real conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitCounter {
    count: usize,
}

impl UnitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Units appended so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<U> Appender<U> for UnitCounter {
    #[inline(always)]
    fn push(&mut self, _unit: U) {
        self.count += 1;
    }
}

/// Appender forwarding each unit to a closure.
pub struct FnAppender<F>(pub F);

impl<U, F: FnMut(U)> Appender<U> for FnAppender<F> {
    #[inline]
    fn push(&mut self, unit: U) {
        (self.0)(unit);
    }
}
