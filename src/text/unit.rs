//! Code units and native-endian byte views.
//!
//! A code unit is the fixed-width storage element of an encoding: `u8` for
//! UTF-8, `u16` for UTF-16 and `u32` for UTF-32. Units are always borrowed from
//! caller storage.
//!
//! UTF-16 and UTF-32 text often arrives in byte buffers. [`units_from_bytes`]
//! reinterprets such a buffer in place when it is suitably aligned, and
//! [`units_from_bytes_unaligned`] copies it otherwise. Both use native byte
//! order; no byte swapping or byte-order-mark handling is performed.

use alloc::vec::Vec;
use core::fmt::Debug;

use bytemuck::{Pod, PodCastError};

/// A fixed-width unsigned integer used as a code unit.
pub trait CodeUnit: Pod + Eq + Default + Debug {
    /// The zero unit, used as terminator by the null-terminated drivers.
    const ZERO: Self;

    /// Width of the unit in bytes.
    const WIDTH: usize;

    /// Widen the unit to a `u32`.
    fn to_u32(self) -> u32;

    /// Narrow a `u32` to a unit, truncating high bits.
    fn from_u32(value: u32) -> Self;
}

macro_rules! impl_code_unit {
    ($($ty:ty),*) => {
        $(
            impl CodeUnit for $ty {
                const ZERO: Self = 0;
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline(always)]
                fn to_u32(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn from_u32(value: u32) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_code_unit!(u8, u16, u32);

/// Reinterpret a byte buffer as native-endian code units without copying.
///
/// Fails if the buffer is not aligned for `U` or its length is not a multiple
/// of `U::WIDTH`.
///
/// # Examples
///
/// ```
/// use utfconv::text::unit::{units_as_bytes, units_from_bytes};
///
/// let units: [u16; 2] = [0x0041, 0x20AC];
/// let bytes = units_as_bytes(&units);
/// assert_eq!(units_from_bytes::<u16>(bytes).unwrap(), &units);
/// ```
#[inline]
pub fn units_from_bytes<U: CodeUnit>(bytes: &[u8]) -> Result<&[U], PodCastError> {
    bytemuck::try_cast_slice(bytes)
}

/// Copy a byte buffer of any alignment into native-endian code units.
///
/// Returns `None` if the length is not a multiple of `U::WIDTH`.
pub fn units_from_bytes_unaligned<U: CodeUnit>(bytes: &[u8]) -> Option<Vec<U>> {
    if bytes.len() % U::WIDTH != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(U::WIDTH)
            .map(bytemuck::pod_read_unaligned::<U>)
            .collect(),
    )
}

/// View code units as their native-endian bytes.
#[inline]
pub fn units_as_bytes<U: CodeUnit>(units: &[U]) -> &[u8] {
    bytemuck::cast_slice(units)
}
