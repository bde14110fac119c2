//! # utfconv
//!
//! Generic UTF-8, UTF-16 and UTF-32 codecs and transcoding.
//!
//! The codecs operate on caller-owned code units reached through cursors, so
//! the same decoding logic serves null-terminated input, explicitly bounded
//! ranges and contiguous buffers (where a faster, unchecked path is used while
//! enough input remains).
//!
//! ## Module Organization
//!
//! - [`text`] - Codecs, cursors, conversion drivers and slice helpers
//! - [`table`] - Compile-time UTF-8 lead-byte lookup tables
//!
//! ## Quick Start
//!
//! ```
//! use utfconv::text::{count_code_points, transcode};
//!
//! let utf8 = [0x41, 0xE2, 0x82, 0xAC, 0xF0, 0x9D, 0x94, 0x98];
//! assert_eq!(count_code_points::<u8>(&utf8), Ok(3));
//!
//! let utf16: Vec<u16> = transcode::<u8, u16>(&utf8).unwrap();
//! assert_eq!(utf16, [0x0041, 0x20AC, 0xD835, 0xDD18]);
//! ```
//!
//! ## Extended Range
//!
//! UTF-8 (in its original 6-byte form) and UTF-32 carry code points up to
//! `0x7FFF_FFFF`. This range is kept deliberately: decoding does not reject
//! surrogates, overlong forms or values above U+10FFFF, so arbitrary 31-bit
//! data survives a UTF-8 / UTF-32 round trip. Only UTF-16 output enforces the
//! Unicode range.
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` implementations
//! - `serde` - Enable serialization/deserialization of error and encoding tags

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

/// UTF codecs, cursors and conversion drivers.
pub mod text;

/// Precomputed lookup tables.
pub mod table;

pub use text::{Encoding, LocatedError, Utf, Utf16, Utf32, Utf8, UtfError};
