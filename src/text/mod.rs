//! UTF-8, UTF-16 and UTF-32 codecs and the drivers that combine them.
//!
//! ## Codecs
//!
//! [`Utf8`], [`Utf16`] and [`Utf32`] implement the [`Utf`] trait: decode one
//! symbol from a [`Cursor`](cursor::Cursor), encode one code point into an
//! [`Appender`](cursor::Appender), or measure one symbol.
//!
//! ## Drivers
//!
//! The [`convert`] module builds whole-sequence operations on top of the
//! codecs: counting code points and transcoding, over null-terminated or
//! bounded input.
//!
//! ## Slices
//!
//! For the common case of in-memory slices, [`select`] infers the codecs from
//! the unit types:
//!
//! ```
//! use utfconv::text::{transcode, LocatedError, UtfError};
//!
//! let utf16: Vec<u16> = transcode("€".as_bytes()).unwrap();
//! assert_eq!(utf16, [0x20AC]);
//!
//! // Bare continuation byte at offset 1
//! let result = transcode::<u8, u16>(&[0x41, 0x80]);
//! assert_eq!(
//!     result,
//!     Err(LocatedError { offset: 1, kind: UtfError::InvalidLeadUnit })
//! );
//! ```

pub mod code_point;
pub mod codec;
pub mod convert;
pub mod cursor;
pub mod error;
pub mod select;
pub mod unit;
pub mod utf16;
pub mod utf32;
pub mod utf8;

// Re-export commonly used types
pub use codec::{Encoding, Utf};
pub use convert::Strategy;
pub use error::{LocatedError, UtfError};
pub use select::{count_code_points, transcode, transcode_into, transcoded_len, UnitEncoding};
pub use unit::CodeUnit;
pub use utf16::Utf16;
pub use utf32::Utf32;
pub use utf8::Utf8;
