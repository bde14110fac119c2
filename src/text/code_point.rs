//! Code-point domain constants and surrogate predicates.
//!
//! Code points are plain `u32` values. Unicode stops at U+10FFFF, but UTF-8 and
//! UTF-32 can carry any value up to [`MAX_SUPPORTED_CODE_POINT`]; this crate
//! keeps that extended range so that non-Unicode data survives a round trip
//! through UTF-8 or UTF-32 unchanged. Only UTF-16 is limited to the Unicode
//! range.

/// Largest code point defined by Unicode.
pub const MAX_UNICODE_CODE_POINT: u32 = 0x10FFFF;

/// Largest code point representable in UTF-8 (6-byte form) and UTF-32.
///
/// Not valid for UTF-16.
pub const MAX_SUPPORTED_CODE_POINT: u32 = 0x7FFF_FFFF;

pub const MIN_SURROGATE: u32 = 0xD800;
pub const MAX_SURROGATE: u32 = 0xDFFF;

pub const MIN_SURROGATE_HIGH: u32 = 0xD800;
pub const MAX_SURROGATE_HIGH: u32 = 0xDBFF;

pub const MIN_SURROGATE_LOW: u32 = 0xDC00;
pub const MAX_SURROGATE_LOW: u32 = 0xDFFF;

/// Is `cp` a high (leading) surrogate, U+D800-U+DBFF?
#[inline(always)]
pub const fn is_surrogate_high(cp: u32) -> bool {
    MIN_SURROGATE_HIGH <= cp && cp <= MAX_SURROGATE_HIGH
}

/// Is `cp` a low (trailing) surrogate, U+DC00-U+DFFF?
#[inline(always)]
pub const fn is_surrogate_low(cp: u32) -> bool {
    MIN_SURROGATE_LOW <= cp && cp <= MAX_SURROGATE_LOW
}

/// Is `cp` in the surrogate range U+D800-U+DFFF?
#[inline(always)]
pub const fn is_surrogate(cp: u32) -> bool {
    MIN_SURROGATE <= cp && cp <= MAX_SURROGATE
}

/// Is `cp` a Unicode scalar value (what Rust's `char` can hold)?
///
/// The codecs never enforce this; it is provided for callers that want strict
/// Unicode on top of the extended range.
#[inline]
pub const fn is_unicode_scalar(cp: u32) -> bool {
    cp <= MAX_UNICODE_CODE_POINT && !is_surrogate(cp)
}
