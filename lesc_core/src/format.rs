//! Wire-level constants and width classes shared by every LESC encoder.
//!
//! All multi-byte integers on the wire are little-endian.

// ── Varlen integer tags ────────────────────────────────────────────────────

/// Tag for a varlen int whose value fits in one byte (`v < 256`).
pub const VARLEN_TAG_U8: u8 = 1;

/// Tag for a varlen int stored in four bytes (`256 <= v <= u32::MAX`).
pub const VARLEN_TAG_U32: u8 = 4;

/// Tag for a varlen int stored in eight bytes (`v > u32::MAX`).
pub const VARLEN_TAG_U64: u8 = 8;

/// Number of value bytes (and therefore the tag) a varlen int of `value` uses.
///
/// Only three widths exist. A value that would fit in two bytes still costs four.
#[inline]
pub fn varlen_width(value: u64) -> u8 {
    if value < 256 {
        VARLEN_TAG_U8
    } else if value <= u32::MAX as u64 {
        VARLEN_TAG_U32
    } else {
        VARLEN_TAG_U64
    }
}

/// Total encoded size of a varlen int: tag byte plus value bytes.
#[inline]
pub fn varlen_encoded_len(value: u64) -> u64 {
    1 + varlen_width(value) as u64
}

// ── Chunk7 string batches ──────────────────────────────────────────────────

/// Flag byte of a chunk7 batch whose strings all share one length.
pub const CHUNK7_UNIFORM: u8 = 1;

/// Flag byte of a chunk7 batch with per-string lengths.
pub const CHUNK7_MIXED: u8 = 0;

/// Batch-wide width of every entry in a chunk7 length list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LengthWidth {
    U8 = 1,
    U16 = 2,
    U32 = 4,
    U64 = 8,
}

impl LengthWidth {
    /// Smallest width able to hold `max_len`. Boundaries are strict:
    /// a maximum of exactly 256 needs `U16`.
    pub fn for_max(max_len: u64) -> Self {
        if max_len < 1 << 8 {
            LengthWidth::U8
        } else if max_len < 1 << 16 {
            LengthWidth::U16
        } else if max_len < 1 << 32 {
            LengthWidth::U32
        } else {
            LengthWidth::U64
        }
    }

    /// Width in bytes; this is also the tag byte written on the wire.
    #[inline]
    pub fn bytes(self) -> u8 {
        self as u8
    }
}
