//! Wire format constants and the shared error type for the block codec.
//!
//! <https://github.com/avaneev/lzav/blob/main/lzav.h> describes the reference format this
//! module implements: a prefix byte followed by a sequence of variable-length blocks, each
//! either a literal run or a back-reference, with an "offset carry" trick that lets a literal
//! or 24-bit-offset reference donate two otherwise-unused header bits to the very next
//! 10-bit or 18-bit reference.

pub mod compress;
pub mod decompress;
pub mod hash;
pub mod matchlen;
pub mod table;

use core::fmt;

/// Minimum reference (back-match) length. Stored in the low nibble of the stream prefix byte.
pub(crate) const MREF: usize = 6;

/// Sliding-window size: the largest representable back-reference offset, plus one.
pub(crate) const WIN_LEN: usize = 1 << 24;

/// Maximum length of a single literal block.
pub(crate) const LIT_LEN: usize = 1 + 15 + 255 + 255;

/// Literals mandatory at the end of every stream.
pub(crate) const LIT_FIN: usize = 5;

/// Maximum length of a single back-reference block.
pub(crate) const REF_LEN: usize = MREF + 15 + 255;

/// Currently published stream format identifier.
pub(crate) const FMT_CUR: u8 = 1;

/// Block-type tag occupying header bits 4-5.
pub(crate) const BTYPE_LITERAL: u8 = 0;
pub(crate) const BTYPE_REF10: u8 = 1;
pub(crate) const BTYPE_REF18: u8 = 2;
pub(crate) const BTYPE_REF24: u8 = 3;

/// Largest offset a 10-bit-offset reference block can address.
pub(crate) const REF10_MAX_OFFSET: usize = (1 << 10) - 1;
/// Largest offset an 18-bit-offset reference block can address.
pub(crate) const REF18_MAX_OFFSET: usize = (1 << 18) - 1;

/// Smallest offset worth encoding as a reference; matches closer than this don't pay for
/// their own header.
pub(crate) const MIN_USEFUL_OFFSET: usize = 7;

/// An error produced while decompressing a stream.
///
/// Every variant corresponds to one of the structural rejections a conforming decoder must
/// perform before it would otherwise read past the source or write past the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzavError {
    /// Arguments were individually or jointly nonsensical (e.g. a nonzero `srcl` paired with
    /// a zero `dstl`).
    Params,
    /// The prefix byte's high nibble did not name a format this decoder understands.
    UnknownFormat,
    /// A block's payload (literal bytes, offset bytes, or length-extension byte) would have
    /// to be read from beyond the end of the compressed stream.
    SourceOutOfBounds,
    /// A copy (literal or back-reference) would have to write past the end of the
    /// destination buffer.
    DestOutOfBounds,
    /// A back-reference's offset points before the start of the destination buffer.
    ReferenceOutOfBounds,
    /// Decoding completed but produced a length different from the caller-supplied `dstl`.
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for LzavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LzavError::Params => f.write_str("invalid compress/decompress arguments"),
            LzavError::UnknownFormat => f.write_str("unrecognized stream format byte"),
            LzavError::SourceOutOfBounds => {
                f.write_str("compressed stream ended before a block's payload")
            }
            LzavError::DestOutOfBounds => {
                f.write_str("a block would write past the end of the destination buffer")
            }
            LzavError::ReferenceOutOfBounds => {
                f.write_str("a back-reference points before the start of the output")
            }
            LzavError::LengthMismatch { expected, actual } => write!(
                f,
                "decompressed length {} does not match expected length {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LzavError {}
