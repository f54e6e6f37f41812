// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the huffpack library.
///
/// Every variant is fatal for the run that raised it: the archive format
/// carries no length fields or checksums, so partial output is never valid.
#[derive(Error, Debug)]
pub enum HuffError {
    /// An error occurred during I/O on the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not begin with the expected magic number.
    #[error("bad magic number: expected {expected:#010x}, found {found:#010x}")]
    BadMagic { expected: u32, found: u32 },

    /// The stream ended while the tree header was still being parsed.
    #[error("compressed stream ended inside the tree header")]
    TruncatedHeader,

    /// The stream ended before the end-of-stream code was reached.
    #[error("compressed stream ended before the end-of-stream code")]
    TruncatedPayload,

    /// A leaf in the tree header carries a symbol index outside `0..=256`.
    #[error("tree header contains out-of-range symbol index {0}")]
    InvalidSymbol(u16),

    /// The tree header nests deeper than any tree over a 257-symbol
    /// alphabet can.
    #[error("tree header nesting exceeds the alphabet bound")]
    MalformedHeader,

    /// A symbol has no entry in the code table. The frequency and tree
    /// builders guarantee every counted symbol a leaf; seeing this means an
    /// internal invariant was broken.
    #[error("no code for symbol index {0}")]
    MissingCode(u16),

    /// A code path grew past the supported 128-bit length.
    #[error("code length exceeds the supported maximum")]
    CodeTooLong,
}

/// A specialized `Result` type for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffError>;
