//! A lossless Huffman file compressor and decompressor.
//!
//! An archive is self-describing: a 32-bit magic word, a pre-order
//! serialization of the code tree, and a bit-packed payload terminated by a
//! reserved end-of-stream code. Decompression rebuilds the tree from the
//! header and walks it one bit at a time, so the original bytes come back
//! exactly.
//!
//! # Quick Start
//!
//! ```
//! use huffpack::{compress_bytes, decompress_bytes};
//!
//! let archive = compress_bytes(b"sphinx of black quartz, judge my vow")?;
//! let restored = decompress_bytes(&archive)?;
//! assert_eq!(restored, b"sphinx of black quartz, judge my vow");
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! Streams work too: [`compress`] takes any `Read + Seek` input (the data
//! is scanned once for frequencies and once for encoding) and
//! [`decompress`] takes any `Read`.

// Core modules
pub mod bitstream;
pub mod codec;
pub mod huffman;
pub mod utils;

// Public codec API
pub use codec::{compress, compress_bytes, decompress, decompress_bytes, MAGIC};

// Building blocks (for custom pipelines)
pub use bitstream::{BitReader, BitWriter};
pub use huffman::{build_tree, Code, CodeTable, FrequencyTable, HuffNode, Symbol};

// Error types
pub use utils::error::{HuffError, Result};
