//! Bit-oriented reader and writer over any `Read`/`Write` stream.

pub mod bit_reader;
pub mod bit_writer;

// Re-export commonly used types
pub use bit_reader::BitReader;
pub use bit_writer::BitWriter;
