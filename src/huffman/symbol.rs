// src/huffman/symbol.rs

//! The coded alphabet: every raw byte value plus one end-of-stream marker.
//!
//! The marker is a distinct variant rather than a bare `256` so that no raw
//! byte can ever collide with it, and so the header field width stays tied
//! to `Symbol::COUNT` in one place.

use crate::utils::error::{HuffError, Result};

/// Number of bits in a raw input word.
pub const BITS_PER_BYTE: u8 = 8;

/// Width of a serialized symbol index in the tree header. One bit wider
/// than a raw byte so the end-of-stream index fits.
pub const SYMBOL_BITS: u8 = BITS_PER_BYTE + 1;

/// One value of the coded alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A raw input byte.
    Byte(u8),
    /// The logical end of the payload. Never observed in input; injected
    /// with count 1 by the frequency pass and written exactly once as the
    /// payload terminator.
    EndOfStream,
}

impl Symbol {
    /// Size of the alphabet: 256 byte values plus the end marker.
    pub const COUNT: usize = 257;

    /// Dense index in `0..Symbol::COUNT`; the end marker sits past the
    /// byte range.
    pub fn index(self) -> usize {
        match self {
            Symbol::Byte(b) => b as usize,
            Symbol::EndOfStream => Self::COUNT - 1,
        }
    }

    /// Reconstructs a symbol from a header index field.
    pub fn from_index(index: u16) -> Result<Self> {
        match index {
            0..=255 => Ok(Symbol::Byte(index as u8)),
            256 => Ok(Symbol::EndOfStream),
            _ => Err(HuffError::InvalidSymbol(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_whole_alphabet() {
        for i in 0..Symbol::COUNT as u16 {
            let symbol = Symbol::from_index(i).unwrap();
            assert_eq!(symbol.index(), i as usize);
        }
        assert_eq!(Symbol::EndOfStream.index(), 256);
    }

    #[test]
    fn rejects_indices_past_the_marker() {
        assert!(matches!(
            Symbol::from_index(257),
            Err(HuffError::InvalidSymbol(257))
        ));
        // Largest value a 9-bit field can carry.
        assert!(Symbol::from_index(511).is_err());
    }
}
