// src/bitstream/bit_reader.rs

//! A bit-level reader for consuming compressed streams.
//!
//! Exhaustion of the underlying reader is reported as `Ok(None)` rather than
//! an error; whether running out of bits is fatal depends on where the
//! caller is in the format, so the decision is left to it.

use crate::utils::error::Result;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{ErrorKind, Read};

pub struct BitReader<R: Read> {
    reader: R,
    current_byte: u8,
    bits_remaining: u8,
    bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current_byte: 0,
            bits_remaining: 0,
            bits_read: 0,
        }
    }

    /// Reads a single bit, or `None` once the underlying reader is
    /// exhausted.
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.bits_remaining == 0 {
            let mut byte = [0u8; 1];
            match self.reader.read_exact(&mut byte) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            }
            self.current_byte = byte[0];
            self.bits_remaining = 8;
        }

        self.bits_remaining -= 1;
        self.bits_read += 1;
        Ok(Some((self.current_byte >> self.bits_remaining) & 1 == 1))
    }

    /// Reads `bit_count` bits (at most 32) as an unsigned value,
    /// most-significant-bit first. Returns `None` if the stream runs out
    /// anywhere inside the field.
    pub fn read_bits(&mut self, bit_count: u8) -> Result<Option<u32>> {
        debug_assert!(bit_count <= 32);
        // Aligned whole-word fields go straight through byteorder.
        if bit_count == 32 && self.bits_remaining == 0 {
            return match self.reader.read_u32::<BigEndian>() {
                Ok(value) => {
                    self.bits_read += 32;
                    Ok(Some(value))
                }
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
                Err(e) => Err(e.into()),
            };
        }

        let mut value = 0u32;
        for _ in 0..bit_count {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | bit as u32,
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }

    /// Total number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_bits_msb_first() {
        let mut reader = BitReader::new(Cursor::new(vec![0b1010_0000]));
        assert_eq!(reader.read_bit().unwrap(), Some(true));
        assert_eq!(reader.read_bit().unwrap(), Some(false));
        assert_eq!(reader.read_bit().unwrap(), Some(true));
    }

    #[test]
    fn signals_exhaustion_with_none() {
        let mut reader = BitReader::new(Cursor::new(vec![0xFF]));
        for _ in 0..8 {
            assert!(reader.read_bit().unwrap().is_some());
        }
        assert_eq!(reader.read_bit().unwrap(), None);
        assert_eq!(reader.bits_read(), 8);
    }

    #[test]
    fn partial_field_reads_as_none() {
        // Nine bits requested, only eight available.
        let mut reader = BitReader::new(Cursor::new(vec![0xAB]));
        assert_eq!(reader.read_bits(9).unwrap(), None);
    }

    #[test]
    fn aligned_u32_matches_bitwise_path() {
        let bytes = vec![0xFA, 0xCE, 0x82, 0x01];
        let mut aligned = BitReader::new(Cursor::new(bytes.clone()));
        assert_eq!(aligned.read_bits(32).unwrap(), Some(0xFACE_8201));

        let mut bitwise = BitReader::new(Cursor::new(bytes));
        let mut value = 0u32;
        for _ in 0..32 {
            value = (value << 1) | bitwise.read_bit().unwrap().unwrap() as u32;
        }
        assert_eq!(value, 0xFACE_8201);
    }
}
