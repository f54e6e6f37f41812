// src/bitstream/bit_writer.rs

//! A bit-level writer for producing compressed streams.
//!
//! Bits are packed most-significant-first within each byte. The writer also
//! tracks how many bits it has emitted so callers can report compression
//! statistics.

use crate::huffman::code_table::Code;
use crate::utils::error::Result;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

pub struct BitWriter<W: Write> {
    writer: W,
    current_byte: u8,
    bits_in_current: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Creates a new BitWriter.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_byte: 0,
            bits_in_current: 0,
            bits_written: 0,
        }
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        if bit {
            self.current_byte |= 1 << (7 - self.bits_in_current);
        }
        self.bits_in_current += 1;
        self.bits_written += 1;

        if self.bits_in_current == 8 {
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        Ok(())
    }

    /// Writes the low `bit_count` bits of `value`, most-significant-bit
    /// first. `bit_count` must not exceed 32.
    pub fn write_bits(&mut self, value: u32, bit_count: u8) -> Result<()> {
        debug_assert!(bit_count <= 32);
        // Aligned whole-word fields go straight through byteorder.
        if bit_count == 32 && self.bits_in_current == 0 {
            self.writer.write_u32::<BigEndian>(value)?;
            self.bits_written += 32;
            return Ok(());
        }
        for i in (0..bit_count).rev() {
            let bit = (value >> i) & 1 == 1;
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Writes one variable-length code as its (bit-length, value) pair.
    pub fn write_code(&mut self, code: &Code) -> Result<()> {
        for i in (0..code.len).rev() {
            let bit = (code.bits >> i) & 1 == 1;
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Total number of bits written so far, not counting the padding that
    /// `finish` adds.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Zero-fills any partial trailing byte, flushes the underlying writer,
    /// and returns it.
    pub fn finish(mut self) -> Result<W> {
        if self.bits_in_current > 0 {
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}
