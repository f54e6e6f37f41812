// src/huffman/frequency.rs

//! Frequency counting pass over the raw input.

use crate::huffman::symbol::Symbol;
use crate::utils::error::Result;
use std::io::Read;

const READ_CHUNK: usize = 8 * 1024;

/// Occurrence counts for every alphabet value, built in one pass over the
/// raw input. The end-of-stream marker always holds count 1: it is injected
/// after the pass, never observed.
pub struct FrequencyTable {
    counts: [u64; Symbol::COUNT],
}

impl FrequencyTable {
    /// Counts every byte of `reader` until it is exhausted, then injects
    /// the end-of-stream count. Empty input is fine; the table then holds
    /// nothing but the end marker.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut counts = [0u64; Symbol::COUNT];
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            for &byte in &chunk[..n] {
                counts[byte as usize] += 1;
            }
        }
        counts[Symbol::EndOfStream.index()] = 1;
        Ok(Self { counts })
    }

    /// The count recorded for one symbol.
    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// Symbols with a non-zero count, in ascending index order, paired
    /// with their counts.
    pub fn occurring(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, &count)| {
                let symbol = if index == Symbol::EndOfStream.index() {
                    Symbol::EndOfStream
                } else {
                    Symbol::Byte(index as u8)
                };
                (symbol, count)
            })
    }

    /// Total bytes counted, excluding the injected end marker.
    pub fn total_bytes(&self) -> u64 {
        self.counts[..Symbol::COUNT - 1].iter().sum()
    }
}
