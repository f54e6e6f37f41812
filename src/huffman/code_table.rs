// src/huffman/code_table.rs

//! Per-symbol bit codes derived from root-to-leaf paths.

use crate::huffman::symbol::Symbol;
use crate::huffman::tree::HuffNode;
use crate::utils::error::{HuffError, Result};

/// One variable-length code as an explicit (bit-length, value) pair.
///
/// Carrying the length alongside the value keeps leading-zero codes intact;
/// a code of `001` is three bits, not the integer 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u128,
    pub len: u32,
}

/// Longest representable code. A path this deep requires symbol counts
/// growing like Fibonacci numbers, far past any physical input size, so
/// hitting the bound means something upstream is broken.
const MAX_CODE_LEN: u32 = 128;

/// Codes for every symbol that has a leaf in the tree, indexed densely by
/// symbol. Prefix-free by construction: no leaf sits on the path to
/// another.
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Walks the tree and records the path to each leaf, `0` for a left
    /// descent and `1` for a right one. A lone-leaf tree gets the 1-bit
    /// code `0` by convention so that even the empty-input archive writes
    /// a real terminator bit.
    pub fn from_tree(root: &HuffNode) -> Result<Self> {
        let mut codes = vec![None; Symbol::COUNT];
        if let HuffNode::Leaf { symbol } = root {
            codes[symbol.index()] = Some(Code { bits: 0, len: 1 });
            return Ok(Self { codes });
        }
        Self::walk(root, 0, 0, &mut codes)?;
        Ok(Self { codes })
    }

    fn walk(node: &HuffNode, bits: u128, len: u32, codes: &mut [Option<Code>]) -> Result<()> {
        match node {
            HuffNode::Leaf { symbol } => {
                codes[symbol.index()] = Some(Code { bits, len });
                Ok(())
            }
            HuffNode::Internal { left, right } => {
                if len == MAX_CODE_LEN {
                    return Err(HuffError::CodeTooLong);
                }
                Self::walk(left, bits << 1, len + 1, codes)?;
                Self::walk(right, (bits << 1) | 1, len + 1, codes)
            }
        }
    }

    /// The code assigned to a symbol, if its leaf exists.
    pub fn get(&self, symbol: Symbol) -> Option<Code> {
        self.codes[symbol.index()]
    }

    /// Number of symbols that received a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::FrequencyTable;
    use crate::huffman::tree::build_tree;
    use std::io::Cursor;

    fn table_for(bytes: &[u8]) -> CodeTable {
        let mut input = Cursor::new(bytes.to_vec());
        let freqs = FrequencyTable::from_reader(&mut input).unwrap();
        CodeTable::from_tree(&build_tree(&freqs)).unwrap()
    }

    #[test]
    fn three_a_one_b_codes() {
        let table = table_for(b"AAAB");
        assert_eq!(table.get(Symbol::Byte(b'A')), Some(Code { bits: 0b1, len: 1 }));
        assert_eq!(table.get(Symbol::Byte(b'B')), Some(Code { bits: 0b00, len: 2 }));
        assert_eq!(
            table.get(Symbol::EndOfStream),
            Some(Code { bits: 0b01, len: 2 })
        );
        assert_eq!(table.get(Symbol::Byte(b'C')), None);
    }

    #[test]
    fn lone_leaf_gets_a_one_bit_code() {
        let table = table_for(b"");
        assert_eq!(table.get(Symbol::EndOfStream), Some(Code { bits: 0, len: 1 }));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<Code> = (0..Symbol::COUNT as u16)
            .filter_map(|i| table.get(Symbol::from_index(i).unwrap()))
            .collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i == j {
                    continue;
                }
                if a.len <= b.len {
                    let prefix = b.bits >> (b.len - a.len);
                    assert_ne!(prefix, a.bits, "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }
}
