// src/huffman/header.rs

//! Pre-order serialization of the tree into the archive header.
//!
//! Per node one flag bit: `1` introduces a leaf followed by its 9-bit
//! symbol index, `0` introduces an internal node followed by its left then
//! right subtree. No counts or lengths are recorded; the recursion shape
//! alone delimits the header, so decoding consumes exactly the bits
//! encoding produced.

use crate::bitstream::{BitReader, BitWriter};
use crate::huffman::symbol::{Symbol, SYMBOL_BITS};
use crate::huffman::tree::HuffNode;
use crate::utils::error::{HuffError, Result};
use std::io::{Read, Write};

/// No valid tree over the 257-symbol alphabet nests deeper than this, so
/// header input that still recurses past it is rejected rather than walked.
const MAX_HEADER_DEPTH: u32 = Symbol::COUNT as u32;

/// Writes the tree in pre-order.
pub fn write_tree<W: Write>(node: &HuffNode, out: &mut BitWriter<W>) -> Result<()> {
    match node {
        HuffNode::Leaf { symbol } => {
            out.write_bit(true)?;
            out.write_bits(symbol.index() as u32, SYMBOL_BITS)
        }
        HuffNode::Internal { left, right } => {
            out.write_bit(false)?;
            write_tree(left, out)?;
            write_tree(right, out)
        }
    }
}

/// Reads one tree back out of the header. Running out of bits anywhere in
/// the shape is a truncated-header error.
pub fn read_tree<R: Read>(input: &mut BitReader<R>) -> Result<HuffNode> {
    read_node(input, 0)
}

fn read_node<R: Read>(input: &mut BitReader<R>, depth: u32) -> Result<HuffNode> {
    if depth > MAX_HEADER_DEPTH {
        return Err(HuffError::MalformedHeader);
    }
    match input.read_bit()? {
        None => Err(HuffError::TruncatedHeader),
        Some(true) => {
            let index = input
                .read_bits(SYMBOL_BITS)?
                .ok_or(HuffError::TruncatedHeader)?;
            Ok(HuffNode::leaf(Symbol::from_index(index as u16)?))
        }
        Some(false) => {
            let left = read_node(input, depth + 1)?;
            let right = read_node(input, depth + 1)?;
            Ok(HuffNode::internal(left, right))
        }
    }
}
