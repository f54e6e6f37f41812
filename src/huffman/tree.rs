// src/huffman/tree.rs

//! The Huffman prefix-code tree and its weighted merge construction.

use crate::huffman::frequency::FrequencyTable;
use crate::huffman::symbol::Symbol;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Node in a Huffman tree. Weights exist only while the tree is being
/// built (see [`build_tree`]); a node carries none, so trees parsed back
/// from a header are indistinguishable from freshly built ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
    },
    Internal {
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: Symbol) -> Self {
        HuffNode::Leaf { symbol }
    }

    pub fn internal(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }
}

/// Heap entry during construction: the pending subtree plus the ordering
/// keys, which the archive format itself never records.
struct HeapEntry {
    weight: u64,
    /// Insertion sequence number. Leaves are seeded in ascending symbol
    /// index order and merged nodes are numbered after them, so equal
    /// weights always resolve the same way on every run and platform.
    order: u32,
    node: HuffNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Builds the prefix-code tree by repeatedly merging the two lightest
/// pending nodes. The node extracted first becomes the left child. The
/// frequency table always contains the end-of-stream marker, so the heap
/// is never empty and exactly one root remains; a degenerate table with a
/// single entry yields a lone leaf.
pub fn build_tree(frequencies: &FrequencyTable) -> HuffNode {
    let mut heap = BinaryHeap::new();
    let mut order = 0u32;

    for (symbol, count) in frequencies.occurring() {
        heap.push(Reverse(HeapEntry {
            weight: count,
            order,
            node: HuffNode::leaf(symbol),
        }));
        order += 1;
    }

    while heap.len() > 1 {
        let Reverse(first) = heap.pop().unwrap();
        let Reverse(second) = heap.pop().unwrap();
        heap.push(Reverse(HeapEntry {
            weight: first.weight + second.weight,
            order,
            node: HuffNode::internal(first.node, second.node),
        }));
        order += 1;
    }

    // Non-empty by the end-of-stream invariant.
    heap.pop().unwrap().0.node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::FrequencyTable;
    use std::io::Cursor;

    fn tree_for(bytes: &[u8]) -> HuffNode {
        let mut input = Cursor::new(bytes.to_vec());
        let table = FrequencyTable::from_reader(&mut input).unwrap();
        build_tree(&table)
    }

    #[test]
    fn empty_input_builds_a_lone_leaf() {
        let root = tree_for(b"");
        assert_eq!(root, HuffNode::leaf(Symbol::EndOfStream));
    }

    #[test]
    fn three_a_one_b_tree_shape() {
        // Weights: 'A' 3, 'B' 1, end marker 1. 'B' precedes the marker in
        // insertion order, so 'B' and the marker merge first with 'B' on
        // the left, and the weight-2 pair then lands left of 'A'.
        let root = tree_for(b"AAAB");
        let expected = HuffNode::internal(
            HuffNode::internal(
                HuffNode::leaf(Symbol::Byte(b'B')),
                HuffNode::leaf(Symbol::EndOfStream),
            ),
            HuffNode::leaf(Symbol::Byte(b'A')),
        );
        assert_eq!(root, expected);
    }

    #[test]
    fn construction_is_deterministic() {
        let a = tree_for(b"mississippi river");
        let b = tree_for(b"mississippi river");
        assert_eq!(a, b);
    }

    #[test]
    fn every_counted_byte_gets_a_leaf() {
        let root = tree_for(b"abracadabra");
        fn collect(node: &HuffNode, out: &mut Vec<Symbol>) {
            match node {
                HuffNode::Leaf { symbol } => out.push(*symbol),
                HuffNode::Internal { left, right } => {
                    collect(left, out);
                    collect(right, out);
                }
            }
        }
        let mut leaves = Vec::new();
        collect(&root, &mut leaves);
        for byte in [b'a', b'b', b'r', b'c', b'd'] {
            assert!(leaves.contains(&Symbol::Byte(byte)));
        }
        assert!(leaves.contains(&Symbol::EndOfStream));
        assert_eq!(leaves.len(), 6);
    }
}
