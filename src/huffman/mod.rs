//! Huffman coding: frequency counting, tree construction, code derivation,
//! and the tree-header serialization.

pub mod code_table;
pub mod frequency;
pub mod header;
pub mod symbol;
pub mod tree;

// Re-export commonly used types
pub use code_table::{Code, CodeTable};
pub use frequency::FrequencyTable;
pub use symbol::Symbol;
pub use tree::{build_tree, HuffNode};
