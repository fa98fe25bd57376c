mod codebook;
mod merger;
mod tree;

pub use codebook::{Codebook, Codeword};
pub use merger::{EmptyError, PriorityMerger};
pub use tree::HuffmanTree;

pub type Weight = u64;
pub type Symbol = usize;
pub type NodeIndex = usize;

#[cfg(test)]
mod proptests;
