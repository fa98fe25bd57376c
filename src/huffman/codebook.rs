use std::fmt;

use super::tree::HuffmanTree;
use super::{NodeIndex, Symbol};

/// Sequence of branch decisions from the root, `false` for the `0` child and
/// `true` for the `1` child.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, bit: bool) -> Codeword {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Codeword { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<&str> for Codeword {
    fn from(value: &str) -> Self {
        Codeword {
            bits: value.chars().map(|c| c == '1').collect(),
        }
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Codewords for every node of a [`HuffmanTree`], indexed by node index.
///
/// Inner nodes get the codeword of the path leading to them. Only leaf
/// codewords contribute to [`Codebook::min_length`] and
/// [`Codebook::max_length`], which stay `None` when the tree has no leaves.
pub struct Codebook {
    codewords: Vec<Option<Codeword>>,
    leaf_count: usize,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl Codebook {
    pub fn new(tree: &HuffmanTree) -> Codebook {
        let mut codebook = Codebook {
            codewords: vec![None; tree.node_count()],
            leaf_count: tree.leaf_count(),
            min_length: None,
            max_length: None,
        };

        let Some(root) = tree.root() else {
            return codebook;
        };

        if tree.is_leaf(root) {
            codebook.insert(tree, root, Codeword::from("0"));
        } else {
            codebook.fill(tree, root);
        }

        log::debug!(
            "codebook covers {} nodes, leaf codeword lengths {:?}..={:?}",
            codebook.len(),
            codebook.min_length,
            codebook.max_length
        );
        codebook
    }

    fn fill(&mut self, tree: &HuffmanTree, root: NodeIndex) {
        let mut pending = vec![(root, Codeword::new())];
        while let Some((index, codeword)) = pending.pop() {
            if let Some((zero, one)) = tree.children(index) {
                // pushed in reverse so the 0 branch is visited first
                pending.push((one, codeword.push(true)));
                pending.push((zero, codeword.push(false)));
            }
            self.insert(tree, index, codeword);
        }
    }

    fn insert(&mut self, tree: &HuffmanTree, index: NodeIndex, codeword: Codeword) {
        if tree.is_leaf(index) {
            let length = codeword.len();
            self.min_length = Some(self.min_length.map_or(length, |min| min.min(length)));
            self.max_length = Some(self.max_length.map_or(length, |max| max.max(length)));
        }
        self.codewords[index] = Some(codeword);
    }

    pub fn codeword(&self, index: NodeIndex) -> Option<&Codeword> {
        self.codewords.get(index)?.as_ref()
    }

    pub fn codeword_for_symbol(&self, symbol: Symbol) -> Option<&Codeword> {
        if symbol >= self.leaf_count {
            return None;
        }
        self.codeword(symbol)
    }

    /// Leaf codewords in symbol order.
    pub fn symbol_codewords(&self) -> impl Iterator<Item = (Symbol, &Codeword)> + '_ {
        self.codewords[..self.leaf_count]
            .iter()
            .enumerate()
            .filter_map(|(symbol, codeword)| codeword.as_ref().map(|c| (symbol, c)))
    }

    pub fn len(&self) -> usize {
        self.codewords.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn is_prefix_free(&self) -> bool {
        let mut leaf_codewords: Vec<&Codeword> = self.symbol_codewords().map(|(_, c)| c).collect();
        leaf_codewords.sort_by(|a, b| a.bits().cmp(b.bits()));
        // after sorting, a prefix always directly precedes one of its extensions
        leaf_codewords
            .windows(2)
            .all(|pair| !pair[0].is_prefix_of(pair[1]))
    }
}

impl HuffmanTree {
    pub fn make_code_book(&self) -> Codebook {
        Codebook::new(self)
    }
}
