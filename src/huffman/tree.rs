use std::fmt;

use super::merger::PriorityMerger;
use super::{NodeIndex, Symbol, Weight};
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { zero: NodeIndex, one: NodeIndex },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    weight: Weight,
    parent: Option<NodeIndex>,
    kind: NodeKind,
}

/// Huffman coding tree built by greedy merging of the two lightest nodes.
///
/// Nodes live in an arena owned by the tree. The leaves occupy the first
/// `leaf_count()` slots in input order, so a leaf's node index equals its
/// symbol index. Merge nodes follow in creation order; the root, if any, is
/// always the last node.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: Option<NodeIndex>,
    leaf_count: usize,
}

impl HuffmanTree {
    pub fn build(weights: &[Weight]) -> crate::Result<HuffmanTree> {
        let mut nodes: Vec<Node> = Vec::with_capacity(weights.len().saturating_mul(2));
        let mut merger = PriorityMerger::with_capacity(weights.len());

        for (symbol, &weight) in weights.iter().enumerate() {
            merger.insert(nodes.len(), weight);
            nodes.push(Node {
                weight,
                parent: None,
                kind: NodeKind::Leaf { symbol },
            });
        }

        while merger.len() > 1 {
            let (first, first_weight) = merger.extract_min()?;
            let (second, second_weight) = merger.extract_min()?;
            let weight = first_weight
                .checked_add(second_weight)
                .ok_or(Error::WeightSumOverflow)?;
            let index = nodes.len();
            log::debug!(
                "merging node {} (w:{}) and node {} (w:{}) into node {}",
                first,
                first_weight,
                second,
                second_weight,
                index
            );
            nodes[first].parent = Some(index);
            nodes[second].parent = Some(index);
            nodes.push(Node {
                weight,
                parent: None,
                kind: NodeKind::Inner {
                    zero: second,
                    one: first,
                },
            });
            merger.insert(index, weight);
        }

        let root_index = if merger.is_empty() {
            None
        } else {
            Some(merger.extract_min()?.0)
        };

        let tree = HuffmanTree {
            nodes,
            root_index,
            leaf_count: weights.len(),
        };
        log::debug!(
            "built huffman tree with {} symbols and {} nodes, total weight {}",
            tree.leaf_count,
            tree.node_count(),
            tree.total_weight()
        );
        Ok(tree)
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root_index
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.root_index.is_none()
    }

    /// Weight of the root, which equals the sum of all symbol weights.
    pub fn total_weight(&self) -> Weight {
        self.root_index.map_or(0, |root| self.nodes[root].weight)
    }

    pub fn weight(&self, index: NodeIndex) -> Weight {
        self.nodes[index].weight
    }

    pub fn is_leaf(&self, index: NodeIndex) -> bool {
        matches!(self.nodes[index].kind, NodeKind::Leaf { .. })
    }

    pub fn symbol(&self, index: NodeIndex) -> Option<Symbol> {
        match self.nodes[index].kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    /// The `0` and `1` children of an inner node, `None` for leaves.
    pub fn children(&self, index: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
        match self.nodes[index].kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Inner { zero, one } => Some((zero, one)),
        }
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index].parent
    }

    /// Number of edges between the node and the root.
    pub fn depth(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = index;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

// Column of the label's center within a rendered subtree.
fn label_center(line: &str) -> usize {
    (leading_spaces(line) * 2 + line.trim().chars().count()) / 2
}

impl HuffmanTree {
    fn render(&self, index: NodeIndex) -> Vec<String> {
        let node = &self.nodes[index];
        let (zero, one) = match node.kind {
            NodeKind::Leaf { symbol } => {
                return vec![format!("(s:{},w:{})", symbol, node.weight)];
            }
            NodeKind::Inner { zero, one } => (zero, one),
        };

        let zero_box = self.render(zero);
        let one_box = self.render(one);
        let zero_width = zero_box[0].chars().count();
        let one_width = one_box[0].chars().count();
        let zero_center = label_center(&zero_box[0]);
        let one_center = label_center(&one_box[0]);

        let mut lines = vec![
            format!("{}•{}", SPACE.repeat(zero_width), SPACE.repeat(one_width)),
            format!("{}║{}", SPACE.repeat(zero_width), SPACE.repeat(one_width)),
            format!(
                "{}╔{}╩{}╗{}",
                SPACE.repeat(zero_center),
                BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(zero_width - zero_center - 1),
                BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(one_center),
                SPACE.repeat(one_width - one_center - 1)
            ),
        ];

        let height = std::cmp::max(zero_box.len(), one_box.len());
        for row in 0..height {
            let zero_line = zero_box
                .get(row)
                .cloned()
                .unwrap_or_else(|| SPACE.repeat(zero_width));
            let one_line = one_box
                .get(row)
                .cloned()
                .unwrap_or_else(|| SPACE.repeat(one_width));
            lines.push(format!("{} {}", zero_line, one_line));
        }
        lines
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root_index else {
            return writeln!(f, "(empty tree)");
        };
        for line in self.render(root) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanTree;
    use crate::error::Error;

    const CLASSIC_WEIGHTS: &[u64; 6] = &[5, 9, 12, 13, 16, 45];

    fn leaf_depths(tree: &HuffmanTree) -> Vec<usize> {
        (0..tree.leaf_count()).map(|leaf| tree.depth(leaf)).collect()
    }

    #[test]
    fn test_empty_weights_build_empty_tree() {
        let tree = HuffmanTree::build(&[]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.total_weight(), 0);
    }

    #[test]
    fn test_single_weight_builds_childless_root() {
        let tree = HuffmanTree::build(&[7]).unwrap();
        let root = tree.root().expect("tree with one symbol must have a root");
        assert!(tree.is_leaf(root));
        assert_eq!(tree.children(root), None);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.symbol(root), Some(0));
        assert_eq!(tree.total_weight(), 7);
    }

    #[test]
    fn test_classic_example_depths() {
        let tree = HuffmanTree::build(CLASSIC_WEIGHTS).unwrap();
        assert_eq!(leaf_depths(&tree), vec![4, 4, 3, 3, 3, 1]);
    }

    #[test]
    fn test_inner_node_weight_is_sum_of_children() {
        let tree = HuffmanTree::build(CLASSIC_WEIGHTS).unwrap();
        for index in 0..tree.node_count() {
            if let Some((zero, one)) = tree.children(index) {
                assert_eq!(
                    tree.weight(index),
                    tree.weight(zero) + tree.weight(one),
                    "Weight of node {} is not the sum of its children",
                    index
                );
            }
        }
        assert_eq!(tree.total_weight(), CLASSIC_WEIGHTS.iter().sum::<u64>());
    }

    #[test]
    fn test_parent_links_match_children() {
        let tree = HuffmanTree::build(CLASSIC_WEIGHTS).unwrap();
        assert_eq!(tree.node_count(), 2 * CLASSIC_WEIGHTS.len() - 1);
        for index in 0..tree.node_count() {
            match tree.parent(index) {
                Some(parent) => {
                    let (zero, one) = tree.children(parent).unwrap();
                    assert!(zero == index || one == index);
                }
                None => assert_eq!(Some(index), tree.root()),
            }
        }
    }

    #[test]
    fn test_second_extracted_node_becomes_zero_child() {
        let tree = HuffmanTree::build(&[3, 2]).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(tree.children(root), Some((0, 1)));
    }

    #[test]
    fn test_leaves_keep_symbol_order() {
        let tree = HuffmanTree::build(&[4, 0, 4, 2]).unwrap();
        for leaf in 0..tree.leaf_count() {
            assert!(tree.is_leaf(leaf));
            assert_eq!(tree.symbol(leaf), Some(leaf));
        }
        for inner in tree.leaf_count()..tree.node_count() {
            assert!(!tree.is_leaf(inner));
            assert_eq!(tree.symbol(inner), None);
        }
    }

    #[test]
    fn test_zero_weights_are_accepted() {
        let tree = HuffmanTree::build(&[0, 0, 0]).unwrap();
        assert_eq!(tree.total_weight(), 0);
        assert_eq!(leaf_depths(&tree), vec![2, 2, 1]);
    }

    #[test]
    fn test_weight_sum_overflow_fails() {
        let result = HuffmanTree::build(&[u64::MAX, 1]);
        assert!(matches!(result, Err(Error::WeightSumOverflow)));
    }

    #[test]
    fn test_display_renders_every_leaf() {
        let tree = HuffmanTree::build(&[1, 2, 4]).unwrap();
        let rendered = tree.to_string();
        for label in ["(s:0,w:1)", "(s:1,w:2)", "(s:2,w:4)"] {
            assert!(
                rendered.contains(label),
                "Label {} missing in\n{}",
                label,
                rendered
            );
        }
    }

    #[test]
    fn test_display_empty_tree() {
        let tree = HuffmanTree::build(&[]).unwrap();
        assert_eq!(tree.to_string(), "(empty tree)\n");
    }
}
