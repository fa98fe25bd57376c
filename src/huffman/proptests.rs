use super::*;

use proptest::prelude::*;

fn weights_strategy() -> impl Strategy<Value = Vec<Weight>> {
    prop::collection::vec(0u64..1_000, 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_build_is_deterministic(weights in weights_strategy()) {
        let first = HuffmanTree::build(&weights).unwrap().make_code_book();
        let second = HuffmanTree::build(&weights).unwrap().make_code_book();
        let first_codewords: Vec<(Symbol, Codeword)> =
            first.symbol_codewords().map(|(s, c)| (s, c.clone())).collect();
        let second_codewords: Vec<(Symbol, Codeword)> =
            second.symbol_codewords().map(|(s, c)| (s, c.clone())).collect();
        prop_assert_eq!(first_codewords, second_codewords);
        prop_assert_eq!(first.min_length(), second.min_length());
        prop_assert_eq!(first.max_length(), second.max_length());
    }

    #[test]
    fn prop_weights_are_conserved(weights in weights_strategy()) {
        let tree = HuffmanTree::build(&weights).unwrap();
        for index in 0..tree.node_count() {
            if let Some((zero, one)) = tree.children(index) {
                prop_assert_eq!(tree.weight(index), tree.weight(zero) + tree.weight(one));
            }
        }
        prop_assert_eq!(tree.total_weight(), weights.iter().sum::<u64>());
    }

    #[test]
    fn prop_leaf_codewords_are_prefix_free(weights in weights_strategy()) {
        let codebook = HuffmanTree::build(&weights).unwrap().make_code_book();
        prop_assert!(codebook.is_prefix_free());
        let codewords: Vec<&Codeword> = codebook.symbol_codewords().map(|(_, c)| c).collect();
        for (i, a) in codewords.iter().enumerate() {
            for (j, b) in codewords.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn prop_every_symbol_gets_a_codeword(weights in weights_strategy()) {
        let codebook = HuffmanTree::build(&weights).unwrap().make_code_book();
        prop_assert_eq!(codebook.symbol_codewords().count(), weights.len());
        for symbol in 0..weights.len() {
            let codeword = codebook.codeword_for_symbol(symbol);
            prop_assert!(codeword.is_some_and(|c| !c.is_empty()));
        }
    }

    #[test]
    fn prop_extremes_bound_leaf_lengths(weights in weights_strategy()) {
        let codebook = HuffmanTree::build(&weights).unwrap().make_code_book();
        let lengths: Vec<usize> = codebook.symbol_codewords().map(|(_, c)| c.len()).collect();
        prop_assert_eq!(codebook.min_length(), lengths.iter().copied().min());
        prop_assert_eq!(codebook.max_length(), lengths.iter().copied().max());
    }

    #[test]
    fn prop_heavier_symbols_never_get_longer_codewords(weights in weights_strategy()) {
        let codebook = HuffmanTree::build(&weights).unwrap().make_code_book();
        for (a, ca) in codebook.symbol_codewords() {
            for (b, cb) in codebook.symbol_codewords() {
                if weights[a] > weights[b] {
                    prop_assert!(ca.len() <= cb.len());
                }
            }
        }
    }
}
