use huffman_codebook::huffman::HuffmanTree;
use huffman_codebook::{CodewordLengthReport, Error};

fn main() -> Result<(), Error> {
    // symbol weights, symbol i has weight weights[i]
    let weights = vec![5, 9, 12, 13, 16, 45];

    let tree = HuffmanTree::build(&weights)?;
    println!("huffman tree\n{}", tree);

    let codebook = tree.make_code_book();
    println!("codebook");
    for (symbol, codeword) in codebook.symbol_codewords() {
        println!("{} (w:{}) -> {}", symbol, weights[symbol], codeword);
    }
    println!("prefix free: {}", codebook.is_prefix_free());
    print!("{}", CodewordLengthReport::from(&codebook));
    Ok(())
}
