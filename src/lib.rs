use std::{
    fmt,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{Codebook, HuffmanTree, Weight};
use weights::WeightsParser;

mod cli;
mod error;
pub mod huffman;
mod logger;
pub mod weights;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    print_codebook: bool,
    print_tree: bool,
}

/// Extreme leaf codeword lengths of a codebook, `None` when there are no
/// symbols. Absent lengths are displayed as `i32::MIN` for the maximum and
/// `i32::MAX` for the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordLengthReport {
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
}

impl From<&Codebook> for CodewordLengthReport {
    fn from(codebook: &Codebook) -> Self {
        Self {
            max_length: codebook.max_length(),
            min_length: codebook.min_length(),
        }
    }
}

// Printed in place of an absent length: the max starts below and the min
// above every possible codeword length.
const NO_MAX_LENGTH: i64 = i32::MIN as i64;
const NO_MIN_LENGTH: i64 = i32::MAX as i64;

fn length_or(length: Option<usize>, sentinel: i64) -> i64 {
    length.map_or(sentinel, |length| length as i64)
}

impl fmt::Display for CodewordLengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Max Codeword Length: {}",
            length_or(self.max_length, NO_MAX_LENGTH)
        )?;
        writeln!(
            f,
            "Min Codeword Length: {}",
            length_or(self.min_length, NO_MIN_LENGTH)
        )
    }
}

fn path_to_string(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| Error::InputUnreadable(path_to_string(file_path), e))
}

pub fn read_weights(file_path: &Path) -> Result<Vec<Weight>> {
    let input_file = open_input_file(file_path)?;
    WeightsParser::parse(BufReader::new(input_file), &path_to_string(file_path))
}

fn write_codebook<W: Write>(writer: &mut W, weights: &[Weight], codebook: &Codebook) -> Result<()> {
    for (symbol, codeword) in codebook.symbol_codewords() {
        writeln!(
            writer,
            "Symbol {} (weight {}): {}",
            symbol, weights[symbol], codeword
        )
        .map_err(Error::FailedToWriteReport)?;
    }
    Ok(())
}

/// Reads the weights file named in `arguments`, builds the huffman tree and
/// writes the codeword length report to `writer`.
pub fn report_codeword_lengths<W: Write>(
    arguments: &Arguments,
    writer: &mut W,
) -> Result<CodewordLengthReport> {
    let weights = read_weights(&arguments.input_file)?;
    let tree = HuffmanTree::build(&weights)?;
    let codebook = tree.make_code_book();
    let report = CodewordLengthReport::from(&codebook);

    if arguments.print_tree {
        write!(writer, "{}", tree).map_err(Error::FailedToWriteReport)?;
    }
    write!(writer, "{}", report).map_err(Error::FailedToWriteReport)?;
    if arguments.print_codebook {
        write_codebook(writer, &weights, &codebook)?;
    }
    writer.flush().map_err(Error::FailedToWriteReport)?;
    Ok(report)
}
