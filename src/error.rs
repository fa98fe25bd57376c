use std::fmt::Display;

use crate::huffman::EmptyError;

#[derive(Debug)]
pub enum Error {
    InputUnreadable(String, std::io::Error),
    InputEmpty,
    ParsingOfSymbolCountFailed(String),
    ParsingOfWeightFailed { line: usize, token: String },
    InputCountMismatch { declared: usize, parsed: usize },
    WeightSumOverflow,
    PriorityMergerExhausted,
    FailedToWriteReport(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputUnreadable(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::InputEmpty => {
                write!(f, "Input is empty, expected the number of symbols")
            }
            Self::ParsingOfSymbolCountFailed(token) => {
                write!(f, "Parsing of symbol count '{}' failed", token)
            }
            Self::ParsingOfWeightFailed { line, token } => {
                write!(f, "Parsing of weight '{}' in line {} failed", token, line)
            }
            Self::InputCountMismatch { declared, parsed } => {
                write!(
                    f,
                    "Number of weights does not match the symbol count. Declared {}, but parsed {}.",
                    declared, parsed
                )
            }
            Self::WeightSumOverflow => {
                write!(f, "Sum of symbol weights exceeds {}", u64::MAX)
            }
            Self::PriorityMergerExhausted => {
                write!(f, "Priority merger ran out of nodes while building the tree")
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<EmptyError> for Error {
    fn from(_: EmptyError) -> Self {
        Self::PriorityMergerExhausted
    }
}
