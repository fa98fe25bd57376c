use std::io::BufRead;

use crate::error::Error;
use crate::huffman::Weight;

/// Parser for symbol weight files.
///
/// The first line holds the number of symbols, each following line the
/// weight of one symbol in symbol order. Whitespace around a value is
/// ignored, an empty line is a parsing error.
pub struct WeightsParser;

const MAX_PREALLOCATED_WEIGHTS: usize = 1 << 16;

impl WeightsParser {
    pub fn parse<R: BufRead>(reader: R, source_name: &str) -> crate::Result<Vec<Weight>> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line));

        let (_, count_line) = lines.next().ok_or(Error::InputEmpty)?;
        let count_line = count_line.map_err(|e| Error::InputUnreadable(source_name.to_owned(), e))?;
        let declared: usize = count_line
            .trim()
            .parse()
            .map_err(|_| Error::ParsingOfSymbolCountFailed(count_line.trim().to_owned()))?;

        // the declared count is unchecked until all lines are read
        let mut weights = Vec::with_capacity(declared.min(MAX_PREALLOCATED_WEIGHTS));
        for (line_number, line) in lines {
            let line = line.map_err(|e| Error::InputUnreadable(source_name.to_owned(), e))?;
            let token = line.trim();
            let weight = token.parse().map_err(|_| Error::ParsingOfWeightFailed {
                line: line_number,
                token: token.to_owned(),
            })?;
            weights.push(weight);
        }

        if weights.len() != declared {
            return Err(Error::InputCountMismatch {
                declared,
                parsed: weights.len(),
            });
        }

        log::info!("parsed {} symbol weights from {}", weights.len(), source_name);
        Ok(weights)
    }
}
