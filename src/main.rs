use std::env::args_os;
use std::io;
use std::process::ExitCode;

use huffman_codebook::{report_codeword_lengths, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut stdout = io::stdout().lock();
    match report_codeword_lengths(&arguments, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Codebook generation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
