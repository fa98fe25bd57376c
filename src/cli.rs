use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_print_codebook_argument(command);
        Self::register_print_tree_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_print_codebook_argument(command: Command) -> Command {
        command.arg(Self::create_print_codebook_argument())
    }

    fn register_print_tree_argument(command: Command) -> Command {
        command.arg(Self::create_print_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the symbol weights file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_print_codebook_argument() -> Arg {
        arg!(print_codebook: -c --codebook "Print the codeword of every symbol")
            .action(ArgAction::SetTrue)
    }

    fn create_print_tree_argument() -> Arg {
        arg!(print_tree: -t --tree "Print the huffman tree")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            print_codebook: Self::extract_print_codebook_argument(matches),
            print_tree: Self::extract_print_tree_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_print_codebook_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_codebook")
    }

    fn extract_print_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
