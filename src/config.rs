//! Run configuration for csv2yaml.
//! Resolved once from the command line and shared read-only by every stage.

use std::path::PathBuf;

use crate::cli::Args;
use crate::constants::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR, DEFAULT_SEPARATOR};

/// Settings of a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input table
    pub csv: PathBuf,
    /// Template file; synthesized from the headers when absent
    pub template: Option<PathBuf>,
    /// Extension of generated files, without the dot
    pub ext: String,
    /// Directory receiving generated files
    pub output: PathBuf,
    /// Prepended to every generated file name
    pub prefix: String,
    /// One aggregated file instead of one file per row
    pub single_file: bool,
    /// Field separator of the table
    pub separator: String,
}

impl Config {
    /// Creates a configuration for `csv` with every other setting at its default.
    pub fn new<P: Into<PathBuf>>(csv: P) -> Self {
        Self {
            csv: csv.into(),
            template: None,
            ext: DEFAULT_EXTENSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            prefix: String::new(),
            single_file: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            csv: args.csv,
            template: args.template,
            ext: args.ext,
            output: args.output,
            prefix: args.prefix,
            single_file: args.single_file,
            separator: args.separator,
        }
    }
}
