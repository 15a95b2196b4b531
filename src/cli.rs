//! Command-line interface implementation for csv2yaml.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR, DEFAULT_SEPARATOR};

/// Command-line arguments structure for csv2yaml.
#[derive(Parser, Debug)]
#[command(author, version, about = "csv2yaml: generate files from a CSV table and a template", long_about = None)]
pub struct Args {
    /// Path to the file with the input data. The first line holds the names
    /// of the parameters to replace in the template
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Path to the template file. Parameters are replaced by the values of
    /// every line of the input data
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Extension of the output file names
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Directory where the output files are generated
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Prefix of the output file names
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Write a single file where the template is repeated once per input line.
    /// Without it one file is created per input line, named after the first
    /// value of the line. Taken names get a numeric suffix.
    #[arg(short, long = "single")]
    pub single_file: bool,

    /// Separator between the values of every line
    #[arg(long, visible_alias = "sep", default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 and the help text on stderr if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let help = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .render_help();
                eprintln!("{}", help);
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
