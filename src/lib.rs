//! csv2yaml generates text files from a delimited table and a template.
//! Every data row of the table is substituted into the template and the
//! result is written either to its own file or to a single aggregated file.

/// Command-line interface module for the csv2yaml application
pub mod cli;

/// Run configuration resolved from the command line
pub mod config;

/// Common constants and defaults
pub mod constants;

/// Error types and handling for the csv2yaml application
pub mod error;

/// Logger initialization
pub mod logger;

/// Run orchestration: validation, rendering and output routing
pub mod processor;

/// Rendering engines used by the processor
pub mod renderer;

/// Delimited table reading
pub mod table;

/// Template text and safe placeholder substitution
pub mod template;

/// Output file naming and writing
pub mod writer;
