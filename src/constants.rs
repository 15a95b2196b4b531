//! Common constants used throughout the csv2yaml application.

/// Base name of the output file in single-file mode
pub const OUTPUT_DEFAULT_NAME: &str = "csv2yaml_output";

/// Default extension for generated files
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Default directory for generated files
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default field separator of the input table
pub const DEFAULT_SEPARATOR: &str = ",";

/// Appended after every rendered row in single-file mode
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";
