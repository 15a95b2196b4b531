//! Output file naming and writing.
//! Generated files never overwrite each other: a taken name gets a numeric
//! suffix until an unused one is found.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Calculates a file name in `output_dir` based on `base_name`.
///
/// Returns `<base_name>.<ext>` if it is free, otherwise the first free of
/// `<base_name>_1.<ext>`, `<base_name>_2.<ext>`, ...
pub fn output_filename<P: AsRef<Path>>(base_name: &str, output_dir: P, ext: &str) -> PathBuf {
    let output_dir = output_dir.as_ref();
    let mut path = output_dir.join(format!("{}.{}", base_name, ext));
    let mut counter = 0;
    while path.exists() {
        counter += 1;
        path = output_dir.join(format!("{}_{}.{}", base_name, counter, ext));
    }
    path
}

/// Writes `data` to a new file named `<prefix><name>` in `output_dir`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the resolved output file
///
/// # Errors
/// * `Error::Conflict` if the resolved path is a directory
/// * `Error::IoError` if writing fails
pub fn write_to_file<P: AsRef<Path>>(
    prefix: &str,
    name: &str,
    output_dir: P,
    ext: &str,
    data: &str,
) -> Result<PathBuf> {
    let base_name = format!("{}{}", prefix, name);
    let path = output_filename(&base_name, output_dir, ext);

    if path.is_dir() {
        return Err(Error::Conflict(format!(
            "A subfolder with the same name of the output file {} is found",
            path.display()
        )));
    }

    // Never clobber an existing file.
    if path.is_file() {
        debug!("Skipping existing file: {}", path.display());
        return Ok(path);
    }

    fs::write(&path, data)?;
    debug!("Written file: {}", path.display());
    Ok(path)
}
