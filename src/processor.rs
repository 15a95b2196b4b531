//! Core generation flow.
//! Validates the run configuration, renders every table row and routes the
//! result to its own file or to a single aggregated file.

use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

use crate::{
    config::Config,
    constants::{LINE_SEPARATOR, OUTPUT_DEFAULT_NAME},
    error::{Error, Result},
    renderer::TemplateRenderer,
    table::Table,
    template::Template,
    writer::write_to_file,
};

/// Checks the configured paths before anything is generated.
///
/// # Errors
/// * `Error::MissingInput` if the table or the given template is not a regular file
/// * `Error::InvalidOutput` if the output path exists and is not a directory
pub fn validate(config: &Config) -> Result<()> {
    if !config.csv.is_file() {
        return Err(Error::MissingInput(
            "CSV file does not exist or is not a file".to_string(),
        ));
    }

    if let Some(template) = &config.template {
        if !template.is_file() {
            return Err(Error::MissingInput(
                "Provided template file does not exist or is not a file".to_string(),
            ));
        }
    }

    if config.output.exists() && !config.output.is_dir() {
        return Err(Error::InvalidOutput(
            "Output file already exists but it is not a folder".to_string(),
        ));
    }

    Ok(())
}

/// Reads the template file, if any. An empty file counts as no template.
fn load_template(config: &Config) -> Result<Option<Template>> {
    match &config.template {
        Some(path) => {
            debug!("Loading template from {}", path.display());
            let text = fs::read_to_string(path)?;
            Ok(if text.is_empty() {
                None
            } else {
                Some(Template::new(text))
            })
        }
        None => Ok(None),
    }
}

/// Runs the generation described by `config`.
///
/// # Arguments
/// * `config` - Run configuration
/// * `renderer` - Engine rendering each row into the template
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Written files, in generation order
///
/// # Flow
/// 1. Creates the output directory if missing
/// 2. Loads the template, or synthesizes one from the headers
/// 3. Renders every row and writes it, or buffers it in single-file mode
/// 4. Writes the buffered output in single-file mode
pub fn run(config: &Config, renderer: &dyn TemplateRenderer) -> Result<Vec<PathBuf>> {
    if !config.output.exists() {
        debug!("Creating output directory {}", config.output.display());
        fs::create_dir_all(&config.output)?;
    }

    let template = load_template(config)?;
    let table = Table::open(&config.csv, &config.separator)?;
    let template = match template {
        Some(template) => template,
        None => {
            debug!("No template provided, using one built from the headers");
            Template::from_headers(table.headers())
        }
    };

    let headers = table.headers().to_vec();
    let mut written = Vec::new();
    let mut aggregated = String::new();
    let mut rows = 0usize;

    for row in table {
        let row = row?;
        rows += 1;
        let data = renderer.render(&template, &row.mapping(&headers));

        if config.single_file {
            aggregated.push_str(&data);
            aggregated.push_str(LINE_SEPARATOR);
        } else {
            written.push(write_to_file(
                &config.prefix,
                row.base_name(),
                &config.output,
                &config.ext,
                &data,
            )?);
        }
    }

    if config.single_file {
        if rows == 0 {
            warn!("{} has no data rows", config.csv.display());
        }
        written.push(write_to_file(
            &config.prefix,
            OUTPUT_DEFAULT_NAME,
            &config.output,
            &config.ext,
            &aggregated,
        )?);
    }

    debug!("Processed {} rows", rows);
    Ok(written)
}
