//! csv2yaml's main application entry point.
//! Parses the command line, validates it and runs the generation.

use csv2yaml::{
    cli::get_args,
    config::Config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{run, validate},
    renderer::SafeSubstituteRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = execute(Config::from(args)) {
        default_error_handler(err);
    }
}

fn execute(config: Config) -> Result<()> {
    validate(&config)?;
    let written = run(&config, &SafeSubstituteRenderer::new())?;
    log::info!("{} file(s) generated in {}", written.len(), config.output.display());
    Ok(())
}
