//! Logger setup. `RUST_LOG` overrides the level chosen by `--verbose`.

/// Initializes the global logger, writing to stderr.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
