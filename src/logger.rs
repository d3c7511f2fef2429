//! Logger setup for the command-line binary.

/// Initialises `env_logger`. `--verbose` enables debug output, otherwise only
/// warnings and errors are shown.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .format_timestamp(None)
        .init();
}
