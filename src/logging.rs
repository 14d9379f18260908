use crate::errors::AppError;
use log::LevelFilter;

/// Level forced by the command-line switches, if any. Without one the
/// `RUST_LOG` filter (default `warn`) applies.
pub fn level_override(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Error)
    } else if verbose {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// Installs the stderr logger. Stdout is reserved for the session itself.
pub fn init(verbose: bool, quiet: bool) -> Result<(), AppError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = level_override(verbose, quiet) {
        builder.filter_level(level);
    }

    builder
        .target(env_logger::Target::Stderr)
        .try_init()
        .map_err(|e| AppError::Config(format!("logger setup failed: {}", e)))
}
