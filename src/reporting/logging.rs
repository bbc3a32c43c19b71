use crate::config::Config;
use crate::discovery::WalkOptions;
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A second initialization (e.g. across tests) keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective configuration for one run
pub fn log_config_info(config: &Config, options: &WalkOptions) {
    let roots: Vec<String> = options
        .roots
        .iter()
        .map(|r| r.display().to_string())
        .collect();
    let mut extensions: Vec<&str> = options.extensions.iter().map(String::as_str).collect();
    extensions.sort_unstable();
    let rules = config.rewrite_rules();

    info!(
        "Configuration: roots=[{}], extensions=[{}], dry_run={}",
        roots.join(", "),
        extensions.join(", "),
        config.is_dry_run()
    );
    info!(
        "Rewrite: marker={}, helper={}, prefix={}",
        rules.marker, rules.helper_symbol, rules.api_prefix
    );
}

/// Log a per-file failure
pub fn log_file_error(path: &Path, source: &dyn std::error::Error) {
    error!("{}: {source}", path.display());
}
