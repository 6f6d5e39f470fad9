//! Terminal logger setup for the command-line front end

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map the `-v` count and `-q` flag to a log level
///
/// Quiet wins over verbose. Without flags only warnings and errors are shown.
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }

    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the terminal logger
///
/// Returns `false` if a logger was already installed, in which case the
/// existing one keeps running.
pub fn init_logging(level: LevelFilter) -> bool {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_ok()
}
