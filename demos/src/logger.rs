//! Logging setup for the demo binary.

use log::{LevelFilter, SetLoggerError};

/// Level selected by the number of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` on stderr at the level for `verbosity`. Fails if a
/// logger is already set.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .try_init()
}
