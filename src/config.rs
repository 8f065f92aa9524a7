//! Driver configuration.
//!
//! Plain data built by the command line front end. The lexer itself takes
//! no configuration.

use tracing::Level;

use crate::logger::LogFormat;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// `None` disables logging.
    pub level: Option<Level>,
    pub format: LogFormat,
}

impl LogConfig {
    /// Maps a `-v` count: 0 is off, 1 info, 2 debug, 3 and above trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => None,
            1 => Some(Level::INFO),
            2 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        };

        LogConfig {
            level,
            format: LogFormat::default(),
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}
