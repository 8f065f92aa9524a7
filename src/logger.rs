//! Logging setup based on `tracing` and `tracing-subscriber`.
//!
//! The library only emits events (target `arith::lexer`); installing a
//! subscriber is left to the binary.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LogConfig;

pub const LEXER_TARGET: &str = "arith::lexer";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

fn targets(config: &LogConfig) -> Targets {
    let level = match config.level {
        Some(level) => LevelFilter::from_level(level),
        None => LevelFilter::OFF,
    };

    Targets::new()
        .with_default(LevelFilter::WARN.min(level))
        .with_target(LEXER_TARGET, level)
        .with_target("arith::cli", level)
}

/// Installs a global subscriber writing to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init_with_format(config: &LogConfig) {
    let layer = create_format_layer(config.format, io::stderr).with_filter(targets(config));
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
