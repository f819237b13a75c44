//! log4rs setup.
//!
//! Log output always goes to stderr, stdout carries the addresses.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable holding the default log level, e.g. `CIDR_EXPAND_LOG=debug`.
pub const LOG_ENV: &str = "CIDR_EXPAND_LOG";

/// log4rs file picked up from the working directory when present.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Level from `-v` count, falling back to the env value, then `error`.
pub fn log_level(verbose: u8, env_level: Option<&str>) -> LevelFilter {
    match verbose {
        0 => env_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Error),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise log4rs.
///
/// An explicit `config_file` must exist. Without one, `log4rs.yml` is used if present,
/// otherwise a stderr console logger at `level`.
pub fn init_logging(config_file: Option<&Path>, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let config_file = match config_file {
        Some(file) if !file.exists() => {
            return Err(format!("Log config file does not exist: {}", file.display()).into());
        }
        Some(file) => Some(file),
        None => Some(Path::new(DEFAULT_LOG_CONFIG)).filter(|file| file.exists()),
    };

    if let Some(file) = config_file {
        log4rs::init_file(file, Default::default())?;
        log::debug!("Logging configured from {}", file.display());
        return Ok(());
    }

    log4rs::init_config(stderr_config(level)?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
