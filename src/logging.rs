use std::{
    io::Write as _,
    sync::{OnceLock, PoisonError, RwLock},
};

use colored::{ColoredString, Colorize as _};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<CliLogger> = OnceLock::new();

pub fn get_logger() -> &'static CliLogger {
    LOGGER.get_or_init(|| CliLogger::new(LevelFilter::Warn))
}

/// Installs the logger, stdout stays reserved for the maze itself.
///
/// Can be called again later to change the level.
pub fn init(level: LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);

    // fails after the first call, the logger stays installed
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}

pub struct CliLogger {
    min_level: RwLock<LevelFilter>,
}

impl CliLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

fn level_tag(level: Level) -> ColoredString {
    let tag = format!("{:>5}", level);
    match level {
        Level::Error => tag.red().bold(),
        Level::Warn => tag.yellow(),
        Level::Info => tag.white(),
        Level::Debug => tag.blue(),
        Level::Trace => tag.dimmed(),
    }
}

pub fn format_record(record: &Record) -> String {
    format!(
        "{} {} -> {}",
        level_tag(record.level()),
        record.module_path().unwrap_or("unknown").dimmed(),
        record.args()
    )
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failing stderr
            let _ = writeln!(std::io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_format() {
        colored::control::set_override(false);

        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .module_path(Some("tellers::app"))
                .args(format_args!("seed {}", 42))
                .build(),
        );
        assert_eq!(line, " INFO tellers::app -> seed 42");
    }

    #[test]
    fn init_again_changes_level() {
        init(LevelFilter::Warn);
        assert_eq!(get_logger().min_level(), LevelFilter::Warn);
        assert_eq!(log::max_level(), LevelFilter::Warn);

        init(LevelFilter::Debug);
        assert_eq!(get_logger().min_level(), LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }

    #[test]
    fn respects_min_level() {
        let logger = CliLogger::new(LevelFilter::Warn);
        let info = Metadata::builder().level(Level::Info).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));

        logger.set_min_level(LevelFilter::Trace);
        assert!(logger.enabled(&info));
    }
}
