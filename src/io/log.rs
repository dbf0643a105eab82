use anyhow::Result;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use parking_lot::{const_rwlock, RwLock};

use crate::common::{tilde, ACTION_LOG_PATH, LOG_PATH, LOG_PATTERN};

/// Last info line, used to avoid writing the same line again and again.
static LAST_LOG_INFO: RwLock<String> = const_rwlock(String::new());

/// Set the logs.
///
/// If `enabled` is false, nothing is done and we return.
/// No logger is set, nothing is logged.
///
/// If it's true, two logs are written:
/// - a normal one used directly with the macros like `log::info!(...)`, used for debugging
/// - a special one used with `log::info!(target: "special", ...)` which records the actions of the user.
///
/// # Errors
///
/// Fails if the log files can't be created or if a logger is already set.
pub fn set_loggers(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    let normal = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(tilde(LOG_PATH).into_owned())?;
    let special = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(tilde(ACTION_LOG_PATH).into_owned())?;
    let config = Config::builder()
        .appender(Appender::builder().build("normal", Box::new(normal)))
        .appender(Appender::builder().build("special", Box::new(special)))
        .logger(
            Logger::builder()
                .appender("special")
                .additive(false)
                .build("special", LevelFilter::Info),
        )
        .build(Root::builder().appender("normal").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::info!("ffilter is starting with logs enabled");
    Ok(())
}

/// Write a line to the special log, which records the actions of the user.
pub fn write_log_line<S>(log_line: S)
where
    S: Into<String> + std::fmt::Display,
{
    log::info!(target: "special", "{log_line}");
}

/// Log a formated action line to the special log.
/// It accepts the same formatted messages as `format`.
#[macro_export]
macro_rules! log_line {
    ($($arg:tt)+) => (
    $crate::io::write_log_line(
      format!($($arg)+)
    )
  );
}

/// Write a line to the info log.
/// Won't write the same line multiple times in a row.
pub fn write_log_info_once<S>(log_line: S)
where
    S: Into<String> + std::fmt::Display,
{
    let line = log_line.to_string();
    let mut last = LAST_LOG_INFO.write();
    if *last != line {
        log::info!("{line}");
        *last = line;
    }
}

/// Log a formated message to the default log.
/// Won't write anything if the same message is sent multiple times.
/// It uses `log::info!` internally.
/// It accepts the same formatted messages as `format`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => (
    $crate::io::write_log_info_once(
      format!($($arg)+)
    )
  );
}
