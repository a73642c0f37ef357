//! This module provides the logging hooks of the numshuffle library.
//!
//! The library only ever speaks through the `log` facade; installing a backend
//! is the application's choice. `enable_verbose_logging` is a convenience that
//! installs `env_logger` once per process. The `log_metric!` macro emits one
//! structured record per notable event at `trace` level and is compiled out of
//! release builds entirely.

use std::fs::OpenOptions;
use std::sync::Once;

use log::LevelFilter;

use crate::error::NumshuffleError;

/// Logs a structured key-value metric record at trace level, only in debug builds.
///
/// # Example
/// ```
/// use numshuffle::log_metric;
/// let width = 4;
/// log_metric!("event"="transpose", "width"=&width);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            if $crate::__log::log_enabled!($crate::__log::Level::Trace) {
                let mut parts = Vec::new();
                $(
                    parts.push(format!("\"{}\": \"{}\"", $key, $value));
                )+
                $crate::__log::trace!("NUMSHUFFLE_METRIC: {{ {} }}", parts.join(", "));
            }
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at `Debug` level, optionally appending to
/// `log_file` instead of stderr. Only the first call in a process has any
/// effect.
///
/// # Errors
/// `ConfigError` if `log_file` cannot be opened for appending.
pub fn enable_verbose_logging(log_file: Option<&str>) -> Result<(), NumshuffleError> {
    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|e| {
                    NumshuffleError::ConfigError(format!("Could not open log file {}: {}", path, e))
                })?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
