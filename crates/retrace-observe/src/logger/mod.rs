mod config;
mod error;
mod log;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::LoggerFormat;
pub use object::LoggerLevel;
pub use object::{LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// After this call every `tracing` macro (`info!`, `debug!`, ...) routes
/// through the configured filter and format. A second call returns
/// [`LoggerError::AlreadyInitialized`].
///
/// With `LoggerTimeZone::Local`, run [`init_local_offset`] first, while
/// `main()` is still single-threaded; detection fails later.
///
/// # Examples
/// ```rust
/// use retrace_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger install failed");
///
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg),
        LoggerFormat::Json => log::logger_json(cfg),
    }
}
