//! `log4rs` extensions available in the `[log]` configuration.

use log4rs::config::Deserializers;

mod default_appender;
mod default_pattern;

/// Size of the stack buffer each log record is encoded into before it is
/// written to stderr.
const WRITE_BUF_SIZE: usize = 1024;

pub fn deserializers() -> Deserializers {
    let mut d = Deserializers::new();
    d.insert("default", default_appender::DefaultAppenderDeserializer);
    d.insert("default", default_pattern::DefaultPatternDeserializer);
    d
}

/// Initializes the global logger from the raw `[log]` configuration.
pub fn init(config: log4rs::config::RawConfig) -> anyhow::Result<()> {
    let deserializers = deserializers();
    let (appenders, errors) = config.appenders_lossy(&deserializers);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let config = log4rs::Config::builder()
        .appenders(appenders)
        .loggers(config.loggers())
        .build(config.root())?;

    log4rs::init_config(config)?;
    Ok(())
}
