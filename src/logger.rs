//! Logging setup for the demo binary

use anyhow::Result;
use chrono::Utc;

use crate::config::LoggingConfig;

/// Install a stderr logger honoring the `[logging]` config section.
///
/// A disabled config installs nothing; `log` macros then compile to no-ops
/// through the default logger. An enabled config with an unparseable level
/// is an error, matching [`crate::config::Config::validate`].
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config
        .level
        .parse::<log::LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", config.level))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
