//! Logging Module
//! 
//! Installs a `tracing_subscriber` formatter for hosts that embed the validator.
//! The validator itself only emits events; it never installs a subscriber.

use crate::config::LoggingConfig;
use tracing::Level;

/// Install a global fmt subscriber at the configured level
/// 
/// # Returns
/// * `Ok(())` once the subscriber is installed
/// * `Err` if the level is unknown or a global subscriber is already set
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let level: Level = config.level.parse()?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("Logging initialized at level {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "loud".to_string(),
        };
        assert!(init(&config).is_err());
    }

    #[test]
    fn test_second_install_fails_instead_of_panicking() {
        let config = LoggingConfig::default();
        // Another test may have installed one already; either way the second call must fail
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
