mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::Settings;

pub use settings::{BrokerSettings, DispatchSettings};

#[cfg(test)]
mod tests;

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the broker and dispatch configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        log_level: partial.log_level.clone().unwrap_or(default.log_level),
        broker: BrokerSettings {
            host: partial
                .broker
                .as_ref()
                .and_then(|b| b.host.clone())
                .unwrap_or(default.broker.host),
            port: partial
                .broker
                .as_ref()
                .and_then(|b| b.port)
                .unwrap_or(default.broker.port),
            client_id: partial
                .broker
                .as_ref()
                .and_then(|b| b.client_id.clone())
                .or(default.broker.client_id),
            subscribe_topic: partial
                .broker
                .as_ref()
                .and_then(|b| b.subscribe_topic.clone())
                .unwrap_or(default.broker.subscribe_topic),
            result_topic: partial
                .broker
                .as_ref()
                .and_then(|b| b.result_topic.clone())
                .unwrap_or(default.broker.result_topic),
            status_topic: partial
                .broker
                .as_ref()
                .and_then(|b| b.status_topic.clone())
                .unwrap_or(default.broker.status_topic),
            reconnect_interval_secs: partial
                .broker
                .as_ref()
                .and_then(|b| b.reconnect_interval_secs)
                .unwrap_or(default.broker.reconnect_interval_secs),
            keep_alive_secs: partial
                .broker
                .as_ref()
                .and_then(|b| b.keep_alive_secs)
                .unwrap_or(default.broker.keep_alive_secs),
        },
        dispatch: DispatchSettings {
            max_inflight: partial
                .dispatch
                .as_ref()
                .and_then(|d| d.max_inflight)
                .unwrap_or(default.dispatch.max_inflight),
        },
    })
}
