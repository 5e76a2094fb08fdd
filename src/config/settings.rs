use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the broker connection and the message dispatcher.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Tracing level for the process ("error" through "trace").
    pub log_level: String,
    pub broker: BrokerSettings,
    pub dispatch: DispatchSettings,
}

/// Configuration settings for the broker connection.
///
/// Defines where the broker lives, which topics the bridge uses, and how the
/// connection behaves across keep-alives and reconnects. Immutable for the
/// lifetime of the process once loaded.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub host: String,
    pub port: u16,
    /// MQTT client id; a random one is generated when absent.
    pub client_id: Option<String>,
    pub subscribe_topic: String,
    pub result_topic: String,
    pub status_topic: String,
    pub reconnect_interval_secs: u64,
    pub keep_alive_secs: u64,
}

/// Configuration settings for message dispatch.
///
/// Controls how many lookup handlers may run at the same time.
#[derive(Debug, Deserialize, Clone)]
pub struct DispatchSettings {
    pub max_inflight: usize,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub log_level: Option<String>,
    pub broker: Option<PartialBrokerSettings>,
    pub dispatch: Option<PartialDispatchSettings>,
}

/// Partial broker settings.
///
/// Used when loading broker configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub client_id: Option<String>,
    pub subscribe_topic: Option<String>,
    pub result_topic: Option<String>,
    pub status_topic: Option<String>,
    pub reconnect_interval_secs: Option<u64>,
    pub keep_alive_secs: Option<u64>,
}

/// Partial dispatch settings.
#[derive(Debug, Deserialize)]
pub struct PartialDispatchSettings {
    pub max_inflight: Option<usize>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            broker: BrokerSettings {
                host: "127.0.0.1".to_string(),
                port: 1883,
                client_id: None,
                subscribe_topic: "expo/test".to_string(),
                result_topic: "expo/result".to_string(),
                status_topic: "expo/status".to_string(),
                reconnect_interval_secs: 5,
                keep_alive_secs: 60,
            },
            dispatch: DispatchSettings { max_inflight: 64 },
        }
    }
}
