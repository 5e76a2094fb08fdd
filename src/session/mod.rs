//! The `session` module owns the boundary to the MQTT broker.
//!
//! Everything above this module is wire-agnostic: the broker is reached
//! through the [`Session`] trait, and the network loop is observed as a
//! stream of typed [`SessionEvent`]s on a single-consumer channel. The
//! rumqttc-backed implementation lives in [`mqtt`].

pub mod events;
pub mod mqtt;

pub use events::{IncomingMessage, SessionEvent};
pub use mqtt::MqttSession;

use crate::utils::BridgeError;
use async_trait::async_trait;
use rumqttc::QoS;


/// Handle to an established broker session.
///
/// Implementations must be safe to share across handler tasks; `publish` in
/// particular is called concurrently from many tasks over one handle.
#[async_trait]
pub trait Session: Send + Sync {
    async fn subscribe(&self, topic: &str) -> Result<(), BridgeError>;

    async fn publish(
        &self,
        topic: &str,
        payload: &[u8],
        qos: QoS,
        retain: bool,
    ) -> Result<(), BridgeError>;

    /// Issues one reconnect attempt after an unexpected disconnect.
    async fn reconnect(&self) -> Result<(), BridgeError>;
}
