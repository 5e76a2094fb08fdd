use std::time::Duration;

use async_trait::async_trait;
use rumqttc::{AsyncClient, Event, EventLoop, LastWill, MqttOptions, Packet, QoS};
use tokio::sync::mpsc;
use tracing::warn;

use crate::config::BrokerSettings;
use crate::session::events::{IncomingMessage, SessionEvent};
use crate::session::Session;
use crate::utils::BridgeError;

/// Status payload published by the broker on our behalf if the client
/// vanishes without a clean close.
pub const LAST_WILL_PAYLOAD: &str = "Backend disconnected";

/// Broker session backed by rumqttc.
///
/// The rumqttc event loop is driven by a dedicated task which translates its
/// packets into [`SessionEvent`]s; no other code touches the network loop.
/// `AsyncClient` is clonable and internally synchronized, so the handle can
/// be shared across concurrently publishing handler tasks as-is.
pub struct MqttSession {
    client: AsyncClient,
    resume_tx: mpsc::Sender<()>,
}

impl MqttSession {
    /// Opens the session and returns it together with the event receiver.
    ///
    /// Registers the last will on the status topic before the connection is
    /// attempted. The actual dialing happens on the spawned driver task; the
    /// outcome arrives as a `Connected` or `Disconnected` event.
    pub fn connect(settings: &BrokerSettings) -> (Self, mpsc::Receiver<SessionEvent>) {
        let client_id = settings
            .client_id
            .clone()
            .unwrap_or_else(|| format!("prodsub-{}", uuid::Uuid::new_v4()));

        let mut options = MqttOptions::new(client_id, &settings.host, settings.port);
        options.set_keep_alive(Duration::from_secs(settings.keep_alive_secs));
        options.set_last_will(LastWill::new(
            &settings.status_topic,
            LAST_WILL_PAYLOAD,
            QoS::AtLeastOnce,
            false,
        ));

        let (client, event_loop) = AsyncClient::new(options, 10);
        let (event_tx, event_rx) = mpsc::channel(32);
        let (resume_tx, resume_rx) = mpsc::channel(1);

        tokio::spawn(drive(event_loop, event_tx, resume_rx));

        (Self { client, resume_tx }, event_rx)
    }
}

#[async_trait]
impl Session for MqttSession {
    async fn subscribe(&self, topic: &str) -> Result<(), BridgeError> {
        self.client
            .subscribe(topic, QoS::AtMostOnce)
            .await
            .map_err(|e| BridgeError::Session(e.to_string()))
    }

    async fn publish(
        &self,
        topic: &str,
        payload: &[u8],
        qos: QoS,
        retain: bool,
    ) -> Result<(), BridgeError> {
        self.client
            .publish(topic, qos, retain, payload.to_vec())
            .await
            .map_err(|e| BridgeError::Session(e.to_string()))
    }

    async fn reconnect(&self) -> Result<(), BridgeError> {
        self.resume_tx
            .send(())
            .await
            .map_err(|_| BridgeError::Session("event loop task has exited".to_string()))
    }
}

/// Drives the rumqttc event loop and forwards typed events.
///
/// On a connection error the loop pauses instead of letting rumqttc redial
/// on the next poll; polling resumes only when `reconnect` is requested.
async fn drive(
    mut event_loop: EventLoop,
    events: mpsc::Sender<SessionEvent>,
    mut resume: mpsc::Receiver<()>,
) {
    loop {
        match event_loop.poll().await {
            Ok(event) => {
                if let Some(mapped) = map_event(event) {
                    if events.send(mapped).await.is_err() {
                        return;
                    }
                }
            }
            Err(err) => {
                warn!("mqtt event loop error: {err}");
                if events
                    .send(SessionEvent::Disconnected { code: 1 })
                    .await
                    .is_err()
                {
                    return;
                }
                if resume.recv().await.is_none() {
                    return;
                }
            }
        }
    }
}

/// Maps a rumqttc event onto the session's typed events.
///
/// Keepalive and outgoing-packet notifications carry no session-level
/// meaning and map to `None`.
pub(crate) fn map_event(event: Event) -> Option<SessionEvent> {
    match event {
        Event::Incoming(Packet::ConnAck(ack)) => Some(SessionEvent::Connected {
            code: ack.code as u8,
        }),
        Event::Incoming(Packet::Publish(publish)) => Some(SessionEvent::MessageReceived(
            IncomingMessage::new(publish.topic, publish.payload.to_vec()),
        )),
        Event::Incoming(Packet::Disconnect) => Some(SessionEvent::Disconnected { code: 0 }),
        _ => None,
    }
}
