use std::sync::Arc;
use std::time::Duration;

use rumqttc::QoS;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::BrokerSettings;
use crate::dispatch::MessageDispatcher;
use crate::session::{Session, SessionEvent};

/// Status payload published on the status topic after a successful connect.
pub const CONNECTED_PAYLOAD: &str = "Backend connected";

/// Connection lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}

/// Drives the session lifecycle from the event channel.
///
/// On connect it subscribes to the command topic and announces itself on the
/// status topic; inbound messages go straight to the dispatcher; a loss of
/// connection while `Connected` gets exactly one reconnect attempt after the
/// configured delay. A disconnect before the first successful connect is a
/// failed connect and is never retried. A failed connect or failed reconnect
/// ends the loop, and the embedding process decides whether to start over.
pub struct ConnectionManager {
    session: Arc<dyn Session>,
    dispatcher: MessageDispatcher,
    settings: BrokerSettings,
    state: ConnectionState,
}

impl ConnectionManager {
    pub fn new(
        session: Arc<dyn Session>,
        dispatcher: MessageDispatcher,
        settings: BrokerSettings,
    ) -> Self {
        Self {
            session,
            dispatcher,
            settings,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Consumes session events until the session ends.
    ///
    /// The reconnect delay sleeps on this loop only; handler tasks already
    /// in flight keep running, and events delivered meanwhile stay buffered
    /// on the channel.
    pub async fn run(&mut self, mut events: mpsc::Receiver<SessionEvent>) {
        self.state = ConnectionState::Connecting;

        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::Connected { code: 0 } => {
                    info!(
                        "Connected to broker at {}:{}",
                        self.settings.host, self.settings.port
                    );
                    if let Err(err) = self.session.subscribe(&self.settings.subscribe_topic).await
                    {
                        error!("Subscribe failed: {err}");
                    }
                    if let Err(err) = self
                        .session
                        .publish(
                            &self.settings.status_topic,
                            CONNECTED_PAYLOAD.as_bytes(),
                            QoS::AtMostOnce,
                            false,
                        )
                        .await
                    {
                        error!("Status publish failed: {err}");
                    }
                    self.state = ConnectionState::Connected;
                }
                SessionEvent::Connected { code } => {
                    error!("Failed to connect. Code: {code}");
                    self.state = ConnectionState::Disconnected;
                    break;
                }
                SessionEvent::MessageReceived(msg) => {
                    self.dispatcher.on_message(msg);
                }
                SessionEvent::Disconnected { code: 0 } => {
                    info!("Session closed cleanly");
                    self.state = ConnectionState::Disconnected;
                    break;
                }
                SessionEvent::Disconnected { code } => match self.state {
                    // A refused or failed dial surfaces as a disconnect
                    // before any successful connect; connect failures are
                    // not retried.
                    ConnectionState::Connecting => {
                        error!("Failed to connect. Code: {code}");
                        self.state = ConnectionState::Disconnected;
                        break;
                    }
                    ConnectionState::Reconnecting => {
                        error!("Reconnect attempt failed (code {code}); giving up");
                        self.state = ConnectionState::Disconnected;
                        break;
                    }
                    _ => {
                        warn!("Disconnected (code {code}). Attempting to reconnect...");
                        self.state = ConnectionState::Reconnecting;
                        sleep(Duration::from_secs(self.settings.reconnect_interval_secs)).await;
                        if let Err(err) = self.session.reconnect().await {
                            error!("Reconnection failed: {err}");
                            self.state = ConnectionState::Disconnected;
                            break;
                        }
                    }
                },
            }
        }

        self.state = ConnectionState::Disconnected;
    }
}
