//! The `publish` module wraps the session's publish primitive for handler
//! tasks.
//!
//! Arbitrarily many handler tasks publish through one shared session handle;
//! a failed publish is logged and swallowed so it can never unwind into a
//! handler or the dispatch loop.

use std::sync::Arc;

use rumqttc::QoS;
use tracing::error;

use crate::session::Session;


#[derive(Clone)]
pub struct ResultPublisher {
    session: Arc<dyn Session>,
}

impl ResultPublisher {
    pub fn new(session: Arc<dyn Session>) -> Self {
        Self { session }
    }

    pub async fn publish(&self, topic: &str, payload: &str, qos: QoS, retain: bool) {
        if let Err(err) = self
            .session
            .publish(topic, payload.as_bytes(), qos, retain)
            .await
        {
            error!("Failed to publish to {topic}: {err}");
        }
    }
}
