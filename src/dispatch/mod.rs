//! The `dispatch` module fans inbound messages out to handler tasks.
//!
//! `on_message` is called from the connection's single event loop and must
//! return immediately; a slow lookup must never stall keepalives or delay
//! the delivery of later messages. Each message gets its own task, bounded
//! by a semaphore so a burst queues instead of exhausting the process.

use std::sync::Arc;

use rumqttc::QoS;
use serde_json::json;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::handler::CommandHandler;
use crate::publish::ResultPublisher;
use crate::session::IncomingMessage;


pub struct MessageDispatcher {
    handler: Arc<CommandHandler>,
    publisher: ResultPublisher,
    result_topic: String,
    inflight: Arc<Semaphore>,
}

impl MessageDispatcher {
    pub fn new(
        handler: Arc<CommandHandler>,
        publisher: ResultPublisher,
        result_topic: String,
        max_inflight: usize,
    ) -> Self {
        Self {
            handler,
            publisher,
            result_topic,
            inflight: Arc::new(Semaphore::new(max_inflight)),
        }
    }

    /// Hands the message to its own task and returns immediately.
    ///
    /// Every message yields exactly one publish to the result topic: the
    /// handler's outbound payload, or an error object when the payload is
    /// not valid UTF-8.
    pub fn on_message(&self, msg: IncomingMessage) {
        let handler = self.handler.clone();
        let publisher = self.publisher.clone();
        let result_topic = self.result_topic.clone();
        let inflight = self.inflight.clone();

        tokio::spawn(async move {
            // Acquire inside the task so the event loop is never held up by
            // a full dispatcher. Errors only when the semaphore is closed,
            // which never happens while the dispatcher is alive.
            let Ok(_permit) = inflight.acquire_owned().await else {
                return;
            };

            let text = match msg.text() {
                Ok(text) => text.to_string(),
                Err(_) => {
                    warn!("Dropping non-UTF-8 payload on {}", msg.topic);
                    let body = json!({ "error": "payload is not valid UTF-8" }).to_string();
                    publisher
                        .publish(&result_topic, &body, QoS::AtMostOnce, false)
                        .await;
                    return;
                }
            };

            info!(
                "[{}] Topic: {} | Message: {}",
                msg.received_at.format("%Y-%m-%d %H:%M:%S"),
                msg.topic,
                text
            );

            let outbound = handler.handle(&text).await;
            publisher
                .publish(&result_topic, &outbound.body, QoS::AtMostOnce, false)
                .await;
        });
    }
}
