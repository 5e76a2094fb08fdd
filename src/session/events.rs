use chrono::{DateTime, Utc};

/// A message delivered by the broker on a subscribed topic.
///
/// The payload is kept as raw bytes; commands are expected to be UTF-8 text
/// but a malformed payload is a handling concern, not a session failure.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    pub received_at: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(topic: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            topic: topic.into(),
            payload,
            received_at: Utc::now(),
        }
    }

    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.payload)
    }
}

/// Typed events emitted by the session's network loop.
///
/// `code` follows the broker return-code convention: 0 is success/clean,
/// anything else is a failure or an unexpected loss of connection.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Connected { code: u8 },
    MessageReceived(IncomingMessage),
    Disconnected { code: u8 },
}
