//! The `handler` module turns one inbound payload into one outbound payload.
//!
//! Routing is by prefix: `Asos:` payloads go to the lookup collaborator and
//! come back as JSON (a product record or an error object); everything else
//! is echoed as plain text. Lookup failures never leave this module.

pub mod command;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use crate::lookup::ProductLookup;

pub use command::Command;

#[cfg(test)]
mod tests;

/// Post-processing hook fired when a successful lookup carries a URL.
///
/// Fire and forget: the handler does not depend on the hook for correctness
/// and ignores whatever it does or fails to do.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str);
}

/// Default hook wiring: records the URL in the log instead of launching a
/// browser.
pub struct LoggingUrlOpener;

#[async_trait]
impl UrlOpener for LoggingUrlOpener {
    async fn open(&self, url: &str) {
        info!("Opening URL: {url}");
    }
}

/// An outbound payload together with its framing.
///
/// `json` tells the consumer whether `body` is a serialized JSON object or a
/// plain echo string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub body: String,
    pub json: bool,
}

/// Parses payloads, invokes the lookup collaborator, and builds the
/// outbound record.
pub struct CommandHandler {
    lookup: Arc<dyn ProductLookup>,
    opener: Arc<dyn UrlOpener>,
}

impl CommandHandler {
    pub fn new(lookup: Arc<dyn ProductLookup>, opener: Arc<dyn UrlOpener>) -> Self {
        Self { lookup, opener }
    }

    /// Handles one payload and returns exactly one outbound payload.
    ///
    /// All collaborator failures are converted into an `{"error": ...}`
    /// object here; nothing propagates to the dispatcher.
    pub async fn handle(&self, payload: &str) -> Outbound {
        match Command::parse(payload) {
            Command::Lookup { query } => {
                info!("Searching for product: {query}");
                match self.lookup.search(&query).await {
                    Ok(record) => {
                        if let Some(url) = record.url_content.as_deref().filter(|u| !u.is_empty())
                        {
                            self.opener.open(url).await;
                        }
                        match serde_json::to_string(&record) {
                            Ok(body) => Outbound { body, json: true },
                            Err(err) => error_outbound(&err.to_string()),
                        }
                    }
                    Err(err) => {
                        let outbound = error_outbound(&err.to_string());
                        error!("ASOS search error: {err}");
                        outbound
                    }
                }
            }
            Command::Unhandled { raw } => {
                info!("Unhandled message: {raw}");
                Outbound {
                    body: format!("Received: {raw}"),
                    json: false,
                }
            }
        }
    }
}

fn error_outbound(message: &str) -> Outbound {
    Outbound {
        body: json!({ "error": format!("ASOS search error: {message}") }).to_string(),
        json: true,
    }
}
