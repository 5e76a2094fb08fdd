use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::command::Command;
use super::{CommandHandler, UrlOpener};
use crate::lookup::{LookupError, ProductLookup, ProductRecord};

struct StubLookup {
    queries: Mutex<Vec<String>>,
    result: Result<ProductRecord, LookupError>,
}

impl StubLookup {
    fn ok(record: ProductRecord) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            result: Ok(record),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            result: Err(LookupError::new(message)),
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductLookup for StubLookup {
    async fn search(&self, query: &str) -> Result<ProductRecord, LookupError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

fn record(url_content: Option<&str>) -> ProductRecord {
    ProductRecord {
        name: "Jeans".to_string(),
        description: "d".to_string(),
        url_content: url_content.map(str::to_string),
        image: None,
        gender: None,
    }
}

#[test]
fn parse_lookup_prefix_strips_first_character_only() {
    let command = Command::parse("Asos:jeans");
    assert_eq!(
        command,
        Command::Lookup {
            query: "sos:jeans".to_string()
        }
    );
}

#[test]
fn parse_other_payload_is_unhandled() {
    let command = Command::parse("Hello");
    assert_eq!(
        command,
        Command::Unhandled {
            raw: "Hello".to_string()
        }
    );
}

#[tokio::test]
async fn unmatched_payload_is_echoed_verbatim() {
    let lookup = Arc::new(StubLookup::failing("must not be called"));
    let opener = Arc::new(RecordingOpener::default());
    let handler = CommandHandler::new(lookup.clone(), opener.clone());

    let outbound = handler.handle("Hello").await;

    assert_eq!(outbound.body, "Received: Hello");
    assert!(!outbound.json);
    assert!(lookup.queries().is_empty());
    assert!(opener.urls().is_empty());
}

#[tokio::test]
async fn lookup_success_publishes_record_and_fires_opener() {
    let lookup = Arc::new(StubLookup::ok(record(Some("http://x"))));
    let opener = Arc::new(RecordingOpener::default());
    let handler = CommandHandler::new(lookup.clone(), opener.clone());

    let outbound = handler.handle("Asos:jeans").await;

    assert_eq!(lookup.queries(), vec!["sos:jeans".to_string()]);
    assert_eq!(
        outbound.body,
        r#"{"name":"Jeans","description":"d","url_content":"http://x"}"#
    );
    assert!(outbound.json);
    assert_eq!(opener.urls(), vec!["http://x".to_string()]);
}

#[tokio::test]
async fn lookup_error_becomes_error_object() {
    let lookup = Arc::new(StubLookup::failing("timeout"));
    let opener = Arc::new(RecordingOpener::default());
    let handler = CommandHandler::new(lookup, opener.clone());

    let outbound = handler.handle("Asos:jeans").await;

    assert_eq!(outbound.body, r#"{"error":"ASOS search error: timeout"}"#);
    assert!(outbound.json);
    assert!(opener.urls().is_empty());
}

#[tokio::test]
async fn missing_url_content_does_not_fire_opener() {
    let lookup = Arc::new(StubLookup::ok(record(None)));
    let opener = Arc::new(RecordingOpener::default());
    let handler = CommandHandler::new(lookup, opener.clone());

    let outbound = handler.handle("Asos:jeans").await;

    assert!(outbound.json);
    assert!(opener.urls().is_empty());
}

#[tokio::test]
async fn empty_url_content_does_not_fire_opener() {
    let lookup = Arc::new(StubLookup::ok(record(Some(""))));
    let opener = Arc::new(RecordingOpener::default());
    let handler = CommandHandler::new(lookup, opener.clone());

    handler.handle("Asos:jeans").await;

    assert!(opener.urls().is_empty());
}
