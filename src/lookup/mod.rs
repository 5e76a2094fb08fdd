//! The `lookup` module defines the product-lookup collaborator boundary.
//!
//! The bridge never performs lookups itself; it hands a query string to a
//! [`ProductLookup`] implementation and publishes whatever record comes back.
//! A lookup may be slow, may fail, and may have side effects the bridge does
//! not depend on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// A product record returned by a lookup.
///
/// Optional fields are omitted from the serialized JSON when absent, so a
/// minimal record serializes to `{"name":...,"description":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// A failed lookup, carrying the collaborator's own message.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The external operation that turns a query string into a product record.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<ProductRecord, LookupError>;
}

/// Lookup implementation that builds a search-page record without fetching
/// anything, used when no scraping backend is wired in.
pub struct FallbackLookup;

impl FallbackLookup {
    fn search_url(query: &str) -> String {
        let encoded = query.replace(' ', "+");
        format!("https://www.asos.com/search/?q={encoded}")
    }
}

#[async_trait]
impl ProductLookup for FallbackLookup {
    async fn search(&self, query: &str) -> Result<ProductRecord, LookupError> {
        Ok(ProductRecord {
            name: query.to_string(),
            description: format!("No detailed data found for '{query}'"),
            url_content: Some(Self::search_url(query)),
            image: None,
            gender: None,
        })
    }
}
