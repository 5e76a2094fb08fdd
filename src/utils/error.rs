//! The `error` module defines the error types used within the `prodsub`
//! application.
//!
//! Errors that cross module boundaries are collected in [`BridgeError`];
//! lookup-specific failures live with the lookup collaborator.

use thiserror::Error;

/// Errors surfaced by the broker session and connection layers.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("broker session error: {0}")]
    Session(String),
}
