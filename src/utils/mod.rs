//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `prodsub` application.
//!
//! This module centralizes reusable components, such as the crate-wide error
//! type and logging setup, to promote code consistency and reduce duplication.

pub mod error;
pub mod logging;

pub use error::BridgeError;
