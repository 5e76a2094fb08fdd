//! # ProdSub
//!
//! `prodsub` is a bridge between an MQTT publish/subscribe broker and an
//! external product-lookup service. It subscribes to a command topic,
//! dispatches each inbound message to its own handler task, and publishes a
//! structured result (or plain echo) back through the same session.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `config`: Handles loading and merging the broker/dispatch configuration.
//! - `session`: The broker session boundary; typed events over a rumqttc-backed link.
//! - `connection`: The connection lifecycle state machine (connect, status, reconnect).
//! - `dispatch`: Fans inbound messages out to bounded concurrent handler tasks.
//! - `handler`: Parses commands, invokes the lookup collaborator, builds results.
//! - `lookup`: The product-lookup collaborator trait and record types.
//! - `publish`: Publishes handler results through the shared session handle.
//! - `utils`: Contains shared utilities, such as error handling and logging setup.

pub mod config;
pub mod connection;
pub mod dispatch;
pub mod handler;
pub mod lookup;
pub mod publish;
pub mod session;
pub mod utils;
