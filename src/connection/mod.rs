//! The `connection` module owns the broker connection lifecycle.
//!
//! A single loop consumes typed session events and walks the state machine
//! `Disconnected -> Connecting -> Connected`, detouring through
//! `Reconnecting` on unexpected loss of connection.

pub mod manager;

pub use manager::{ConnectionManager, ConnectionState};
