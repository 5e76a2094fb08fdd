/// Payloads carrying this prefix are lookup commands.
pub const LOOKUP_PREFIX: &str = "Asos:";

/// A parsed inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup { query: String },
    Unhandled { raw: String },
}

impl Command {
    /// Derives a command from a message payload by prefix inspection.
    ///
    /// Lookup arguments drop only the FIRST character of the payload, so the
    /// query keeps a stray `sos:` fragment (`Asos:jeans` becomes
    /// `sos:jeans`). Peer clients depend on the exact argument reaching the
    /// lookup service; do not widen the strip to the whole prefix without
    /// coordinating that change.
    pub fn parse(payload: &str) -> Self {
        if payload.starts_with(LOOKUP_PREFIX) {
            Command::Lookup {
                query: payload[1..].to_string(),
            }
        } else {
            Command::Unhandled {
                raw: payload.to_string(),
            }
        }
    }
}
