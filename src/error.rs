//! Crate-level error types.
//!
//! [`LiquidError`] unifies every error source (configuration, WebSocket,
//! normalization) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy propagation.
//!
//! Normalization errors never describe a partial result: when the formatter
//! returns one of these, zero records were emitted for the offending line.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LiquidError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum LiquidError {
    /// An environment-variable configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A WebSocket operation (connect, send, receive) failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    /// The outer message envelope is not parseable JSON.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// A subscription acknowledgment arrived on a channel whose prefix
    /// matches no known channel family.
    #[error("channel not supported: {0}")]
    UnsupportedChannel(String),

    /// A data message arrived on a channel no handler recognizes.
    #[error("line not supported on channel: {0}")]
    UnsupportedLine(String),

    /// A ladder payload did not decode as an array of [price, quantity]
    /// string pairs.
    #[error("malformed price ladder: {0}")]
    InvalidLadder(#[source] serde_json::Error),

    /// A ladder row carried a price or quantity string that is not a
    /// base-10 decimal.
    #[error("invalid price level [{price:?}, {quantity:?}]: {source}")]
    InvalidPriceLevel {
        price: String,
        quantity: String,
        source: std::num::ParseFloatError,
    },

    /// An execution payload did not decode as an execution object.
    #[error("malformed execution: {0}")]
    InvalidExecution(#[source] serde_json::Error),

    /// JSON serialization of a normalized record failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
