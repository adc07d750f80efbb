//! Liquid Tap market-data normalizer.
//!
//! Connects to the Liquid exchange's Tap WebSocket feed and normalizes its
//! exchange-specific messages (order book ladders and trade executions)
//! into a uniform JSON record schema. The normalization engine itself
//! ([`formatter::LiquidFormatter`]) is a pure, stateless function over
//! single messages; the session layer ([`websocket`]) handles the
//! connection and subscription handshake and feeds it.

pub mod channel;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod typedef;
pub mod websocket;

pub use error::{LiquidError, Result};
