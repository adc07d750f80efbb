//! Async WebSocket session layer for the Liquid Tap feed.
//!
//! Owns the connection and the subscribe/unsubscribe handshake, reads raw
//! frames, and hands each data-bearing line to a [`Formatter`]. This layer
//! never interprets channel payloads itself; it only extracts the routing
//! fields (`event`, `channel`) from the outer frame.

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};
use tungstenite::Message;

use crate::Result;
use crate::formatter::Formatter;
use crate::models::{Envelope, PingRequest, SubscribeRequest, UnsubscribeRequest};

/// Write half of a Liquid Tap WebSocket connection.
pub type WsWriter = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Read half of a Liquid Tap WebSocket connection.
pub type WsReader = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Establishes a WebSocket connection to the given URL.
///
/// # Errors
///
/// Returns a [`LiquidError`](crate::LiquidError) if the connection or TLS
/// handshake fails.
pub async fn connect(url: &str) -> Result<(WsWriter, WsReader)> {
    let (ws_stream, _) = connect_async(url).await?;
    info!("WebSocket handshake completed");

    Ok(ws_stream.split())
}

/// Sends a ping over the WebSocket to test connection liveness.
///
/// # Errors
///
/// Returns a [`LiquidError`](crate::LiquidError) if sending the message fails.
pub async fn ping(write: &mut WsWriter) -> Result<()> {
    let request = PingRequest::new();
    let json = serde_json::to_string(&request)?;
    write.send(Message::Text(json.into())).await?;
    debug!("Sent ping");

    Ok(())
}

/// Subscribes to a single channel.
///
/// # Errors
///
/// Returns a [`LiquidError`](crate::LiquidError) if sending the subscription
/// message fails.
pub async fn subscribe(write: &mut WsWriter, channel: &str) -> Result<()> {
    let request = SubscribeRequest::new(channel);
    let json = serde_json::to_string(&request)?;
    write.send(Message::Text(json.into())).await?;
    info!(channel, "Subscribed to channel");

    Ok(())
}

/// Unsubscribes from a single channel.
///
/// # Errors
///
/// Returns a [`LiquidError`](crate::LiquidError) if sending the unsubscribe
/// message fails.
pub async fn unsubscribe(write: &mut WsWriter, channel: &str) -> Result<()> {
    let request = UnsubscribeRequest::new(channel);
    let json = serde_json::to_string(&request)?;
    write.send(Message::Text(json.into())).await?;
    info!(channel, "Unsubscribed from channel");

    Ok(())
}

/// Reads incoming frames and feeds each channel-bearing line through the
/// formatter, passing every normalized record to `sink` in order.
///
/// Connection-level frames (no `channel` field, e.g. the Pusher connection
/// handshake and pong replies) are logged and skipped. A line the formatter
/// rejects is logged and dropped; the session keeps running. The function
/// returns when the WebSocket connection closes.
///
/// # Errors
///
/// Returns a [`LiquidError`](crate::LiquidError) if reading from the
/// WebSocket fails.
pub async fn process_messages<F, S>(read: &mut WsReader, formatter: &F, mut sink: S) -> Result<()>
where
    F: Formatter,
    S: FnMut(&[u8]),
{
    while let Some(msg) = read.next().await {
        let msg = msg?;

        let Message::Text(text) = msg else {
            continue;
        };

        // Routing fields only; the payload stays opaque until the
        // formatter classifies the channel.
        let envelope: Envelope = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(%error, "Dropping unparsable frame");
                continue;
            }
        };

        let Some(channel) = envelope.channel.as_deref() else {
            debug!(event = envelope.event.as_deref(), "Connection-level frame");
            continue;
        };

        match formatter.format_message(channel, text.as_bytes()) {
            Ok(records) => {
                for record in &records {
                    sink(record);
                }
            }
            Err(error) => {
                warn!(channel, %error, "Dropping message the formatter rejected");
            }
        }
    }

    Ok(())
}
