//! Shared models for Liquid Tap messages.
//!
//! Contains the outer message envelope, Pusher protocol event constants,
//! and the subscribe/unsubscribe request types. Channel-specific payload
//! models live in the submodules.

pub mod execution;
pub mod ladder;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Event tag acknowledging a successful channel subscription.
pub const EVENT_SUBSCRIPTION_SUCCEEDED: &str = "pusher_internal:subscription_succeeded";

/// Event tag for a subscribe request.
pub const EVENT_SUBSCRIBE: &str = "pusher:subscribe";

/// Event tag for an unsubscribe request.
pub const EVENT_UNSUBSCRIBE: &str = "pusher:unsubscribe";

/// Event tag for a connection liveness ping.
pub const EVENT_PING: &str = "pusher:ping";

/// The outer frame of every inbound Liquid Tap message.
///
/// `data` is kept as raw JSON and only decoded once the channel has been
/// classified, since its shape depends entirely on the channel family.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub event: Option<String>,
    pub channel: Option<String>,
    pub data: Option<Box<RawValue>>,
}

impl Envelope {
    /// Whether this frame acknowledges a subscription rather than carrying
    /// channel data.
    pub fn is_subscription_ack(&self) -> bool {
        self.event.as_deref() == Some(EVENT_SUBSCRIPTION_SUCCEEDED)
    }

    /// The raw JSON of the data payload, or `null` when the frame has none
    /// so that downstream decoding fails uniformly.
    pub fn data_json(&self) -> &str {
        self.data.as_deref().map_or("null", RawValue::get)
    }
}

/// A `pusher:subscribe` request for a single channel.
#[derive(Debug, Serialize)]
pub struct SubscribeRequest {
    pub event: &'static str,
    pub data: ChannelParams,
}

impl SubscribeRequest {
    pub fn new(channel: &str) -> Self {
        Self {
            event: EVENT_SUBSCRIBE,
            data: ChannelParams {
                channel: channel.to_string(),
            },
        }
    }
}

/// A `pusher:unsubscribe` request for a single channel.
#[derive(Debug, Serialize)]
pub struct UnsubscribeRequest {
    pub event: &'static str,
    pub data: ChannelParams,
}

impl UnsubscribeRequest {
    pub fn new(channel: &str) -> Self {
        Self {
            event: EVENT_UNSUBSCRIBE,
            data: ChannelParams {
                channel: channel.to_string(),
            },
        }
    }
}

/// Channel parameter used in subscribe/unsubscribe requests.
#[derive(Debug, Serialize)]
pub struct ChannelParams {
    pub channel: String,
}

/// A `pusher:ping` request used to test connection liveness.
#[derive(Debug, Serialize)]
pub struct PingRequest {
    pub event: &'static str,
}

impl PingRequest {
    pub fn new() -> Self {
        Self { event: EVENT_PING }
    }
}

impl Default for PingRequest {
    fn default() -> Self {
        Self::new()
    }
}
