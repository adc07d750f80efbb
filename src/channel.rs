//! Channel-name scheme for the Liquid Tap feed.
//!
//! Liquid encodes both the message kind and the instrument into the channel
//! name: `ladders_cash_<symbol>_<buy|sell>` streams one side of the order
//! book and `executions_cash_<symbol>` streams public trades. All prefix and
//! suffix matching lives here so the rest of the crate never compares
//! channel literals directly.

/// Channel-name prefix for cash-market order book ladders.
pub const LADDERS_CASH_PREFIX: &str = "ladders_cash_";

/// Channel-name prefix for cash-market trade executions.
pub const EXECUTIONS_CASH_PREFIX: &str = "executions_cash_";

/// Marker for the ask side, used both as the ladder channel suffix and as
/// the execution `taker_side` value.
pub const SELL_MARKER: &str = "sell";

/// Side of the book a ladder channel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the wire-format side name used in channel suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => SELL_MARKER,
        }
    }
}

/// Classification of a channel name, derived once per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelClass {
    /// Bid-side ladder. Any ladder channel whose suffix is not exactly
    /// `sell` lands here, including unexpected suffixes; the source schema
    /// defaults to bid rather than rejecting.
    OrderBookBid,
    /// Ask-side ladder (suffix exactly `sell`).
    OrderBookAsk,
    /// Trade execution stream.
    Execution,
    /// Prefix matches no known channel family.
    Unsupported,
}

/// Classifies a channel name by prefix (and ladder suffix).
///
/// Matching is case-sensitive and exact; no normalization is applied to the
/// input.
pub fn classify(channel: &str) -> ChannelClass {
    if channel.starts_with(LADDERS_CASH_PREFIX) {
        if channel.ends_with(SELL_MARKER) {
            ChannelClass::OrderBookAsk
        } else {
            ChannelClass::OrderBookBid
        }
    } else if channel.starts_with(EXECUTIONS_CASH_PREFIX) {
        ChannelClass::Execution
    } else {
        ChannelClass::Unsupported
    }
}

/// Builds the ladder channel name for one side of a symbol's book.
pub fn ladders_channel(symbol: &str, side: Side) -> String {
    format!("{LADDERS_CASH_PREFIX}{symbol}_{}", side.as_str())
}

/// Builds the execution channel name for a symbol.
pub fn executions_channel(symbol: &str) -> String {
    format!("{EXECUTIONS_CASH_PREFIX}{symbol}")
}

/// Extracts the instrument symbol from an execution channel name.
///
/// The symbol is simply the substring after the prefix; no validation is
/// performed on it. The caller must have classified `channel` as
/// [`ChannelClass::Execution`] first.
pub fn execution_symbol(channel: &str) -> &str {
    &channel[EXECUTIONS_CASH_PREFIX.len()..]
}
