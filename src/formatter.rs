//! Normalization of raw Liquid Tap messages into the uniform record format.
//!
//! [`LiquidFormatter`] is a pure, stateless transformation: one call takes a
//! channel name and one raw line and returns the ordered list of normalized
//! records that line produces, or an error. It holds no state between calls
//! and is safe to invoke concurrently from any number of tasks.

use crate::Result;
use crate::channel::{self, ChannelClass, SELL_MARKER, Side};
use crate::error::LiquidError;
use crate::models::Envelope;
use crate::models::execution::{Execution, NormalizedExecution};
use crate::models::ladder::{LadderRow, NormalizedOrder};
use crate::typedef;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Per-exchange message formatter.
///
/// Implementations turn one exchange's wire format into normalized records.
/// Every record in the returned list is an independently serialized JSON
/// object; callers forward them downstream one per logical event.
pub trait Formatter {
    /// Called once when a feed session begins; returns any synthetic
    /// start-of-stream records the exchange requires.
    fn format_start(&self, url: &str) -> Result<Vec<Vec<u8>>>;

    /// Normalizes a single raw line received on `channel`.
    ///
    /// On success the list is never silently partial: it holds one record
    /// per logical event in the line. On error, zero records were produced.
    fn format_message(&self, channel: &str, line: &[u8]) -> Result<Vec<Vec<u8>>>;
}

/// Formatter for the Liquid exchange's Tap (Pusher) feed.
pub struct LiquidFormatter;

impl Formatter for LiquidFormatter {
    /// Liquid needs no start-of-stream records.
    fn format_start(&self, _url: &str) -> Result<Vec<Vec<u8>>> {
        Ok(Vec::new())
    }

    fn format_message(&self, channel: &str, line: &[u8]) -> Result<Vec<Vec<u8>>> {
        let envelope: Envelope =
            serde_json::from_slice(line).map_err(LiquidError::MalformedEnvelope)?;

        // A subscription ack yields the channel family's type definition
        // frame, exactly once, and never any data records.
        if envelope.is_subscription_ack() {
            let frame = match channel::classify(channel) {
                ChannelClass::OrderBookBid | ChannelClass::OrderBookAsk => typedef::LADDERS_CASH,
                ChannelClass::Execution => typedef::EXECUTIONS_CASH,
                ChannelClass::Unsupported => {
                    return Err(LiquidError::UnsupportedChannel(channel.to_string()));
                }
            };
            return Ok(vec![frame.to_vec()]);
        }

        match channel::classify(channel) {
            ChannelClass::OrderBookBid => format_ladder(envelope.data_json(), Side::Buy),
            ChannelClass::OrderBookAsk => format_ladder(envelope.data_json(), Side::Sell),
            ChannelClass::Execution => format_execution(channel, envelope.data_json()),
            ChannelClass::Unsupported => Err(LiquidError::UnsupportedLine(channel.to_string())),
        }
    }
}

/// Normalizes a ladder snapshot into one record per price level.
///
/// Levels keep their input order; any unparseable row fails the whole call,
/// discarding levels already converted.
fn format_ladder(data: &str, side: Side) -> Result<Vec<Vec<u8>>> {
    let rows: Vec<LadderRow> = serde_json::from_str(data).map_err(LiquidError::InvalidLadder)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        let (price, quantity) = parse_level(row)?;
        let size = match side {
            Side::Sell => -quantity,
            Side::Buy => quantity,
        };
        records.push(serde_json::to_vec(&NormalizedOrder { price, size })?);
    }
    Ok(records)
}

/// Parses one ladder row's price and quantity strings.
fn parse_level(row: &LadderRow) -> Result<(f64, f64)> {
    let invalid = |source| LiquidError::InvalidPriceLevel {
        price: row[0].clone(),
        quantity: row[1].clone(),
        source,
    };
    let price: f64 = row[0].parse().map_err(&invalid)?;
    let quantity: f64 = row[1].parse().map_err(&invalid)?;
    Ok((price, quantity))
}

/// Normalizes a trade execution into a single record.
fn format_execution(channel: &str, data: &str) -> Result<Vec<Vec<u8>>> {
    let execution: Execution =
        serde_json::from_str(data).map_err(LiquidError::InvalidExecution)?;

    // Any taker_side other than exactly "sell" counts as buy, matching the
    // ladder suffix rule.
    let size = if execution.taker_side == SELL_MARKER {
        -execution.quantity
    } else {
        execution.quantity
    };
    // Widened before scaling: any parsable epoch-seconds value stays
    // representable, so the conversion can never wrap or fault.
    let created_at_ns = i128::from(execution.created_at) * NANOS_PER_SEC;
    let record = NormalizedExecution {
        created_at: created_at_ns.to_string(),
        id: execution.id,
        symbol: channel::execution_symbol(channel).to_string(),
        price: execution.price,
        size,
    };
    Ok(vec![serde_json::to_vec(&record)?])
}
