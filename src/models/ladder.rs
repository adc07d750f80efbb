//! Order book ladder models.

use serde::Serialize;

/// One wire-format ladder row: `[price, quantity]`, both as strings.
pub type LadderRow = [String; 2];

/// A normalized order book level.
///
/// `size` is signed: negative for the ask side, positive for the bid side.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedOrder {
    pub price: f64,
    pub size: f64,
}
