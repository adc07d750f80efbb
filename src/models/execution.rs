//! Execution channel models.

use serde::{Deserialize, Serialize};

/// A wire-format trade execution.
#[derive(Debug, Clone, Deserialize)]
pub struct Execution {
    pub id: i64,
    /// Trade time as an epoch-seconds integer.
    pub created_at: i64,
    pub price: f64,
    pub quantity: f64,
    /// Side of the aggressor: `"buy"` or `"sell"`.
    pub taker_side: String,
}

/// A normalized trade execution.
///
/// `created_at` is a nanosecond epoch rendered as a decimal string;
/// downstream consumers expect string timestamps to avoid float-precision
/// loss on large nanosecond values. `size` is signed: negative when the
/// taker side is sell.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedExecution {
    pub created_at: String,
    pub id: i64,
    pub symbol: String,
    pub price: f64,
    pub size: f64,
}
