//! Static type-definition frames.
//!
//! Each channel family has a pre-serialized frame describing the shape of
//! the normalized records that follow on that channel. The frame is emitted
//! verbatim, exactly once, in response to a subscription acknowledgment; it
//! is never generated or mutated at runtime, so the constants are safe to
//! share across threads.

/// Schema frame for normalized order book ladder records.
pub static LADDERS_CASH: &[u8] = br#"{"price":"float64","size":"float64"}"#;

/// Schema frame for normalized execution records.
pub static EXECUTIONS_CASH: &[u8] =
    br#"{"created_at":"timestamp","id":"int","symbol":"string","price":"float64","size":"float64"}"#;
