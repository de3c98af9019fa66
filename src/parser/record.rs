//! Positional extraction of a single trace line.
//!
//! ns-2 traces are whitespace separated with a fixed field order. We only
//! need six of the fields; anything that does not parse cleanly is rejected
//! as a whole so no half-built record ever reaches the aggregator.

use crate::utils::config::{
    FIELD_EVENT, FIELD_FROM_NODE, FIELD_SEQ, FIELD_SIZE, FIELD_TIME, FIELD_TO_NODE, MIN_FIELDS,
};
use crate::utils::error::RecordError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Event kind from the first trace column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Packet enqueued at a link (`+`)
    Send,
    /// Packet received at the far end of a link (`r`)
    Receive,
    /// Dequeue, drop and anything else
    Other,
}

impl EventKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            "+" => EventKind::Send,
            "r" => EventKind::Receive,
            _ => EventKind::Other,
        }
    }
}

/// One fully-parsed trace record
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub kind: EventKind,
    pub timestamp: f64,
    pub source_node: i64,
    pub dest_node: i64,
    pub packet_size: u64,
    pub sequence_id: String,
}

/// Parse one trace line into a [`TraceEvent`]
///
/// **Public** - used by the trace scanner and in tests
///
/// # Errors
/// * `RecordError::TooFewFields` - fewer than 11 whitespace separated tokens
/// * `RecordError::InvalidNumber` - time, node or size token is not numeric
/// * `RecordError::InvalidTimestamp` - time is negative, NaN or infinite
pub fn parse_record(line: &str) -> Result<TraceEvent, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < MIN_FIELDS {
        return Err(RecordError::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let timestamp: f64 = parse_field(&fields, FIELD_TIME, "float")?;
    if !timestamp.is_finite() || timestamp < 0.0 {
        return Err(RecordError::InvalidTimestamp(timestamp));
    }

    Ok(TraceEvent {
        kind: EventKind::from_token(fields[FIELD_EVENT]),
        timestamp,
        source_node: parse_field(&fields, FIELD_FROM_NODE, "integer")?,
        dest_node: parse_field(&fields, FIELD_TO_NODE, "integer")?,
        packet_size: parse_field(&fields, FIELD_SIZE, "unsigned integer")?,
        sequence_id: fields[FIELD_SEQ].to_string(),
    })
}

/// Parse a numeric token at a known position
///
/// **Private** - internal helper for parse_record
fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    kind: &'static str,
) -> Result<T, RecordError> {
    let raw = fields[index];
    raw.parse::<T>().map_err(|_| RecordError::InvalidNumber {
        index,
        kind,
        value: raw.to_string(),
    })
}
