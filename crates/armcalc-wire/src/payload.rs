//! Typed request bodies and response payloads.
//!
//! Thin composition layer: generic JSON decoding, then the normalization
//! tables, then serde into the `armcalc-core` types (and the reverse for
//! outgoing batch bodies).

use crate::dates::to_wcf_date_string;
use crate::error::WireError;
use crate::normalize::{normalize_batch, normalize_single};
use armcalc_core::{CalcInput, CalcOutput};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Date-valued fields in outgoing batch bodies.
const DATE_FIELDS: [&str; 3] = ["ReferenceDate", "ResponseDate", "RealignmentDate"];

/// Serialize a batch of inputs into the service's POST body.
///
/// Every date field is rendered in the WCF encoding; absent optional fields
/// are omitted. Input order is preserved, which is what ties each reply
/// element back to its request.
pub fn to_batch_body(inputs: &[CalcInput]) -> Result<String, WireError> {
    let mut value = serde_json::to_value(inputs)?;

    let items = value
        .as_array_mut()
        .ok_or(WireError::UnexpectedShape { expected: "array" })?;
    for item in items {
        let map = item
            .as_object_mut()
            .ok_or(WireError::UnexpectedShape { expected: "object" })?;
        for field in DATE_FIELDS {
            let encoded = match map.get(field) {
                Some(Value::String(text)) => {
                    let instant: DateTime<Utc> =
                        text.parse().map_err(|_| WireError::NotATimestamp {
                            field: field.to_string(),
                            value: text.clone(),
                        })?;
                    Some(to_wcf_date_string(&instant))
                }
                _ => None,
            };
            if let Some(encoded) = encoded {
                map.insert(field.to_string(), Value::String(encoded));
            }
        }
    }

    Ok(serde_json::to_string(&value)?)
}

/// Parse and normalize a single-calculation GET reply.
///
/// The reply does not echo the calculation direction; the caller re-injects
/// it from the endpoint that was used.
pub fn parse_single_response(body: &str) -> Result<CalcOutput, WireError> {
    let mut value: Value = serde_json::from_str(body)?;
    normalize_single(&mut value)?;
    Ok(serde_json::from_value(value)?)
}

/// Parse and normalize a batch POST reply.
///
/// The returned vector matches the submitted inputs positionally.
pub fn parse_batch_response(body: &str) -> Result<Vec<CalcOutput>, WireError> {
    let mut value: Value = serde_json::from_str(body)?;
    normalize_batch(&mut value)?;
    Ok(serde_json::from_value(value)?)
}
