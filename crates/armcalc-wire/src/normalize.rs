//! Response normalization.
//!
//! The service's two reply shapes drift from its own batch field names:
//! single-calculation GET replies carry `StateRoute` instead of `SR`, an
//! oddly-cased `ABindicator`, and dates as `*YYYYMMDD` digit strings, while
//! batch replies use the canonical names with WCF date strings. Both shapes
//! also use empty strings where they mean null.
//!
//! Normalization happens on the generic [`serde_json::Value`] after decoding,
//! driven by explicit per-field tables rather than hooks interleaved into the
//! parser. Date values are re-emitted as RFC 3339 strings so the typed
//! structs in `armcalc-core` deserialize with chrono's stock serde support.

use crate::dates::{parse_search_date, parse_wcf_date};
use crate::error::WireError;
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Date-valued fields in batch payloads, decoded with the WCF codec.
const DATE_FIELDS: [&str; 3] = ["ReferenceDate", "ResponseDate", "RealignmentDate"];

/// Plain key drift in single-calculation replies.
const SINGLE_RENAMES: [(&str, &str); 2] = [("StateRoute", "SR"), ("ABindicator", "ABIndicator")];

/// Date key drift in single-calculation replies, decoded with the search
/// codec.
const SINGLE_DATE_RENAMES: [(&str, &str); 3] = [
    ("ReferenceYYYYMMDD", "ReferenceDate"),
    ("ResponseYYYYMMDD", "ResponseDate"),
    ("RealignmentYYYYMMDD", "RealignmentDate"),
];

/// Replace every empty-string value in the tree with JSON null.
///
/// The service emits `""` where it means "no value"; the rule applies
/// uniformly to every key at every depth.
pub fn blank_strings_to_null(value: &mut Value) {
    match value {
        Value::String(s) if s.is_empty() => *value = Value::Null,
        Value::Array(items) => {
            for item in items {
                blank_strings_to_null(item);
            }
        }
        Value::Object(map) => {
            for (_, item) in map.iter_mut() {
                blank_strings_to_null(item);
            }
        }
        _ => {}
    }
}

/// Normalize a single-calculation reply object in place.
///
/// Applies the empty-string rule, renames the drifted keys to their canonical
/// batch names, and decodes the `*YYYYMMDD` date strings (the originals are
/// removed).
///
/// # Errors
///
/// Fails if the value is not a JSON object, if a date field does not match
/// the `YYYYMMDD` pattern, or if a date field holds something other than a
/// string or null.
pub fn normalize_single(value: &mut Value) -> Result<(), WireError> {
    let map = value
        .as_object_mut()
        .ok_or(WireError::UnexpectedShape { expected: "object" })?;

    blank_object_strings_to_null(map);

    for (from, to) in SINGLE_RENAMES {
        if let Some(moved) = map.remove(from) {
            map.insert(to.to_string(), moved);
        }
    }

    for (from, to) in SINGLE_DATE_RENAMES {
        if let Some(moved) = map.remove(from) {
            let coerced = coerce_date(from, moved, |text| {
                parse_search_date(text).map(rfc3339_midnight)
            })?;
            map.insert(to.to_string(), coerced);
        }
    }

    Ok(())
}

/// Normalize a batch reply array in place.
///
/// Applies the empty-string rule to every result and decodes the WCF date
/// strings. Array order is left untouched; results correspond positionally
/// to the submitted inputs.
///
/// # Errors
///
/// Fails if the value is not a JSON array of objects or if a date field
/// holds a string that is not a WCF date.
pub fn normalize_batch(value: &mut Value) -> Result<(), WireError> {
    let items = value
        .as_array_mut()
        .ok_or(WireError::UnexpectedShape { expected: "array" })?;

    for item in items {
        let map = item
            .as_object_mut()
            .ok_or(WireError::UnexpectedShape { expected: "object" })?;

        blank_object_strings_to_null(map);

        for field in DATE_FIELDS {
            // Only string values are decoded; null (and absent) pass through.
            let decoded = match map.get(field) {
                Some(Value::String(text)) => Some(parse_wcf_date(text)?.to_rfc3339()),
                _ => None,
            };
            if let Some(decoded) = decoded {
                map.insert(field.to_string(), Value::String(decoded));
            }
        }
    }

    Ok(())
}

fn blank_object_strings_to_null(map: &mut Map<String, Value>) {
    for (_, item) in map.iter_mut() {
        blank_strings_to_null(item);
    }
}

fn coerce_date<F>(field: &str, value: Value, decode: F) -> Result<Value, WireError>
where
    F: FnOnce(&str) -> Result<String, WireError>,
{
    match value {
        Value::String(text) => Ok(Value::String(decode(&text)?)),
        Value::Null => Ok(Value::Null),
        other => Err(WireError::NotATimestamp {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn rfc3339_midnight(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
        .to_rfc3339()
}
