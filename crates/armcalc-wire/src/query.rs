//! Query-string construction for single-calculation GET requests.

use crate::dates::to_search_date_string;
use armcalc_core::CalcInput;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in query keys and values.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Build the query string for a single-calculation GET request.
///
/// Wire rules, inherited from the service:
/// - The calculation direction is never a parameter; it lives in the endpoint
///   path.
/// - Absent and empty values are skipped entirely.
/// - `ReferenceDate` becomes `ref` and `ResponseDate` becomes `resp`; every
///   other key is the lower-cased field name.
/// - Dates are rendered in the `YYYYMMDD` search encoding.
/// - Keys and values are percent-escaped.
///
/// # Example
///
/// ```rust,ignore
/// let query = to_search_query(&input);
/// assert_eq!(query, "sr=005&srmp=150&ref=20140819&resp=20140819");
/// ```
pub fn to_search_query(input: &CalcInput) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_text(&mut parts, "sr", Some(&input.sr));
    push_text(&mut parts, "rrt", input.rrt.as_deref());
    push_text(&mut parts, "rrq", input.rrq.as_deref());
    push_text(
        &mut parts,
        "abindicator",
        input.ab_indicator.map(|ab| ab.as_str()),
    );
    push_number(&mut parts, "arm", input.arm);
    push_number(&mut parts, "srmp", input.srmp);
    push_date(&mut parts, "ref", &input.reference_date);
    push_date(&mut parts, "resp", &input.response_date);
    push_text(&mut parts, "transid", input.trans_id.as_deref());

    parts.join("&")
}

fn push_pair(parts: &mut Vec<String>, key: &str, value: &str) {
    parts.push(format!(
        "{}={}",
        utf8_percent_encode(key, QUERY),
        utf8_percent_encode(value, QUERY)
    ));
}

fn push_text(parts: &mut Vec<String>, key: &str, value: Option<&str>) {
    match value {
        Some(text) if !text.is_empty() => push_pair(parts, key, text),
        _ => {}
    }
}

fn push_number(parts: &mut Vec<String>, key: &str, value: Option<f64>) {
    if let Some(number) = value {
        push_pair(parts, key, &number.to_string());
    }
}

fn push_date(parts: &mut Vec<String>, key: &str, value: &DateTime<Utc>) {
    push_pair(parts, key, &to_search_date_string(&value.date_naive()));
}
