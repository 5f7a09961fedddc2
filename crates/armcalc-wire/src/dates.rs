//! The two date codecs used by the ArmCalc service.
//!
//! The service speaks two incompatible textual date encodings and never mixes
//! them:
//!
//! - **WCF dates** (`/Date(1408431600000-0700)/`) in batch JSON bodies:
//!   milliseconds since the Unix epoch with an optional trailing offset
//!   integer. The offset digits are read as plain milliseconds and added
//!   arithmetically to the base - a naive addition inherited from the
//!   service, not a timezone conversion.
//! - **Search dates** (`20140819`) in single-calculation GET traffic: a bare
//!   `YYYYMMDD` digit string. The month is 1-based on the wire.
//!
//! Each encoding gets its own parse/format pair so call sites commit
//! explicitly to the one their endpoint requires.

use crate::error::WireError;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a WCF date: [full match, epoch milliseconds, optional offset]
static WCF_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Date\((\d+)(-\d+)?\)/").expect("static regex"));

/// Parse a WCF date string into a UTC instant.
///
/// The offset segment, when present, is parsed as a signed millisecond
/// integer and added directly to the base value (`-0700` contributes -700
/// milliseconds). A missing offset contributes 0.
///
/// # Errors
///
/// Returns [`WireError::InvalidWcfDate`] if the string does not match the
/// `/Date(...)/` pattern, and [`WireError::TimestampOutOfRange`] if the
/// embedded milliseconds fall outside the representable range.
///
/// # Example
///
/// ```rust
/// use armcalc_wire::dates::parse_wcf_date;
///
/// let date = parse_wcf_date("/Date(1408431600000)/").unwrap();
/// assert_eq!(date.timestamp_millis(), 1408431600000);
/// ```
pub fn parse_wcf_date(wcf_date: &str) -> Result<DateTime<Utc>, WireError> {
    let captures = WCF_DATE_RE
        .captures(wcf_date)
        .ok_or_else(|| WireError::InvalidWcfDate(wcf_date.to_string()))?;

    let base: i64 = captures[1]
        .parse()
        .map_err(|_| WireError::InvalidWcfDate(wcf_date.to_string()))?;
    let offset: i64 = match captures.get(2) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| WireError::InvalidWcfDate(wcf_date.to_string()))?,
        None => 0,
    };

    let millis = base
        .checked_add(offset)
        .ok_or(WireError::TimestampOutOfRange(base))?;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(WireError::TimestampOutOfRange(millis))
}

/// Format a UTC instant as a WCF date string.
///
/// The offset segment is always omitted; the service accepts offset-free
/// dates and never requires callers to supply one.
///
/// # Example
///
/// ```rust
/// use armcalc_wire::dates::{parse_wcf_date, to_wcf_date_string};
///
/// let date = parse_wcf_date("/Date(534067200000)/").unwrap();
/// assert_eq!(to_wcf_date_string(&date), "/Date(534067200000)/");
/// ```
pub fn to_wcf_date_string(date: &DateTime<Utc>) -> String {
    format!("/Date({})/", date.timestamp_millis())
}

/// Parse a `YYYYMMDD` digit string into a calendar date.
///
/// The wire month is 1-based and maps directly onto chrono's 1-based
/// constructor, so `"20140819"` is 2014-08-19. (An early client variant fed
/// the unadjusted month into a 0-based constructor; that off-by-one is fixed
/// here, not reproduced.)
///
/// # Errors
///
/// Returns [`WireError::InvalidSearchDate`] unless the input is exactly 8
/// ASCII digits, and [`WireError::DateOutOfRange`] if the digits name an
/// impossible calendar date.
pub fn parse_search_date(text: &str) -> Result<NaiveDate, WireError> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WireError::InvalidSearchDate(text.to_string()));
    }

    // Fixed-width fields; the digit check above makes these parses infallible.
    let year: i32 = text[0..4]
        .parse()
        .map_err(|_| WireError::InvalidSearchDate(text.to_string()))?;
    let month: u32 = text[4..6]
        .parse()
        .map_err(|_| WireError::InvalidSearchDate(text.to_string()))?;
    let day: u32 = text[6..8]
        .parse()
        .map_err(|_| WireError::InvalidSearchDate(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(WireError::DateOutOfRange { year, month, day })
}

/// Format a calendar date as a `YYYYMMDD` digit string with zero padding.
///
/// # Example
///
/// ```rust
/// use armcalc_wire::dates::to_search_date_string;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2014, 8, 19).unwrap();
/// assert_eq!(to_search_date_string(&date), "20140819");
/// ```
pub fn to_search_date_string(date: &NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}
