//! # ArmCalc Wire Format
//!
//! Bidirectional translation between the idiomatic [`armcalc_core`] data
//! model and the ArmCalc web service's peculiar wire conventions:
//!
//! - Two incompatible date encodings: WCF `/Date(ms)/` strings in batch JSON
//!   bodies and bare `YYYYMMDD` digit strings in single-calculation GET
//!   traffic. Each is a named codec so call sites commit explicitly to the
//!   encoding their endpoint requires.
//! - Inconsistently cased field names in single-calculation replies
//!   (`StateRoute`, `ABindicator`, `ReferenceYYYYMMDD`, ...), reconciled by
//!   an explicit rename table applied after generic JSON decoding.
//! - Empty strings standing in for null, normalized uniformly.
//!
//! ## Example
//!
//! ```rust
//! use armcalc_wire::dates::parse_wcf_date;
//!
//! let date = parse_wcf_date("/Date(1408431600000-0700)/").unwrap();
//! assert_eq!(date.timestamp_millis(), 1408431600000 - 700);
//! ```

pub mod dates;
mod error;
mod normalize;
mod payload;
mod query;

pub use error::WireError;
pub use normalize::{blank_strings_to_null, normalize_batch, normalize_single};
pub use payload::{parse_batch_response, parse_single_response, to_batch_body};
pub use query::to_search_query;
