//! # ArmCalc HTTP Client
//!
//! Client for the WSDOT ArmCalc web service. Ties together the data model
//! from `armcalc-core`, the wire-format translation from `armcalc-wire`, and
//! an injected [`Transport`] capability.
//!
//! This crate provides:
//! - A [`Transport`] trait abstracting "GET/POST a URL, get back status and
//!   body text", with a reqwest-backed default implementation
//! - [`ArmCalcClient`] exposing the three service operations: single ARM to
//!   SRMP, single SRMP to ARM, and batch
//!
//! ## Example
//!
//! ```ignore
//! use armcalc_http::ArmCalcClient;
//!
//! let client = ArmCalcClient::new();
//! let output = client.calc_srmp(&input).await?;
//! if !output.is_success() {
//!     eprintln!("service said: {:?}", output.calculation_return_message);
//! }
//! ```

mod client;
mod error;
mod transport;

pub use client::{ArmCalcClient, DEFAULT_URL};
pub use error::{ArmCalcError, TransportError};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
