//! # ArmCalc Core
//!
//! Data model and validation for the WSDOT ArmCalc service, which converts
//! between the two linear-referencing systems used on the state highway
//! network:
//!
//! - **ARM** (Accumulated Route Mileage) - actual measured distance along a
//!   route.
//! - **SRMP** (State Route Milepost) - posted milepost value, which may
//!   diverge from ARM after a route realignment.
//!
//! This crate provides:
//! - Type definitions for calculation inputs and outputs
//! - Input validation
//!
//! ## Example
//!
//! ```rust,ignore
//! use armcalc_core::{validate_input, CalcDirection, CalcInput};
//!
//! let input: CalcInput = serde_json::from_str(json)?;
//! validate_input(&input, CalcDirection::ArmToSrmp)?;
//! ```

pub mod types;
pub mod validation;

// Re-exports for convenience
pub use types::*;
pub use validation::*;
