//! ArmCalc Validation
//!
//! Pre-flight validation for calculation inputs. The service reports bad
//! inputs through its own return code, but the obvious mistakes - a malformed
//! route id or a missing driving measure - are cheaper to catch before a
//! request is issued.

use crate::types::{CalcDirection, CalcInput};
use thiserror::Error;

/// Errors that can occur during validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty state route identifier")]
    EmptyRoute,

    #[error("State route identifier must be 3 characters, got '{0}'")]
    InvalidRouteLength(String),

    #[error("An ARM value is required for an ARM to SRMP calculation")]
    MissingArm,

    #[error("An SRMP value is required for an SRMP to ARM calculation")]
    MissingSrmp,

    #[error("Batch item {0} has no calculation direction")]
    MissingDirection(usize),

    #[error("Batch item {index}: {source}")]
    BatchItem {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Validate a single calculation input against the direction it will be
/// submitted with.
///
/// # Errors
///
/// Returns `ValidationError` if the route identifier is malformed or the
/// driving measure for the direction is absent.
pub fn validate_input(
    input: &CalcInput,
    direction: CalcDirection,
) -> Result<(), ValidationError> {
    validate_route(&input.sr)?;
    validate_driving_measure(input, direction)?;
    Ok(())
}

/// Validate every item of a batch.
///
/// Each item must carry its own calculation direction. Errors name the index
/// of the offending item.
pub fn validate_batch(inputs: &[CalcInput]) -> Result<(), ValidationError> {
    for (index, input) in inputs.iter().enumerate() {
        let direction = input
            .calc_direction
            .ok_or(ValidationError::MissingDirection(index))?;
        validate_input(input, direction).map_err(|source| ValidationError::BatchItem {
            index,
            source: Box::new(source),
        })?;
    }
    Ok(())
}

/// Validate the state route identifier
fn validate_route(sr: &str) -> Result<(), ValidationError> {
    if sr.is_empty() {
        return Err(ValidationError::EmptyRoute);
    }
    if sr.chars().count() != 3 {
        return Err(ValidationError::InvalidRouteLength(sr.to_string()));
    }
    Ok(())
}

/// Validate that the driving measure for the direction is present
fn validate_driving_measure(
    input: &CalcInput,
    direction: CalcDirection,
) -> Result<(), ValidationError> {
    match direction {
        CalcDirection::ArmToSrmp if input.arm.is_none() => Err(ValidationError::MissingArm),
        CalcDirection::SrmpToArm if input.srmp.is_none() => Err(ValidationError::MissingSrmp),
        _ => Ok(()),
    }
}
