//! ArmCalc Types
//!
//! Type definitions for ArmCalc calculation inputs and outputs. The serde
//! renames on each field match the names the web service uses in its batch
//! JSON bodies; single-calculation GET replies drift from those names and are
//! reconciled by the wire layer before deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Direction of a calculation.
///
/// On the wire this is the numeric `CalcType` field: 0 converts SRMP to ARM,
/// 1 converts ARM to SRMP.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum CalcDirection {
    /// SRMP to ARM (wire value 0)
    SrmpToArm,
    /// ARM to SRMP (wire value 1)
    ArmToSrmp,
}

impl From<CalcDirection> for u8 {
    fn from(direction: CalcDirection) -> Self {
        match direction {
            CalcDirection::SrmpToArm => 0,
            CalcDirection::ArmToSrmp => 1,
        }
    }
}

impl TryFrom<u8> for CalcDirection {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CalcDirection::SrmpToArm),
            1 => Ok(CalcDirection::ArmToSrmp),
            other => Err(format!("invalid calculation type: {other}")),
        }
    }
}

/// Ahead/back indicator for SRMP measures.
///
/// Distinguishes "ahead" from "back" mileage at points where a route doubles
/// back on itself. Absence (`None` on the input/output types) is meaningful
/// and distinct from both variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AbIndicator {
    #[serde(rename = "A")]
    Ahead,
    #[serde(rename = "B")]
    Back,
}

impl AbIndicator {
    /// The single-letter wire form ("A" or "B").
    pub fn as_str(&self) -> &'static str {
        match self {
            AbIndicator::Ahead => "A",
            AbIndicator::Back => "B",
        }
    }
}

impl Display for AbIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbIndicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(AbIndicator::Ahead),
            "B" | "b" => Ok(AbIndicator::Back),
            other => Err(format!("invalid ahead/back indicator: {other:?}")),
        }
    }
}

/// A single ArmCalc calculation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalcInput {
    /// Calculation direction. Derived from the endpoint for single
    /// calculations; must be set explicitly on each batch item.
    #[serde(
        rename = "CalcType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub calc_direction: Option<CalcDirection>,

    /// Three character state route identifier, e.g. "005".
    #[serde(rename = "SR")]
    pub sr: String,

    /// Related Route Type.
    #[serde(rename = "RRT", default, skip_serializing_if = "Option::is_none")]
    pub rrt: Option<String>,

    /// Related Route Qualifier.
    #[serde(rename = "RRQ", default, skip_serializing_if = "Option::is_none")]
    pub rrq: Option<String>,

    /// Ahead/back indicator for the SRMP measure.
    #[serde(
        rename = "ABIndicator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ab_indicator: Option<AbIndicator>,

    /// Date the input measurement was collected.
    #[serde(rename = "ReferenceDate")]
    pub reference_date: DateTime<Utc>,

    /// Accumulated Route Mileage. The driving input for ARM to SRMP
    /// calculations, produced by the service otherwise.
    #[serde(rename = "ARM", default, skip_serializing_if = "Option::is_none")]
    pub arm: Option<f64>,

    /// State Route Milepost. The driving input for SRMP to ARM calculations,
    /// produced by the service otherwise.
    #[serde(rename = "SRMP", default, skip_serializing_if = "Option::is_none")]
    pub srmp: Option<f64>,

    /// LRS publication date to resolve the measure against. Route geometry
    /// changes over time, so the same physical point maps to different
    /// ARM/SRMP values depending on this date.
    #[serde(rename = "ResponseDate")]
    pub response_date: DateTime<Utc>,

    /// Opaque caller-supplied correlation token, only meaningful for batch
    /// calls.
    #[serde(
        rename = "TransId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trans_id: Option<String>,
}

/// Result of an ArmCalc calculation.
///
/// Echoes the input fields and adds the service's return code/message and the
/// route's last realignment date. A nonzero return code is a domain failure
/// reported by the service, not a transport error; callers must check it
/// explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalcOutput {
    #[serde(
        rename = "CalcType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub calc_direction: Option<CalcDirection>,

    #[serde(rename = "SR")]
    pub sr: String,

    #[serde(rename = "RRT", default, skip_serializing_if = "Option::is_none")]
    pub rrt: Option<String>,

    #[serde(rename = "RRQ", default, skip_serializing_if = "Option::is_none")]
    pub rrq: Option<String>,

    #[serde(
        rename = "ABIndicator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ab_indicator: Option<AbIndicator>,

    #[serde(rename = "ReferenceDate")]
    pub reference_date: DateTime<Utc>,

    #[serde(rename = "ARM", default, skip_serializing_if = "Option::is_none")]
    pub arm: Option<f64>,

    #[serde(rename = "SRMP", default, skip_serializing_if = "Option::is_none")]
    pub srmp: Option<f64>,

    #[serde(rename = "ResponseDate")]
    pub response_date: DateTime<Utc>,

    #[serde(
        rename = "TransId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trans_id: Option<String>,

    /// Calculation return code. 0 means success.
    #[serde(rename = "CalculationReturnCode")]
    pub calculation_return_code: i32,

    /// Calculation return message. Empty or absent when the return code is 0.
    #[serde(
        rename = "CalculationReturnMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub calculation_return_message: Option<String>,

    /// Date the route's geometry was last realigned. Explains why ARM and
    /// SRMP may not match caller expectations.
    #[serde(
        rename = "RealignmentDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub realignment_date: Option<DateTime<Utc>>,
}

impl CalcOutput {
    /// Whether the service reported the calculation as successful.
    pub fn is_success(&self) -> bool {
        self.calculation_return_code == 0
    }
}
