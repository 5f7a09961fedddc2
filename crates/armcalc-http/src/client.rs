//! ArmCalc service client

use crate::error::ArmCalcError;
use crate::transport::{ReqwestTransport, Transport};
use armcalc_core::{validate_batch, validate_input, CalcDirection, CalcInput, CalcOutput};
use armcalc_wire::{parse_batch_response, parse_single_response, to_batch_body, to_search_query};
use std::sync::Arc;

/// Production URL of the ArmCalc REST endpoint.
pub const DEFAULT_URL: &str = "http://webapps.wsdot.loc/StateRoute/LocationReferencingMethod/Transformation/ARMCalc/ArmCalcService.svc/REST";

/// Client that calls the web service to perform ARM <=> SRMP calculations.
///
/// Each call issues exactly one request through the injected transport and
/// holds no state between calls beyond the immutable base URL. Concurrent
/// calls are neither coordinated nor rate limited here.
///
/// # Example
///
/// ```ignore
/// use armcalc_http::ArmCalcClient;
///
/// let client = ArmCalcClient::new();
/// let output = client.calc_arm(&input).await?;
/// ```
pub struct ArmCalcClient {
    transport: Arc<dyn Transport>,
    url: String,
}

impl ArmCalcClient {
    /// Create a client against the production service URL.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), DEFAULT_URL)
    }

    /// Create a client against an overriding service URL.
    ///
    /// The URL should not include a trailing slash; the client appends the
    /// `/CalcSrmp`, `/CalcArm`, and `/CalcBatch` segments.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), url)
    }

    /// Create a client with a custom transport, e.g. a test double.
    pub fn with_transport(transport: Arc<dyn Transport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// Get the base URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Convert a value from ARM to SRMP.
    pub async fn calc_srmp(&self, input: &CalcInput) -> Result<CalcOutput, ArmCalcError> {
        self.perform_calc_get(input, CalcDirection::ArmToSrmp).await
    }

    /// Convert a value from SRMP to ARM.
    pub async fn calc_arm(&self, input: &CalcInput) -> Result<CalcOutput, ArmCalcError> {
        self.perform_calc_get(input, CalcDirection::SrmpToArm).await
    }

    /// Perform multiple calculations with one web service request.
    ///
    /// Every input must carry its own calculation direction. The returned
    /// vector corresponds positionally to `inputs`; the whole batch fails as
    /// one unit if the transport call fails.
    pub async fn calc_batch(&self, inputs: &[CalcInput]) -> Result<Vec<CalcOutput>, ArmCalcError> {
        validate_batch(inputs)?;

        let body = to_batch_body(inputs)?;
        let url = format!("{}/CalcBatch", self.url);
        tracing::debug!(count = inputs.len(), %url, "issuing batch calculation");

        let response = self
            .transport
            .post(&url, "application/json", body)
            .await?;
        tracing::trace!(status = response.status, "batch reply received");

        Ok(parse_batch_response(&response.body)?)
    }

    /// Request a GET operation from the web service.
    ///
    /// The direction picks the endpoint segment and is stamped back onto the
    /// result, since the service reply does not echo it.
    async fn perform_calc_get(
        &self,
        input: &CalcInput,
        direction: CalcDirection,
    ) -> Result<CalcOutput, ArmCalcError> {
        validate_input(input, direction)?;

        let segment = match direction {
            CalcDirection::ArmToSrmp => "CalcSrmp",
            CalcDirection::SrmpToArm => "CalcArm",
        };
        let url = format!("{}/{}?{}", self.url, segment, to_search_query(input));
        tracing::debug!(%url, "issuing single calculation");

        let response = self.transport.get(&url).await?;
        tracing::trace!(status = response.status, "single reply received");

        let mut output = parse_single_response(&response.body)?;
        output.calc_direction = Some(direction);
        Ok(output)
    }
}

impl Default for ArmCalcClient {
    fn default() -> Self {
        Self::new()
    }
}
