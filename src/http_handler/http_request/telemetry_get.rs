use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::telemetry::TelemetryResponse;

/// Request type for the /vessel/telemetry endpoint.
#[derive(Debug)]
pub(crate) struct TelemetryRequest {}

impl NoBodyHTTPRequestType for TelemetryRequest {}

impl HTTPRequestType for TelemetryRequest {
    type Response = TelemetryResponse;
    fn endpoint(&self) -> &'static str { "/vessel/telemetry" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
