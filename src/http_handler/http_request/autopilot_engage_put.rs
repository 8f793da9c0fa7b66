use super::autopilot::AutopilotResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /vessel/autopilot/engage endpoint.
#[derive(Debug)]
pub(crate) struct AutopilotEngageRequest {}

impl NoBodyHTTPRequestType for AutopilotEngageRequest {}

impl HTTPRequestType for AutopilotEngageRequest {
    type Response = AutopilotResponse;
    fn endpoint(&self) -> &'static str { "/vessel/autopilot/engage" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
