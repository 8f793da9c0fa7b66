use super::autopilot::AutopilotResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /vessel/autopilot/target endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct AutopilotTargetRequest {
    /// Target pitch above the horizon in degrees.
    pub(crate) pitch: f64,
    /// Target compass heading in degrees.
    pub(crate) heading: f64,
}

impl JSONBodyHTTPRequestType for AutopilotTargetRequest {
    type Body = AutopilotTargetRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for AutopilotTargetRequest {
    type Response = AutopilotResponse;
    fn endpoint(&self) -> &'static str { "/vessel/autopilot/target" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
