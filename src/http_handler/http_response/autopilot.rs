use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /vessel/autopilot endpoints.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct AutopilotResponse {
    engaged: bool,
    target_pitch: f64,
    target_heading: f64,
}

impl SerdeJSONBodyHTTPResponseType for AutopilotResponse {}

impl AutopilotResponse {
    pub(crate) fn is_engaged(&self) -> bool { self.engaged }
    pub(crate) fn target_pitch(&self) -> f64 { self.target_pitch }
    pub(crate) fn target_heading(&self) -> f64 { self.target_heading }
}
