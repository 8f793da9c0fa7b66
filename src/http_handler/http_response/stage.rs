use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /vessel/control/stage endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct StageResponse {
    /// Stage index after the activation.
    current_stage: i32,
}

impl SerdeJSONBodyHTTPResponseType for StageResponse {}

impl StageResponse {
    pub(crate) fn current_stage(&self) -> i32 { self.current_stage }
}
