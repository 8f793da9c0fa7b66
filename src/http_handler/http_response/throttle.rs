use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /vessel/control/throttle endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ThrottleResponse {
    /// The throttle the vessel actually applied.
    throttle: f64,
}

impl SerdeJSONBodyHTTPResponseType for ThrottleResponse {}

impl ThrottleResponse {
    pub(crate) fn throttle(&self) -> f64 { self.throttle }
}
