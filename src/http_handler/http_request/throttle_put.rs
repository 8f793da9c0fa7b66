use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::throttle::ThrottleResponse;

/// Request type for the /vessel/control/throttle endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct ThrottleRequest {
    /// Throttle setting between 0.0 and 1.0.
    pub(crate) throttle: f64,
}

impl JSONBodyHTTPRequestType for ThrottleRequest {
    type Body = ThrottleRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for ThrottleRequest {
    type Response = ThrottleResponse;
    fn endpoint(&self) -> &'static str { "/vessel/control/throttle" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
