use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType, bool_to_header_value,
};
use super::resources::ResourcesResponse;

/// Request type for the /vessel/resources endpoint.
///
/// Queries the resources held by the parts that are decoupled when `stage` is activated.
#[derive(Debug)]
pub(crate) struct ResourcesRequest {
    /// Decouple stage index to inspect.
    pub(crate) stage: i32,
    /// Whether resources of all later stages are summed up as well.
    pub(crate) cumulative: bool,
}

impl NoBodyHTTPRequestType for ResourcesRequest {}

impl HTTPRequestType for ResourcesRequest {
    type Response = ResourcesResponse;
    fn endpoint(&self) -> &'static str { "/vessel/resources" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("stage", self.stage.into());
        headers.append("cumulative", bool_to_header_value(self.cumulative));
        headers
    }
}
