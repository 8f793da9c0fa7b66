use super::node_removed::NodeRemovedResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for removing a maneuver node via /vessel/control/nodes.
#[derive(Debug)]
pub(crate) struct RemoveNodeRequest {
    pub(crate) node_id: u64,
}

impl NoBodyHTTPRequestType for RemoveNodeRequest {}

impl HTTPRequestType for RemoveNodeRequest {
    type Response = NodeRemovedResponse;
    fn endpoint(&self) -> &'static str { "/vessel/control/nodes" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("node_id", self.node_id.into());
        headers
    }
}
