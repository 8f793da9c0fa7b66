use super::node::NodeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for creating a maneuver node via /vessel/control/nodes.
#[derive(serde::Serialize, Debug)]
pub(crate) struct AddNodeRequest {
    /// Universal time of the maneuver.
    pub(crate) ut: f64,
    /// Prograde delta-v in m/s.
    pub(crate) prograde: f64,
}

impl JSONBodyHTTPRequestType for AddNodeRequest {
    type Body = AddNodeRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for AddNodeRequest {
    type Response = NodeResponse;
    fn endpoint(&self) -> &'static str { "/vessel/control/nodes" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
