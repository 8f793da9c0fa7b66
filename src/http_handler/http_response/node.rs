use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for a created maneuver node.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct NodeResponse {
    id: u64,
    ut: f64,
    prograde: f64,
}

impl SerdeJSONBodyHTTPResponseType for NodeResponse {}

impl NodeResponse {
    pub(crate) fn id(&self) -> u64 { self.id }
    pub(crate) fn ut(&self) -> f64 { self.ut }
    pub(crate) fn prograde(&self) -> f64 { self.prograde }
}
