use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for a node removal.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct NodeRemovedResponse {
    removed: bool,
}

impl SerdeJSONBodyHTTPResponseType for NodeRemovedResponse {}

impl NodeRemovedResponse {
    pub(crate) fn removed(&self) -> bool { self.removed }
}
