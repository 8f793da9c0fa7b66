use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use std::collections::HashMap;

/// Response type for the /vessel/resources endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ResourcesResponse {
    /// Amount per resource name, e.g. `"LiquidFuel"`.
    #[serde(default)]
    amounts: HashMap<String, f64>,
}

impl SerdeJSONBodyHTTPResponseType for ResourcesResponse {}

impl ResourcesResponse {
    pub(crate) fn into_amounts(self) -> HashMap<String, f64> { self.amounts }
}
