use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /vessel/orbit endpoint.
#[derive(serde::Deserialize, Debug, Clone, Copy)]
pub(crate) struct OrbitResponse {
    /// Apoapsis measured from the body's center, not its surface.
    apoapsis: f64,
    semi_major_axis: f64,
    time_to_apoapsis: f64,
    /// Gravitational parameter of the orbited body.
    gravitational_parameter: f64,
}

impl SerdeJSONBodyHTTPResponseType for OrbitResponse {}

impl OrbitResponse {
    pub(crate) fn apoapsis(&self) -> f64 { self.apoapsis }
    pub(crate) fn semi_major_axis(&self) -> f64 { self.semi_major_axis }
    pub(crate) fn time_to_apoapsis(&self) -> f64 { self.time_to_apoapsis }
    pub(crate) fn gravitational_parameter(&self) -> f64 { self.gravitational_parameter }
}
