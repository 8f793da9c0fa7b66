use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /vessel/telemetry endpoint.
///
/// Speeds are given in the rotating reference frame of the orbited body.
#[derive(serde::Deserialize, Debug, Clone, Copy)]
pub(crate) struct TelemetryResponse {
    ut: f64,
    mean_altitude: f64,
    apoapsis_altitude: f64,
    periapsis_altitude: f64,
    horizontal_speed: f64,
    vertical_speed: f64,
    speed: f64,
    mass: f64,
    available_thrust: f64,
    specific_impulse: f64,
    current_stage: i32,
}

impl SerdeJSONBodyHTTPResponseType for TelemetryResponse {}

impl TelemetryResponse {
    pub(crate) fn ut(&self) -> f64 { self.ut }
    pub(crate) fn mean_altitude(&self) -> f64 { self.mean_altitude }
    pub(crate) fn apoapsis_altitude(&self) -> f64 { self.apoapsis_altitude }
    pub(crate) fn periapsis_altitude(&self) -> f64 { self.periapsis_altitude }
    pub(crate) fn horizontal_speed(&self) -> f64 { self.horizontal_speed }
    pub(crate) fn vertical_speed(&self) -> f64 { self.vertical_speed }
    pub(crate) fn speed(&self) -> f64 { self.speed }
    pub(crate) fn mass(&self) -> f64 { self.mass }
    pub(crate) fn available_thrust(&self) -> f64 { self.available_thrust }
    pub(crate) fn specific_impulse(&self) -> f64 { self.specific_impulse }
    pub(crate) fn current_stage(&self) -> i32 { self.current_stage }
}
