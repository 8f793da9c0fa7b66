use crate::flight_control::vessel::VesselError;
use crate::http_handler::http_response::response_common::ResponseError;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum MissionError {
    Vessel(VesselError),
    Log(std::io::Error),
    /// The vessel has no thrust or specific impulse left to plan a burn with.
    NoThrust,
    /// The mission was cancelled before completion.
    Aborted,
}

impl std::error::Error for MissionError {}

impl From<VesselError> for MissionError {
    fn from(value: VesselError) -> Self { MissionError::Vessel(value) }
}

impl From<ResponseError> for MissionError {
    fn from(value: ResponseError) -> Self { MissionError::Vessel(VesselError::Bridge(value)) }
}

impl From<std::io::Error> for MissionError {
    fn from(value: std::io::Error) -> Self { MissionError::Log(value) }
}
