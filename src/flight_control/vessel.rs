use super::{
    attitude::Attitude,
    telemetry::{OrbitState, StageResources, Telemetry},
};
use crate::http_handler::http_response::response_common::ResponseError;
use async_trait::async_trait;
use strum_macros::Display;

/// A planned prograde velocity change registered with the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverNode {
    id: u64,
    ut: f64,
    prograde: f64,
}

impl ManeuverNode {
    pub fn new(id: u64, ut: f64, prograde: f64) -> Self { Self { id, ut, prograde } }
    pub fn id(&self) -> u64 { self.id }
    pub fn ut(&self) -> f64 { self.ut }
    pub fn prograde(&self) -> f64 { self.prograde }
}

#[derive(Debug, Display)]
pub enum VesselError {
    Bridge(ResponseError),
    NoSuchNode(u64),
}

impl std::error::Error for VesselError {}

impl From<ResponseError> for VesselError {
    fn from(value: ResponseError) -> Self { VesselError::Bridge(value) }
}

/// Telemetry and control surface of the vessel flown by the ascent controller.
///
/// Every call goes out to the running simulation; no value is cached on this side.
#[async_trait]
pub trait Vessel: Send + Sync {
    /// Reads a fresh telemetry snapshot.
    async fn telemetry(&self) -> Result<Telemetry, VesselError>;
    /// Reads the current orbit and the gravitational parameter of its body.
    async fn orbit(&self) -> Result<OrbitState, VesselError>;
    /// Resources in the parts decoupled when `stage` is activated.
    async fn resources_in_decouple_stage(
        &self,
        stage: i32,
        cumulative: bool,
    ) -> Result<StageResources, VesselError>;
    /// Engages the autopilot, which may have dropped out after a staging event.
    async fn engage_autopilot(&self) -> Result<(), VesselError>;
    /// Sets the autopilot's target pitch and heading.
    async fn set_attitude(&self, attitude: Attitude) -> Result<(), VesselError>;
    async fn set_throttle(&self, throttle: f64) -> Result<(), VesselError>;
    /// Activates the next stage and returns the new current stage index.
    async fn activate_next_stage(&self) -> Result<i32, VesselError>;
    async fn add_node(&self, ut: f64, prograde: f64) -> Result<ManeuverNode, VesselError>;
    async fn remove_node(&self, node: ManeuverNode) -> Result<(), VesselError>;
}
