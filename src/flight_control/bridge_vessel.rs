use super::{
    attitude::Attitude,
    telemetry::{OrbitState, StageResources, Telemetry},
    vessel::{ManeuverNode, Vessel, VesselError},
};
use crate::event;
use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{
        autopilot_engage_put::AutopilotEngageRequest,
        autopilot_target_put::AutopilotTargetRequest,
        node_delete::RemoveNodeRequest,
        node_post::AddNodeRequest,
        orbit_get::OrbitRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
        resources_get::ResourcesRequest,
        stage_post::ActivateStageRequest,
        telemetry_get::TelemetryRequest,
        throttle_put::ThrottleRequest,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

/// `Vessel` backed by the HTTP bridge of a running simulation host.
#[derive(Debug)]
pub struct BridgeVessel {
    client: Arc<HTTPClient>,
}

impl BridgeVessel {
    pub(crate) fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl Vessel for BridgeVessel {
    async fn telemetry(&self) -> Result<Telemetry, VesselError> {
        let resp = TelemetryRequest {}.send_request(&self.client).await?;
        Ok(Telemetry::from(resp))
    }

    async fn orbit(&self) -> Result<OrbitState, VesselError> {
        let resp = OrbitRequest {}.send_request(&self.client).await?;
        Ok(OrbitState::from(resp))
    }

    async fn resources_in_decouple_stage(
        &self,
        stage: i32,
        cumulative: bool,
    ) -> Result<StageResources, VesselError> {
        let resp = ResourcesRequest { stage, cumulative }.send_request(&self.client).await?;
        Ok(StageResources::new(resp.into_amounts()))
    }

    async fn engage_autopilot(&self) -> Result<(), VesselError> {
        let resp = AutopilotEngageRequest {}.send_request(&self.client).await?;
        event!("Autopilot engaged: {}", resp.is_engaged());
        Ok(())
    }

    async fn set_attitude(&self, attitude: Attitude) -> Result<(), VesselError> {
        let req = AutopilotTargetRequest { pitch: attitude.pitch, heading: attitude.heading };
        let resp = req.send_request(&self.client).await?;
        event!(
            "Autopilot target set to pitch {}°, heading {}°",
            resp.target_pitch(),
            resp.target_heading()
        );
        Ok(())
    }

    async fn set_throttle(&self, throttle: f64) -> Result<(), VesselError> {
        let resp = ThrottleRequest { throttle }.send_request(&self.client).await?;
        event!("Throttle set to {}", resp.throttle());
        Ok(())
    }

    async fn activate_next_stage(&self) -> Result<i32, VesselError> {
        let resp = ActivateStageRequest {}.send_request(&self.client).await?;
        event!("Stage activated, now in stage {}", resp.current_stage());
        Ok(resp.current_stage())
    }

    async fn add_node(&self, ut: f64, prograde: f64) -> Result<ManeuverNode, VesselError> {
        let resp = AddNodeRequest { ut, prograde }.send_request(&self.client).await?;
        Ok(ManeuverNode::new(resp.id(), resp.ut(), resp.prograde()))
    }

    async fn remove_node(&self, node: ManeuverNode) -> Result<(), VesselError> {
        let resp = RemoveNodeRequest { node_id: node.id() }.send_request(&self.client).await?;
        if resp.removed() { Ok(()) } else { Err(VesselError::NoSuchNode(node.id())) }
    }
}
