use super::http_response::{autopilot, node, node_removed, resources, stage, telemetry, throttle, orbit};

pub mod autopilot_engage_put;
pub mod autopilot_target_put;
pub mod node_delete;
pub mod node_post;
pub mod orbit_get;
pub mod request_common;
pub mod resources_get;
pub mod stage_post;
pub mod telemetry_get;
pub mod throttle_put;
