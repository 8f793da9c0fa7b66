pub(crate) mod response_common;
pub mod autopilot;
pub mod node;
pub mod node_removed;
pub mod orbit;
pub mod resources;
pub mod stage;
pub mod telemetry;
pub mod throttle;
