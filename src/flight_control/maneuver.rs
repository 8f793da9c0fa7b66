use super::{
    orbital::{burn_duration, circularization_delta_v},
    telemetry::{OrbitState, Telemetry},
};

/// Timing and size of the burn that circularizes the orbit at apoapsis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularizationPlan {
    delta_v: f64,
    node_ut: f64,
    burn_time: f64,
}

impl CircularizationPlan {
    /// Plans the burn from a telemetry snapshot and the orbit read right after it.
    ///
    /// The burn is centered on the apoapsis passage. Returns `None` if the vessel has no
    /// thrust or specific impulse left to burn with.
    pub fn new(telemetry: &Telemetry, orbit: &OrbitState, g0: f64) -> Option<Self> {
        let delta_v = circularization_delta_v(orbit.mu, orbit.apoapsis_radius, orbit.semi_major_axis);
        let burn_time = burn_duration(
            delta_v,
            telemetry.available_thrust,
            telemetry.specific_impulse,
            telemetry.mass,
            g0,
        )?;
        Some(Self { delta_v, node_ut: telemetry.ut + orbit.time_to_apoapsis, burn_time })
    }

    pub fn delta_v(&self) -> f64 { self.delta_v }
    /// Universal time of the apoapsis passage, where the maneuver node is placed.
    pub fn node_ut(&self) -> f64 { self.node_ut }
    pub fn burn_time(&self) -> f64 { self.burn_time }
    pub fn burn_start_ut(&self) -> f64 { self.node_ut - self.burn_time / 2.0 }
}
