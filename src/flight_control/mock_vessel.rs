use super::{
    attitude::Attitude,
    telemetry::{LIQUID_FUEL, OXIDIZER, OrbitState, StageResources, Telemetry},
    vessel::{ManeuverNode, Vessel, VesselError},
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

/// Kinematic stand-in for a simulated vessel.
///
/// Simulated time advances by `dt` on every telemetry read. While the throttle is open the
/// vessel climbs and raises its apoapsis if pitched above the horizon, and raises its
/// periapsis if flying level. The stage below the current one drains at `drain_rate`.
#[derive(Debug)]
pub(crate) struct MockVessel {
    state: Mutex<MockState>,
}

#[derive(Debug, Clone)]
pub(crate) struct MockState {
    pub dt: f64,
    pub ut: f64,
    pub altitude: f64,
    pub apoapsis: f64,
    pub periapsis: f64,
    pub climb_rate: f64,
    pub apoapsis_rate: f64,
    pub periapsis_rate: f64,
    pub drain_rate: f64,
    pub mass: f64,
    pub thrust: f64,
    pub isp: f64,
    pub stage: i32,
    pub propellant: HashMap<i32, f64>,
    pub orbit: OrbitState,
    pub throttle: f64,
    pub attitude: Attitude,
    pub autopilot_engagements: u32,
    pub staged: Vec<i32>,
    pub nodes: Vec<ManeuverNode>,
    pub next_node_id: u64,
    pub telemetry_reads: u64,
}

impl MockVessel {
    pub(crate) fn new(state: MockState) -> Self { Self { state: Mutex::new(state) } }

    /// A four-stage vessel on the pad, with the ascent stage below the booster.
    pub(crate) fn on_pad() -> Self {
        let mut propellant = HashMap::new();
        propellant.insert(3, 40.0);
        propellant.insert(2, 10_000.0);
        Self::new(MockState {
            dt: 0.1,
            ut: 10_000.0,
            altitude: 80.0,
            apoapsis: 80.0,
            periapsis: -599_000.0,
            climb_rate: 1_000.0,
            apoapsis_rate: 20_000.0,
            periapsis_rate: 100_000.0,
            drain_rate: 10.0,
            mass: 30_000.0,
            thrust: 600_000.0,
            isp: 320.0,
            stage: 5,
            propellant,
            orbit: OrbitState {
                apoapsis_radius: 3_470_000.0,
                semi_major_axis: 2_100_000.0,
                time_to_apoapsis: 30.0,
                mu: 3.5316e12,
            },
            throttle: 0.0,
            attitude: Attitude::east(0.0),
            autopilot_engagements: 0,
            staged: Vec::new(),
            nodes: Vec::new(),
            next_node_id: 1,
            telemetry_reads: 0,
        })
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> MockState { self.lock().clone() }

    pub(crate) fn update(&self, f: impl FnOnce(&mut MockState)) { f(&mut self.lock()); }
}

#[async_trait]
impl Vessel for MockVessel {
    async fn telemetry(&self) -> Result<Telemetry, VesselError> {
        let mut s = self.lock();
        s.telemetry_reads += 1;
        s.ut += s.dt;
        if s.throttle > 0.0 {
            let step = s.dt * s.throttle;
            if s.attitude.pitch > 0.0 {
                s.altitude += s.climb_rate * step;
                s.apoapsis += s.apoapsis_rate * step;
            } else {
                s.periapsis += s.periapsis_rate * step;
            }
            let below = s.stage - 1;
            let drain = s.drain_rate * step;
            if let Some(left) = s.propellant.get_mut(&below) {
                *left = (*left - drain).max(0.0);
            }
        }
        Ok(Telemetry {
            ut: s.ut,
            altitude: s.altitude,
            apoapsis_altitude: s.apoapsis,
            periapsis_altitude: s.periapsis,
            horizontal_speed: 100.0,
            vertical_speed: 200.0,
            speed: 223.6,
            mass: s.mass,
            available_thrust: s.thrust,
            specific_impulse: s.isp,
            current_stage: s.stage,
        })
    }

    async fn orbit(&self) -> Result<OrbitState, VesselError> { Ok(self.lock().orbit) }

    async fn resources_in_decouple_stage(
        &self,
        stage: i32,
        _cumulative: bool,
    ) -> Result<StageResources, VesselError> {
        let left = self.lock().propellant.get(&stage).copied().unwrap_or(0.0);
        let mut amounts = HashMap::new();
        amounts.insert(LIQUID_FUEL.to_string(), left * 0.45);
        amounts.insert(OXIDIZER.to_string(), left * 0.55);
        Ok(StageResources::new(amounts))
    }

    async fn engage_autopilot(&self) -> Result<(), VesselError> {
        self.lock().autopilot_engagements += 1;
        Ok(())
    }

    async fn set_attitude(&self, attitude: Attitude) -> Result<(), VesselError> {
        self.lock().attitude = attitude;
        Ok(())
    }

    async fn set_throttle(&self, throttle: f64) -> Result<(), VesselError> {
        self.lock().throttle = throttle;
        Ok(())
    }

    async fn activate_next_stage(&self) -> Result<i32, VesselError> {
        let mut s = self.lock();
        let dropped = s.stage;
        s.staged.push(dropped);
        s.stage -= 1;
        Ok(s.stage)
    }

    async fn add_node(&self, ut: f64, prograde: f64) -> Result<ManeuverNode, VesselError> {
        let mut s = self.lock();
        let node = ManeuverNode::new(s.next_node_id, ut, prograde);
        s.next_node_id += 1;
        s.nodes.push(node);
        Ok(node)
    }

    async fn remove_node(&self, node: ManeuverNode) -> Result<(), VesselError> {
        let mut s = self.lock();
        let before = s.nodes.len();
        s.nodes.retain(|n| n.id() != node.id());
        if s.nodes.len() == before { Err(VesselError::NoSuchNode(node.id())) } else { Ok(()) }
    }
}
