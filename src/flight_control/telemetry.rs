use crate::http_handler::http_response::{orbit::OrbitResponse, telemetry::TelemetryResponse};
use std::collections::HashMap;

/// Resource name of the liquid fuel pool.
pub const LIQUID_FUEL: &str = "LiquidFuel";
/// Resource name of the oxidizer pool.
pub const OXIDIZER: &str = "Oxidizer";

/// One poll of the vessel's live values.
///
/// All altitudes are measured above sea level, speeds in the body's rotating frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    /// Universal time in seconds.
    pub ut: f64,
    pub altitude: f64,
    pub apoapsis_altitude: f64,
    pub periapsis_altitude: f64,
    pub horizontal_speed: f64,
    pub vertical_speed: f64,
    pub speed: f64,
    /// Total vessel mass in kg.
    pub mass: f64,
    /// Thrust in N the active engines could deliver at full throttle.
    pub available_thrust: f64,
    /// Combined specific impulse of the active engines in s.
    pub specific_impulse: f64,
    pub current_stage: i32,
}

impl From<TelemetryResponse> for Telemetry {
    fn from(value: TelemetryResponse) -> Self {
        Self {
            ut: value.ut(),
            altitude: value.mean_altitude(),
            apoapsis_altitude: value.apoapsis_altitude(),
            periapsis_altitude: value.periapsis_altitude(),
            horizontal_speed: value.horizontal_speed(),
            vertical_speed: value.vertical_speed(),
            speed: value.speed(),
            mass: value.mass(),
            available_thrust: value.available_thrust(),
            specific_impulse: value.specific_impulse(),
            current_stage: value.current_stage(),
        }
    }
}

/// Orbital elements needed for planning the circularization burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Apoapsis radius measured from the body's center.
    pub apoapsis_radius: f64,
    pub semi_major_axis: f64,
    /// Seconds until the vessel passes the apoapsis.
    pub time_to_apoapsis: f64,
    /// Gravitational parameter of the orbited body.
    pub mu: f64,
}

impl From<OrbitResponse> for OrbitState {
    fn from(value: OrbitResponse) -> Self {
        Self {
            apoapsis_radius: value.apoapsis(),
            semi_major_axis: value.semi_major_axis(),
            time_to_apoapsis: value.time_to_apoapsis(),
            mu: value.gravitational_parameter(),
        }
    }
}

/// Resource amounts held by a single decouple stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageResources {
    amounts: HashMap<String, f64>,
}

impl StageResources {
    pub fn new(amounts: HashMap<String, f64>) -> Self { Self { amounts } }

    /// Amount of the named resource, zero if the stage holds none.
    pub fn amount(&self, name: &str) -> f64 { self.amounts.get(name).copied().unwrap_or(0.0) }

    /// Liquid fuel plus oxidizer left in the stage.
    pub fn propellant(&self) -> f64 { self.amount(LIQUID_FUEL) + self.amount(OXIDIZER) }
}

/// Propellant mass flow of the active engines.
///
/// Returns `None` while the engines deliver no thrust or report no specific impulse,
/// i.e. the engine is off or the stage ran dry.
pub fn fuel_flow_rate(thrust: f64, isp: f64, g0: f64) -> Option<f64> {
    if thrust > 0.0 && isp > 0.0 { Some(thrust / (isp * g0)) } else { None }
}
