use crate::flight_control::{
    orbital::geostationary_altitude,
    pitch_program::PitchGate,
    staging::{StageEvent, StageEventTable, StagingRule},
};
use std::time::Duration;

/// Literal constants of the single mission this controller flies.
#[derive(Debug, Clone)]
pub struct MissionConfig {
    /// Gravitational parameter of the launch body in m³/s².
    pub body_mu: f64,
    /// Equatorial radius of the launch body in m.
    pub body_radius: f64,
    /// Sidereal rotation period of the launch body in s.
    pub body_rotation_period: f64,
    /// Surface gravity used to convert specific impulse into exhaust velocity.
    pub g0: f64,
    /// Minimum simulated time between two measure lines in s.
    pub log_span: f64,
    pub poll_interval: Duration,
    pub countdown: u32,
    pub countdown_step: Duration,
    pub stage_settle: Duration,
    pub final_hold: Duration,
    pub pitch_gates: Vec<PitchGate>,
    pub stage_events: StageEventTable,
    pub staging: StagingRule,
}

impl MissionConfig {
    const KERBIN_MU: f64 = 3.5316e12;
    const KERBIN_RADIUS: f64 = 600_000.0;
    const KERBIN_ROTATION_PERIOD: f64 = 21_600.0;

    /// Altitude of the geostationary orbit above the launch body.
    pub fn target_altitude(&self) -> f64 {
        geostationary_altitude(self.body_mu, self.body_radius, self.body_rotation_period)
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            body_mu: Self::KERBIN_MU,
            body_radius: Self::KERBIN_RADIUS,
            body_rotation_period: Self::KERBIN_ROTATION_PERIOD,
            g0: 9.82,
            log_span: 1.0,
            poll_interval: Duration::from_millis(10),
            countdown: 3,
            countdown_step: Duration::from_secs(1),
            stage_settle: Duration::from_secs(1),
            final_hold: Duration::from_secs(20),
            pitch_gates: vec![
                PitchGate::new(
                    10_000.0,
                    Some(20_000.0),
                    45.0,
                    "Reached 10 km, pitching over to 45 degrees above the horizon.",
                )
                .with_full_throttle(),
                PitchGate::new(
                    20_000.0,
                    Some(30_000.0),
                    30.0,
                    "Reached 20 km, pitching over to 30 degrees above the horizon.",
                ),
                PitchGate::new(
                    30_000.0,
                    None,
                    20.0,
                    "Reached 30 km, pitching over to 20 degrees above the horizon.",
                ),
            ],
            stage_events: StageEventTable::new(vec![
                StageEvent::new(&[9], "Poyekhali! Boosters away."),
                StageEvent::new(&[5, 6], "Payload fairing jettisoned."),
            ]),
            staging: StagingRule::new(1.0, 2),
        }
    }
}
