use super::attitude::Attitude;
use super::maneuver::CircularizationPlan;
use super::orbital::{
    burn_duration, circular_speed, circularization_delta_v, geostationary_altitude, vis_viva_speed,
};
use super::pitch_program::{PitchGate, PitchProgram};
use super::staging::{StageEvent, StageEventTable, StagingRule};
use super::telemetry::{LIQUID_FUEL, OXIDIZER, OrbitState, StageResources, Telemetry, fuel_flow_rate};
use rand::Rng;
use std::collections::HashMap;

const G0: f64 = 9.82;
const KERBIN_MU: f64 = 3.5316e12;

fn kerbin_gates() -> Vec<PitchGate> {
    vec![
        PitchGate::new(10_000.0, Some(20_000.0), 45.0, "10 km").with_full_throttle(),
        PitchGate::new(20_000.0, Some(30_000.0), 30.0, "20 km"),
        PitchGate::new(30_000.0, None, 20.0, "30 km"),
    ]
}

fn telemetry(ut: f64, thrust: f64, isp: f64, mass: f64) -> Telemetry {
    Telemetry {
        ut,
        altitude: 75_000.0,
        apoapsis_altitude: 2_870_000.0,
        periapsis_altitude: 70_000.0,
        horizontal_speed: 2_200.0,
        vertical_speed: 15.0,
        speed: 2_200.05,
        mass,
        available_thrust: thrust,
        specific_impulse: isp,
        current_stage: 2,
    }
}

#[test]
fn test_geostationary_altitude_kerbin() {
    let alt = geostationary_altitude(KERBIN_MU, 600_000.0, 21_600.0);
    assert!((alt - 2_868_750.725).abs() < 0.01, "got {alt}");
}

#[test]
fn test_geostationary_period_matches_rotation() {
    let alt = geostationary_altitude(KERBIN_MU, 600_000.0, 21_600.0);
    let r: f64 = 600_000.0 + alt;
    let period = 2.0 * std::f64::consts::PI * (r.powi(3) / KERBIN_MU).sqrt();
    assert!((period - 21_600.0).abs() < 1e-6);
}

#[test]
fn test_vis_viva_on_circular_orbit() {
    let r = 700_000.0;
    assert!((vis_viva_speed(KERBIN_MU, r, r) - circular_speed(KERBIN_MU, r)).abs() < 1e-9);
    assert!(circularization_delta_v(KERBIN_MU, r, r).abs() < 1e-9);
}

#[test]
fn test_circularization_delta_v_is_prograde() {
    let r_ap = 600_000.0 + 2_868_750.0;
    let r_pe = 600_000.0 + 70_000.0;
    let a = (r_ap + r_pe) / 2.0;
    let dv = circularization_delta_v(KERBIN_MU, r_ap, a);
    let expected = (KERBIN_MU / r_ap).sqrt() - (KERBIN_MU * (2.0 / r_ap - 1.0 / a)).sqrt();
    assert!(dv > 0.0);
    assert!((dv - expected).abs() < 1e-9);
}

#[test]
fn test_burn_duration() {
    let (dv, thrust, isp, mass) = (500.0, 60_000.0, 345.0, 5_000.0);
    let ve = isp * G0;
    let m1 = mass / (dv / ve).exp();
    let expected = (mass - m1) / (thrust / ve);
    let t = burn_duration(dv, thrust, isp, mass, G0).unwrap();
    assert!((t - expected).abs() < 1e-9);
    assert!(t < mass * dv / thrust);
    assert_eq!(burn_duration(dv, 0.0, isp, mass, G0), None);
    assert_eq!(burn_duration(dv, thrust, 0.0, mass, G0), None);
}

#[test]
fn test_fuel_flow_rate() {
    assert_eq!(fuel_flow_rate(0.0, 320.0, G0), None);
    assert_eq!(fuel_flow_rate(215_000.0, 0.0, G0), None);
    assert_eq!(fuel_flow_rate(-1.0, 320.0, G0), None);
    let flow = fuel_flow_rate(215_000.0, 320.0, G0).unwrap();
    assert!((flow - 215_000.0 / (320.0 * 9.82)).abs() < 1e-12);
}

#[test]
fn test_stage_resources_propellant() {
    let mut amounts = HashMap::new();
    amounts.insert(LIQUID_FUEL.to_string(), 0.4);
    amounts.insert(OXIDIZER.to_string(), 0.6);
    amounts.insert("SolidFuel".to_string(), 800.0);
    let res = StageResources::new(amounts);
    assert!((res.propellant() - 1.0).abs() < 1e-12);
    assert_eq!(res.amount("MonoPropellant"), 0.0);
    assert_eq!(StageResources::default().propellant(), 0.0);
}

#[test]
fn test_pitch_gate_bounds_are_strict() {
    let mut program = PitchProgram::new(kerbin_gates());
    assert!(program.check(10_000.0).is_empty());
    assert!(!program.has_fired(0));
    let fired = program.check(10_001.0);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].attitude(), Attitude::east(45.0));
    assert!(fired[0].full_throttle());
    assert!(program.has_fired(0));
    assert!(program.check(20_000.0).is_empty());
    assert!(program.check(30_000.0).is_empty());
    assert_eq!(program.check(30_000.5)[0].attitude(), Attitude::east(20.0));
}

#[test]
fn test_pitch_gate_does_not_refire() {
    let mut program = PitchProgram::new(kerbin_gates());
    assert_eq!(program.check(10_001.0).len(), 1);
    assert!(program.check(9_999.0).is_empty());
    assert!(program.check(10_001.0).is_empty());
    assert!(program.check(15_000.0).is_empty());
    assert!(program.has_fired(0));
}

#[test]
fn test_pitch_program_ignores_sensor_noise() {
    let mut rng = rand::rng();
    let mut program = PitchProgram::new(kerbin_gates());
    let mut fired = Vec::new();
    for step in 0..4_000 {
        let altitude = f64::from(step) * 10.0 + rng.random_range(-250.0..250.0);
        fired.extend(program.check(altitude).into_iter().map(|g| g.message().to_string()));
    }
    assert_eq!(fired, vec!["10 km", "20 km", "30 km"]);
    assert!((0..3).all(|i| program.has_fired(i)));
}

#[test]
fn test_pitch_program_fires_only_containing_band() {
    // a sparse poll can jump over a whole band; only gates containing the altitude fire
    let mut program = PitchProgram::new(kerbin_gates());
    let fired = program.check(35_000.0);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].message(), "30 km");
    assert!(!program.has_fired(0));
    assert!(!program.has_fired(1));
}

#[test]
fn test_staging_rule_boundaries() {
    let rule = StagingRule::new(1.0, 2);
    assert!(rule.should_separate(1.0, 3));
    assert!(rule.should_separate(0.0, 9));
    assert!(!rule.should_separate(1.000_1, 3));
    assert!(!rule.should_separate(0.0, 2));
    assert!(!rule.should_separate(0.0, 1));
    assert!(!rule.should_separate(0.0, 0));
}

#[test]
fn test_stage_event_messages() {
    let table = StageEventTable::new(vec![
        StageEvent::new(&[9], "Liftoff from stage {stage}!"),
        StageEvent::new(&[5, 6], "Fairing jettisoned."),
    ]);
    assert_eq!(table.message_for(9), "Liftoff from stage 9!");
    assert_eq!(table.message_for(6), "Fairing jettisoned.");
    assert_eq!(table.message_for(5), "Fairing jettisoned.");
    assert_eq!(table.message_for(7), "Stage 7 separated.");
    assert_eq!(StageEventTable::new(Vec::new()).message_for(3), "Stage 3 separated.");
}

#[test]
fn test_circularization_plan_centers_burn_on_apoapsis() {
    let orbit = OrbitState {
        apoapsis_radius: 3_468_750.0,
        semi_major_axis: 2_069_375.0,
        time_to_apoapsis: 1_200.0,
        mu: KERBIN_MU,
    };
    let tel = telemetry(50_000.0, 60_000.0, 345.0, 5_000.0);
    let plan = CircularizationPlan::new(&tel, &orbit, G0).unwrap();
    let dv = circularization_delta_v(KERBIN_MU, orbit.apoapsis_radius, orbit.semi_major_axis);
    assert!((plan.delta_v() - dv).abs() < 1e-9);
    assert!((plan.node_ut() - 51_200.0).abs() < 1e-9);
    let burn = burn_duration(dv, 60_000.0, 345.0, 5_000.0, G0).unwrap();
    assert!((plan.burn_time() - burn).abs() < 1e-9);
    assert!((plan.burn_start_ut() - (51_200.0 - burn / 2.0)).abs() < 1e-9);
}

#[test]
fn test_circularization_plan_without_thrust() {
    let orbit = OrbitState {
        apoapsis_radius: 3_468_750.0,
        semi_major_axis: 2_069_375.0,
        time_to_apoapsis: 1_200.0,
        mu: KERBIN_MU,
    };
    assert!(CircularizationPlan::new(&telemetry(0.0, 0.0, 345.0, 5_000.0), &orbit, G0).is_none());
}
