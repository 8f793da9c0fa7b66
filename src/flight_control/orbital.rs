//! Closed-form orbital mechanics used by the ascent controller.

use std::f64::consts::PI;

/// Altitude above the surface at which the orbital period equals the body's rotation period.
///
/// # Arguments
/// - `mu`: Gravitational parameter of the body in m³/s².
/// - `radius`: Equatorial radius of the body in m.
/// - `rotation_period`: Sidereal rotation period in s.
pub fn geostationary_altitude(mu: f64, radius: f64, rotation_period: f64) -> f64 {
    (mu * rotation_period.powi(2) / (4.0 * PI.powi(2))).cbrt() - radius
}

/// Speed of a circular orbit with radius `r`.
pub fn circular_speed(mu: f64, r: f64) -> f64 { (mu / r).sqrt() }

/// Orbital speed at radius `r` on an orbit with semi-major axis `a` (vis-viva equation).
pub fn vis_viva_speed(mu: f64, r: f64, a: f64) -> f64 { (mu * (2.0 / r - 1.0 / a)).sqrt() }

/// Prograde delta-v that turns the current orbit circular at its apoapsis.
pub fn circularization_delta_v(mu: f64, apoapsis_radius: f64, semi_major_axis: f64) -> f64 {
    circular_speed(mu, apoapsis_radius) - vis_viva_speed(mu, apoapsis_radius, semi_major_axis)
}

/// Burn time for `delta_v` at constant thrust, derived from the rocket equation.
///
/// # Arguments
/// - `delta_v`: Velocity change in m/s.
/// - `thrust`: Available thrust in N.
/// - `isp`: Specific impulse in s.
/// - `mass`: Vessel mass at ignition in kg.
/// - `g0`: Standard gravity used to convert `isp` to exhaust velocity.
///
/// # Returns
/// `None` if there is no thrust or specific impulse to burn with.
pub fn burn_duration(delta_v: f64, thrust: f64, isp: f64, mass: f64, g0: f64) -> Option<f64> {
    if thrust <= 0.0 || isp <= 0.0 {
        return None;
    }
    let exhaust_vel = isp * g0;
    let final_mass = mass / (delta_v / exhaust_vel).exp();
    let flow_rate = thrust / exhaust_vel;
    Some((mass - final_mass) / flow_rate)
}
