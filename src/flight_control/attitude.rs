/// Autopilot target orientation, both angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    /// Pitch above the horizon, 90 points straight up, -90 straight down.
    pub pitch: f64,
    /// Compass heading, 90 is due east.
    pub heading: f64,
}

impl Attitude {
    /// Straight up, used on the pad.
    pub const VERTICAL: Attitude = Attitude::east(90.0);
    /// Level with the horizon heading east, used for the circularization burn.
    pub const HORIZON: Attitude = Attitude::east(0.0);
    /// Facing down towards the body.
    pub const NADIR: Attitude = Attitude::east(-90.0);

    /// Attitude with the given pitch on an eastward heading.
    pub const fn east(pitch: f64) -> Self { Self { pitch, heading: 90.0 } }
}

impl std::fmt::Display for Attitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pitch {}°, heading {}°", self.pitch, self.heading)
    }
}
