use super::attitude::Attitude;

/// One altitude-gated pitch transition of the gravity turn.
///
/// A gate covers the open altitude band `(lower, upper)`; an unbounded gate has no `upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchGate {
    lower: f64,
    upper: Option<f64>,
    pitch: f64,
    full_throttle: bool,
    message: String,
}

impl PitchGate {
    pub fn new(lower: f64, upper: Option<f64>, pitch: f64, message: &str) -> Self {
        Self { lower, upper, pitch, full_throttle: false, message: message.to_string() }
    }

    /// Forces the throttle back to maximum when the gate fires.
    #[must_use]
    pub fn with_full_throttle(mut self) -> Self {
        self.full_throttle = true;
        self
    }

    pub fn contains(&self, altitude: f64) -> bool {
        altitude > self.lower && self.upper.is_none_or(|upper| altitude < upper)
    }

    pub fn attitude(&self) -> Attitude { Attitude::east(self.pitch) }
    pub fn full_throttle(&self) -> bool { self.full_throttle }
    pub fn message(&self) -> &str { &self.message }
}

/// The gravity turn as a set of one-shot pitch gates.
///
/// Each gate fires at most once over the lifetime of the program, the first time a
/// telemetry altitude falls into its band. Fired flags are never reset.
#[derive(Debug, Clone)]
pub struct PitchProgram {
    gates: Vec<PitchGate>,
    fired: Vec<bool>,
}

impl PitchProgram {
    pub fn new(gates: Vec<PitchGate>) -> Self {
        let fired = vec![false; gates.len()];
        Self { gates, fired }
    }

    /// Marks and returns every gate that fires at `altitude`, in table order.
    pub fn check(&mut self, altitude: f64) -> Vec<PitchGate> {
        let mut firing = Vec::new();
        for (gate, fired) in self.gates.iter().zip(self.fired.iter_mut()) {
            if !*fired && gate.contains(altitude) {
                *fired = true;
                firing.push(gate.clone());
            }
        }
        firing
    }

    #[cfg(test)]
    pub fn has_fired(&self, index: usize) -> bool { self.fired.get(index).copied().unwrap_or(false) }
}
