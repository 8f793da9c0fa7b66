pub mod attitude;
pub mod bridge_vessel;
pub mod maneuver;
#[cfg(test)]
pub(crate) mod mock_vessel;
pub mod orbital;
pub mod pitch_program;
pub mod staging;
pub mod telemetry;
#[cfg(test)]
mod tests;
pub mod vessel;
