use crate::flight_control::attitude::Attitude;

/// Control action requested by the ascent guidance for the current tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Log(String),
    SetAttitude(Attitude),
    SetThrottle(f64),
    ActivateNextStage,
    /// Waits for the vessel to settle after a staging event.
    Settle,
    EngageAutopilot,
}
