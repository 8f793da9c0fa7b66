use strum_macros::{Display, EnumIter};

/// Phases of the flight, in the order they are flown.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MissionPhase {
    Countdown,
    Ascent,
    Coast,
    Circularization,
    Repoint,
    Complete,
}
