//! Mission sequencing: the mission context, the pure ascent guidance and the phase
//! functions that turn both into vessel commands.

mod ascent_guidance;
mod command;
mod mission;
mod mission_config;
mod mission_context;
mod mission_error;
mod phase;

pub(crate) use mission::Mission;
pub(crate) use mission_config::MissionConfig;
pub(crate) use mission_context::MissionContext;
pub(crate) use mission_error::MissionError;
pub(crate) use phase::MissionPhase;
