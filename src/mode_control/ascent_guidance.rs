use super::{command::Command, mission_config::MissionConfig};
use crate::flight_control::{
    pitch_program::PitchProgram,
    staging::{StageEventTable, StagingRule},
    telemetry::Telemetry,
};

/// Decision logic of the powered ascent, free of any I/O.
///
/// Each call to [`AscentGuidance::step`] maps one telemetry snapshot and the propellant left
/// in the stage about to be dropped to the commands for this tick.
#[derive(Debug, Clone)]
pub struct AscentGuidance {
    pitch_program: PitchProgram,
    staging: StagingRule,
    stage_events: StageEventTable,
}

impl AscentGuidance {
    pub fn new(config: &MissionConfig) -> Self {
        Self {
            pitch_program: PitchProgram::new(config.pitch_gates.clone()),
            staging: config.staging,
            stage_events: config.stage_events.clone(),
        }
    }

    pub fn step(&mut self, telemetry: &Telemetry, stage_propellant: f64) -> Vec<Command> {
        let mut cmds = Vec::new();
        let stage = telemetry.current_stage;
        if self.staging.should_separate(stage_propellant, stage) {
            cmds.push(Command::Log(self.stage_events.message_for(stage)));
            cmds.push(Command::ActivateNextStage);
            cmds.push(Command::Settle);
            cmds.push(Command::EngageAutopilot);
        }
        for gate in self.pitch_program.check(telemetry.altitude) {
            cmds.push(Command::Log(gate.message().to_string()));
            if gate.full_throttle() {
                cmds.push(Command::SetThrottle(1.0));
            }
            cmds.push(Command::SetAttitude(gate.attitude()));
        }
        cmds
    }

    #[cfg(test)]
    pub fn pitch_program(&self) -> &PitchProgram { &self.pitch_program }
}
