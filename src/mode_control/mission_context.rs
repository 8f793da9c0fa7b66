use super::{mission_config::MissionConfig, mission_error::MissionError, phase::MissionPhase};
use crate::event;
use crate::flight_control::{
    telemetry::{Telemetry, fuel_flow_rate},
    vessel::{ManeuverNode, Vessel},
};
use crate::mission_log::{MeasureGate, MissionLog};
use std::{path::Path, sync::Arc, time::Duration};
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Everything the ascent controller owns for the lifetime of one mission.
pub struct MissionContext {
    vessel: Arc<dyn Vessel>,
    config: MissionConfig,
    journal: MissionLog,
    target_altitude: f64,
    phase: MissionPhase,
    node: Option<ManeuverNode>,
    measures: MeasureGate,
    ticker: Interval,
    c_tok: CancellationToken,
}

impl MissionContext {
    /// Creates the context and fixes the launch epoch to the current universal time.
    pub async fn new<P: AsRef<Path>>(
        vessel: Arc<dyn Vessel>,
        config: MissionConfig,
        log_path: P,
        c_tok: CancellationToken,
    ) -> Result<Self, MissionError> {
        let start_ut = vessel.telemetry().await?.ut;
        let journal = MissionLog::open(log_path, start_ut)?;
        let mut ticker = tokio::time::interval(config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Ok(Self {
            vessel,
            target_altitude: config.target_altitude(),
            measures: MeasureGate::new(config.log_span),
            config,
            journal,
            phase: MissionPhase::Countdown,
            node: None,
            ticker,
            c_tok,
        })
    }

    pub fn vessel(&self) -> &Arc<dyn Vessel> { &self.vessel }
    pub fn config(&self) -> &MissionConfig { &self.config }
    pub fn target_altitude(&self) -> f64 { self.target_altitude }
    pub fn phase(&self) -> MissionPhase { self.phase }
    #[cfg(test)]
    pub fn node(&self) -> Option<&ManeuverNode> { self.node.as_ref() }

    pub fn set_phase(&mut self, phase: MissionPhase) {
        event!("Mission phase {} -> {phase}", self.phase);
        self.phase = phase;
    }

    pub fn set_node(&mut self, node: ManeuverNode) { self.node = Some(node); }

    pub fn take_node(&mut self) -> Option<ManeuverNode> { self.node.take() }

    /// Writes `message` to the journal, stamped with the mission time at `ut`.
    pub fn journal_at(&mut self, ut: f64, message: &str) -> Result<(), MissionError> {
        Ok(self.journal.line(ut, message)?)
    }

    /// Writes `message` to the journal, stamped with the current mission time.
    pub async fn journal(&mut self, message: &str) -> Result<(), MissionError> {
        let ut = self.vessel.telemetry().await?.ut;
        self.journal_at(ut, message)
    }

    /// Logs a measure record if one is due. Ticks without thrust are skipped silently.
    pub fn log_measures(&mut self, telemetry: &Telemetry) -> Result<(), MissionError> {
        if !self.measures.due(telemetry.ut) {
            return Ok(());
        }
        let flow =
            fuel_flow_rate(telemetry.available_thrust, telemetry.specific_impulse, self.config.g0);
        if let Some(flow_rate) = flow {
            self.journal.measures(telemetry, flow_rate)?;
        }
        Ok(())
    }

    /// Restarts measure logging, so the next polled snapshot is logged right away.
    pub fn reset_measures(&mut self) { self.measures.reset(); }

    /// Waits for the next poll tick.
    pub async fn tick(&mut self) -> Result<(), MissionError> {
        tokio::select! {
            () = self.c_tok.cancelled() => Err(MissionError::Aborted),
            _ = self.ticker.tick() => Ok(()),
        }
    }

    /// Holds for `dt` unless the mission is cancelled meanwhile.
    pub async fn hold(&self, dt: Duration) -> Result<(), MissionError> {
        tokio::select! {
            () = self.c_tok.cancelled() => Err(MissionError::Aborted),
            () = tokio::time::sleep(dt) => Ok(()),
        }
    }
}
