use super::{
    ascent_guidance::AscentGuidance, command::Command, mission_context::MissionContext,
    mission_error::MissionError, phase::MissionPhase,
};
use crate::flight_control::{attitude::Attitude, maneuver::CircularizationPlan};
use crate::{info, log, warn};
use std::sync::Arc;

/// The ascent controller. Flies the phases of [`MissionPhase`] strictly in order.
pub struct Mission {
    ctx: MissionContext,
    guidance: AscentGuidance,
}

impl Mission {
    pub fn new(ctx: MissionContext) -> Self {
        let guidance = AscentGuidance::new(ctx.config());
        Self { ctx, guidance }
    }

    #[cfg(test)]
    pub fn ctx(&self) -> &MissionContext { &self.ctx }

    /// Flies the whole mission. On failure the throttle is cut before the error is returned.
    pub async fn run(&mut self) -> Result<(), MissionError> {
        match self.fly().await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Mission stopped in phase {}: {e:?}", self.ctx.phase());
                if let Err(cut_err) = self.ctx.vessel().set_throttle(0.0).await {
                    warn!("Could not cut throttle: {cut_err:?}");
                }
                Err(e)
            }
        }
    }

    async fn fly(&mut self) -> Result<(), MissionError> {
        self.countdown().await?;
        self.ascent().await?;
        let plan = self.plan_circularization().await?;
        self.coast(&plan).await?;
        self.circularize().await?;
        self.repoint().await
    }

    /// Points the vessel straight up, ignites the first stage and counts down to full throttle.
    pub async fn countdown(&mut self) -> Result<(), MissionError> {
        self.ctx.set_phase(MissionPhase::Countdown);
        self.ctx.journal("Launch in").await?;
        let vessel = Arc::clone(self.ctx.vessel());
        vessel.engage_autopilot().await?;
        vessel.set_attitude(Attitude::VERTICAL).await?;
        vessel.activate_next_stage().await?;
        for i in (1..=self.ctx.config().countdown).rev() {
            self.ctx.journal(&format!("{i}...")).await?;
            self.ctx.hold(self.ctx.config().countdown_step).await?;
        }
        vessel.set_throttle(1.0).await?;
        Ok(())
    }

    /// Burns until the apoapsis reaches the target altitude, dropping spent stages and
    /// following the pitch program on the way.
    pub async fn ascent(&mut self) -> Result<(), MissionError> {
        self.ctx.set_phase(MissionPhase::Ascent);
        self.ctx.reset_measures();
        let vessel = Arc::clone(self.ctx.vessel());
        loop {
            let telemetry = vessel.telemetry().await?;
            if telemetry.apoapsis_altitude >= self.ctx.target_altitude() {
                break;
            }
            self.ctx.log_measures(&telemetry)?;
            let resources =
                vessel.resources_in_decouple_stage(telemetry.current_stage - 1, false).await?;
            for cmd in self.guidance.step(&telemetry, resources.propellant()) {
                self.execute(cmd, telemetry.ut).await?;
            }
            self.ctx.tick().await?;
        }
        vessel.set_throttle(0.0).await?;
        self.ctx.journal("Target apoapsis reached, waiting for the maneuver point...").await
    }

    /// Registers the circularization node at the apoapsis and plans the burn around it.
    pub async fn plan_circularization(&mut self) -> Result<CircularizationPlan, MissionError> {
        let vessel = Arc::clone(self.ctx.vessel());
        let telemetry = vessel.telemetry().await?;
        let orbit = vessel.orbit().await?;
        let plan = CircularizationPlan::new(&telemetry, &orbit, self.ctx.config().g0)
            .ok_or(MissionError::NoThrust)?;
        let node = vessel.add_node(plan.node_ut(), plan.delta_v()).await?;
        log!(
            "Circularization node {}: {:.1} m/s at UT {:.1}, burning {:.1}s from UT {:.1}",
            node.id(),
            node.prograde(),
            node.ut(),
            plan.burn_time(),
            plan.burn_start_ut()
        );
        self.ctx.set_node(node);
        Ok(plan)
    }

    /// Idles until the burn start of `plan`.
    pub async fn coast(&mut self, plan: &CircularizationPlan) -> Result<(), MissionError> {
        self.ctx.set_phase(MissionPhase::Coast);
        self.ctx.reset_measures();
        let vessel = Arc::clone(self.ctx.vessel());
        loop {
            let telemetry = vessel.telemetry().await?;
            if telemetry.ut >= plan.burn_start_ut() {
                return Ok(());
            }
            self.ctx.log_measures(&telemetry)?;
            self.ctx.tick().await?;
        }
    }

    /// Burns prograde along the horizon until the orbit is circular at the target altitude.
    pub async fn circularize(&mut self) -> Result<(), MissionError> {
        self.ctx.set_phase(MissionPhase::Circularization);
        self.ctx.journal("Starting maneuver.").await?;
        self.ctx.reset_measures();
        let vessel = Arc::clone(self.ctx.vessel());
        vessel.set_attitude(Attitude::HORIZON).await?;
        vessel.set_throttle(1.0).await?;
        let threshold = 2.0 * self.ctx.target_altitude();
        loop {
            let telemetry = vessel.telemetry().await?;
            if telemetry.periapsis_altitude + telemetry.apoapsis_altitude >= threshold {
                break;
            }
            self.ctx.log_measures(&telemetry)?;
            self.ctx.tick().await?;
        }
        vessel.set_throttle(0.0).await?;
        if let Some(node) = self.ctx.take_node() {
            vessel.remove_node(node).await?;
        }
        self.ctx.journal("Maneuver complete.").await?;
        self.ctx.journal("Geostationary orbit reached!").await
    }

    /// Turns the satellite towards the body and holds the attitude.
    pub async fn repoint(&mut self) -> Result<(), MissionError> {
        self.ctx.set_phase(MissionPhase::Repoint);
        self.ctx.journal("Turning the satellite towards Kerbin...").await?;
        self.ctx.vessel().set_attitude(Attitude::NADIR).await?;
        self.ctx.hold(self.ctx.config().final_hold).await?;
        self.ctx.journal("Geostationary insertion mission complete.").await?;
        self.ctx.set_phase(MissionPhase::Complete);
        info!("Mission complete.");
        Ok(())
    }

    async fn execute(&mut self, cmd: Command, ut: f64) -> Result<(), MissionError> {
        let vessel = Arc::clone(self.ctx.vessel());
        match cmd {
            Command::Log(msg) => self.ctx.journal_at(ut, &msg)?,
            Command::SetAttitude(attitude) => vessel.set_attitude(attitude).await?,
            Command::SetThrottle(throttle) => vessel.set_throttle(throttle).await?,
            Command::ActivateNextStage => {
                vessel.activate_next_stage().await?;
            }
            Command::Settle => self.ctx.hold(self.ctx.config().stage_settle).await?,
            Command::EngageAutopilot => vessel.engage_autopilot().await?,
        }
        Ok(())
    }
}
