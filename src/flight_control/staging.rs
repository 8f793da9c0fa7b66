/// Log message attached to the separation of one or more stage indices.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEvent {
    stages: Vec<i32>,
    message: String,
}

impl StageEvent {
    /// `message` may contain `{stage}`, which is replaced by the separated stage index.
    pub fn new(stages: &[i32], message: &str) -> Self {
        Self { stages: stages.to_vec(), message: message.to_string() }
    }

    fn matches(&self, stage: i32) -> bool { self.stages.contains(&stage) }
}

/// Per-vehicle table mapping stage indices to separation messages.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEventTable {
    events: Vec<StageEvent>,
    fallback: String,
}

impl StageEventTable {
    const DEF_FALLBACK: &'static str = "Stage {stage} separated.";

    pub fn new(events: Vec<StageEvent>) -> Self {
        Self { events, fallback: Self::DEF_FALLBACK.to_string() }
    }

    /// Message to log when `stage` is separated. The first matching event wins.
    pub fn message_for(&self, stage: i32) -> String {
        let template = self
            .events
            .iter()
            .find(|ev| ev.matches(stage))
            .map_or(self.fallback.as_str(), |ev| ev.message.as_str());
        template.replace("{stage}", &stage.to_string())
    }
}

/// Decides when a spent stage is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagingRule {
    /// Remaining propellant at or below which the stage counts as spent.
    fuel_threshold: f64,
    /// Stages at or below this index are never separated by the rule.
    min_stage: i32,
}

impl StagingRule {
    pub fn new(fuel_threshold: f64, min_stage: i32) -> Self { Self { fuel_threshold, min_stage } }

    pub fn should_separate(&self, propellant: f64, current_stage: i32) -> bool {
        propellant <= self.fuel_threshold && current_stage > self.min_stage
    }
}
