use crate::flight_control::telemetry::Telemetry;
use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// Formats whole elapsed seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_elapsed(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn round2(value: f64) -> f64 { (value * 100.0).round() / 100.0 }

/// Mission journal appending time-stamped lines to a log file and mirroring them to stdout.
///
/// Every line is stamped with the mission time elapsed since `start_ut`, rounded up to the
/// next whole second.
#[derive(Debug)]
pub struct MissionLog {
    file: File,
    start_ut: f64,
}

impl MissionLog {
    /// Opens (or creates) `path` in append mode.
    pub fn open<P: AsRef<Path>>(path: P, start_ut: f64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, start_ut })
    }

    /// Whole seconds since launch epoch at `ut`, never negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn elapsed_secs(&self, ut: f64) -> u64 { (ut - self.start_ut).ceil().max(0.0) as u64 }

    pub fn line(&mut self, ut: f64, message: &str) -> io::Result<()> {
        let entry = format!("[{}] {message}", format_elapsed(self.elapsed_secs(ut)));
        writeln!(self.file, "{entry}")?;
        self.file.flush()?;
        println!("{entry}");
        Ok(())
    }

    /// Logs one [`MeasureRecord`] built from `telemetry`.
    pub fn measures(&mut self, telemetry: &Telemetry, fuel_flow: f64) -> io::Result<()> {
        let record = MeasureRecord::new(self.elapsed_secs(telemetry.ut), telemetry, fuel_flow);
        let body = serde_json::to_string(&record).map_err(io::Error::other)?;
        self.line(telemetry.ut, &body)
    }
}

/// Structured flight measures written to the journal once per log span.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MeasureRecord {
    time_s: u64,
    mass_kg: f64,
    altitude_m: f64,
    fuel_flow_kg_s: f64,
    speed_m_s: f64,
    vertical_speed_m_s: f64,
    horizontal_speed_m_s: f64,
}

impl MeasureRecord {
    pub fn new(time_s: u64, telemetry: &Telemetry, fuel_flow: f64) -> Self {
        Self {
            time_s,
            mass_kg: round2(telemetry.mass),
            altitude_m: round2(telemetry.altitude),
            fuel_flow_kg_s: round2(fuel_flow),
            speed_m_s: round2(telemetry.speed),
            vertical_speed_m_s: round2(telemetry.vertical_speed),
            horizontal_speed_m_s: round2(telemetry.horizontal_speed),
        }
    }
}

/// Rate limiter for measure lines, counting in simulated seconds.
#[derive(Debug, Clone, Copy)]
pub struct MeasureGate {
    span: f64,
    last: f64,
}

impl MeasureGate {
    pub fn new(span: f64) -> Self { Self { span, last: 0.0 } }

    /// Whether a measure line is due at `ut`. Consumes the slot even if the caller ends up
    /// skipping the line.
    pub fn due(&mut self, ut: f64) -> bool {
        if ut - self.last > self.span {
            self.last = ut;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) { self.last = 0.0; }
}
