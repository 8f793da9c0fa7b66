#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod flight_control;
mod http_handler;
mod logger;
mod mission_log;
mod mode_control;

use crate::flight_control::{bridge_vessel::BridgeVessel, vessel::Vessel};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::mode_control::{Mission, MissionConfig, MissionContext, MissionError, MissionPhase};
use itertools::Itertools;
use std::{env, process::ExitCode, sync::Arc};
use strum::IntoEnumIterator;
use tokio_util::sync::CancellationToken;

const DEF_BRIDGE_URL: &str = "http://localhost:50080";
const DEF_LOG_FILE: &str = "logs.txt";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let base_url_var = env::var("KSP_BRIDGE_URL");
    let base_url = base_url_var.as_ref().map_or(DEF_BRIDGE_URL, |v| v.as_str());
    let log_file_var = env::var("ASCENT_LOG_FILE");
    let log_file = log_file_var.as_ref().map_or(DEF_LOG_FILE, |v| v.as_str());

    let c_tok = CancellationToken::new();
    let c_tok_clone = c_tok.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, aborting mission!");
            c_tok_clone.cancel();
        }
    });

    match run(base_url, log_file, c_tok).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Mission failed: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str, log_file: &str, c_tok: CancellationToken) -> Result<(), MissionError> {
    let client = Arc::new(HTTPClient::new(url).map_err(ResponseError::from)?);
    let vessel: Arc<dyn Vessel> = Arc::new(BridgeVessel::new(client));
    let config = MissionConfig::default();
    info!("Connected to simulation bridge at {url}.");
    info!("Kerbin geostationary orbit: {:.2} m.", config.target_altitude());
    info!("Flight plan: {}", MissionPhase::iter().join(" -> "));

    let ctx = MissionContext::new(vessel, config, log_file, c_tok).await?;
    Mission::new(ctx).run().await
}
