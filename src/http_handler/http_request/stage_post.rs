use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::stage::StageResponse;

/// Request type for the /vessel/control/stage endpoint, activating the next stage.
#[derive(Debug)]
pub(crate) struct ActivateStageRequest {}

impl NoBodyHTTPRequestType for ActivateStageRequest {}

impl HTTPRequestType for ActivateStageRequest {
    type Response = StageResponse;
    fn endpoint(&self) -> &'static str { "/vessel/control/stage" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
