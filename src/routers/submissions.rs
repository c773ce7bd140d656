//! Submissions router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Submissions";

legacy_router!(Submissions, EntryPoint::Api);

impl<'a, C: UpworkClient> Submissions<'a, C> {
    pub async fn request_approval(&self, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "request_approval")
    }

    pub async fn approve(&self, _submission_id: u64, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "approve")
    }

    pub async fn reject(&self, _submission_id: u64, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "reject")
    }
}
