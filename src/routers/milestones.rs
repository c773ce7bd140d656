//! Milestones router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Milestones";

legacy_router!(
    /// Fixed-price contract milestones.
    Milestones,
    EntryPoint::Api
);

impl<'a, C: UpworkClient> Milestones<'a, C> {
    /// Active milestone of a contract.
    pub async fn get_active_milestone(&self, _contract_id: &str) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_active_milestone")
    }

    /// Submissions made against a milestone.
    pub async fn get_submissions(&self, _milestone_id: &str) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_submissions")
    }

    pub async fn create(&self, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "create")
    }

    pub async fn edit(&self, _milestone_id: u64, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "edit")
    }

    pub async fn activate(&self, _milestone_id: u64, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "activate")
    }

    pub async fn approve(&self, _milestone_id: u64, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "approve")
    }

    pub async fn delete(&self, _milestone_id: u64) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "delete")
    }
}
