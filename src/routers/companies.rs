//! Companies router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint};

const RESOURCE: &str = "Companies";

legacy_router!(Companies, EntryPoint::Api);

impl<'a, C: UpworkClient> Companies<'a, C> {
    pub async fn get_list(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_list")
    }

    pub async fn get_specific(&self, _company_reference: u64) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_specific")
    }

    pub async fn get_teams(&self, _company_reference: u64) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_teams")
    }

    pub async fn get_users(&self, _company_reference: u64) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_users")
    }
}
