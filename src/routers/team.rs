//! Team activities router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Team";

legacy_router!(
    /// Team activities (task codes).
    Team,
    EntryPoint::Api
);

impl<'a, C: UpworkClient> Team<'a, C> {
    pub async fn get_list(&self, _company: &str, _team: &str) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_list")
    }

    pub async fn get_specific_list(
        &self,
        _company: &str,
        _team: &str,
        _code: &str,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_specific_list")
    }

    pub async fn add_activity(
        &self,
        _company: &str,
        _team: &str,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "add_activity")
    }

    pub async fn update_activity(
        &self,
        _company: &str,
        _team: &str,
        _code: &str,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "update_activity")
    }

    /// `code` may be a semicolon separated list.
    pub async fn archive_activity(
        &self,
        _company: &str,
        _team: &str,
        _code: &str,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "archive_activity")
    }

    /// `code` may be a semicolon separated list.
    pub async fn unarchive_activity(
        &self,
        _company: &str,
        _team: &str,
        _code: &str,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "unarchive_activity")
    }

    pub async fn update_batch(&self, _company: &str, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "update_batch")
    }
}
