//! Jobs router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Jobs";

legacy_router!(
    /// Hiring jobs.
    Jobs,
    EntryPoint::Api
);

impl<'a, C: UpworkClient> Jobs<'a, C> {
    /// List jobs.
    pub async fn get_list(&self, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_list")
    }

    /// Get a specific job by key.
    pub async fn get_specific(&self, _key: &str) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_specific")
    }

    pub async fn post_job(&self, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "post_job")
    }

    pub async fn edit_job(&self, _key: &str, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "edit_job")
    }

    pub async fn delete_job(&self, _key: &str, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "delete_job")
    }
}
