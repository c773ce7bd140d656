//! Contracts router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Contracts";

legacy_router!(
    /// Contract lifecycle.
    Contracts,
    EntryPoint::Api
);

impl<'a, C: UpworkClient> Contracts<'a, C> {
    pub async fn suspend_contract(
        &self,
        _reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "suspend_contract")
    }

    pub async fn restart_contract(
        &self,
        _reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "restart_contract")
    }

    pub async fn end_contract(
        &self,
        _reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "end_contract")
    }
}
