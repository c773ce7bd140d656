//! Financial accounts reports (deprecated reporting API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Accounts";

legacy_router!(
    /// Financial reports for accounts, served from the `gds` entry point.
    Accounts,
    EntryPoint::Gds
);

impl<'a, C: UpworkClient> Accounts<'a, C> {
    /// Report for an account owned by a freelancer.
    pub async fn get_owned(
        &self,
        _freelancer_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_owned")
    }

    /// Report for a specific account.
    pub async fn get_specific(
        &self,
        _entity_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_specific")
    }
}
