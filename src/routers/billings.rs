//! Billing reports (deprecated reporting API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Billings";

legacy_router!(
    /// Billing reports, served from the `gds` entry point.
    Billings,
    EntryPoint::Gds
);

impl<'a, C: UpworkClient> Billings<'a, C> {
    pub async fn get_by_freelancer(
        &self,
        _freelancer_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_by_freelancer")
    }

    pub async fn get_by_freelancers_team(
        &self,
        _team_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_by_freelancers_team")
    }

    pub async fn get_by_freelancers_company(
        &self,
        _company_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_by_freelancers_company")
    }

    pub async fn get_by_buyers_team(
        &self,
        _team_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_by_buyers_team")
    }

    pub async fn get_by_buyers_company(
        &self,
        _company_reference: u64,
        _params: Params,
    ) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_by_buyers_company")
    }
}
