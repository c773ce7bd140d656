//! Metadata router (deprecated REST API).

use super::{deprecated, legacy_router};
use crate::client::UpworkClient;
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

const RESOURCE: &str = "Metadata";

legacy_router!(
    /// Categories, skills, regions and other reference data.
    Metadata,
    EntryPoint::Api
);

impl<'a, C: UpworkClient> Metadata<'a, C> {
    pub async fn get_categories_v2(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_categories_v2")
    }

    pub async fn get_skills(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_skills")
    }

    pub async fn get_skills_v2(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_skills_v2")
    }

    pub async fn get_specialties(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_specialties")
    }

    pub async fn get_regions(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_regions")
    }

    pub async fn get_tests(&self) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_tests")
    }

    /// Reasons for a given action type.
    pub async fn get_reasons(&self, _params: Params) -> UpworkResult<ApiResponse> {
        deprecated(RESOURCE, "get_reasons")
    }
}
