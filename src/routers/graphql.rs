//! GraphQL router.

use crate::api::UpworkApi;
use crate::client::{Client, UpworkClient};
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params};

/// GraphQL router.
///
/// Switches the facade's client to the GraphQL entry point when created; the
/// selection stays in effect for later calls through the same facade.
pub struct Graphql<'a, C: UpworkClient = Client> {
    api: &'a UpworkApi<C>,
}

impl<'a, C: UpworkClient> Graphql<'a, C> {
    pub const ENTRY_POINT: EntryPoint = EntryPoint::Graphql;

    pub fn new(api: &'a UpworkApi<C>) -> Self {
        api.set_entry_point(Self::ENTRY_POINT);
        Self { api }
    }

    /// Execute a GraphQL request. `params` carries `query` and optionally
    /// `variables`.
    pub async fn execute(&self, params: Params) -> UpworkResult<ApiResponse> {
        self.api.execute(params).await
    }
}
