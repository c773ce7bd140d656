//! Resource routers.
//!
//! Each router borrows the [`UpworkApi`](crate::UpworkApi) facade. `Graphql`
//! is the live API; the REST routers are kept for compatibility and every one
//! of their methods fails with [`UpworkError::Deprecated`] without sending a
//! request.

pub mod accounts;
pub mod billings;
pub mod companies;
pub mod contracts;
pub mod graphql;
pub mod jobs;
pub mod metadata;
pub mod milestones;
pub mod submissions;
pub mod team;

pub use accounts::Accounts;
pub use billings::Billings;
pub use companies::Companies;
pub use contracts::Contracts;
pub use graphql::Graphql;
pub use jobs::Jobs;
pub use metadata::Metadata;
pub use milestones::Milestones;
pub use submissions::Submissions;
pub use team::Team;

use crate::error::{DeprecatedEndpointError, UpworkError, UpworkResult};

pub(crate) fn deprecated<T>(resource: &'static str, operation: &'static str) -> UpworkResult<T> {
    Err(UpworkError::Deprecated(DeprecatedEndpointError::new(
        resource, operation,
    )))
}

/// Declares a legacy router holding the facade and its entry point.
macro_rules! legacy_router {
    ($(#[$meta:meta])* $name:ident, $entry_point:expr) => {
        $(#[$meta])*
        pub struct $name<'a, C: $crate::client::UpworkClient = $crate::client::Client> {
            api: &'a $crate::api::UpworkApi<C>,
        }

        impl<'a, C: $crate::client::UpworkClient> $name<'a, C> {
            pub const ENTRY_POINT: $crate::types::EntryPoint = $entry_point;

            pub fn new(api: &'a $crate::api::UpworkApi<C>) -> Self {
                Self { api }
            }

            pub fn api(&self) -> &'a $crate::api::UpworkApi<C> {
                self.api
            }
        }
    };
}

pub(crate) use legacy_router;
