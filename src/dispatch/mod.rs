//! Request Dispatch
//!
//! Entry-point routing and request encoding for the resource APIs.

pub mod dispatcher;

pub use dispatcher::{entry_point_base, RequestDispatcher, HTTP_METHOD_FIELD};
