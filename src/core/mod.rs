//! Core Infrastructure
//!
//! HTTP transport and wire encoding shared by the token flows and the
//! request dispatcher.

pub mod encoding;
pub mod transport;

pub use encoding::{
    append_query, basic_auth_header, form_encode, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport,
    ReqwestHttpTransport,
};
