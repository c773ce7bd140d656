//! Encoding helpers for query strings, form bodies and client authentication.

use base64::Engine;
use url::form_urlencoded;
use url::Url;

use crate::error::{TransportError, UpworkError};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Encode pairs as `application/x-www-form-urlencoded`.
pub fn form_encode<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Append pairs to the query string of `url`.
pub fn append_query<K, V>(url: &str, pairs: &[(K, V)]) -> Result<String, UpworkError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parsed = Url::parse(url).map_err(|e| {
        UpworkError::Transport(TransportError::InvalidRequest {
            message: format!("Invalid URL {}: {}", url, e),
        })
    })?;

    if !pairs.is_empty() {
        let mut query = parsed.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key.as_ref(), value.as_ref());
        }
    }

    Ok(parsed.into())
}

/// `Basic` authorization header value for client authentication.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}
