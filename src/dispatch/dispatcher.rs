//! Request Dispatcher
//!
//! Turns `(method, path, params)` into a signed HTTP request against the
//! selected entry point and parses the response.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{
    append_query, form_encode, HttpMethod, HttpRequest, HttpTransport, FORM_CONTENT_TYPE,
    JSON_CONTENT_TYPE,
};
use crate::error::{TransportError, UpworkError, UpworkResult};
use crate::telemetry::{Logger, UpworkLogContext};
use crate::types::{ApiResponse, EntryPoint, Params, UpworkConfig, TENANT_ID_HEADER, USER_AGENT};

/// Field carrying the tunneled verb for PUT and DELETE.
pub const HTTP_METHOD_FIELD: &str = "http_method";

/// Suffix appended to paths on the `api` entry point.
const DATA_FORMAT_SUFFIX: &str = ".json";

/// Base URL for an entry point.
///
/// `graphql` maps to the dedicated GraphQL URL. Other entry points replace the
/// trailing `/api/` segment of the default base with `/<entry_point>/`.
pub fn entry_point_base(default_base: &str, gql_url: &str, entry_point: EntryPoint) -> String {
    match entry_point {
        EntryPoint::Graphql => gql_url.to_string(),
        EntryPoint::Api | EntryPoint::Gds => match default_base.rfind("/api/") {
            Some(idx) => format!(
                "{}/{}/{}",
                &default_base[..idx],
                entry_point.as_str(),
                &default_base[idx + "/api/".len()..]
            ),
            None => default_base.to_string(),
        },
    }
}

#[derive(Debug, Clone)]
struct Routing {
    base_url: String,
    entry_point: Option<EntryPoint>,
    tenant_id: Option<String>,
}

/// Everything a single request needs, read once at dispatch time.
struct Snapshot {
    base_url: String,
    entry_point: Option<EntryPoint>,
    tenant_id: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

/// Request dispatcher over a shared configuration.
///
/// Entry point, tenant id and access token are snapshotted per request: a
/// change made while a request is in flight applies to the next request only.
pub struct RequestDispatcher<T: HttpTransport> {
    config: Arc<RwLock<UpworkConfig>>,
    routing: RwLock<Routing>,
    transport: Arc<T>,
    logger: Arc<dyn Logger>,
}

impl<T: HttpTransport> RequestDispatcher<T> {
    pub fn new(
        config: Arc<RwLock<UpworkConfig>>,
        transport: Arc<T>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let base_url = config.read().base_url().to_string();
        Self {
            config,
            routing: RwLock::new(Routing {
                base_url,
                entry_point: None,
                tenant_id: None,
            }),
            transport,
            logger,
        }
    }

    /// Select the base URL family for subsequent requests.
    pub fn set_entry_point(&self, entry_point: EntryPoint) {
        let base_url = {
            let config = self.config.read();
            entry_point_base(config.base_url(), config.gql_url(), entry_point)
        };

        let mut routing = self.routing.write();
        routing.base_url = base_url;
        routing.entry_point = Some(entry_point);
        drop(routing);

        self.logger.debug(
            "entry point updated",
            &UpworkLogContext::new()
                .operation("set_entry_point")
                .entry_point(entry_point.as_str()),
        );
    }

    /// Set or clear the tenant id sent on GraphQL requests.
    pub fn set_tenant_header(&self, tenant_id: Option<String>) {
        self.routing.write().tenant_id = tenant_id;
    }

    pub fn entry_point(&self) -> Option<EntryPoint> {
        self.routing.read().entry_point
    }

    /// Active base URL.
    pub fn base_url(&self) -> String {
        self.routing.read().base_url.clone()
    }

    pub fn tenant_id(&self) -> Option<String> {
        self.routing.read().tenant_id.clone()
    }

    fn snapshot(&self) -> Snapshot {
        let routing = self.routing.read().clone();
        let config = self.config.read();
        Snapshot {
            base_url: routing.base_url,
            entry_point: routing.entry_point,
            tenant_id: routing.tenant_id,
            access_token: config.access_token.clone(),
            timeout: config.timeout,
        }
    }

    pub async fn get(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.request(HttpMethod::Get, path, params).await
    }

    pub async fn post(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.request(HttpMethod::Post, path, params).await
    }

    pub async fn put(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.request(HttpMethod::Put, path, params).await
    }

    pub async fn delete(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.request(HttpMethod::Delete, path, params).await
    }

    /// Send a request through the current entry point.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> UpworkResult<ApiResponse> {
        let snapshot = self.snapshot();
        self.dispatch(snapshot, method, path, params).await
    }

    /// Post a GraphQL payload to the GraphQL endpoint, whatever entry point is
    /// currently selected.
    pub async fn execute_graphql(&self, params: Params) -> UpworkResult<ApiResponse> {
        let mut snapshot = self.snapshot();
        snapshot.base_url = self.config.read().gql_url().to_string();
        snapshot.entry_point = Some(EntryPoint::Graphql);
        self.dispatch(snapshot, HttpMethod::Post, "", params).await
    }

    async fn dispatch(
        &self,
        snapshot: Snapshot,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> UpworkResult<ApiResponse> {
        let request = build_request(&snapshot, method, path, &params)?;

        let context = UpworkLogContext::new()
            .operation("request")
            .entry_point(snapshot.entry_point.map(|e| e.as_str()).unwrap_or("api"))
            .method(request.method.as_str())
            .path(path);
        self.logger.debug("sending request", &context);

        let response = self.transport.send(request).await.map_err(|e| {
            self.logger.error(&format!("request failed: {}", e), &context);
            e
        })?;

        self.logger.debug(
            "response received",
            &context.clone().extra("status", response.status.to_string()),
        );

        Ok(ApiResponse::from_raw(response.status, &response.body))
    }
}

fn join_url(base: &str, path: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, path.trim_start_matches('/'))
    } else {
        format!("{}{}", base, path)
    }
}

fn build_request(
    snapshot: &Snapshot,
    method: HttpMethod,
    path: &str,
    params: &Params,
) -> UpworkResult<HttpRequest> {
    let suffix = match snapshot.entry_point {
        None | Some(EntryPoint::Api) => DATA_FORMAT_SUFFIX,
        Some(_) => "",
    };
    let url = format!("{}{}", join_url(&snapshot.base_url, path), suffix);

    let mut headers = HashMap::new();
    headers.insert("user-agent".to_string(), USER_AGENT.to_string());
    if let Some(token) = &snapshot.access_token {
        headers.insert("authorization".to_string(), format!("Bearer {}", token));
    }

    if snapshot.entry_point == Some(EntryPoint::Graphql) {
        let body = serde_json::to_string(params).map_err(|e| {
            UpworkError::Transport(TransportError::InvalidRequest {
                message: format!("Failed to serialize GraphQL body: {}", e),
            })
        })?;
        headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        if let Some(tenant_id) = &snapshot.tenant_id {
            headers.insert(TENANT_ID_HEADER.to_string(), tenant_id.clone());
        }
        return Ok(HttpRequest {
            method: HttpMethod::Post,
            url,
            headers,
            body: Some(body),
            timeout: Some(snapshot.timeout),
        });
    }

    let (method, url, body) = match method {
        HttpMethod::Get => (HttpMethod::Get, append_query(&url, &params.to_pairs())?, None),
        HttpMethod::Post => (HttpMethod::Post, url, Some(form_encode(&params.to_pairs()))),
        HttpMethod::Put | HttpMethod::Delete => {
            let mut pairs: Vec<(String, String)> = params
                .to_pairs()
                .into_iter()
                .filter(|(key, _)| key != HTTP_METHOD_FIELD)
                .collect();
            pairs.push((
                HTTP_METHOD_FIELD.to_string(),
                method.as_str().to_lowercase(),
            ));
            (HttpMethod::Post, url, Some(form_encode(&pairs)))
        }
    };

    if body.is_some() {
        headers.insert("content-type".to_string(), FORM_CONTENT_TYPE.to_string());
    }

    Ok(HttpRequest {
        method,
        url,
        headers,
        body,
        timeout: Some(snapshot.timeout),
    })
}
