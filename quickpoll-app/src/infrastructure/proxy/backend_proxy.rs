use quickpoll_errors::AppError;
use reqwest::header::{HeaderMap, HeaderName};
use reqwest::Method;
use std::time::Duration;
use url::Url;

pub const API_PREFIX: &str = "/api";

const UPSTREAM_TIMEOUT_SECS: u64 = 30;

const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
];

/// Forwards API requests to the backend origin.
pub struct BackendProxy {
    http_client: reqwest::Client,
    target: Url,
}

impl BackendProxy {
    pub fn new(target: Url) -> Result<Self, AppError> {
        if target.cannot_be_a_base() {
            return Err(AppError::Config(format!("BACKEND_URL {target} is not an origin")));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(Self {
            http_client,
            target,
        })
    }

    /// Upstream URL for an incoming `path?query`. A path on the target is kept as a prefix.
    pub fn upstream_url(&self, path_and_query: &str) -> Url {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path_and_query, None),
        };

        let mut url = self.target.clone();
        let base = self.target.path().trim_end_matches('/');
        url.set_path(&format!("{base}{path}"));
        url.set_query(query);
        url
    }

    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        mut headers: HeaderMap,
        body: impl Into<reqwest::Body>,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.upstream_url(path_and_query);

        strip_hop_by_hop(&mut headers);
        // reqwest fills Host from the target URL.
        headers.remove(reqwest::header::HOST);

        tracing::debug!("Proxying {} {} -> {}", method, path_and_query, url);

        self.http_client
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Proxy error for {}: {}", path_and_query, e);
                AppError::Upstream(e.to_string())
            })
    }
}

pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(reqwest::header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP_HEADERS {
        headers.remove(*name);
    }
}
