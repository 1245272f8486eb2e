use reqwest::Url;
use serde::de::DeserializeOwned;

use super::types::{ExperimentDetail, ExperimentSummary, MarketplaceSnapshot};
use crate::{API_URL_OVERRIDE, DEFAULT_API_URL};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API url '{url}'")]
    InvalidUrl { url: String },

    #[error("Request to '{url}' failed: {message}")]
    Request { url: String, message: String },

    #[error("Server returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {message}")]
    Decode { url: String, message: String },

    #[error("Experiment '{name}' not found")]
    NotFound { name: String },
}

impl ApiError {
    /// Transport failures and 5xx responses may succeed on the next poll.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Request { .. } => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::InvalidUrl { .. } | ApiError::Decode { .. } | ApiError::NotFound { .. } => {
                false
            }
        }
    }
}

/// Root of the marketplace API for this page.
pub fn api_base() -> String {
    resolve_api_base(API_URL_OVERRIDE, browser_origin().as_deref())
}

pub fn resolve_api_base(configured: Option<&str>, origin: Option<&str>) -> String {
    let base = match (configured.filter(|url| !url.trim().is_empty()), origin) {
        (Some(url), _) => url.trim().to_string(),
        (None, Some(origin)) => format!("{}/api", origin.trim_end_matches('/')),
        (None, None) => DEFAULT_API_URL.to_string(),
    };
    base.trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn browser_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_origin() -> Option<String> {
    None
}

/// Append `segments` to `base`, percent-encoding each one.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ApiError> {
    let invalid = || ApiError::InvalidUrl { url: base.to_string() };

    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn get_json<T: DeserializeOwned>(url: Url) -> Result<T, ApiError> {
    let client = reqwest::Client::new();
    let display = url.to_string();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request {
            url: display.clone(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: display,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: display,
        message: e.to_string(),
    })
}

pub async fn fetch_experiments() -> Result<Vec<ExperimentSummary>, ApiError> {
    let url = endpoint(&api_base(), &["experiments"])?;
    get_json(url).await
}

pub async fn fetch_experiment(name: &str) -> Result<ExperimentDetail, ApiError> {
    let url = endpoint(&api_base(), &["experiments", name])?;
    match get_json(url).await {
        Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound {
            name: name.to_string(),
        }),
        other => other,
    }
}

pub async fn fetch_marketplace() -> Result<MarketplaceSnapshot, ApiError> {
    let url = endpoint(&api_base(), &["marketplace"])?;
    get_json(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_url_wins_over_origin() {
        let base = resolve_api_base(Some("http://backend:9000/api/"), Some("https://example.org"));
        assert_eq!(base, "http://backend:9000/api");
    }

    #[test]
    fn origin_gets_api_suffix() {
        assert_eq!(resolve_api_base(None, Some("https://example.org/")), "https://example.org/api");
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(resolve_api_base(Some("  "), None), DEFAULT_API_URL);
    }

    #[test]
    fn endpoint_encodes_segments() {
        let url = endpoint("http://localhost:8000/api", &["experiments", "my run/2"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/experiments/my%20run%2F2");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let url = endpoint("http://localhost:8000/api/", &["marketplace"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/marketplace");
    }

    #[test]
    fn endpoint_rejects_relative_base() {
        let err = endpoint("/api", &["experiments"]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn retryable_errors() {
        let server = ApiError::Status { url: "u".into(), status: 503 };
        let missing = ApiError::Status { url: "u".into(), status: 404 };
        let gone = ApiError::NotFound { name: "run-1".into() };

        assert!(server.is_retryable());
        assert!(!missing.is_retryable());
        assert!(!gone.is_retryable());
        assert_eq!(gone.to_string(), "Experiment 'run-1' not found");
    }
}
