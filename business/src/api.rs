//! Merchant API client.
//!
//! Every call is a single authenticated attempt: no retries, no caching.
//! Callers map the results into compute updates.

use log::{debug, warn};
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::BusinessConfig;
use crate::http::{Client, HttpError, RequestBuilder, Response};
use crate::metrics::{ChartTab, MetricsDuration, UsagePoint};
use crate::users::{UserListResponse, UserPatch, UserRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. Displays as the status text, e.g. `Conflict`.
    #[error("{status_text}")]
    Status { status: u16, status_text: String },
    /// 2xx response whose body does not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Rejected before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("not signed in")]
    Unauthenticated,
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Network(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct UsageMetricsResponse {
    #[serde(default)]
    points: Vec<UsagePoint>,
}

/// `{base}/merchant/v1/{segments..}` with each segment percent-encoded.
fn endpoint(config: &BusinessConfig, segments: &[&str]) -> ApiResult<Url> {
    let mut url = Url::parse(&config.api_base_url)
        .map_err(|e| ApiError::InvalidRequest(format!("invalid api base url: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidRequest("api base url cannot carry a path".to_owned()))?
        .pop_if_empty()
        .extend(["merchant", "v1"])
        .extend(segments);
    Ok(url)
}

fn authorized(request: RequestBuilder, config: &BusinessConfig, token: &str) -> RequestBuilder {
    request
        .bearer_auth(token)
        .header("accept", "application/json")
        .timeout(config.request_timeout)
}

fn require_token(token: Option<&str>) -> ApiResult<&str> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Unauthenticated)
}

fn check_status(response: &Response) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }
    warn!(
        "merchant api returned {} {}",
        response.status, response.status_text
    );
    Err(ApiError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
    })
}

/// Parses a 2xx body, naming the content type when it is not the expected JSON.
fn decode<T: DeserializeOwned>(response: &Response, what: &str) -> ApiResult<T> {
    response.json().map_err(|e| {
        let content_type = response.header("content-type").unwrap_or("no content type");
        ApiError::Decode(format!("{what} ({content_type}): {e}"))
    })
}

/// GET `/merchant/v1/users`
pub async fn fetch_user_list(
    config: &BusinessConfig,
    token: Option<&str>,
) -> ApiResult<Vec<UserRecord>> {
    let token = require_token(token)?;
    let url = endpoint(config, &["users"])?;
    debug!("GET {url}");

    let response = authorized(Client::get(url.as_str()), config, token)
        .send()
        .await?;
    check_status(&response)?;

    let list: UserListResponse = decode(&response, "user list")?;
    Ok(list.users_list)
}

/// PATCH `/merchant/v1/update/{email}`
///
/// The response body is passed through untyped; an empty body yields `Null`.
pub async fn update_user(
    config: &BusinessConfig,
    token: Option<&str>,
    email: &str,
    patch: &UserPatch,
) -> ApiResult<serde_json::Value> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::InvalidRequest("email is required".to_owned()));
    }
    let token = require_token(token)?;
    let url = endpoint(config, &["update", email])?;
    debug!("PATCH {url}");

    let request = authorized(Client::patch(url.as_str()), config, token)
        .json(patch)
        .map_err(|e| ApiError::InvalidRequest(format!("failed to serialize patch: {e}")))?;
    let response = request.send().await?;
    check_status(&response)?;

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }
    decode(&response, "update response")
}

/// GET `/merchant/v1/metrics/usage?view=..&duration=..`
pub async fn fetch_usage_metrics(
    config: &BusinessConfig,
    token: Option<&str>,
    tab: ChartTab,
    duration: MetricsDuration,
) -> ApiResult<Vec<UsagePoint>> {
    let token = require_token(token)?;
    let mut url = endpoint(config, &["metrics", "usage"])?;
    url.query_pairs_mut()
        .append_pair("view", tab.query_value())
        .append_pair("duration", duration.query_value());
    debug!("GET {url}");

    let response = authorized(Client::get(url.as_str()), config, token)
        .send()
        .await?;
    check_status(&response)?;

    let metrics: UsageMetricsResponse = decode(&response, "usage metrics")?;
    Ok(metrics.points)
}
