//! Thin wrapper over `reqwest` producing owned, `Send` responses.
//!
//! Commands hand the returned futures to the runtime, so a [`Response`] carries
//! only plain data: status, status text, lowercased headers and body bytes.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Canonical reason phrase, e.g. `Conflict` for 409.
    pub status_text: String,
    /// Lowercased keys.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Reason phrase for a status code, falling back to `HTTP {code}`.
pub fn status_text(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), str::to_owned)
}

/// Transport failure: nothing usable came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub message: String,
    pub timed_out: bool,
}

impl HttpError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.timed_out {
            write!(f, "request timed out: {}", self.message)
        } else {
            write!(f, "HTTP error: {}", self.message)
        }
    }
}

impl std::error::Error for HttpError {}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("authorization", format!("Bearer {token}"))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(value)?);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub async fn send(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = match self.method {
            Method::Get => client.get(&self.url),
            Method::Patch => client.patch(&self.url),
        };

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(&e))?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), v.to_owned());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::from_reqwest(&e))?
            .to_vec();

        Ok(Response {
            status,
            status_text: status_text(status),
            headers,
            body,
        })
    }
}

pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub fn patch(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Patch, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            status_text: status_text(status),
            headers: HashMap::from([("content-type".to_owned(), "application/json".to_owned())]),
            body: body.to_vec(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(409, b"").is_success());
    }

    #[test]
    fn status_text_uses_reason_phrase() {
        assert_eq!(status_text(409), "Conflict");
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(599), "HTTP 599");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = response(200, b"");
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn json_body() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Body {
            message: String,
        }

        let body: Body = response(200, br#"{"message":"ok"}"#).json().unwrap();
        assert_eq!(
            body,
            Body {
                message: "ok".to_owned()
            }
        );
    }

    #[test]
    fn builder_sets_auth_json_and_timeout() {
        let builder = Client::patch("http://localhost/x")
            .bearer_auth("tok")
            .timeout(Duration::from_secs(3))
            .json(&serde_json::json!({ "userStatus": false }))
            .unwrap();

        assert_eq!(builder.method, Method::Patch);
        assert_eq!(
            builder.headers.get("authorization").map(String::as_str),
            Some("Bearer tok")
        );
        assert_eq!(
            builder.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(builder.timeout, Some(Duration::from_secs(3)));
        assert_eq!(builder.body.as_deref(), Some(br#"{"userStatus":false}"#.as_slice()));
    }
}
