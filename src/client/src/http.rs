use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Low-level JSON request machinery. Knows nothing about sessions: the
/// caller decides whether a bearer token is attached.
pub(crate) struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpClient {
    pub(crate) fn new(base_url: String) -> HttpClient {
        HttpClient {
            base_url,
            inner: reqwest::Client::new(),
        }
    }

    /// Issues one request against `base_url` + `endpoint` and decodes the
    /// JSON response. HTTP 204 and empty bodies decode as JSON null, so
    /// deletes can ask for `()`. Failures are logged with the endpoint and
    /// returned; nothing is retried.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut req = self
            .inner
            .request(method, &url)
            .header("Content-Type", "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|err| {
            tracing::warn!(endpoint, error = %err, "api request failed");
            ApiError::from(err)
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "api request failed");
            if status == StatusCode::UNAUTHORIZED {
                return Err(ApiError::Auth {
                    endpoint: endpoint.to_string(),
                });
            }
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return decode(endpoint, Value::Null);
        }
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return decode(endpoint, Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Serializes an entity into a request body.
pub(crate) fn to_body<T: serde::Serialize>(endpoint: &str, value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
