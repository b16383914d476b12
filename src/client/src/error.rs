/// Everything that can go wrong between the front end and the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status other than 401.
    #[error("request to {endpoint} failed: HTTP {status}")]
    Http { status: u16, endpoint: String },

    /// HTTP 401. When the failing request carried a token this also tears
    /// the session down (see [`crate::ApiClient`]).
    #[error("authentication rejected for {endpoint}")]
    Auth { endpoint: String },

    /// The response body was not the JSON shape we asked for.
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the persisted token failed.
    #[error("token storage error")]
    Storage(#[from] std::io::Error),

    /// The request was rejected client-side before anything was sent.
    #[error("invalid request: {}", problems.join("; "))]
    Invalid { problems: Vec<String> },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Auth { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}
