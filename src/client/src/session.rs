//! The session service: owns the bearer token lifecycle and the
//! authenticated-user state machine, and is the single gateway every
//! request goes through.
//!
//! The service never navigates anywhere. State transitions are published
//! on a watch channel; the front end observes them and decides what to
//! render next.

use std::sync::{Arc, RwLock};

use anyhow::Context as _;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::watch;

use crate::error::ApiError;
use crate::http::{to_body, HttpClient};
use crate::models::{AuthResponse, AuthUser, RegisterRequest};
use crate::storage::TokenStore;

/// `Uninitialized -> Loading -> {Authenticated, Anonymous}` on startup;
/// login/register reach `Authenticated` from any state, logout and token
/// rejection reach `Anonymous` from any state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    /// A persisted token exists and is being validated against the server.
    Loading,
    Authenticated(AuthUser),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}

/// Handle to the API. Cheap to clone; constructed once at process start and
/// injected into every consumer.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: HttpClient,
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<String>>,
    state: watch::Sender<SessionState>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn TokenStore>,
    ) -> anyhow::Result<ApiClient> {
        let base_url = base_url.into();
        let parsed = url::Url::parse(&base_url).context("base url is not a valid url")?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "base url: only http and https schemes are allowed, got {}",
                parsed.scheme()
            );
        }
        let (state, _) = watch::channel(SessionState::Uninitialized);
        Ok(ApiClient {
            inner: Arc::new(Inner {
                http: HttpClient::new(base_url),
                store,
                token: RwLock::new(None),
                state,
            }),
        })
    }

    /// Current session state, for synchronous checks (route guarding).
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Watch session transitions. Top-level observers use this to react to
    /// sign-in/sign-out without the session layer knowing about views.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    fn set_state(&self, next: SessionState) {
        self.inner.state.send_replace(next);
    }

    fn current_token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    /// Restores the session from the persisted token, if any. A rejected or
    /// unreachable token lands in `Anonymous` with the token cleared; that
    /// is a normal outcome, not an error.
    #[tracing::instrument(skip(self))]
    pub async fn bootstrap(&self) -> Result<SessionState, ApiError> {
        let stored = self.inner.store.load().await?;
        let Some(token) = stored else {
            self.set_state(SessionState::Anonymous);
            return Ok(self.state());
        };

        self.set_state(SessionState::Loading);
        self.set_token(Some(token));
        match self.current_user().await {
            Ok(user) => {
                tracing::info!(username = %user.username, "session restored");
                self.set_state(SessionState::Authenticated(user));
            }
            Err(err) => {
                tracing::warn!(error = %err, "persisted token rejected, starting anonymous");
                self.set_token(None);
                if let Err(err) = self.inner.store.clear().await {
                    tracing::warn!(error = %err, "failed to clear persisted token");
                }
                self.set_state(SessionState::Anonymous);
            }
        }
        Ok(self.state())
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthUser, ApiError> {
        let body = json!({ "username": username, "password": password });
        let resp: AuthResponse = self
            .send(Method::POST, "/auth/login", Vec::new(), Some(body))
            .await?;
        self.install(resp).await
    }

    /// Validates the payload client-side, then signs the account up. A
    /// successful signup signs the new user in immediately.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthUser, ApiError> {
        let problems = req.validate();
        if !problems.is_empty() {
            return Err(ApiError::Invalid { problems });
        }
        let body = to_body("/auth/register", req)?;
        let resp: AuthResponse = self
            .send(Method::POST, "/auth/register", Vec::new(), Some(body))
            .await?;
        self.install(resp).await
    }

    async fn install(&self, resp: AuthResponse) -> Result<AuthUser, ApiError> {
        self.inner.store.save(&resp.token).await?;
        self.set_token(Some(resp.token));
        let user = AuthUser {
            id: resp.user_id,
            username: resp.username,
            email: resp.email,
            role: resp.role,
            student_id: resp.student_id,
            student_name: None,
            enabled: None,
        };
        self.set_state(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Authenticated "who am I" lookup against the persisted token.
    pub async fn current_user(&self) -> Result<AuthUser, ApiError> {
        self.send(Method::GET, "/auth/me", Vec::new(), None).await
    }

    /// Asks the server whether an arbitrary token is still valid.
    pub async fn validate_token(&self, token: &str) -> Result<bool, ApiError> {
        self.send(
            Method::GET,
            "/auth/validate",
            vec![("token", token.to_string())],
            None,
        )
        .await
    }

    /// Local-only teardown: clears the token (in memory and on disk) and
    /// publishes `Anonymous`. No server round trip; succeeds whether or not
    /// a token was present.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.set_token(None);
        self.inner.store.clear().await?;
        self.set_state(SessionState::Anonymous);
        Ok(())
    }

    /// Issues one request, attaching the bearer token when present. A 401
    /// on a request that carried a token tears the session down exactly
    /// once: token cleared, `Anonymous` published, error surfaced to the
    /// caller. Unauthenticated calls (login itself) never trigger the
    /// teardown, so a failed login cannot loop.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let token = self.current_token();
        let result = self
            .inner
            .http
            .request(method, endpoint, &query, body.as_ref(), token.as_deref())
            .await;
        if token.is_some() {
            if let Err(ApiError::Auth { .. }) = &result {
                self.revoke().await;
            }
        }
        result
    }

    async fn revoke(&self) {
        tracing::info!("session token rejected by the server, signing out");
        self.set_token(None);
        if let Err(err) = self.inner.store.clear().await {
            tracing::warn!(error = %err, "failed to clear persisted token");
        }
        self.set_state(SessionState::Anonymous);
    }
}
