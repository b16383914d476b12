//! Durable storage for the one piece of persisted client state: the bearer
//! token. Cleared on logout and whenever the backend rejects it.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context as _;
use async_trait::async_trait;

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> io::Result<Option<String>>;
    async fn save(&self, token: &str) -> io::Result<()>;
    async fn clear(&self) -> io::Result<()>;
}

/// Persists the token as a plain file in the XDG config directory
/// (`$XDG_CONFIG_HOME/ucm/token`), overridable via `UCM_TOKEN_FILE`.
pub struct XdgTokenStore {
    path: PathBuf,
}

impl XdgTokenStore {
    pub async fn open() -> anyhow::Result<XdgTokenStore> {
        let path = tokio::task::spawn_blocking(resolve_path)
            .await
            .context("token path resolution task failed")??;
        tracing::debug!(path = %path.display(), "token store resolved");
        Ok(XdgTokenStore { path })
    }
}

fn resolve_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = std::env::var_os("UCM_TOKEN_FILE") {
        return Ok(path.into());
    }
    let dirs = xdg::BaseDirectories::with_prefix("ucm").context("XDG initialization failed")?;
    dirs.place_config_file("token")
        .context("cannot create config directory for token file")
}

#[async_trait]
impl TokenStore for XdgTokenStore {
    async fn load(&self) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await
    }

    async fn clear(&self) -> io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> MemoryTokenStore {
        MemoryTokenStore::default()
    }

    pub fn with_token(token: &str) -> MemoryTokenStore {
        MemoryTokenStore {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> io::Result<Option<String>> {
        Ok(lock(&self.token).clone())
    }

    async fn save(&self, token: &str) -> io::Result<()> {
        *lock(&self.token) = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> io::Result<()> {
        *lock(&self.token) = None;
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
