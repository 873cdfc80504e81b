//! Token storage for persisting OAuth token pairs between runs.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::oauth::TokenResponse;

/// Trait for token storage implementations.
pub trait TokenStorage: Send + Sync {
    /// Save a token.
    fn save(&self, key: &str, token: &StoredToken) -> Result<()>;

    /// Load a token.
    fn load(&self, key: &str) -> Result<Option<StoredToken>>;

    /// Delete a token.
    fn delete(&self, key: &str) -> Result<()>;

    /// Check if a token exists.
    fn exists(&self, key: &str) -> Result<bool>;

    /// List all stored token keys.
    fn list(&self) -> Result<Vec<String>>;
}

/// Token plus the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub base_url: String,
    pub token: TokenResponse,
    pub stored_at: chrono::DateTime<chrono::Utc>,
}

impl StoredToken {
    /// Wrap a token response, stamping it with the current time.
    pub fn new(base_url: impl Into<String>, token: TokenResponse) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            stored_at: chrono::Utc::now(),
        }
    }

    /// When the stored access token expires.
    pub fn expires_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.stored_at + chrono::Duration::seconds(self.token.expires_in)
    }

    /// Convert to credentials, keeping the original expiry.
    pub fn to_credentials(&self) -> crate::AmoCredentials {
        crate::AmoCredentials::new(&self.base_url, &self.token.access_token)
            .with_refresh_token(&self.token.refresh_token)
            .with_expires_at(self.expires_at())
    }
}

/// File-based token storage: one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    base_path: PathBuf,
}

impl FileTokenStorage {
    /// Create a new file token storage with the default path.
    ///
    /// Default path: `~/.amocrm-api/tokens/`
    pub fn new() -> Result<Self> {
        let base_path = default_token_dir()?;
        Ok(Self { base_path })
    }

    /// Create a new file token storage with a custom path.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            base_path: path.as_ref().to_path_buf(),
        }
    }

    fn token_path(&self, key: &str) -> PathBuf {
        let safe_key = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect::<String>();

        self.base_path.join(format!("{}.json", safe_key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn save(&self, key: &str, token: &StoredToken) -> Result<()> {
        self.ensure_dir()?;

        let path = self.token_path(key);
        let json = serde_json::to_string_pretty(token)?;
        std::fs::write(&path, json)?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        debug!(key, "Token saved");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<StoredToken>> {
        let path = self.token_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)?;
        let stored: StoredToken = serde_json::from_str(&json)?;

        Ok(Some(stored))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.token_path(key);

        if path.exists() {
            std::fs::remove_file(&path)?;
        }

        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.token_path(key).exists())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.base_path)? {
            let path = entry?.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem() {
                    keys.push(stem.to_string_lossy().to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

/// Get the default token storage directory.
pub fn default_token_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        Error::new(ErrorKind::Config("Could not find home directory".to_string()))
    })?;

    Ok(home.join(".amocrm-api").join("tokens"))
}
