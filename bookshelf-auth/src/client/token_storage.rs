use crate::error::AuthError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

const TOKEN_FILE_NAME: &str = "access_token";

/// Persistent home of the access token. Holds the raw token string and nothing else.
pub trait TokenStorage: Send + Sync {
    /// Returns `None` when nothing is stored or the stored value is empty
    fn load(&self) -> Result<Option<String>, AuthError>;

    fn save(&self, token: &str) -> Result<(), AuthError>;

    /// Removing an entry that does not exist is not an error
    fn clear(&self) -> Result<(), AuthError>;
}

pub struct FileTokenStore {
    token_path: PathBuf,
}

impl FileTokenStore {
    /// Stores the token in `<cache dir>/bookshelf/access_token`
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::Configuration("Could not find cache directory".to_string()))?
            .join("bookshelf");

        Ok(Self::at(cache_dir.join(TOKEN_FILE_NAME)))
    }

    pub fn at(token_path: impl Into<PathBuf>) -> Self {
        Self {
            token_path: token_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.token_path
    }
}

impl TokenStorage for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        if !self.token_path.exists() {
            return Ok(None);
        }

        let token = fs::read_to_string(&self.token_path)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to read token: {}", e)))?;
        // Only a line ending added by an editor is dropped; the token is opaque
        let token = token.trim_end_matches(['\n', '\r']);

        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.token_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to create token directory: {}", e))
                })?;
            }
        }

        fs::write(&self.token_path, token)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to save token: {}", e)))?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.token_path)
                .map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.token_path, perms).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)
                .map_err(|e| AuthError::TokenStorage(format!("Failed to delete token: {}", e)))?;
        }
        Ok(())
    }
}

/// Keeps the token in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        let token = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(token.clone().filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

impl<T: TokenStorage + ?Sized> TokenStorage for &T {
    fn load(&self) -> Result<Option<String>, AuthError> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), AuthError> {
        (**self).clear()
    }
}
