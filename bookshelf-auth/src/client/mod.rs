mod config;
mod session;
mod token_storage;

pub use config::Settings;
pub use session::{Session, SessionWatcher};
pub use token_storage::{FileTokenStore, MemoryTokenStore, TokenStorage};

use crate::error::AuthError;

/// Loads settings and restores the persisted session, ready for API calls
pub fn open_session() -> Result<Session<FileTokenStore>, AuthError> {
    let settings = Settings::new()?;
    settings.validate().map_err(AuthError::Configuration)?;

    session_from_settings(&settings)
}

pub fn session_from_settings(settings: &Settings) -> Result<Session<FileTokenStore>, AuthError> {
    let store = match &settings.token_path {
        Some(path) => FileTokenStore::at(path),
        None => FileTokenStore::new()?,
    };
    tracing::debug!(path = %store.path().display(), "Using token file");

    Session::load(store, settings.server_url.clone())
}
