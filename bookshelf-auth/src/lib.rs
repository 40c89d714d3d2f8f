mod client;
mod error;

pub use client::{
    open_session, session_from_settings, FileTokenStore, MemoryTokenStore, Session,
    SessionWatcher, Settings, TokenStorage,
};
pub use error::AuthError;
