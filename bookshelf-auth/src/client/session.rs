use super::token_storage::TokenStorage;
use crate::error::AuthError;
use bookshelf_api::endpoints::auth::Login;
use bookshelf_api::endpoints::users::{CreateUser, User};
use bookshelf_api::Client;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;

type TokenCell = Option<SecretString>;

/// Owns the access token for one client session.
///
/// The token lives in a watch cell so other parts of the program can observe
/// logins and logouts. Every change is written through to `storage` before it
/// becomes visible, so the cell and the persisted value never disagree.
pub struct Session<S> {
    storage: S,
    base_url: String,
    token: watch::Sender<TokenCell>,
}

impl<S: TokenStorage> Session<S> {
    /// Restores the session from whatever token `storage` holds
    pub fn load(storage: S, base_url: impl Into<String>) -> Result<Self, AuthError> {
        let token = storage.load()?;
        if token.is_some() {
            tracing::info!("Restored access token from storage");
        }

        let (sender, _) = watch::channel(token.map(SecretString::from));
        Ok(Self {
            storage,
            base_url: base_url.into(),
            token: sender,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            token: self.token.subscribe(),
        }
    }

    /// Replaces the token. `None` and empty strings both mean logged out.
    pub fn set_token(&self, token: Option<String>) -> Result<(), AuthError> {
        let token = token.filter(|t| !t.is_empty());

        match &token {
            Some(t) => self.storage.save(t)?,
            None => self.storage.clear()?,
        }

        self.token.send_replace(token.map(SecretString::from));
        Ok(())
    }

    /// API client carrying the current token, or an anonymous one when logged out
    pub fn client(&self) -> Client {
        match self.token.borrow().as_ref() {
            Some(token) => Client::with_token(&self.base_url, token.expose_secret()),
            None => Client::new(&self.base_url),
        }
    }

    /// Exchanges credentials for a token and stores it. A failed login, including
    /// one answered with an empty token, leaves the current token untouched.
    pub async fn login(&self, credentials: Login) -> Result<(), AuthError> {
        let response = Client::new(&self.base_url).send(credentials).await?;
        if response.access_token.is_empty() {
            tracing::warn!("Login succeeded but the server returned an empty token");
            return Err(AuthError::EmptyToken);
        }

        self.set_token(Some(response.access_token))?;
        tracing::info!("Logged in");
        Ok(())
    }

    /// Creates an account. Registering does not log in.
    pub async fn register(&self, registration: CreateUser) -> Result<User, AuthError> {
        let user = Client::new(&self.base_url).send(registration).await?;
        tracing::info!(user_id = user.id, "Registered new user");
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.set_token(None)?;
        tracing::info!("Logged out");
        Ok(())
    }
}

/// Read side of a [`Session`], exposing only whether a token is present
#[derive(Clone)]
pub struct SessionWatcher {
    token: watch::Receiver<TokenCell>,
}

impl SessionWatcher {
    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Waits for the next login or logout and returns the new state.
    /// Returns `None` once the session has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.token.changed().await.ok()?;
        Some(self.token.borrow_and_update().is_some())
    }
}
