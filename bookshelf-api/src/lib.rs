pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::{BookshelfApiError, ErrorDetail, ValidationIssue};
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    /// Client without credentials, for login, registration and public reads
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url.trim_end_matches('/')),
        }
    }

    /// Client that sends `Authorization: Bearer <access_token>` with every request
    pub fn with_token(base_url: &str, access_token: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url.trim_end_matches('/')).bearer_auth(access_token),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, BookshelfApiError>
    where
        R: ApiRequest,
    {
        tracing::debug!(method = ?R::METHOD, endpoint = %request.endpoint(), "Sending request");
        self.inner.send(request).await.map_err(From::from)
    }
}

pub struct Request;

impl Request {
    pub fn auth() -> AuthRepository {
        AuthRepository::new()
    }

    pub fn books() -> BookRepository {
        BookRepository::new()
    }

    pub fn health() -> HealthRepository {
        HealthRepository::new()
    }

    pub fn users() -> UserRepository {
        UserRepository::new()
    }

    pub fn votes() -> VoteRepository {
        VoteRepository::new()
    }
}
