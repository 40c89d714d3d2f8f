use super::UserId;
use super::books::Book;
use crate::macros::setter;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{EmptyResponse, Method, Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithBooks {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub books: Vec<Book>,
}

// Requests

/// Registers a new account. The backend answers with the created user.
#[derive(Clone, Serialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CreateUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Request for CreateUser {
    type Data = Self;
    type Response = User;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/users".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListUsers;

impl Request for ListUsers {
    type Data = ();
    type Response = Vec<User>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/users".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUser {
    user_id: UserId,
}

impl GetUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl Request for GetUser {
    type Data = ();
    type Response = UserWithBooks;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/users/{}", self.user_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateUser {
    #[serde(skip)]
    user_id: UserId,
    user: UserUpdate,
}

impl UpdateUser {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            user: UserUpdate::default(),
        }
    }

    setter!(opt user.username: String);
    setter!(opt user.email: String);
    setter!(opt user.password: String);
}

impl Request for UpdateUser {
    type Data = UserUpdate;
    type Response = User;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/users/{}", self.user_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.user)
    }
}

/// Fields left as `None` are omitted from the body and keep their stored value
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteUser {
    user_id: UserId,
}

impl DeleteUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl Request for DeleteUser {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/users/{}", self.user_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListUserBooks {
    user_id: UserId,
}

impl ListUserBooks {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl Request for ListUserBooks {
    type Data = ();
    type Response = Vec<Book>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/users/{}/books", self.user_id).into()
    }
}
