use super::BookId;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

/// Conventional vote directions understood by the backend
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Remove,
    Down,
}

impl From<VoteDirection> for i32 {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => 1,
            VoteDirection::Remove => 0,
            VoteDirection::Down => -1,
        }
    }
}

// Requests

/// Casts, removes or retracts a vote on a book.
///
/// `direction` is sent as-is. Values outside `-1..=1` are not rejected here;
/// the backend answers them with a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastVote {
    pub book_id: BookId,
    pub direction: i32,
}

impl CastVote {
    pub fn new<T>(book_id: BookId, direction: T) -> Self
    where
        T: Into<i32>,
    {
        Self {
            book_id,
            direction: direction.into(),
        }
    }
}

impl Request for CastVote {
    type Data = Self;
    type Response = VoteResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        // The route needs its trailing slash, and the client trims slashes off
        // both ends of the endpoint. The empty query keeps it in place.
        "/votes/?".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub message: String,
}
