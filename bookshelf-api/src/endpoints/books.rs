use super::{BookId, UserId};
use super::users::User;
use crate::macros::setter;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{EmptyResponse, Method, Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub owner_id: UserId,
    /// Number of votes. Only present in list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    /// Only present in list and single-book responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

// Requests

/// Lists books, optionally paginated and filtered by a title substring.
///
/// Only the parameters that were set end up in the query string. The backend
/// applies its own defaults (`limit=10`, `skip=0`) for the others.
#[derive(Default, Debug, Clone, Serialize)]
pub struct ListBooks {
    query: BookQuery,
}

impl ListBooks {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt query.limit: u32);
    setter!(opt query.skip: u32);
    setter!(opt query.search: String);

    pub fn query(&self) -> &BookQuery {
        &self.query
    }
}

impl Request for ListBooks {
    type Data = BookQuery;
    type Response = Vec<Book>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/books".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        if self.query.is_empty() {
            RequestData::Empty
        } else {
            RequestData::Query(&self.query)
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl BookQuery {
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.skip.is_none() && self.search.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetBook {
    book_id: BookId,
}

impl GetBook {
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }
}

impl Request for GetBook {
    type Data = ();
    type Response = Book;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/books/{}", self.book_id).into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}

impl Request for CreateBook {
    type Data = Self;
    type Response = Book;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/books".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

/// Full update (`PUT`). The backend still only touches the fields that are sent.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBook {
    #[serde(skip)]
    book_id: BookId,
    book: BookUpdate,
}

impl UpdateBook {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            book: BookUpdate::default(),
        }
    }

    setter!(opt book.title: String);
    setter!(opt book.author: String);
    setter!(opt book.price: f64);
}

impl Request for UpdateBook {
    type Data = BookUpdate;
    type Response = Book;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/books/{}", self.book_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.book)
    }
}

/// Partial update (`PATCH`)
#[derive(Debug, Clone, Serialize)]
pub struct PatchBook {
    #[serde(skip)]
    book_id: BookId,
    book: BookUpdate,
}

impl PatchBook {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            book: BookUpdate::default(),
        }
    }

    setter!(opt book.title: String);
    setter!(opt book.author: String);
    setter!(opt book.price: f64);
}

impl Request for PatchBook {
    type Data = BookUpdate;
    type Response = Book;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/books/{}", self.book_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.book)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBook {
    pub book_id: BookId,
}

impl DeleteBook {
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }
}

impl Request for DeleteBook {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/books/{}", self.book_id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_books_without_parameters_sends_no_query() {
        let request = ListBooks::new();

        assert!(request.query().is_empty());
        assert!(matches!(request.data(), RequestData::Empty));
    }

    #[test]
    fn list_books_keeps_parameters_verbatim() {
        let request = ListBooks::new().limit(10u32).skip(0u32).search("x");

        assert_eq!(
            request.query(),
            &BookQuery {
                limit: Some(10),
                skip: Some(0),
                search: Some("x".to_string()),
            }
        );
    }

    #[test]
    fn update_book_omits_unset_fields() {
        let request = UpdateBook::new(12).price(9.5);

        assert_eq!(request.endpoint(), "/books/12");
        assert_eq!(
            serde_json::to_value(&request.book).unwrap(),
            serde_json::json!({ "price": 9.5 })
        );
    }

    #[test]
    fn patch_and_put_share_path() {
        assert_eq!(PatchBook::new(4).endpoint(), UpdateBook::new(4).endpoint());
        assert_eq!(PatchBook::METHOD, Method::PATCH);
        assert_eq!(UpdateBook::METHOD, Method::PUT);
    }

    #[test]
    fn book_from_list_response_carries_votes_and_owner() {
        let json = r#"{
            "id": 1,
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 12.99,
            "created_at": "2024-05-01T09:30:00.123456",
            "owner_id": 3,
            "votes": 2,
            "owner": {
                "id": 3,
                "username": "ada",
                "email": "ada@example.com",
                "created_at": "2024-04-01T08:00:00"
            }
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.votes, Some(2));
        assert_eq!(book.owner.as_ref().map(|o| o.username.as_str()), Some("ada"));
    }

    #[test]
    fn book_without_votes_deserializes() {
        let json = r#"{
            "id": 1,
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 12.99,
            "created_at": "2024-05-01T09:30:00",
            "owner_id": 3
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.votes, None);
        assert!(book.owner.is_none());
    }
}
