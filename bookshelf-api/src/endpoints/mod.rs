pub mod auth;
pub mod books;
pub mod health;
pub mod users;
pub mod votes;

/// Primary key of a book row on the backend
pub type BookId = i64;

/// Primary key of a user row on the backend
pub type UserId = i64;
