use crate::endpoints::{
    BookId, UserId,
    auth::Login,
    books::{CreateBook, DeleteBook, GetBook, ListBooks, PatchBook, UpdateBook},
    health::Health,
    users::{CreateUser, DeleteUser, GetUser, ListUserBooks, ListUsers, UpdateUser},
    votes::CastVote,
};

pub struct AuthRepository;

impl AuthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn login(&self, email: impl Into<String>, password: impl Into<String>) -> Login {
        Login::new(email, password)
    }

    pub fn register(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> CreateUser {
        CreateUser::new(username, email, password)
    }
}

pub struct BookRepository;

impl BookRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListBooks {
        ListBooks::new()
    }

    pub fn get(&self, book_id: BookId) -> GetBook {
        GetBook::new(book_id)
    }

    pub fn create(&self, title: impl Into<String>, author: impl Into<String>, price: f64) -> CreateBook {
        CreateBook::new(title, author, price)
    }

    pub fn update(&self, book_id: BookId) -> UpdateBook {
        UpdateBook::new(book_id)
    }

    pub fn patch(&self, book_id: BookId) -> PatchBook {
        PatchBook::new(book_id)
    }

    pub fn delete(&self, book_id: BookId) -> DeleteBook {
        DeleteBook::new(book_id)
    }
}

pub struct HealthRepository;

impl HealthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn check(&self) -> Health {
        Health
    }
}

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListUsers {
        ListUsers
    }

    pub fn get(&self, user_id: UserId) -> GetUser {
        GetUser::new(user_id)
    }

    pub fn update(&self, user_id: UserId) -> UpdateUser {
        UpdateUser::new(user_id)
    }

    pub fn delete(&self, user_id: UserId) -> DeleteUser {
        DeleteUser::new(user_id)
    }

    pub fn books(&self, user_id: UserId) -> ListUserBooks {
        ListUserBooks::new(user_id)
    }
}

pub struct VoteRepository;

impl VoteRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn cast<T>(&self, book_id: BookId, direction: T) -> CastVote
    where
        T: Into<i32>,
    {
        CastVote::new(book_id, direction)
    }
}
