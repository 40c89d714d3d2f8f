use bookshelf_api::endpoints::books::Book;
use bookshelf_api::endpoints::users::User;

pub fn book(book: &Book) -> String {
    let mut line = format!(
        "#{} {} by {} ({:.2})",
        book.id, book.title, book.author, book.price
    );
    if let Some(votes) = book.votes {
        line.push_str(&format!(", {} vote{}", votes, if votes == 1 { "" } else { "s" }));
    }
    if let Some(owner) = &book.owner {
        line.push_str(&format!(", owned by {}", owner.username));
    }
    line
}

/// One line per book, or a note when there are none
pub fn books(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }
    books.iter().map(|b| book(b) + "\n").collect()
}

pub fn user(user: &User) -> String {
    format!("#{} {} <{}>", user.id, user.username, user.email)
}

pub fn status(authenticated: bool, server_url: &str) -> String {
    if authenticated {
        format!("Logged in to {}", server_url)
    } else {
        format!("Not logged in to {}", server_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dune() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            price: 12.5,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            owner_id: 3,
            votes: None,
            owner: None,
        }
    }

    #[test]
    fn book_line_without_votes() {
        assert_eq!(book(&dune()), "#1 Dune by Frank Herbert (12.50)");
    }

    #[test]
    fn book_line_with_votes_and_owner() {
        let mut book_with_votes = dune();
        book_with_votes.votes = Some(1);
        book_with_votes.owner = Some(User {
            id: 3,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: book_with_votes.created_at,
        });

        assert_eq!(
            book(&book_with_votes),
            "#1 Dune by Frank Herbert (12.50), 1 vote, owned by ada"
        );
    }

    #[test]
    fn empty_list_has_a_message() {
        assert_eq!(books(&[]), "No books found.\n");
    }

    #[test]
    fn status_reflects_session() {
        assert_eq!(status(true, "http://localhost:8000"), "Logged in to http://localhost:8000");
        assert_eq!(status(false, "http://localhost:8000"), "Not logged in to http://localhost:8000");
    }
}
