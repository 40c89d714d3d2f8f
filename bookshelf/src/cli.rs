use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Command-line client for the bookshelf API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored access token
    Logout,
    /// Show whether a token is stored
    Status,
    /// Check that the server is up
    Health,
    #[command(subcommand)]
    Books(BookCommand),
    #[command(subcommand)]
    Users(UserCommand),
    /// Vote on a book: 1 up, -1 down, 0 to remove your vote
    Vote {
        book_id: i64,
        /// Sent to the server unchanged
        #[arg(allow_negative_numbers = true)]
        direction: i32,
    },
}

#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// List books
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        skip: Option<u32>,
        /// Only books whose title contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one book
    Show { id: i64 },
    /// Add a book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        price: f64,
    },
    /// Change fields of a book you own
    Edit {
        id: i64,
        #[command(flatten)]
        fields: BookFields,
        /// Send a PATCH instead of a PUT
        #[arg(long)]
        partial: bool,
    },
    /// Delete a book you own
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct BookFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List,
    /// Show a user and their books
    Show { id: i64 },
    /// List the books a user owns
    Books { id: i64 },
}
