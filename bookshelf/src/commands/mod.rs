mod render;

use anyhow::{Context, Result};
use bookshelf_api::Request;
use bookshelf_auth::{Session, TokenStorage};

use crate::cli::{BookCommand, BookFields, Command, UserCommand};

/// Runs one command against the session. Each command maps to a single API call.
pub async fn execute<S: TokenStorage>(command: Command, session: &Session<S>) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            session
                .login(Request::auth().login(email, password))
                .await
                .context("Login failed")?;
            println!("Logged in.");
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let user = session
                .register(Request::auth().register(username, email, password))
                .await
                .context("Registration failed")?;
            println!("Registered {}. Log in to continue.", render::user(&user));
        }
        Command::Logout => {
            session.logout()?;
            println!("Logged out.");
        }
        Command::Status => {
            println!("{}", render::status(session.is_authenticated(), session.base_url()));
        }
        Command::Health => {
            let health = session.client().send(Request::health().check()).await?;
            println!("{}", health.status);
        }
        Command::Books(command) => execute_books(command, session).await?,
        Command::Users(command) => execute_users(command, session).await?,
        Command::Vote { book_id, direction } => {
            let response = session
                .client()
                .send(Request::votes().cast(book_id, direction))
                .await
                .context("Vote failed")?;
            println!("{}", response.message);
        }
    }

    Ok(())
}

async fn execute_books<S: TokenStorage>(command: BookCommand, session: &Session<S>) -> Result<()> {
    let client = session.client();

    match command {
        BookCommand::List {
            limit,
            skip,
            search,
        } => {
            let mut request = Request::books().list();
            if let Some(limit) = limit {
                request = request.limit(limit);
            }
            if let Some(skip) = skip {
                request = request.skip(skip);
            }
            if let Some(search) = search {
                request = request.search(search);
            }

            let books = client.send(request).await?;
            print!("{}", render::books(&books));
        }
        BookCommand::Show { id } => {
            let book = client.send(Request::books().get(id)).await?;
            println!("{}", render::book(&book));
        }
        BookCommand::Add {
            title,
            author,
            price,
        } => {
            let book = client
                .send(Request::books().create(title, author, price))
                .await?;
            println!("Created {}", render::book(&book));
        }
        BookCommand::Edit {
            id,
            fields,
            partial,
        } => {
            let book = if partial {
                client.send(patch_request(id, fields)).await?
            } else {
                client.send(update_request(id, fields)).await?
            };
            println!("Updated {}", render::book(&book));
        }
        BookCommand::Delete { id } => {
            client.send(Request::books().delete(id)).await?;
            println!("Deleted book {}.", id);
        }
    }

    Ok(())
}

async fn execute_users<S: TokenStorage>(command: UserCommand, session: &Session<S>) -> Result<()> {
    let client = session.client();

    match command {
        UserCommand::List => {
            let users = client.send(Request::users().list()).await?;
            for user in &users {
                println!("{}", render::user(user));
            }
        }
        UserCommand::Show { id } => {
            let user = client.send(Request::users().get(id)).await?;
            println!("{}", render::user(&user.user));
            print!("{}", render::books(&user.books));
        }
        UserCommand::Books { id } => {
            let books = client.send(Request::users().books(id)).await?;
            print!("{}", render::books(&books));
        }
    }

    Ok(())
}

fn update_request(id: i64, fields: BookFields) -> bookshelf_api::endpoints::books::UpdateBook {
    let mut request = Request::books().update(id);
    if let Some(title) = fields.title {
        request = request.title(title);
    }
    if let Some(author) = fields.author {
        request = request.author(author);
    }
    if let Some(price) = fields.price {
        request = request.price(price);
    }
    request
}

fn patch_request(id: i64, fields: BookFields) -> bookshelf_api::endpoints::books::PatchBook {
    let mut request = Request::books().patch(id);
    if let Some(title) = fields.title {
        request = request.title(title);
    }
    if let Some(author) = fields.author {
        request = request.author(author);
    }
    if let Some(price) = fields.price {
        request = request.price(price);
    }
    request
}
