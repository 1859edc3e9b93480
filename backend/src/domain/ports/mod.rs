//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod book_command;
mod book_query;
mod book_repository;

#[cfg(test)]
pub use book_command::MockBookCommand;
pub use book_command::{
    BookCommand, CreateBookRequest, CreateBookResponse, DeleteBookRequest, DeleteBookResponse,
    UpdateBookRequest, UpdateBookResponse,
};
#[cfg(test)]
pub use book_query::MockBookQuery;
pub use book_query::BookQuery;
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError};
