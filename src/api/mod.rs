//! Client for the remote books REST API.

mod client;
mod error;
mod types;

pub use client::{BooksApi, HttpBooksApi};
pub use error::ApiError;
pub use types::{Book, BookDraft, BookEnvelope, BookId, BookList, DraftField, FieldError, NewBook};
