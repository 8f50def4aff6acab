use crate::api::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BookListIntent {
    /// The collection request succeeded.
    Loaded { books: Vec<Book> },
    /// The collection request failed. Already logged by the caller.
    LoadFailed,
}

impl Intent for BookListIntent {}
