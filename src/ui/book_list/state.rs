use crate::api::Book;
use crate::ui::mvi::{Observable, UiState};

/// Books as last returned by the server; empty until (and unless) the
/// fetch succeeds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookListState {
    pub books: Vec<Book>,
}

impl UiState for BookListState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookListField {
    Books,
}

impl Observable for BookListState {
    type Field = BookListField;

    fn changed_fields(&self, previous: &Self) -> Vec<BookListField> {
        if self.books != previous.books {
            vec![BookListField::Books]
        } else {
            Vec::new()
        }
    }
}
