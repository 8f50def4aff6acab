use crate::api::{BookDraft, BookId, DraftField};
use crate::ui::mvi::{Observable, UiState};
use crate::ui::routes::Route;

/// The draft being edited plus, once the server accepted it, the id it was
/// stored under. A present `created_id` is terminal: the view redirects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookCreateState {
    pub draft: BookDraft,
    pub created_id: Option<BookId>,
}

impl UiState for BookCreateState {}

impl BookCreateState {
    pub fn redirect(&self) -> Option<Route> {
        self.created_id.clone().map(Route::Book)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookCreateField {
    Draft(DraftField),
    CreatedId,
}

impl Observable for BookCreateState {
    type Field = BookCreateField;

    fn changed_fields(&self, previous: &Self) -> Vec<BookCreateField> {
        let mut changed: Vec<BookCreateField> = DraftField::ALL
            .into_iter()
            .filter(|field| self.draft.get(*field) != previous.draft.get(*field))
            .map(BookCreateField::Draft)
            .collect();
        if self.created_id != previous.created_id {
            changed.push(BookCreateField::CreatedId);
        }
        changed
    }
}
