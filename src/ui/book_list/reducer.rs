use crate::ui::mvi::Reducer;

use super::intent::BookListIntent;
use super::state::BookListState;

pub struct BookListReducer;

impl Reducer for BookListReducer {
    type State = BookListState;
    type Intent = BookListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BookListIntent::Loaded { books } => BookListState { books },
            // Keep whatever is shown (an empty list on first load).
            BookListIntent::LoadFailed => state,
        }
    }
}
