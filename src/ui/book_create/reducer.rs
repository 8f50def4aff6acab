use crate::ui::mvi::Reducer;

use super::intent::BookCreateIntent;
use super::state::BookCreateState;

pub struct BookCreateReducer;

impl Reducer for BookCreateReducer {
    type State = BookCreateState;
    type Intent = BookCreateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BookCreateIntent::Change { field, value } => {
                if state.created_id.is_some() {
                    // Redirected; the form is gone.
                    return state;
                }
                let mut state = state;
                state.draft.set(field, value);
                state
            }
            BookCreateIntent::Created { id } => BookCreateState {
                created_id: Some(id),
                ..state
            },
            BookCreateIntent::SubmitFailed => state,
        }
    }
}
