mod intent;
mod reducer;
mod state;
mod view;

pub use intent::BookListIntent;
pub use reducer::BookListReducer;
pub use state::{BookListField, BookListState};
pub use view::BookListView;
