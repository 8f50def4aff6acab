mod intent;
mod reducer;
mod state;
mod view;

pub use intent::BookCreateIntent;
pub use reducer::BookCreateReducer;
pub use state::{BookCreateField, BookCreateState};
pub use view::{BookCreateView, CANCEL_ROUTE};
