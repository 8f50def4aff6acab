mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterField, CounterState, INITIAL_DONUT, SPRINKLES};
pub use view::{
    count_message, donut_message, CounterView, MSG_ACTIVATED, MSG_RENDERED, MSG_SUBSCRIBED,
    MSG_UNSUBSCRIBED,
};
