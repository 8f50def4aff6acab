use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterState, SPRINKLES};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increase => state.count = state.count.saturating_add(1),
            CounterIntent::Reset => state.count = 0,
            CounterIntent::AddSprinkles => state.donut.push_str(SPRINKLES),
        }
        state
    }
}
