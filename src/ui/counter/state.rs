use crate::ui::mvi::{Observable, UiState};

pub const INITIAL_DONUT: &str = "chocolate";
pub const SPRINKLES: &str = " with sprinkles";

#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    pub count: i64,
    pub donut: String,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            donut: INITIAL_DONUT.to_string(),
        }
    }
}

impl UiState for CounterState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterField {
    Count,
    Donut,
}

impl Observable for CounterState {
    type Field = CounterField;

    fn changed_fields(&self, previous: &Self) -> Vec<CounterField> {
        let mut changed = Vec::new();
        if self.count != previous.count {
            changed.push(CounterField::Count);
        }
        if self.donut != previous.donut {
            changed.push(CounterField::Donut);
        }
        changed
    }
}
