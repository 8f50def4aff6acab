use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// count = previous count + 1
    Increase,
    /// count = 0
    Reset,
    /// donut = previous donut + " with sprinkles"
    AddSprinkles,
}

impl Intent for CounterIntent {}
