//! Owned state container that batches intents between renders.

use std::collections::VecDeque;

use super::reducer::Reducer;
use super::state::Observable;

/// Field type of the state managed by reducer `R`.
pub type FieldOf<R> = <<R as Reducer>::State as Observable>::Field;

/// Holds one view's state and the intents queued since the last commit.
///
/// Queued intents are reduced in order against the latest state, never
/// against the snapshot that was current when they were queued, so several
/// updates issued before one render all take effect.
pub struct Store<R: Reducer>
where
    R::State: Observable,
{
    state: R::State,
    queued: VecDeque<R::Intent>,
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Observable,
{
    fn default() -> Self {
        Self::with_state(R::State::default())
    }
}

impl<R: Reducer> Store<R>
where
    R::State: Observable,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            queued: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn enqueue(&mut self, intent: R::Intent) {
        self.queued.push_back(intent);
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Reduces every queued intent and reports which fields changed overall.
    pub fn commit(&mut self) -> Vec<FieldOf<R>> {
        if self.queued.is_empty() {
            return Vec::new();
        }

        let before = self.state.clone();
        while let Some(intent) = self.queued.pop_front() {
            self.state = R::reduce(std::mem::take(&mut self.state), intent);
        }
        self.state.changed_fields(&before)
    }
}
