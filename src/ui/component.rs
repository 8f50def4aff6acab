//! Wiring shared by every view: a store, its effects, and the completion
//! channel through which asynchronous requests report back.

use tokio::sync::mpsc;

use crate::ui::diagnostics::Diagnostics;
use crate::ui::lifecycle::{Effects, Phase};
use crate::ui::mvi::{FieldOf, Observable, Reducer, Store};

/// Handle given to spawned requests so they can deliver their outcome as
/// an intent. Sending never blocks.
pub type Completion<I> = mpsc::UnboundedSender<I>;

pub struct Component<R: Reducer>
where
    R::State: Observable,
{
    name: &'static str,
    store: Store<R>,
    effects: Effects<R::State>,
    diagnostics: Diagnostics,
    completion: Completion<R::Intent>,
    completions: mpsc::UnboundedReceiver<R::Intent>,
}

impl<R: Reducer> Component<R>
where
    R::State: Observable,
{
    pub fn new(name: &'static str, diagnostics: Diagnostics) -> Self {
        let (completion, completions) = mpsc::unbounded_channel();
        Self {
            name,
            store: Store::new(),
            effects: Effects::new(),
            diagnostics,
            completion,
            completions,
        }
    }

    pub fn state(&self) -> &R::State {
        self.store.state()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn effects_mut(&mut self) -> &mut Effects<R::State> {
        &mut self.effects
    }

    pub fn phase(&self) -> Phase {
        self.effects.phase()
    }

    pub fn completion(&self) -> Completion<R::Intent> {
        self.completion.clone()
    }

    pub fn mount(&mut self) -> bool {
        let mounted = self.effects.activate(self.store.state());
        if mounted {
            tracing::debug!(view = self.name, "Mounted");
        }
        mounted
    }

    pub fn unmount(&mut self) -> bool {
        let unmounted = self.effects.deactivate();
        if unmounted {
            tracing::debug!(view = self.name, "Unmounted");
        }
        unmounted
    }

    /// Queues a state update for the next [`Component::commit`].
    pub fn enqueue(&mut self, intent: R::Intent) {
        self.store.enqueue(intent);
    }

    /// Render pass: reduce queued intents, then notify watchers. If the
    /// intents leave the state unchanged there is no render and no hook runs.
    pub fn commit(&mut self) -> Vec<FieldOf<R>> {
        let changed = self.store.commit();
        if !changed.is_empty() {
            self.effects.rendered(self.store.state(), &changed);
        }
        changed
    }

    pub fn apply(&mut self, intent: R::Intent) -> Vec<FieldOf<R>> {
        self.enqueue(intent);
        self.commit()
    }

    /// Applies every completion that has already arrived, in one render.
    /// Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let applied = self.drain_completions();
        if applied > 0 {
            self.commit();
        }
        applied
    }

    /// Waits for at least one completion, then applies it along with any
    /// others already queued. Only call this after starting a request;
    /// otherwise it waits forever.
    pub async fn next_event(&mut self) -> usize {
        let Some(intent) = self.completions.recv().await else {
            return 0;
        };
        self.accept_completion(intent);
        let applied = 1 + self.drain_completions();
        self.commit();
        applied
    }

    fn drain_completions(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(intent) = self.completions.try_recv() {
            self.accept_completion(intent);
            drained += 1;
        }
        drained
    }

    fn accept_completion(&mut self, intent: R::Intent) {
        // In-flight requests are not cancelled on unmount; the late result
        // still lands in this instance's state.
        if self.effects.phase() == Phase::Deactivated {
            self.diagnostics.warn(
                self.name,
                "Request completed after the view was unmounted; applying result anyway",
            );
        }
        self.store.enqueue(intent);
    }
}
