//! Explicit lifecycle subscriptions for views.
//!
//! A view registers its side effects up front and then drives them with
//! three calls: [`Effects::activate`] once when it is shown,
//! [`Effects::rendered`] after every committed state change, and
//! [`Effects::deactivate`] once when it goes away.

use crate::ui::mvi::Observable;

/// Deferred teardown returned by an activation effect.
pub type Cleanup = Box<dyn FnOnce() + Send>;

type ActivateFn<S> = Box<dyn FnOnce(&S) + Send>;
type SetupFn<S> = Box<dyn FnOnce(&S) -> Cleanup + Send>;
type WatchFn<S> = Box<dyn FnMut(&S) + Send>;

/// Where a view is in its lifecycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inactive,
    Active,
    Deactivated,
}

enum Hook<S: Observable> {
    Activate(Option<ActivateFn<S>>),
    Setup(Option<SetupFn<S>>),
    Change(S::Field, WatchFn<S>),
    Render(WatchFn<S>),
}

/// Registry of side effects attached to one view instance.
///
/// Hooks run in registration order. Field watchers and render hooks also
/// run once at activation, mirroring the first render.
pub struct Effects<S: Observable> {
    hooks: Vec<Hook<S>>,
    cleanups: Vec<Cleanup>,
    phase: Phase,
}

impl<S: Observable> Default for Effects<S> {
    fn default() -> Self {
        Self {
            hooks: Vec::new(),
            cleanups: Vec::new(),
            phase: Phase::Inactive,
        }
    }
}

impl<S: Observable + 'static> Effects<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Runs once, at activation.
    pub fn on_activate(&mut self, effect: impl FnOnce(&S) + Send + 'static) -> &mut Self {
        self.hooks.push(Hook::Activate(Some(Box::new(effect))));
        self
    }

    /// Runs once at activation; the returned closure runs once at deactivation.
    pub fn on_activate_with_cleanup<C>(
        &mut self,
        setup: impl FnOnce(&S) -> C + Send + 'static,
    ) -> &mut Self
    where
        C: FnOnce() + Send + 'static,
    {
        self.hooks.push(Hook::Setup(Some(Box::new(move |state: &S| {
            Box::new(setup(state)) as Cleanup
        }))));
        self
    }

    /// Runs once at deactivation, provided the view was activated.
    pub fn on_deactivate(&mut self, teardown: impl FnOnce() + Send + 'static) -> &mut Self {
        self.on_activate_with_cleanup(move |_| teardown)
    }

    /// Runs at activation and whenever `field` changes.
    pub fn on_change(
        &mut self,
        field: S::Field,
        effect: impl FnMut(&S) + Send + 'static,
    ) -> &mut Self {
        self.hooks.push(Hook::Change(field, Box::new(effect)));
        self
    }

    /// Runs at activation and after every render.
    pub fn on_render(&mut self, effect: impl FnMut(&S) + Send + 'static) -> &mut Self {
        self.hooks.push(Hook::Render(Box::new(effect)));
        self
    }

    /// Runs every hook for the first render. Returns false if the view was
    /// already activated (or torn down), in which case nothing runs.
    pub fn activate(&mut self, state: &S) -> bool {
        if self.phase != Phase::Inactive {
            tracing::debug!(phase = ?self.phase, "Ignoring repeated activation");
            return false;
        }
        self.phase = Phase::Active;

        for hook in &mut self.hooks {
            match hook {
                Hook::Activate(effect) => {
                    if let Some(effect) = effect.take() {
                        effect(state);
                    }
                }
                Hook::Setup(setup) => {
                    if let Some(setup) = setup.take() {
                        self.cleanups.push(setup(state));
                    }
                }
                Hook::Change(_, effect) | Hook::Render(effect) => effect(state),
            }
        }
        true
    }

    /// Runs render hooks and the watchers of each changed field.
    ///
    /// No-op unless the view is active.
    pub fn rendered(&mut self, state: &S, changed: &[S::Field]) {
        if self.phase != Phase::Active {
            return;
        }

        for hook in &mut self.hooks {
            match hook {
                Hook::Render(effect) => effect(state),
                Hook::Change(field, effect) => {
                    if changed.contains(field) {
                        effect(state);
                    }
                }
                Hook::Activate(_) | Hook::Setup(_) => {}
            }
        }
    }

    /// Runs every registered cleanup exactly once. Returns false if the view
    /// was not active.
    pub fn deactivate(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Deactivated;

        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        true
    }
}
