use crate::ui::component::Component;
use crate::ui::diagnostics::Diagnostics;
use crate::ui::layout::Layout;
use crate::ui::lifecycle::Phase;
use crate::ui::render::{Node, Page};

use super::intent::CounterIntent;
use super::reducer::CounterReducer;
use super::state::{CounterField, CounterState};

const VIEW: &str = "counter";

pub const MSG_ACTIVATED: &str = "counter activated";
pub const MSG_RENDERED: &str = "counter rendered";
pub const MSG_SUBSCRIBED: &str = "counter subscription opened";
pub const MSG_UNSUBSCRIBED: &str = "counter subscription closed";

/// Log line emitted whenever the count is (re)observed.
pub fn count_message(count: i64) -> String {
    format!("count is now {}", count)
}

/// Log line emitted whenever the donut is (re)observed.
pub fn donut_message(donut: &str) -> String {
    format!("donut is now {}", donut)
}

/// State and lifecycle demo: a counter and a donut, plus five effects with
/// different triggers, all reporting to the diagnostics channel.
///
/// Button handlers only queue updates; [`CounterView::commit`] is the render
/// pass that applies them (in order, each against the latest state) and
/// fires the effects.
pub struct CounterView {
    component: Component<CounterReducer>,
}

impl CounterView {
    pub fn new(diagnostics: Diagnostics) -> Self {
        let mut component = Component::<CounterReducer>::new(VIEW, diagnostics.clone());
        let effects = component.effects_mut();

        let log = diagnostics.clone();
        effects.on_activate(move |_| log.info(VIEW, MSG_ACTIVATED));

        let log = diagnostics.clone();
        effects.on_change(CounterField::Count, move |state: &CounterState| {
            log.info(VIEW, count_message(state.count))
        });

        let log = diagnostics.clone();
        effects.on_render(move |_| log.info(VIEW, MSG_RENDERED));

        let log = diagnostics.clone();
        effects.on_activate_with_cleanup(move |_| {
            log.info(VIEW, MSG_SUBSCRIBED);
            move || log.info(VIEW, MSG_UNSUBSCRIBED)
        });

        let log = diagnostics;
        effects.on_change(CounterField::Donut, move |state: &CounterState| {
            log.info(VIEW, donut_message(&state.donut))
        });

        Self { component }
    }

    pub fn mount(&mut self) -> bool {
        self.component.mount()
    }

    pub fn unmount(&mut self) -> bool {
        self.component.unmount()
    }

    pub fn phase(&self) -> Phase {
        self.component.phase()
    }

    pub fn state(&self) -> &CounterState {
        self.component.state()
    }

    pub fn increase_count(&mut self) {
        self.component.enqueue(CounterIntent::Increase);
    }

    pub fn reset_count(&mut self) {
        self.component.enqueue(CounterIntent::Reset);
    }

    pub fn add_sprinkles(&mut self) {
        self.component.enqueue(CounterIntent::AddSprinkles);
    }

    /// Render pass. Returns true if any state actually changed.
    pub fn commit(&mut self) -> bool {
        !self.component.commit().is_empty()
    }

    pub fn render(&self) -> Page {
        let state = self.state();
        Layout::wrap(vec![
            Node::heading(1, "Counter"),
            Node::heading(2, format!("Count: {}", state.count)),
            Node::button("increase count"),
            Node::button("reset count"),
            Node::heading(5, format!("donut is: {}", state.donut)),
            Node::button("add sprinkles"),
        ])
    }
}
