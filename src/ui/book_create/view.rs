use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::{BookDraft, BooksApi, DraftField, FieldError};
use crate::ui::component::{Completion, Component};
use crate::ui::diagnostics::Diagnostics;
use crate::ui::layout::Layout;
use crate::ui::lifecycle::Phase;
use crate::ui::render::{Node, Page};
use crate::ui::routes::Route;

use super::intent::BookCreateIntent;
use super::reducer::BookCreateReducer;
use super::state::BookCreateState;

const VIEW: &str = "book_create";

/// Where the form's cancel link points.
pub const CANCEL_ROUTE: Route = Route::Home;

/// Form for a new book. Editing → (submit succeeds) → redirected.
///
/// There is no in-flight state: the form stays editable while a submit is
/// pending, and a second submit sends a second request.
pub struct BookCreateView {
    component: Component<BookCreateReducer>,
    api: Arc<dyn BooksApi>,
}

impl BookCreateView {
    pub fn new(api: Arc<dyn BooksApi>, diagnostics: Diagnostics) -> Self {
        Self {
            component: Component::new(VIEW, diagnostics),
            api,
        }
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

    pub fn state(&self) -> &BookCreateState {
        self.component.state()
    }

    pub fn draft(&self) -> &BookDraft {
        &self.state().draft
    }

    pub fn redirect(&self) -> Option<Route> {
        self.state().redirect()
    }

    pub fn handle_change(&mut self, field: DraftField, value: impl Into<String>) {
        self.component.apply(BookCreateIntent::Change {
            field,
            value: value.into(),
        });
    }

    /// Form-input flavour of [`BookCreateView::handle_change`]: the field
    /// arrives by input name. Unknown names leave the draft untouched.
    pub fn handle_named_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let field: DraftField = name.parse()?;
        self.handle_change(field, value);
        Ok(())
    }

    /// Sends the current draft. The outcome arrives later through
    /// [`BookCreateView::next_event`]. Returns false without sending if the
    /// view already redirected, or if no tokio runtime is available (that
    /// case is logged as an error and the draft is kept).
    pub fn handle_submit(&mut self) -> bool {
        if self.state().created_id.is_some() {
            tracing::debug!("Submit ignored: book already created");
            return false;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                self.component
                    .diagnostics()
                    .error(VIEW, format!("Failed to create book: {}", err));
                return false;
            }
        };

        let draft = self.draft().clone();
        let api = Arc::clone(&self.api);
        let completion = self.component.completion();
        let diagnostics = self.component.diagnostics().clone();
        runtime.spawn(submit_draft(api, draft, completion, diagnostics));
        true
    }

    pub fn process_pending(&mut self) -> usize {
        self.component.process_pending()
    }

    /// Waits for a submit started by [`BookCreateView::handle_submit`].
    pub async fn next_event(&mut self) -> usize {
        self.component.next_event().await
    }

    pub fn render(&self) -> Page {
        if let Some(route) = self.redirect() {
            return Page::Redirect(route);
        }

        let draft = self.draft();
        let mut form: Vec<Node> = DraftField::ALL
            .into_iter()
            .map(|field| Node::Input {
                name: field.name(),
                label: field.label(),
                value: draft.get(field).to_string(),
            })
            .collect();
        form.push(Node::button("Submit"));
        form.push(Node::link("Cancel", CANCEL_ROUTE));

        Layout::wrap(vec![Node::heading(4, "Create Book"), Node::Form(form)])
    }
}

async fn submit_draft(
    api: Arc<dyn BooksApi>,
    draft: BookDraft,
    completion: Completion<BookCreateIntent>,
    diagnostics: Diagnostics,
) {
    let intent = match api.create_book(&draft).await {
        Ok(book) => {
            tracing::info!(id = %book.id, title = %book.title, "Book created");
            BookCreateIntent::Created { id: book.id }
        }
        Err(err) => {
            tracing::debug!(kind = err.kind(), "Create request failed");
            diagnostics.error(VIEW, format!("Failed to create book: {}", err));
            BookCreateIntent::SubmitFailed
        }
    };

    if completion.send(intent).is_err() {
        tracing::debug!("Create view dropped before its request resolved");
    }
}
