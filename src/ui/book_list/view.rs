use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::BooksApi;
use crate::ui::component::{Completion, Component};
use crate::ui::diagnostics::Diagnostics;
use crate::ui::layout::Layout;
use crate::ui::lifecycle::Phase;
use crate::ui::render::{Node, Page};
use crate::ui::routes::Route;

use super::intent::BookListIntent;
use super::reducer::BookListReducer;
use super::state::BookListState;

const VIEW: &str = "book_list";

/// Lists every book, each linking to its detail route.
///
/// The collection is requested once, when the view is mounted. A failed
/// request is logged and the list simply stays empty.
pub struct BookListView {
    component: Component<BookListReducer>,
}

impl BookListView {
    pub fn new(api: Arc<dyn BooksApi>, diagnostics: Diagnostics) -> Self {
        let mut component = Component::<BookListReducer>::new(VIEW, diagnostics);
        let completion = component.completion();
        let log = component.diagnostics().clone();
        component
            .effects_mut()
            .on_activate(move |_| match Handle::try_current() {
                Ok(runtime) => {
                    runtime.spawn(fetch_books(api, completion, log));
                }
                Err(err) => {
                    log.error(VIEW, format!("Failed to load books: {}", err));
                    let _ = completion.send(BookListIntent::LoadFailed);
                }
            });
        Self { component }
    }

    /// Starts the collection request on the current tokio runtime. Without
    /// one the failure is logged and the list stays empty. Returns false if
    /// the view was already mounted.
    pub fn mount(&mut self) -> bool {
        self.component.mount()
    }

    pub fn unmount(&mut self) -> bool {
        self.component.unmount()
    }

    pub fn phase(&self) -> Phase {
        self.component.phase()
    }

    pub fn state(&self) -> &BookListState {
        self.component.state()
    }

    pub fn process_pending(&mut self) -> usize {
        self.component.process_pending()
    }

    /// Waits for the fetch started by [`BookListView::mount`] to resolve.
    pub async fn next_event(&mut self) -> usize {
        self.component.next_event().await
    }

    pub fn render(&self) -> Page {
        let items = self
            .state()
            .books
            .iter()
            .map(|book| Node::link(book.title.clone(), Route::Book(book.id.clone())))
            .collect();

        Layout::wrap(vec![Node::heading(4, "Books"), Node::List(items)])
    }
}

async fn fetch_books(
    api: Arc<dyn BooksApi>,
    completion: Completion<BookListIntent>,
    diagnostics: Diagnostics,
) {
    let intent = match api.list_books().await {
        Ok(books) => {
            tracing::debug!(count = books.len(), "Fetched books");
            BookListIntent::Loaded { books }
        }
        Err(err) => {
            tracing::debug!(kind = err.kind(), "Book list request failed");
            diagnostics.error(VIEW, format!("Failed to load books: {}", err));
            BookListIntent::LoadFailed
        }
    };

    if completion.send(intent).is_err() {
        tracing::debug!("Book list view dropped before its request resolved");
    }
}
