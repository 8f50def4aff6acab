mod common;

use std::sync::Arc;

use bookshelf::api::{BooksApi, HttpBooksApi};
use bookshelf::ui::book_list::BookListView;
use bookshelf::ui::diagnostics::{Diagnostics, Severity};
use bookshelf::ui::lifecycle::Phase;
use bookshelf::ui::routes::Route;
use tokio::time::timeout;

use common::mock_api::{MockApi, MockResponse};
use common::{api_config, book, StubApi, EVENT_TIMEOUT};

#[tokio::test]
async fn renders_fetched_books_as_detail_links() {
    let api = Arc::new(StubApi::with_books(vec![book("1", "Dune", "Herbert")]));
    let mut view = BookListView::new(api, Diagnostics::new());

    assert!(view.mount());
    let applied = timeout(EVENT_TIMEOUT, view.next_event()).await.unwrap();
    assert_eq!(applied, 1);

    let page = view.render();
    let links = page.list_links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].0, "Dune");
    assert_eq!(links[0].1.path(), "/books/1");
    assert!(page.to_string().contains("#### Books"));
}

#[tokio::test]
async fn keeps_server_order() {
    let api = Arc::new(StubApi::with_books(vec![
        book("b", "Zorba", "Kazantzakis"),
        book("a", "Anna Karenina", "Tolstoy"),
    ]));
    let mut view = BookListView::new(api, Diagnostics::new());
    view.mount();
    timeout(EVENT_TIMEOUT, view.next_event()).await.unwrap();

    let page = view.render();
    let labels: Vec<&str> = page.list_links().iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["Zorba", "Anna Karenina"]);
}

#[tokio::test]
async fn nothing_is_fetched_before_mount() {
    let api = Arc::new(StubApi::with_books(vec![book("1", "Dune", "Herbert")]));
    let view = BookListView::new(api.clone(), Diagnostics::new());

    tokio::task::yield_now().await;
    assert_eq!(api.list_calls(), 0);
    assert!(view.render().list_links().is_empty());
}

#[tokio::test]
async fn fetches_exactly_once_per_mount() {
    let api = Arc::new(StubApi::with_books(vec![book("1", "Dune", "Herbert")]));
    let mut view = BookListView::new(api.clone(), Diagnostics::new());

    assert!(view.mount());
    assert!(!view.mount());
    timeout(EVENT_TIMEOUT, view.next_event()).await.unwrap();
    for _ in 0..3 {
        view.render();
        view.process_pending();
    }

    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn failed_fetch_logs_and_renders_empty_list() {
    let diagnostics = Diagnostics::new();
    let api = Arc::new(StubApi::failing());
    let mut view = BookListView::new(api.clone(), diagnostics.clone());

    view.mount();
    timeout(EVENT_TIMEOUT, view.next_event()).await.unwrap();

    let page = view.render();
    assert!(page.list_links().is_empty());
    assert!(!page.to_string().contains("boom"));

    let errors = diagnostics.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source, "book_list");
    assert!(errors[0].message.starts_with("Failed to load books"));

    // No retry.
    view.process_pending();
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn response_after_unmount_is_applied_and_flagged() {
    let diagnostics = Diagnostics::new();
    let (api, gate) = StubApi::with_books(vec![book("1", "Dune", "Herbert")]).gated();
    let mut view = BookListView::new(Arc::new(api), diagnostics.clone());

    view.mount();
    assert!(view.unmount());
    assert_eq!(view.phase(), Phase::Deactivated);

    gate.notify_one();
    timeout(EVENT_TIMEOUT, view.next_event()).await.unwrap();

    assert_eq!(view.state().books.len(), 1);
    assert!(diagnostics
        .entries()
        .iter()
        .any(|e| e.severity == Severity::Warn && e.source == "book_list"));
}

#[tokio::test]
async fn lists_books_over_http() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"books":[{"_id":"1","title":"Dune","author":"Herbert"}]}"#,
    ))
    .await;

    let api: Arc<dyn BooksApi> = Arc::new(HttpBooksApi::new(&api_config(&mock.base_url())).unwrap());
    let mut view = BookListView::new(api, Diagnostics::new());
    view.mount();
    timeout(EVENT_TIMEOUT, view.next_event()).await.unwrap();

    let expected = Route::parse("/books/1").unwrap();
    let page = view.render();
    assert_eq!(page.list_links(), vec![("Dune", &expected)]);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/books");
}

#[test]
fn mount_without_runtime_logs_and_stays_empty() {
    let api = Arc::new(StubApi::with_books(vec![book("1", "Dune", "Herbert")]));
    let diagnostics = Diagnostics::new();
    let mut view = BookListView::new(api.clone(), diagnostics.clone());

    assert!(view.mount());
    assert_eq!(view.process_pending(), 1);
    assert!(view.state().books.is_empty());
    assert_eq!(api.list_calls(), 0);

    let errors = diagnostics.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("Failed to load books"));
}
