//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use bookshelf::api::{ApiError, Book, BookDraft, BookId, BooksApi};
use bookshelf::config::ApiConfig;
use parking_lot::Mutex;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn book(id: &str, title: &str, author: &str) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: author.to_string(),
    }
}

pub fn server_error(method: &'static str) -> ApiError {
    ApiError::Status {
        method,
        url: "http://stub/books".to_string(),
        status: 500,
        body: "boom".to_string(),
    }
}

/// Upper bound for waiting on a view's completion in tests.
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

// -- In-memory API ------------------------------------------------------------

/// Scripted `BooksApi` that counts calls and can hold responses until
/// released.
pub struct StubApi {
    books: Option<Vec<Book>>,
    created: Mutex<Vec<Option<Book>>>,
    gate: Option<Arc<Notify>>,
    list_calls: AtomicUsize,
    submitted: Mutex<Vec<BookDraft>>,
}

impl StubApi {
    /// Listing succeeds with `books`.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            created: Mutex::new(Vec::new()),
            gate: None,
            list_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Every request fails.
    pub fn failing() -> Self {
        Self {
            books: None,
            ..Self::with_books(Vec::new())
        }
    }

    /// Queue create outcomes in order; `None` means that submit fails.
    pub fn with_create_results(self, results: Vec<Option<Book>>) -> Self {
        *self.created.lock() = results;
        self
    }

    /// Requests wait until the returned `Notify` is signalled once per call.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<BookDraft> {
        self.submitted.lock().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl BooksApi for StubApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.books.clone().ok_or_else(|| server_error("GET"))
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        self.submitted.lock().push(draft.clone());
        self.wait_for_gate().await;
        let next = {
            let mut created = self.created.lock();
            if created.is_empty() {
                None
            } else {
                created.remove(0)
            }
        };
        next.ok_or_else(|| server_error("POST"))
    }
}
