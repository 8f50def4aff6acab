use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{Book, BookDraft, BookEnvelope, BookList, NewBook};
use crate::config::ApiConfig;

/// Remote collaborator that persists books.
///
/// Views only talk to the API through this trait, so tests can swap in a
/// canned implementation without a server.
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// `GET {base}/books`, in server order.
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;

    /// `POST {base}/books` with `{ "book": draft }`; returns the stored record
    /// including its server-assigned id.
    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError>;
}

/// `BooksApi` over HTTP using reqwest.
#[derive(Clone)]
pub struct HttpBooksApi {
    client: Client,
    base_url: String,
}

impl HttpBooksApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.books_url();
        tracing::debug!(url = %url, "GET books");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let list: BookList = read_json("GET", &url, response).await?;
        Ok(list.books)
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let url = self.books_url();
        tracing::debug!(url = %url, title = %draft.title, "POST book");

        let response = self
            .client
            .post(&url)
            .json(&NewBook { book: draft })
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let envelope: BookEnvelope = read_json("POST", &url, response).await?;
        Ok(envelope.book)
    }
}

async fn read_json<T: DeserializeOwned>(
    method: &'static str,
    url: &str,
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}
