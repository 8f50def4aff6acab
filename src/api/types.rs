//! Wire types for the books API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned book identifier (`_id` on the wire).
///
/// The client never generates these; they come from API responses or
/// from a route path that was itself built from one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted book as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// A book being composed on the client, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
}

/// The fixed set of editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Unknown draft field '{0}'")]
    Unknown(String),
}

impl DraftField {
    pub const ALL: [DraftField; 2] = [DraftField::Title, DraftField::Author];

    /// Form input name for this field.
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Author => "author",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Author => "Author",
        }
    }
}

impl FromStr for DraftField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
        }
    }

    /// Overwrites one field, leaving the rest untouched.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Author => self.author = value,
        }
    }
}

/// `GET /books` response body.
#[derive(Debug, Deserialize)]
pub struct BookList {
    pub books: Vec<Book>,
}

/// `POST /books` response body.
#[derive(Debug, Deserialize)]
pub struct BookEnvelope {
    pub book: Book,
}

/// `POST /books` request body.
#[derive(Debug, Serialize)]
pub struct NewBook<'a> {
    pub book: &'a BookDraft,
}
