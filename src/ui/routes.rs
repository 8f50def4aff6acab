//! Path scheme shared by links and redirects.

use std::fmt;

use crate::api::BookId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Books,
    Book(BookId),
    CreateBook,
    Counter,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Books => "/books".to_string(),
            Route::Book(id) => format!("/books/{}", id),
            Route::CreateBook => "/create-book".to_string(),
            Route::Counter => "/counter".to_string(),
        }
    }

    /// Parses a path produced by [`Route::path`]. A trailing slash is
    /// tolerated; anything else unknown yields `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/books" => Some(Route::Books),
            "/create-book" => Some(Route::CreateBook),
            "/counter" => Some(Route::Counter),
            _ => {
                let id = trimmed.strip_prefix("/books/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::Book(BookId::new(id)))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
