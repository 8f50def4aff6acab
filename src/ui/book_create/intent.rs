use crate::api::{BookId, DraftField};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BookCreateIntent {
    /// User edited one form input.
    Change { field: DraftField, value: String },
    /// The create request succeeded with this server-assigned id.
    Created { id: BookId },
    /// The create request failed. Already logged by the caller.
    SubmitFailed,
}

impl Intent for BookCreateIntent {}
