//! Intents: the only way a view's state is asked to change.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User input (typing into a field, pressing a button)
/// - Request completions delivered back to the view
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
