//! View state and change detection.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for view state objects.
///
/// States should be:
/// - Immutable between reductions (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// State whose individual fields can be diffed.
///
/// Subscribers are keyed by `Field`, so effects fire only when the piece of
/// state they watch actually changed.
pub trait Observable {
    type Field: Copy + Eq + Hash + Debug + Send + 'static;

    /// Fields that differ between `previous` and `self`.
    fn changed_fields(&self, previous: &Self) -> Vec<Self::Field>;
}
