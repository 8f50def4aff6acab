//! Headless views for the books client.
//!
//! Each view owns its state, changes it only through its reducer, and
//! renders to a [`render::Page`]. Views never call each other.

pub mod book_create;
pub mod book_list;
pub mod component;
pub mod counter;
pub mod diagnostics;
pub mod layout;
pub mod lifecycle;
pub mod mvi;
pub mod render;
pub mod routes;
