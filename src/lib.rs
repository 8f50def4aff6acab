//! Headless list/create views for a books REST API, plus a counter demo of
//! state updates and lifecycle effects.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod ui;
