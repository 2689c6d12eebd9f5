//! Shared server models: application state, resolved caller identity,
//! session keys, and the DTO/payload types exchanged with the presentation
//! layer.

pub mod api;
pub mod app;
pub mod auth;
pub mod profile;
pub mod report;
pub mod session;
