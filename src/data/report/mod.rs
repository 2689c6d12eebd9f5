//! Repositories for the five report record kinds.
//!
//! Each repository persists one table and exposes the same operation shape:
//! create with server-side timestamps, id/owner lookups ordered most recent
//! first, updates that never touch `owner_id` or `created_at`, deletes that
//! are Ok regardless of existence, and server-side counts.

pub mod media;
pub mod rpa;
pub mod social_media;
pub mod website_analytics;
