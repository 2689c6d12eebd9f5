//! Data access layer repositories.
//!
//! Repositories provide a thin abstraction over database operations for each
//! table, with no knowledge of callers or roles; visibility and mutation
//! rules are applied one layer up, in the services.

pub mod profile;
pub mod report;
