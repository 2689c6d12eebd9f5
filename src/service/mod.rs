//! Service layer.
//!
//! Services own the business rules: who may see or mutate which records,
//! payload validation, and sign-in profile resolution. Controllers hand them
//! a resolved [`crate::model::auth::Caller`] and react to the errors; they
//! never re-implement the ownership rule themselves.

pub mod auth;
pub mod profile;
pub mod report;
