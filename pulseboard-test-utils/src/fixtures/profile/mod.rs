//! Profile fixture utilities.
//!
//! Provides helpers for inserting profile records with a given role and
//! factory functions for creating in-memory profile models.

pub mod data;
pub mod factory;
