//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one aspect of the system:
//!
//! - `profile` - profile records for admin and staff callers

pub mod profile;
