//! Role-scoped report services, one per record kind.
//!
//! Every service derives visibility and mutation rights purely from the
//! caller's id and role against the stored `owner_id`: staff see and mutate
//! their own records, admins everything. The shared rule lives in
//! [`access`]; no other module decides ownership.

pub mod access;
pub mod media;
pub mod rpa;
pub mod social_media;
pub mod stats;
pub mod website_analytics;

#[cfg(test)]
mod tests;
