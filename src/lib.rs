//! Pulseboard server core.
//!
//! Backend for a monthly reporting dashboard: authenticated staff submit
//! social media, press coverage, web analytics, and mail-automation figures;
//! admins see every record and manage roles. All visibility and mutation
//! rules live in the service layer, keyed on the resolved caller, never on
//! anything the client sends.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
