//! Operator console core for the event management platform.
//!
//! Everything the console shows lives behind the remote event API; this
//! crate supplies the client for that boundary, the candidate roster
//! (fetch, filter, print export), the event directory, and the form
//! validation used by registration, creation, and credential checks.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod registration;
pub mod roster;
pub mod security;
pub mod telemetry;
