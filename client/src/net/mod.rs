//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` applies the session policies on top
//! of it, and `auth`, `groups`, `expenses` and `users` are the per-feature
//! service calls. `types` holds the wire schema and `errors` the backend
//! error normalizer.

pub mod api;
pub mod auth;
pub mod errors;
pub mod expenses;
pub mod groups;
pub mod transport;
pub mod types;
pub mod users;
