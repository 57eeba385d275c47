//! Client state owned outside any single page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the durable token slot and the read-only view every
//! consumer shares. `auth` is the only writer of that slot on the happy
//! path (login, logout); the API client writes it only to clear on 401.

pub mod auth;
pub mod session;
