//! # splitmates-client
//!
//! Client core for the SplitMates expense-splitting service.
//!
//! This crate owns the session lifecycle (durable bearer token, login,
//! logout, forced logout on 401), the HTTP client every feature goes
//! through, form state and validation, password strength scoring, the route
//! guard, and the page controllers that compose them. The backend owns all
//! business data; nothing here computes splits or balances.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
