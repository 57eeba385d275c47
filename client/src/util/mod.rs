//! Pure helpers shared by the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here performs I/O. `form` and `validation` hold input state,
//! `password_strength` scores passwords, `auth` is the route guard and
//! `submit` is the duplicate-submission latch.

pub mod auth;
pub mod form;
pub mod password_strength;
pub mod submit;
pub mod validation;
