//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the repositories in `guestline_db`,
//! and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod events;
pub mod guests;
