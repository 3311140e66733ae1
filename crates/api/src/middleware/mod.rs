//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the session token from the session
//!   cookie or a Bearer header to an authenticated user identity.

pub mod auth;
