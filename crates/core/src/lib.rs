//! Domain layer for the Guestline event/guest-list platform.
//!
//! Pure types and rules with no I/O: the error taxonomy shared across
//! crates, role name constants and normalization, and field validation
//! for user and guest input.

pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
