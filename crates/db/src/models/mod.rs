//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for merge-patch updates where the
//!   entity supports partial update

pub mod event;
pub mod guest;
pub mod role;
pub mod session;
pub mod user;
