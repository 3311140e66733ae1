//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod event_repo;
pub mod guest_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use event_repo::EventRepo;
pub use guest_repo::GuestRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
